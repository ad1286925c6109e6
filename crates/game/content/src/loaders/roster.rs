//! Team roster file loader.

use std::path::{Path, PathBuf};

use battle_core::Team;

use crate::catalog::Catalog;
use crate::loaders::{LoadResult, read_file};
use crate::roster::RosterParser;

/// Loader for roster text files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load both teams from a roster file.
    pub fn load(path: &Path, catalog: &Catalog) -> LoadResult<(Team, Team)> {
        let content = read_file(path)?;
        RosterParser::parse(&content, catalog)
            .map_err(|e| anyhow::anyhow!("Invalid roster {}: {}", path.display(), e))
    }
}

/// Roster files (`*.txt`) inside `dir`, sorted by path.
pub fn list_team_files(dir: &Path) -> LoadResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?
            .path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

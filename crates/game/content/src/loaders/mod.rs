//! Content loaders for reading battle data from files.
//!
//! Catalogs are JSON, rosters are plain text, and battle configuration is
//! TOML. Every loader returns [`LoadResult`] with the offending path in the
//! error message.

pub mod catalog;
pub mod config;
pub mod roster;

pub use catalog::CatalogLoader;
pub use config::ConfigLoader;
pub use roster::{RosterLoader, list_team_files};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

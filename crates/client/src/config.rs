//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;

use tracing::Level;

/// Where content lives and how the match should be driven.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding `skills.json`, `samurai.json` and `monsters.json`.
    pub data_dir: PathBuf,
    /// Directory listed for team-file selection.
    pub teams_dir: PathBuf,
    /// Optional TOML file overriding combat parameters.
    pub battle_config: Option<PathBuf>,
    /// Transcript to replay instead of reading the terminal.
    pub script: Option<PathBuf>,
    /// Parent of the per-session log directories.
    pub log_dir: PathBuf,
    /// Default filter level; `RUST_LOG` directives still apply on top.
    pub log_level: Level,
    pub session_id: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let data_dir = PathBuf::from("data");
        Self {
            teams_dir: data_dir.join("teams"),
            data_dir,
            battle_config: None,
            script: None,
            log_dir: default_log_dir(),
            log_level: Level::INFO,
            session_id: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_DATA_DIR` - Catalog directory (default: `data`)
    /// - `BATTLE_TEAMS_DIR` - Team files (default: `<data dir>/teams`)
    /// - `BATTLE_CONFIG` - Combat parameters TOML (default: built-in values)
    /// - `BATTLE_SCRIPT` - Transcript to replay (default: interactive)
    /// - `BATTLE_LOG_DIR` - Log root (default: platform cache dir + `logs`)
    /// - `BATTLE_LOG_LEVEL` - `error`..`trace` (default: `info`)
    /// - `BATTLE_SESSION_ID` - Log session name (default: auto-generated)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("BATTLE_DATA_DIR") {
            config.teams_dir = dir.join("teams");
            config.data_dir = dir;
        }
        if let Some(dir) = read_env::<PathBuf>("BATTLE_TEAMS_DIR") {
            config.teams_dir = dir;
        }

        config.battle_config = read_env("BATTLE_CONFIG");
        config.script = read_env("BATTLE_SCRIPT");
        if let Some(dir) = read_env("BATTLE_LOG_DIR") {
            config.log_dir = dir;
        }
        if let Some(level) = read_env("BATTLE_LOG_LEVEL") {
            config.log_level = level;
        }
        config.session_id = env::var("BATTLE_SESSION_ID").ok();

        config
    }
}

fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "battle")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| env::temp_dir().join("battle"))
        .join("logs")
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

//! File logging.
//!
//! Stdout carries the match transcript, so the subscriber only writes to
//! `<log dir>/<session>/client.log`.
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::ClientConfig;

pub const LOG_FILE: &str = "client.log";

/// An installed subscriber. Dropping it flushes and stops the file writer.
pub struct LogSession {
    dir: PathBuf,
    _writer: WorkerGuard,
}

impl LogSession {
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn file(&self) -> PathBuf {
        self.dir.join(LOG_FILE)
    }
}

/// Installs the global subscriber for this process.
///
/// `config.log_level` is the default directive; `RUST_LOG` may refine it.
pub fn init(config: &ClientConfig) -> Result<LogSession> {
    let session = session_name(config.session_id.as_deref());
    let dir = config.log_dir.join(&session);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(&dir, LOG_FILE));
    let filter = EnvFilter::builder()
        .with_default_directive(config.log_level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .context("a global subscriber is already installed")?;

    tracing::info!(%session, level = %config.log_level, dir = %dir.display(), "logging started");
    Ok(LogSession { dir, _writer: guard })
}

/// The configured session id, or `session_<unix seconds>`.
pub fn session_name(configured: Option<&str>) -> String {
    match configured.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => id.to_string(),
        None => {
            let seconds = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default();
            format!("session_{seconds}")
        }
    }
}

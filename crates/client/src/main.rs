//! Squad battle client entry point.
use std::path::Path;

use anyhow::{Context, Result};
use battle_client::{ClientConfig, ConsoleView, logging};
use battle_content::{CatalogLoader, ConfigLoader};
use battle_core::BattleConfig;
use battle_runtime::{Lobby, Transcript};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _logs = logging::init(&config)?;

    let catalog = CatalogLoader::load(&config.data_dir)
        .with_context(|| format!("failed to load catalog from {}", config.data_dir.display()))?;
    let battle_config = match &config.battle_config {
        Some(path) => ConfigLoader::load(path)?,
        None => BattleConfig::default(),
    };
    tracing::info!(
        skills = catalog.skill_count(),
        units = catalog.unit_count(),
        teams = %config.teams_dir.display(),
        "content loaded"
    );

    let lobby = Lobby::new(catalog, battle_config, &config.teams_dir);
    match &config.script {
        Some(script) => replay(&lobby, script),
        None => {
            let report = lobby.play(ConsoleView::stdio())?;
            tracing::info!(winner = ?report.winner, "session ended");
            Ok(())
        }
    }
}

/// Plays a recorded transcript, echoes the produced output and fails on the
/// first divergence.
fn replay(lobby: &Lobby, script: &Path) -> Result<()> {
    let transcript = Transcript::load(script)?;
    let report = lobby.play(transcript.view())?;

    let output = report.view.into_output();
    for line in &output {
        println!("{line}");
    }

    transcript
        .compare(&output)
        .with_context(|| format!("output diverged from {}", script.display()))?;
    tracing::info!(script = %script.display(), "transcript matched");
    Ok(())
}

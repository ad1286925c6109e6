//! Match setup: team-file selection and roster loading.

use std::path::{Path, PathBuf};

use battle_content::{Catalog, RosterLoader, list_team_files};
use battle_core::{BattleConfig, BattleState, Side};
use tracing::{info, warn};

use crate::api::{BattleView, Result, RuntimeError};
use crate::presenter::Presenter;
use crate::session::BattleSession;

/// How a match ended, plus the view it ran on.
#[derive(Debug)]
pub struct MatchReport<V> {
    /// `None` when the chosen team file was rejected and no match was played.
    pub winner: Option<Side>,
    pub view: V,
}

/// Everything needed to start matches from a directory of roster files.
pub struct Lobby {
    catalog: Catalog,
    config: BattleConfig,
    teams_dir: PathBuf,
}

impl Lobby {
    pub fn new(catalog: Catalog, config: BattleConfig, teams_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog,
            config,
            teams_dir: teams_dir.into(),
        }
    }

    pub fn teams_dir(&self) -> &Path {
        &self.teams_dir
    }

    /// Lists the roster files, reads the player's pick and plays the match.
    ///
    /// A token that is not a number selects the first file. An out-of-range
    /// pick or a roster that fails to load ends the session after the
    /// invalid-team message.
    pub fn play<V: BattleView>(&self, view: V) -> Result<MatchReport<V>> {
        let files = list_team_files(&self.teams_dir)
            .map_err(|e| RuntimeError::Content(e.to_string()))?;
        let mut presenter = Presenter::new(view);

        presenter.team_files(
            files
                .iter()
                .map(|path| path.file_name().and_then(|name| name.to_str()).unwrap_or_default()),
        );

        let choice = presenter.read_choice()?.unwrap_or(0);
        let Some(path) = usize::try_from(choice).ok().and_then(|index| files.get(index)) else {
            warn!(choice, files = files.len(), "team file selection out of range");
            presenter.invalid_team();
            return Ok(MatchReport {
                winner: None,
                view: presenter.into_view(),
            });
        };

        let (first, second) = match RosterLoader::load(path, &self.catalog) {
            Ok(teams) => teams,
            Err(e) => {
                warn!(error = %e, "rejected team file");
                presenter.invalid_team();
                return Ok(MatchReport {
                    winner: None,
                    view: presenter.into_view(),
                });
            }
        };
        info!(file = %path.display(), "teams loaded");

        let state = BattleState::new(first, second);
        let mut session = BattleSession::with_presenter(state, self.config.clone(), presenter);
        let winner = session.run()?;

        Ok(MatchReport {
            winner: Some(winner),
            view: session.into_view(),
        })
    }
}

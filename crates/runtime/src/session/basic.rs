//! Pass and surrender.

use battle_core::{TurnCost, UnitId};
use tracing::{debug, info};

use super::{ActionStatus, BattleSession};
use crate::api::{BattleView, Result};

impl<V: BattleView> BattleSession<V> {
    pub(super) fn pass_turn(&mut self) -> ActionStatus {
        let spent = self.turns.consume(TurnCost::PassOrSummon);
        debug!(?spent, "turn passed");
        self.presenter.turns_spent(spent);
        ActionStatus::Completed
    }

    /// Knocks out the whole side. No turns are consumed; the match simply ends.
    pub(super) fn surrender(&mut self, actor: UnitId) -> Result<ActionStatus> {
        let team = self.state.team_mut(self.acting);
        self.presenter.surrender(team.get(actor)?.name(), self.acting);
        team.surrender();

        info!(side = %self.acting, "side surrendered");
        Ok(ActionStatus::Completed)
    }
}

//! Invocar: bringing reserve units onto the board.

use battle_core::{BattleConfig, TurnCost, UnitId};
use tracing::debug;

use super::{ActionStatus, BattleSession};
use crate::api::{BattleView, Result};

impl<V: BattleView> BattleSession<V> {
    /// Lets the player pick a reserve unit. `None` means cancelled.
    pub(super) fn choose_reserve_unit(&mut self, include_fallen: bool) -> Result<Option<UnitId>> {
        let team = self.state.team(self.acting);
        let candidates = team.summon_candidates(include_fallen);
        let units: Vec<_> = candidates.iter().filter_map(|id| team.unit(*id)).collect();
        self.presenter.summon_menu(&units);

        let pick = self.presenter.read_option(candidates.len())?;
        Ok(pick.map(|index| candidates[index]))
    }

    /// Lets the player pick a field slot (1..=3). `None` means cancelled.
    pub(super) fn choose_slot(&mut self) -> Result<Option<usize>> {
        self.presenter.slot_menu(self.state.team(self.acting));

        let first = BattleConfig::LEADER_SLOT + 1;
        let pick = self.presenter.read_option(BattleConfig::BOARD_SIZE - first)?;
        Ok(pick.map(|index| first + index))
    }

    /// The leader places a reserve unit in any field slot; the occupant, if
    /// any, goes back to the reserve and hands its queue position over.
    pub(super) fn leader_summon(&mut self) -> Result<ActionStatus> {
        let Some(incoming) = self.choose_reserve_unit(false)? else {
            return Ok(ActionStatus::Cancelled);
        };
        let Some(slot) = self.choose_slot()? else {
            return Ok(ActionStatus::Cancelled);
        };

        let team = self.state.team_mut(self.acting);
        let displaced = team.summon_to_slot(incoming, slot)?;
        self.turns.swap_in(displaced, incoming);
        debug!(unit = %incoming, slot, ?displaced, "leader summoned");

        self.presenter.invoked(team.get(incoming)?.name());
        self.pay_summon();
        Ok(ActionStatus::Completed)
    }

    /// A summonable unit trades places with a reserve unit.
    pub(super) fn swap_summon(&mut self, actor: UnitId) -> Result<ActionStatus> {
        let Some(incoming) = self.choose_reserve_unit(false)? else {
            return Ok(ActionStatus::Cancelled);
        };

        let team = self.state.team_mut(self.acting);
        let slot = team.swap_with_reserve(actor, incoming)?;
        self.turns.swap_in(Some(actor), incoming);
        debug!(unit = %incoming, replaced = %actor, slot, "unit swapped in");

        self.presenter.invoked(team.get(incoming)?.name());
        self.pay_summon();
        Ok(ActionStatus::Completed)
    }

    fn pay_summon(&mut self) {
        let spent = self.turns.consume(TurnCost::PassOrSummon);
        debug!(?spent, "turns consumed");
        self.presenter.turns_spent(spent);
    }
}

//! Basic attacks (Atacar / Disparar) and enemy targeting.

use battle_core::{Element, UnitId, resolve_attack};
use tracing::debug;

use super::{ActionStatus, BattleSession};
use crate::api::{BattleView, Result};

impl<V: BattleView> BattleSession<V> {
    /// Lets the player pick an enemy on the board. `None` means cancelled.
    pub(super) fn choose_enemy(&mut self, actor: UnitId) -> Result<Option<UnitId>> {
        let foes = self.state.team(self.acting.opponent());
        let candidates = foes.active_units();
        let units: Vec<_> = candidates.iter().filter_map(|id| foes.unit(*id)).collect();
        let actor_name = self.state.team(self.acting).get(actor)?.name();

        self.presenter.target_menu(actor_name, &units);
        let pick = self.presenter.read_option(candidates.len())?;
        Ok(pick.map(|index| candidates[index]))
    }

    pub(super) fn basic_attack(&mut self, actor: UnitId, element: Element) -> Result<ActionStatus> {
        let Some(target) = self.choose_enemy(actor)? else {
            return Ok(ActionStatus::Cancelled);
        };

        self.presenter.separator();

        let (team, foes) = self.state.split_mut(self.acting);
        let attacker = team.get_mut(actor)?;
        let defender = foes.get_mut(target)?;
        let outcome = resolve_attack(attacker, defender, element, None, &self.config.combat);
        debug!(
            attacker = attacker.name(),
            defender = defender.name(),
            %element,
            damage = outcome.damage,
            affinity = outcome.affinity.code(),
            "basic attack resolved"
        );

        self.presenter
            .hit(attacker.name(), defender.name(), element, &outcome);
        let last_hit = if outcome.repelled() {
            &*attacker
        } else {
            &*defender
        };
        self.presenter.final_hp(last_hit);

        let spent = self.turns.consume(outcome.turn_cost);
        debug!(?spent, "turns consumed");
        self.presenter.turns_spent(spent);

        self.settle_casualty(self.acting.opponent(), target);
        if outcome.repelled() {
            self.settle_casualty(self.acting, actor);
        }
        Ok(ActionStatus::Completed)
    }
}

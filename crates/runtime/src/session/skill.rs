//! Skill use: offensive skills, heals and revives, summon skills.
//!
//! Every completed skill bumps the acting side's skill-use counter, which
//! drives ranged hit counts and the round-robin starting target of later
//! skills.

use battle_core::{
    Element, HitRecord, Skill, SkillReport, SkillRole, TargetMode, TurnCost, UnitId,
    combat::{execute_on_all, execute_on_target, execute_round_robin, heal_amount},
};
use tracing::{debug, warn};

use super::{ActionStatus, BattleSession};
use crate::api::{BattleView, Result};

impl<V: BattleView> BattleSession<V> {
    pub(super) fn use_skill(&mut self, actor: UnitId) -> Result<ActionStatus> {
        let unit = self.state.team(self.acting).get(actor)?;
        let skills: Vec<Skill> = unit.usable_skills().into_iter().cloned().collect();
        let listed: Vec<&Skill> = skills.iter().collect();
        self.presenter.skill_menu(unit.name(), &listed);

        let Some(index) = self.presenter.read_option(skills.len())? else {
            return Ok(ActionStatus::Cancelled);
        };
        let skill = &skills[index];
        debug!(unit = %actor, skill = %skill.name, role = ?skill.role(), "skill selected");

        match (skill.role(), skill.target) {
            (SkillRole::Offensive(element), TargetMode::Single) => {
                self.single_target_skill(actor, skill, element)
            }
            (SkillRole::Offensive(element), _) => self.area_skill(actor, skill, element),
            (SkillRole::Heal, TargetMode::Party) => self.party_skill(actor, skill, false),
            (SkillRole::Revive, TargetMode::Party) => self.party_skill(actor, skill, true),
            (SkillRole::Heal, _) => self.ally_skill(actor, skill, false),
            (SkillRole::Revive, _) => self.ally_skill(actor, skill, true),
            (SkillRole::Summon { revives }, _) => self.summon_skill(actor, skill, revives),
            (SkillRole::Unsupported, _) => {
                warn!(skill = %skill.name, "skill has no resolution rules");
                Ok(ActionStatus::Cancelled)
            }
        }
    }

    fn single_target_skill(&mut self, actor: UnitId, skill: &Skill, element: Element) -> Result<ActionStatus> {
        let Some(target) = self.choose_enemy(actor)? else {
            return Ok(ActionStatus::Cancelled);
        };
        let hits = self.contexts[self.acting.index()].hit_count(&skill.hits);

        let (team, foes) = self.state.split_mut(self.acting);
        let attacker = team.get_mut(actor)?;
        attacker.consume_mp(skill.cost);
        self.presenter.separator();

        let report = execute_on_target(attacker, foes, target, skill, element, hits, &self.config.combat)?;
        self.narrate_hits(actor, element, &report)?;

        if let Some(last) = report.hits.last() {
            let (team, foes) = self.state.split_mut(self.acting);
            let unit = if last.outcome.repelled() {
                team.get(actor)?
            } else {
                foes.get(last.target)?
            };
            self.presenter.final_hp(unit);
        }

        self.finish_offensive(actor, &report);
        Ok(ActionStatus::Completed)
    }

    /// `All` hits every enemy on the board; `Multi` spreads its hits in a
    /// round-robin walk starting from the skill-use counter.
    fn area_skill(&mut self, actor: UnitId, skill: &Skill, element: Element) -> Result<ActionStatus> {
        let counter = self.skill_uses();
        let hits = self.contexts[self.acting.index()].hit_count(&skill.hits);

        let (team, foes) = self.state.split_mut(self.acting);
        let targets = foes.active_units();
        let attacker = team.get_mut(actor)?;
        attacker.consume_mp(skill.cost);
        self.presenter.separator();

        let params = &self.config.combat;
        let report = match skill.target {
            TargetMode::Multi => {
                execute_round_robin(attacker, foes, &targets, skill, element, hits, counter, params)?
            }
            _ => execute_on_all(attacker, foes, &targets, skill, element, hits, params)?,
        };
        self.narrate_hits(actor, element, &report)?;

        let (team, foes) = self.state.split_mut(self.acting);
        for target in report.targets() {
            self.presenter.final_hp(foes.get(target)?);
        }
        if report.any_repelled() {
            self.presenter.final_hp(team.get(actor)?);
        }

        self.finish_offensive(actor, &report);
        Ok(ActionStatus::Completed)
    }

    fn narrate_hits(&mut self, actor: UnitId, element: Element, report: &SkillReport) -> Result<()> {
        let (team, foes) = self.state.split_mut(self.acting);
        let attacker = team.get(actor)?;

        for HitRecord { target, outcome, drain } in &report.hits {
            let defender = foes.get(*target)?;
            debug!(
                attacker = attacker.name(),
                defender = defender.name(),
                %element,
                damage = outcome.damage,
                affinity = outcome.affinity.code(),
                "skill hit resolved"
            );
            if let Some(drain) = drain {
                debug!(hp = drain.hp, mp = drain.mp, "stats drained");
            }
            self.presenter
                .hit(attacker.name(), defender.name(), element, outcome);
        }
        Ok(())
    }

    /// Counter, turn cost and casualties shared by every offensive skill.
    fn finish_offensive(&mut self, actor: UnitId, report: &SkillReport) {
        self.record_skill_use();

        let cost = report.turn_cost.unwrap_or(TurnCost::SkillAction);
        let spent = self.turns.consume(cost);
        debug!(?cost, ?spent, "turns consumed");
        self.presenter.turns_spent(spent);

        for target in report.targets() {
            self.settle_casualty(self.acting.opponent(), target);
        }
        if report.any_repelled() {
            self.settle_casualty(self.acting, actor);
        }
    }

    /// Heal or revive one chosen ally.
    fn ally_skill(&mut self, actor: UnitId, skill: &Skill, revive: bool) -> Result<ActionStatus> {
        let team = self.state.team(self.acting);
        let candidates = if revive {
            team.revive_candidates()
        } else {
            team.active_units()
        };
        let units: Vec<_> = candidates.iter().filter_map(|id| team.unit(*id)).collect();
        self.presenter.target_menu(team.get(actor)?.name(), &units);

        let Some(index) = self.presenter.read_option(candidates.len())? else {
            return Ok(ActionStatus::Cancelled);
        };
        let target = candidates[index];

        let user = self.spend_mp(actor, skill)?;
        self.presenter.separator();
        self.restore_ally(&user, target, skill.power, revive)?;

        self.finish_support();
        Ok(ActionStatus::Completed)
    }

    /// Heal every ally on the board, or revive every fallen ally.
    fn party_skill(&mut self, actor: UnitId, skill: &Skill, revive: bool) -> Result<ActionStatus> {
        let team = self.state.team(self.acting);
        let targets = if revive {
            team.revive_candidates()
        } else {
            team.active_units()
        };
        if targets.is_empty() {
            warn!(skill = %skill.name, "party skill has nobody to affect");
            return Ok(ActionStatus::Cancelled);
        }

        let user = self.spend_mp(actor, skill)?;
        self.presenter.separator();
        for target in targets {
            self.restore_ally(&user, target, skill.power, revive)?;
        }

        self.finish_support();
        Ok(ActionStatus::Completed)
    }

    /// Brings a reserve unit onto the board; `revives` also accepts fallen
    /// units, which come back with a share of their HP.
    fn summon_skill(&mut self, actor: UnitId, skill: &Skill, revives: bool) -> Result<ActionStatus> {
        let Some(incoming) = self.choose_reserve_unit(revives)? else {
            return Ok(ActionStatus::Cancelled);
        };
        let Some(slot) = self.choose_slot()? else {
            return Ok(ActionStatus::Cancelled);
        };

        let team = self.state.team_mut(self.acting);
        let unit = team.get_mut(incoming)?;
        let revived = (revives && !unit.is_alive()).then(|| {
            let amount = heal_amount(unit.stats().hp, skill.power);
            unit.heal(amount);
            amount
        });

        let displaced = team.summon_to_slot(incoming, slot)?;
        self.turns.swap_in(displaced, incoming);
        debug!(unit = %incoming, slot, ?displaced, "summoned by skill");

        let user = self.spend_mp(actor, skill)?;
        let team = self.state.team(self.acting);
        let summoned = team.get(incoming)?;
        self.presenter.invoked(summoned.name());
        if let Some(amount) = revived {
            self.presenter.healed(&user, summoned.name(), amount, true);
            self.presenter.final_hp(summoned);
        }

        self.finish_support();
        Ok(ActionStatus::Completed)
    }

    /// Pays the skill's MP and returns the caster's name.
    fn spend_mp(&mut self, actor: UnitId, skill: &Skill) -> Result<String> {
        let unit = self.state.team_mut(self.acting).get_mut(actor)?;
        unit.consume_mp(skill.cost);
        Ok(unit.name().to_string())
    }

    fn restore_ally(&mut self, user: &str, target: UnitId, power: u32, revive: bool) -> Result<()> {
        let team = self.state.team_mut(self.acting);
        let unit = team.get_mut(target)?;
        let amount = heal_amount(unit.stats().hp, power);

        if revive && !unit.is_alive() {
            unit.heal(amount);
            self.presenter.healed(user, unit.name(), amount, true);
            if team.slot_of(target).is_some() {
                self.turns.append(target);
            }
            debug!(unit = %target, amount, "ally revived");
        } else if !revive {
            unit.heal(amount);
            self.presenter.healed(user, unit.name(), amount, false);
            debug!(unit = %target, amount, "ally healed");
        }

        self.presenter.final_hp(team.get(target)?);
        Ok(())
    }

    fn finish_support(&mut self) {
        self.record_skill_use();
        let spent = self.turns.consume(TurnCost::SkillAction);
        debug!(?spent, "turns consumed");
        self.presenter.turns_spent(spent);
    }
}

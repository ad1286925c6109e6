//! Multi-hit and multi-target skill execution.
//!
//! A skill invocation may land several hits, on one target or spread across
//! the enemy board. Each hit is resolved independently; the whole invocation
//! then pays a single combined turn cost chosen by priority:
//!
//! ```text
//! Repel / Drain  >  Null  >  Miss  >  Weak  >  Neutral / Resist
//! ConsumeAll        (0,2,0)  (0,1,0)  Weak     SkillAction
//! ```

use super::drain::{StatDrain, apply_drain};
use super::outcome::AttackOutcome;
use super::resolver::resolve_attack;
use super::turn_cost::TurnCost;
use crate::config::CombatParams;
use crate::error::BattleError;
use crate::state::{Element, Skill, Team, Unit, UnitId};

/// One resolved hit of a skill invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HitRecord {
    pub target: UnitId,
    pub outcome: AttackOutcome,
    pub drain: Option<StatDrain>,
}

/// Every hit of one invocation plus the turn cost it pays as a whole.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillReport {
    pub hits: Vec<HitRecord>,
    pub turn_cost: Option<TurnCost>,
}

impl SkillReport {
    fn from_hits(hits: Vec<HitRecord>) -> Self {
        let turn_cost = (!hits.is_empty())
            .then(|| combine_turn_costs(hits.iter().map(|hit| &hit.outcome)));
        Self { hits, turn_cost }
    }

    /// Distinct targets hit, in first-hit order.
    pub fn targets(&self) -> Vec<UnitId> {
        let mut seen = Vec::new();
        for hit in &self.hits {
            if !seen.contains(&hit.target) {
                seen.push(hit.target);
            }
        }
        seen
    }

    pub fn any_repelled(&self) -> bool {
        self.hits.iter().any(|hit| hit.outcome.repelled())
    }
}

/// Combined cost of a batch of hits, by the priority in the module docs.
///
/// An empty batch costs a plain action.
pub fn combine_turn_costs<'a>(outcomes: impl IntoIterator<Item = &'a AttackOutcome>) -> TurnCost {
    let mut redirected = false;
    let mut nullified = false;
    let mut missed = false;
    let mut weak = false;

    for outcome in outcomes {
        redirected |= outcome.repelled() || outcome.drained();
        nullified |= outcome.nullified();
        missed |= outcome.missed();
        weak |= outcome.exploited_weakness();
    }

    if redirected {
        TurnCost::ConsumeAll
    } else if nullified {
        TurnCost::BLOCKED
    } else if missed {
        TurnCost::MISSED
    } else if weak {
        TurnCost::Weak
    } else {
        TurnCost::SkillAction
    }
}

/// Indices hit by a round-robin skill.
///
/// Starts at `counter % count`; walks right when that start is even and left
/// when it is odd, wrapping at both ends, one step per hit.
pub fn round_robin_targets(count: usize, hits: u32, counter: u32) -> Vec<usize> {
    if count == 0 {
        return Vec::new();
    }

    let start = counter as usize % count;
    let rightward = start % 2 == 0;
    let mut index = start;
    let mut picks = Vec::with_capacity(hits as usize);

    for _ in 0..hits {
        picks.push(index);
        index = if rightward {
            (index + 1) % count
        } else {
            (index + count - 1) % count
        };
    }
    picks
}

fn strike(
    attacker: &mut Unit,
    defenders: &mut Team,
    target: UnitId,
    skill: &Skill,
    element: Element,
    params: &CombatParams,
) -> Result<HitRecord, BattleError> {
    let defender = defenders.get_mut(target)?;
    let outcome = resolve_attack(attacker, defender, element, Some(skill.power), params);
    let drain = skill
        .drain_kind()
        .map(|kind| apply_drain(attacker, defender, outcome.damage, kind));

    Ok(HitRecord {
        target,
        outcome,
        drain,
    })
}

/// Lands `hits` hits on a single target.
pub fn execute_on_target(
    attacker: &mut Unit,
    defenders: &mut Team,
    target: UnitId,
    skill: &Skill,
    element: Element,
    hits: u32,
    params: &CombatParams,
) -> Result<SkillReport, BattleError> {
    let records = (0..hits)
        .map(|_| strike(attacker, defenders, target, skill, element, params))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SkillReport::from_hits(records))
}

/// Lands `hits_per_target` hits on every target still alive when reached.
pub fn execute_on_all(
    attacker: &mut Unit,
    defenders: &mut Team,
    targets: &[UnitId],
    skill: &Skill,
    element: Element,
    hits_per_target: u32,
    params: &CombatParams,
) -> Result<SkillReport, BattleError> {
    let mut records = Vec::new();
    for &target in targets {
        if !defenders.get(target)?.is_alive() {
            continue;
        }
        for _ in 0..hits_per_target {
            records.push(strike(attacker, defenders, target, skill, element, params)?);
        }
    }
    Ok(SkillReport::from_hits(records))
}

/// Spreads `total_hits` hits over `targets` with [`round_robin_targets`].
///
/// The target list is fixed for the whole sequence.
#[allow(clippy::too_many_arguments)]
pub fn execute_round_robin(
    attacker: &mut Unit,
    defenders: &mut Team,
    targets: &[UnitId],
    skill: &Skill,
    element: Element,
    total_hits: u32,
    counter: u32,
    params: &CombatParams,
) -> Result<SkillReport, BattleError> {
    let records = round_robin_targets(targets.len(), total_hits, counter)
        .into_iter()
        .map(|index| strike(attacker, defenders, targets[index], skill, element, params))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SkillReport::from_hits(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::OutcomeFlags;
    use crate::state::{Affinity, AffinityTable, Side, SkillType, Stats, TargetMode};

    fn outcome(affinity: Affinity, flags: OutcomeFlags, cost: TurnCost) -> AttackOutcome {
        AttackOutcome {
            damage: 0,
            affinity,
            flags,
            attacker_name: "Flynn".into(),
            turn_cost: cost,
        }
    }

    fn weak() -> AttackOutcome {
        outcome(Affinity::Weak, OutcomeFlags::empty(), TurnCost::Weak)
    }

    fn neutral() -> AttackOutcome {
        outcome(Affinity::Neutral, OutcomeFlags::empty(), TurnCost::SkillAction)
    }

    #[test]
    fn round_robin_walks_right_from_even_start() {
        assert_eq!(round_robin_targets(3, 4, 0), vec![0, 1, 2, 0]);
        assert_eq!(round_robin_targets(3, 3, 2), vec![2, 0, 1]);
    }

    #[test]
    fn round_robin_walks_left_from_odd_start() {
        // start = 4 % 3 = 1, odd
        assert_eq!(round_robin_targets(3, 4, 4), vec![1, 0, 2, 1]);
        assert!(round_robin_targets(0, 4, 0).is_empty());
    }

    #[test]
    fn repel_and_drain_dominate_weak() {
        let repelled = outcome(Affinity::Repel, OutcomeFlags::REPELLED, TurnCost::ConsumeAll);
        let drained = outcome(Affinity::Drain, OutcomeFlags::DRAINED, TurnCost::ConsumeAll);

        assert_eq!(combine_turn_costs([&weak(), &repelled]), TurnCost::ConsumeAll);
        assert_eq!(combine_turn_costs([&drained, &weak()]), TurnCost::ConsumeAll);
    }

    #[test]
    fn null_then_miss_then_weak() {
        let blocked = outcome(Affinity::Null, OutcomeFlags::NULLIFIED, TurnCost::BLOCKED);
        let missed = outcome(Affinity::Neutral, OutcomeFlags::MISSED, TurnCost::SkillAction);

        assert_eq!(
            combine_turn_costs([&weak(), &blocked, &missed]),
            TurnCost::generic(0, 2, 0)
        );
        assert_eq!(combine_turn_costs([&weak(), &missed]), TurnCost::generic(0, 1, 0));
        assert_eq!(combine_turn_costs([&neutral(), &weak()]), TurnCost::Weak);
        assert_eq!(combine_turn_costs([&neutral(), &neutral()]), TurnCost::SkillAction);
    }

    fn stats(hp: u32) -> Stats {
        Stats {
            hp,
            mp: 30,
            str: 10,
            skl: 10,
            mag: 25,
            spd: 10,
            lck: 10,
        }
    }

    fn defenders(tables: [AffinityTable; 3]) -> Team {
        let leader = Unit::leader("Leader", stats(100), tables[0]);
        let summonables = vec![
            Unit::summonable("A", stats(15), tables[1]),
            Unit::summonable("B", stats(100), tables[2]),
        ];
        Team::new(Side::J2, leader, summonables).unwrap()
    }

    #[test]
    fn all_targets_skips_units_already_down() {
        let params = CombatParams::default();
        let mut attacker = Unit::leader("Flynn", stats(100), AffinityTable::neutral());
        let mut team = defenders([AffinityTable::neutral(); 3]);
        team.unit_mut(UnitId(1)).unwrap().kill();
        let maragi = Skill::new("Maragi", SkillType::Attack(Element::Fire), 10, 16)
            .with_target(TargetMode::All);

        let report = execute_on_all(
            &mut attacker,
            &mut team,
            &[UnitId(0), UnitId(1), UnitId(2)],
            &maragi,
            Element::Fire,
            1,
            &params,
        )
        .unwrap();

        assert_eq!(report.targets(), vec![UnitId(0), UnitId(2)]);
        // sqrt(25 * 16) = 20 each
        assert_eq!(team.unit(UnitId(0)).unwrap().hp(), 80);
        assert_eq!(team.unit(UnitId(2)).unwrap().hp(), 80);
        assert_eq!(report.turn_cost, Some(TurnCost::SkillAction));
    }

    #[test]
    fn all_targets_with_repel_consumes_everything() {
        let params = CombatParams::default();
        let mut attacker = Unit::leader("Flynn", stats(100), AffinityTable::neutral());
        let mut team = defenders([
            AffinityTable::neutral().with(Element::Fire, Affinity::Weak),
            AffinityTable::neutral().with(Element::Fire, Affinity::Repel),
            AffinityTable::neutral(),
        ]);
        let targets = team.active_units();
        let maragi = Skill::new("Maragi", SkillType::Attack(Element::Fire), 10, 16)
            .with_target(TargetMode::All);

        let report = execute_on_all(
            &mut attacker,
            &mut team,
            &targets,
            &maragi,
            Element::Fire,
            1,
            &params,
        )
        .unwrap();

        assert!(report.any_repelled());
        assert_eq!(attacker.hp(), 80);
        assert_eq!(report.turn_cost, Some(TurnCost::ConsumeAll));
    }

    #[test]
    fn round_robin_resolves_hits_in_walk_order() {
        let params = CombatParams::default();
        let mut attacker = Unit::leader("Flynn", stats(100), AffinityTable::neutral());
        let mut team = defenders([AffinityTable::neutral(); 3]);
        let targets = team.active_units();
        let skill = Skill::new("Mudoon", SkillType::Attack(Element::Ice), 10, 16)
            .with_target(TargetMode::Multi);

        let report = execute_round_robin(
            &mut attacker,
            &mut team,
            &targets,
            &skill,
            Element::Ice,
            4,
            0,
            &params,
        )
        .unwrap();

        let order: Vec<_> = report.hits.iter().map(|hit| hit.target).collect();
        assert_eq!(order, vec![UnitId(0), UnitId(1), UnitId(2), UnitId(0)]);
        assert_eq!(team.unit(UnitId(0)).unwrap().hp(), 60);
        // 15 HP unit clamps at zero.
        assert_eq!(team.unit(UnitId(1)).unwrap().hp(), 0);
    }

    #[test]
    fn almighty_drain_restores_attacker_after_each_hit() {
        let params = CombatParams::default();
        let mut attacker = Unit::leader("Flynn", stats(100), AffinityTable::neutral());
        attacker.take_damage(50);
        let mut team = defenders([AffinityTable::neutral(); 3]);
        let skill = Skill::new("Life Drain", SkillType::Attack(Element::Almighty), 5, 16)
            .with_effect("Almighty attack that drains HP");

        let report = execute_on_target(
            &mut attacker,
            &mut team,
            UnitId(2),
            &skill,
            Element::Almighty,
            2,
            &params,
        )
        .unwrap();

        // Two hits of 20, each drained back from a target with HP to spare.
        assert_eq!(report.hits.len(), 2);
        assert_eq!(team.unit(UnitId(2)).unwrap().hp(), 60);
        assert_eq!(attacker.hp(), 90);
        assert_eq!(report.hits[0].drain.map(|d| d.hp), Some(20));
    }
}

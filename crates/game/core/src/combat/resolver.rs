//! Single-hit attack resolution.

use super::affinity::AffinityEffect;
use super::damage::base_damage;
use super::instant_kill::resolve_instant_kill;
use super::outcome::{AttackOutcome, OutcomeFlags};
use crate::config::CombatParams;
use crate::state::{Affinity, Element, Unit};

/// Resolve one hit of `element` from `attacker` on `target` and apply it.
///
/// Light and Dark go through the luck contest; every other element computes
/// base damage and lets the target's affinity scale and route it. HP changes
/// are applied to both units before the outcome is returned.
///
/// # Arguments
///
/// * `skill_power` - `None` for basic attacks (Attack / Shoot)
pub fn resolve_attack(
    attacker: &mut Unit,
    target: &mut Unit,
    element: Element,
    skill_power: Option<u32>,
    params: &CombatParams,
) -> AttackOutcome {
    let affinity = target.affinities().get(element);

    if element.is_instant_kill() {
        return resolve_execution(attacker, target, affinity, skill_power.unwrap_or(0), params);
    }

    let base = base_damage(attacker.stats(), element, skill_power, params);
    let effect = AffinityEffect::for_affinity(affinity, params);
    let damage = effect.damage(base);
    effect.apply(attacker, target, damage);

    let mut flags = OutcomeFlags::empty();
    flags.set(OutcomeFlags::REPELLED, affinity == Affinity::Repel);
    flags.set(OutcomeFlags::DRAINED, affinity == Affinity::Drain);
    flags.set(OutcomeFlags::NULLIFIED, affinity == Affinity::Null);

    AttackOutcome {
        damage,
        affinity,
        flags,
        attacker_name: attacker.name().to_string(),
        turn_cost: effect.turn_cost(),
    }
}

fn resolve_execution(
    attacker: &mut Unit,
    target: &mut Unit,
    affinity: Affinity,
    power: u32,
    params: &CombatParams,
) -> AttackOutcome {
    let attempt = resolve_instant_kill(attacker, target, affinity, power, params);

    let nullified = affinity == Affinity::Null;
    let repelled = affinity == Affinity::Repel;

    let mut flags = OutcomeFlags::empty();
    flags.set(OutcomeFlags::NULLIFIED, nullified);
    flags.set(OutcomeFlags::REPELLED, repelled);
    flags.set(OutcomeFlags::MISSED, !attempt.success && !nullified && !repelled);
    flags.set(OutcomeFlags::INSTANT_KILL, attempt.success);

    AttackOutcome {
        damage: 0,
        affinity,
        flags,
        attacker_name: attacker.name().to_string(),
        turn_cost: attempt.cost,
    }
}

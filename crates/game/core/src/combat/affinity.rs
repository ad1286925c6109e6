//! Per-affinity damage behavior for non-lethal elements.

use super::damage::truncate;
use super::turn_cost::TurnCost;
use crate::config::CombatParams;
use crate::state::{Affinity, Unit};

/// Resolution behavior selected from a target's [`Affinity`].
///
/// Every affinity maps to exactly one variant. Damage-dealing elements never
/// miss; only the luck contest of Light and Dark can.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AffinityEffect {
    /// Damage lands on the target, scaled by `multiplier`.
    Strike { multiplier: f64, cost: TurnCost },
    /// Nothing happens.
    Block,
    /// Damage bounces back onto the attacker.
    Reflect,
    /// The target heals by the damage amount.
    Absorb,
}

impl AffinityEffect {
    pub fn for_affinity(affinity: Affinity, params: &CombatParams) -> Self {
        match affinity {
            Affinity::Neutral => AffinityEffect::Strike {
                multiplier: 1.0,
                cost: TurnCost::SkillAction,
            },
            Affinity::Weak => AffinityEffect::Strike {
                multiplier: params.weak_multiplier,
                cost: TurnCost::Weak,
            },
            Affinity::Resist => AffinityEffect::Strike {
                multiplier: params.resist_multiplier,
                cost: TurnCost::SkillAction,
            },
            Affinity::Null => AffinityEffect::Block,
            Affinity::Repel => AffinityEffect::Reflect,
            Affinity::Drain => AffinityEffect::Absorb,
        }
    }

    pub fn damage(&self, base: f64) -> u32 {
        match self {
            AffinityEffect::Strike { multiplier, .. } => truncate(base * multiplier),
            AffinityEffect::Block => 0,
            AffinityEffect::Reflect | AffinityEffect::Absorb => truncate(base),
        }
    }

    pub fn apply(&self, attacker: &mut Unit, target: &mut Unit, damage: u32) {
        match self {
            AffinityEffect::Strike { .. } => target.take_damage(damage),
            AffinityEffect::Block => {}
            AffinityEffect::Reflect => attacker.take_damage(damage),
            AffinityEffect::Absorb => target.heal(damage),
        }
    }

    pub fn turn_cost(&self) -> TurnCost {
        match self {
            AffinityEffect::Strike { cost, .. } => *cost,
            AffinityEffect::Block => TurnCost::BLOCKED,
            AffinityEffect::Reflect | AffinityEffect::Absorb => TurnCost::ConsumeAll,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AffinityTable, Stats};

    fn unit(name: &str, hp: u32) -> Unit {
        let stats = Stats {
            hp,
            mp: 10,
            ..Stats::default()
        };
        Unit::summonable(name, stats, AffinityTable::neutral())
    }

    #[test]
    fn scaling_follows_affinity() {
        let params = CombatParams::default();
        let effect = |affinity| AffinityEffect::for_affinity(affinity, &params);

        assert_eq!(effect(Affinity::Neutral).damage(20.7), 20);
        // floor(20.7 * 1.5) = floor(31.05)
        assert_eq!(effect(Affinity::Weak).damage(20.7), 31);
        // floor(20.7 * 0.5) = floor(10.35)
        assert_eq!(effect(Affinity::Resist).damage(20.7), 10);
        assert_eq!(effect(Affinity::Null).damage(20.7), 0);
        assert_eq!(effect(Affinity::Repel).damage(20.7), 20);
        assert_eq!(effect(Affinity::Drain).damage(20.7), 20);
    }

    #[test]
    fn costs_follow_affinity() {
        let params = CombatParams::default();
        let cost = |affinity| AffinityEffect::for_affinity(affinity, &params).turn_cost();

        assert_eq!(cost(Affinity::Neutral), TurnCost::SkillAction);
        assert_eq!(cost(Affinity::Weak), TurnCost::Weak);
        assert_eq!(cost(Affinity::Resist), TurnCost::SkillAction);
        assert_eq!(cost(Affinity::Null), TurnCost::generic(0, 2, 0));
        assert_eq!(cost(Affinity::Repel), TurnCost::ConsumeAll);
        assert_eq!(cost(Affinity::Drain), TurnCost::ConsumeAll);
    }

    #[test]
    fn reflect_and_absorb_redirect_the_effect() {
        let mut attacker = unit("Attacker", 50);
        let mut target = unit("Target", 50);
        target.take_damage(30);

        AffinityEffect::Reflect.apply(&mut attacker, &mut target, 15);
        assert_eq!(attacker.hp(), 35);
        assert_eq!(target.hp(), 20);

        AffinityEffect::Absorb.apply(&mut attacker, &mut target, 15);
        assert_eq!(target.hp(), 35);

        AffinityEffect::Block.apply(&mut attacker, &mut target, 15);
        assert_eq!((attacker.hp(), target.hp()), (35, 35));
    }
}

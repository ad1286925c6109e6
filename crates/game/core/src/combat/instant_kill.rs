//! Luck-contest resolution for Light and Dark attacks.

use super::turn_cost::TurnCost;
use crate::config::CombatParams;
use crate::state::{Affinity, Unit};

/// Result of an instant-kill attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstantKill {
    /// The kill landed, on the target or (for Repel) on the attacker.
    pub success: bool,
    pub cost: TurnCost,
}

/// Resolves an instant-kill attempt and applies it.
///
/// | Affinity | Success | Victim | Cost |
/// |---|---|---|---|
/// | Weak | always | target | Weak |
/// | Neutral, Drain | `atk.lck + power >= tgt.lck` | target | SkillAction |
/// | Resist | `atk.lck + power >= factor * tgt.lck` | target | SkillAction |
/// | Null | never | none | Generic(0, 2, 0) |
/// | Repel | always | attacker | ConsumeAll |
pub fn resolve_instant_kill(
    attacker: &mut Unit,
    target: &mut Unit,
    affinity: Affinity,
    power: u32,
    params: &CombatParams,
) -> InstantKill {
    let attack_luck = attacker.stats().lck + power;
    let target_luck = target.stats().lck;

    match affinity {
        Affinity::Weak => {
            target.kill();
            InstantKill {
                success: true,
                cost: TurnCost::Weak,
            }
        }
        Affinity::Neutral | Affinity::Drain => {
            contest(target, attack_luck >= target_luck)
        }
        Affinity::Resist => {
            contest(target, attack_luck >= params.resist_luck_factor * target_luck)
        }
        Affinity::Null => InstantKill {
            success: false,
            cost: TurnCost::BLOCKED,
        },
        Affinity::Repel => {
            attacker.kill();
            InstantKill {
                success: true,
                cost: TurnCost::ConsumeAll,
            }
        }
    }
}

fn contest(target: &mut Unit, wins: bool) -> InstantKill {
    if wins {
        target.kill();
    }
    InstantKill {
        success: wins,
        cost: TurnCost::SkillAction,
    }
}

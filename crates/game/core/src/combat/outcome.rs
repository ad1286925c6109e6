use bitflags::bitflags;

use super::turn_cost::TurnCost;
use crate::state::Affinity;

bitflags! {
    /// Special results of a single resolved hit.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct OutcomeFlags: u8 {
        const REPELLED     = 1 << 0;
        const DRAINED      = 1 << 1;
        const NULLIFIED    = 1 << 2;
        const MISSED       = 1 << 3;
        const INSTANT_KILL = 1 << 4;
    }
}

/// Result of one resolved hit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackOutcome {
    /// Damage dealt, reflected or absorbed. Always zero for instant-kill elements.
    pub damage: u32,
    /// Target affinity toward the attack element.
    pub affinity: Affinity,
    pub flags: OutcomeFlags,
    pub attacker_name: String,
    pub turn_cost: TurnCost,
}

impl AttackOutcome {
    pub fn repelled(&self) -> bool {
        self.flags.contains(OutcomeFlags::REPELLED)
    }

    pub fn drained(&self) -> bool {
        self.flags.contains(OutcomeFlags::DRAINED)
    }

    pub fn nullified(&self) -> bool {
        self.flags.contains(OutcomeFlags::NULLIFIED)
    }

    pub fn missed(&self) -> bool {
        self.flags.contains(OutcomeFlags::MISSED)
    }

    pub fn instant_kill(&self) -> bool {
        self.flags.contains(OutcomeFlags::INSTANT_KILL)
    }

    /// Weakness was exploited (the hit hands out a blinking turn).
    pub fn exploited_weakness(&self) -> bool {
        self.turn_cost.grants_blinking()
    }
}

//! Turn-currency requests produced by combat and consumed by the turn economy.

/// How many turns an action asks to spend.
///
/// Each variant selects one consumption rule in
/// [`TurnEconomy::consume`](crate::engine::TurnEconomy::consume); see there for
/// the exact arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnCost {
    /// Spend every remaining turn.
    ConsumeAll,
    /// Passing or summoning: a blinking turn if any, else a full turn that
    /// leaves a blinking turn behind.
    PassOrSummon,
    /// Ordinary action: one blinking turn if any, else one full turn.
    SkillAction,
    /// Weakness exploited: a full turn becomes a blinking turn.
    Weak,
    /// Explicit amounts. Blinking demand overflows into full turns.
    Generic {
        full: u32,
        blinking: u32,
        gained: u32,
    },
}

impl TurnCost {
    /// Cost of a nullified hit.
    pub const BLOCKED: Self = TurnCost::Generic {
        full: 0,
        blinking: 2,
        gained: 0,
    };

    /// Cost of a missed hit.
    pub const MISSED: Self = TurnCost::Generic {
        full: 0,
        blinking: 1,
        gained: 0,
    };

    pub const fn generic(full: u32, blinking: u32, gained: u32) -> Self {
        TurnCost::Generic {
            full,
            blinking,
            gained,
        }
    }

    /// Whether this request can hand out blinking turns.
    pub const fn grants_blinking(&self) -> bool {
        match self {
            TurnCost::PassOrSummon | TurnCost::Weak => true,
            TurnCost::Generic { gained, .. } => *gained > 0,
            TurnCost::ConsumeAll | TurnCost::SkillAction => false,
        }
    }
}

/// Turns actually taken and granted by one consumption.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnsSpent {
    pub full: u32,
    pub blinking: u32,
    pub gained: u32,
}

impl TurnsSpent {
    pub const NONE: Self = Self::new(0, 0, 0);

    pub const fn new(full: u32, blinking: u32, gained: u32) -> Self {
        Self {
            full,
            blinking,
            gained,
        }
    }
}

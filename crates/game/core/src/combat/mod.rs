//! Combat resolution system.
//!
//! Pure functions that turn an attacker, a target and an element into an
//! [`AttackOutcome`] and the turn cost that goes with it.
//!
//! # Core Functions
//!
//! - `base_damage`: stat and modifier based raw damage
//! - `resolve_instant_kill`: luck contest for Light and Dark
//! - `resolve_attack`: one complete hit (affinity routing + HP changes)
//! - `execute_on_target` / `execute_on_all` / `execute_round_robin`: full
//!   skill invocations with a combined turn cost

pub mod affinity;
pub mod damage;
pub mod drain;
pub mod instant_kill;
pub mod multi;
pub mod outcome;
pub mod resolver;
pub mod turn_cost;

pub use affinity::AffinityEffect;
pub use damage::{base_damage, heal_amount, truncate};
pub use drain::{StatDrain, apply_drain};
pub use instant_kill::{InstantKill, resolve_instant_kill};
pub use multi::{
    HitRecord, SkillReport, combine_turn_costs, execute_on_all, execute_on_target,
    execute_round_robin, round_robin_targets,
};
pub use outcome::{AttackOutcome, OutcomeFlags};
pub use resolver::resolve_attack;
pub use turn_cost::{TurnCost, TurnsSpent};

//! Deterministic battle rules and data types shared across crates.
//!
//! `battle-core` defines the canonical rules (affinities, damage, turn
//! currency, squads) and exposes pure APIs that the runtime drives. It never
//! performs I/O; content loading and presentation live in other crates.
pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod state;

pub use combat::{
    AttackOutcome, HitRecord, OutcomeFlags, SkillReport, StatDrain, TurnCost, TurnsSpent,
    resolve_attack,
};
pub use config::{BattleConfig, CombatParams};
pub use engine::{SideContext, TurnEconomy, TurnPhase};
pub use error::{BattleError, ClassifiedError, ErrorSeverity};
pub use state::{
    Affinity, AffinityTable, BattleState, DrainKind, Element, HitSpec, HitSpecError, Side, Skill,
    SkillRole, SkillType, Stats, TargetMode, Team, TeamError, Unit, UnitId, UnitKind,
    UnitStateError,
};

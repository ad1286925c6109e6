//! Authoritative battle state representation.
//!
//! This module owns the data structures that describe units, skills, affinity
//! tables and team placement. Runtime layers query this state and mutate it
//! through the combat resolvers and team operations.
pub mod affinity;
pub mod battle;
pub mod skill;
pub mod team;
pub mod unit;

pub use affinity::{Affinity, AffinityTable, Element};
pub use battle::BattleState;
pub use skill::{DrainKind, HitSpec, HitSpecError, Skill, SkillRole, SkillType, TargetMode};
pub use team::{Side, Team, TeamError};
pub use unit::{Stats, Unit, UnitId, UnitKind, UnitStateError};

//! Public API surface of the runtime.
//!
//! Exposes the view abstraction clients implement and the error type every
//! runtime operation returns.
pub mod errors;
pub mod view;

pub use errors::{Result, RuntimeError};
pub use view::{BattleView, INPUT_PREFIX, ScriptedView};

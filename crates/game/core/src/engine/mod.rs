//! Turn economy and side bookkeeping.
//!
//! The [`TurnEconomy`] owns the acting side's full and blinking turns along
//! with its action queue. Combat produces [`TurnCost`](crate::combat::TurnCost)
//! requests; the economy settles them and reports what was actually spent.

mod context;
mod turns;

pub use context::SideContext;
pub use turns::{TurnEconomy, TurnPhase};

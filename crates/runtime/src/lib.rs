//! Runtime orchestration for turn-based squad battles.
//!
//! This crate drives [`battle_core`] rules through a line-oriented view.
//! Consumers build a [`Lobby`] from loaded content and hand it a
//! [`BattleView`] implementation; the lobby picks the team file, builds a
//! [`BattleSession`] and plays the match to the end.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the view abstraction and the error type
//! - [`presenter`] owns every string shown during a match
//! - [`session`] hosts the match loop and the action flows
//! - [`lobby`] handles team-file selection and roster loading
//! - [`transcript`] replays and checks recorded match scripts
pub mod api;
pub mod lobby;
pub mod presenter;
pub mod session;
pub mod transcript;

pub use api::{BattleView, INPUT_PREFIX, Result, RuntimeError, ScriptedView};
pub use lobby::{Lobby, MatchReport};
pub use presenter::Presenter;
pub use session::{ActionChoice, ActionStatus, BattleSession};
pub use transcript::{END_OF_SCRIPT, Transcript, TranscriptMismatch};

//! Terminal client for squad battles.
//!
//! The binary wires environment configuration, file logging and content
//! loading around a [`battle_runtime::Lobby`]. Matches run either on the
//! terminal through [`ConsoleView`] or against a recorded transcript.
pub mod config;
pub mod console;
pub mod logging;

pub use config::ClientConfig;
pub use console::ConsoleView;

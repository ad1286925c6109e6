//! Data-driven content definitions and loaders.
//!
//! This crate turns external data into battle-core values:
//! - Unit and skill catalog ([`Catalog`], JSON via [`loaders::CatalogLoader`])
//! - Team rosters ([`RosterParser`], plain text)
//! - Battle configuration (TOML via [`loaders::ConfigLoader`])
//!
//! Content is consumed by the runtime when a match is set up and never
//! changes afterwards.

pub mod catalog;
pub mod roster;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::Catalog;
pub use roster::{RosterError, RosterParser};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, LoadResult, RosterLoader, list_team_files};

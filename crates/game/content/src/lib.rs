//! Static game content and loaders.
//!
//! This crate houses the concrete director events and the registration table
//! the event factory discovers them from, plus a loader for the TOML
//! configuration file:
//! - Director events grouped by category ([`events`])
//! - Registration table ([`catalog`])
//! - Trail configuration (data-driven via TOML)

pub mod events;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use events::catalog;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, TrailConfig};

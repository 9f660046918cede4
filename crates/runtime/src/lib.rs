//! Runtime orchestration for the trail simulation.
//!
//! This crate wires the event factory, the trail state, and a guarded request
//! into a turn driver. Consumers build a [`Simulation`] and call
//! [`Simulation::step`] once per day.
//!
//! Modules are organized by responsibility:
//! - [`director`] creates and executes director events against the trail
//! - [`simulation`] hosts the turn driver and its configuration
//! - [`error`] exposes the error type surfaced by both
pub mod director;
pub mod error;
pub mod simulation;

pub use director::{EventDirector, EventReport};
pub use error::{Result, RuntimeError};
pub use simulation::{RuntimeConfig, Simulation, TurnReport};

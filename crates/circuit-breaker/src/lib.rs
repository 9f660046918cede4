//! Tick-driven circuit breaker for turn-based games.
//!
//! A [`CircuitBreaker`] wraps a retryable request and is ticked once per
//! frame or turn by a single driver:
//!
//! - **No wall clock**: timeouts are counted in ticks
//! - **No async**: cancellation is a boolean decided before the request runs
//! - **No automatic retry**: a failure waits for the next tick
//!
//! # Architecture
//!
//! - [`CircuitState`]: Closed, Open, or HalfOpen (sum type owned by the breaker)
//! - [`RequestAction`]: the guarded request
//! - [`BreakerConfig`]: failure threshold and open timeout
//! - [`TickOutcome`]: what a tick or request attempt did

pub mod action;
pub mod breaker;
pub mod config;
pub mod state;

pub use action::RequestAction;
pub use breaker::{CircuitBreaker, TickOutcome};
pub use config::{BreakerConfig, BreakerConfigError};
pub use state::CircuitState;

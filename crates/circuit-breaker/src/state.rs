//! States of the circuit.

use std::fmt;

/// The breaker's current state.
///
/// # Tick Semantics
///
/// - `Closed`: requests flow; failures accumulate toward the threshold
/// - `Open`: requests are cancelled; each tick counts toward the timeout
/// - `HalfOpen`: a single trial request decides between Closed and Open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CircuitState {
    /// Normal operation.
    #[default]
    Closed,

    /// Failure threshold exceeded; requests are cancelled.
    Open {
        /// Ticks spent open so far.
        ticks: u32,
        /// Timeout captured when the circuit opened.
        timeout: u32,
    },

    /// Timeout elapsed; the next request is a trial.
    HalfOpen,
}

impl CircuitState {
    /// Fresh open state with the tick counter at zero.
    #[inline]
    pub(crate) fn open(timeout: u32) -> Self {
        CircuitState::Open { ticks: 0, timeout }
    }

    #[inline]
    pub fn is_closed(self) -> bool {
        matches!(self, CircuitState::Closed)
    }

    #[inline]
    pub fn is_open(self) -> bool {
        matches!(self, CircuitState::Open { .. })
    }

    #[inline]
    pub fn is_half_open(self) -> bool {
        matches!(self, CircuitState::HalfOpen)
    }

    /// Whether a request attempt in this state must be cancelled.
    #[inline]
    pub fn cancels_requests(self) -> bool {
        self.is_open()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CircuitState::Closed => "closed",
            CircuitState::Open { .. } => "open",
            CircuitState::HalfOpen => "half_open",
        }
    }
}

impl fmt::Display for CircuitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

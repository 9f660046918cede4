//! The breaker and its transitions.

use tracing::{debug, info, warn};

use crate::{BreakerConfig, BreakerConfigError, CircuitState, RequestAction};

/// What a tick or request attempt did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The request ran and succeeded.
    Sent,
    /// The request ran and failed.
    Failed { reason: String },
    /// No request ran: the circuit is open.
    Cancelled,
}

impl TickOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, TickOutcome::Sent)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, TickOutcome::Cancelled)
    }
}

/// Guards a [`RequestAction`] with the closed/open/half-open protocol.
///
/// | State    | tick                        | success     | failure                        |
/// |----------|-----------------------------|-------------|--------------------------------|
/// | Closed   | send request                | reset count | count += 1, open at threshold  |
/// | Open     | ticks += 1, half-open at timeout | n/a    | n/a                            |
/// | HalfOpen | send trial request          | close       | reopen                         |
///
/// The state is only ever replaced by the private `move_to_*` methods.
#[derive(Debug)]
pub struct CircuitBreaker<A> {
    failure_count: u32,
    failure_threshold: u32,
    circuit_timeout: u32,
    state: CircuitState,
    action: A,
}

impl<A: RequestAction> CircuitBreaker<A> {
    /// Creates a closed breaker around `action`.
    pub fn new(config: BreakerConfig, action: A) -> Result<Self, BreakerConfigError> {
        config.validate()?;
        Ok(Self {
            failure_count: 0,
            failure_threshold: config.failure_threshold,
            circuit_timeout: config.circuit_timeout,
            state: CircuitState::Closed,
            action,
        })
    }

    pub fn state(&self) -> CircuitState {
        self.state
    }

    pub fn failure_count(&self) -> u32 {
        self.failure_count
    }

    pub fn failure_threshold(&self) -> u32 {
        self.failure_threshold
    }

    pub fn circuit_timeout(&self) -> u32 {
        self.circuit_timeout
    }

    pub fn action(&self) -> &A {
        &self.action
    }

    pub fn action_mut(&mut self) -> &mut A {
        &mut self.action
    }

    /// Advances the breaker by one tick.
    ///
    /// Closed and HalfOpen send the guarded request. Open counts the tick and
    /// moves to HalfOpen once the timeout is reached; nothing is sent.
    pub fn circuit_tick(&mut self) -> TickOutcome {
        match self.state {
            CircuitState::Closed | CircuitState::HalfOpen => self.send_request(),
            CircuitState::Open { ticks, timeout } => {
                let ticks = ticks.saturating_add(1);
                self.state = CircuitState::Open { ticks, timeout };
                if ticks >= timeout {
                    self.move_to_half_open();
                }
                TickOutcome::Cancelled
            }
        }
    }

    /// Returns `true` (should cancel) when a request must not be sent now.
    pub fn request_is_about_to_be_made(&self) -> bool {
        self.state.cancels_requests()
    }

    /// Sends the guarded request unless the circuit cancels it, then records
    /// the result.
    pub fn send_request(&mut self) -> TickOutcome {
        if self.request_is_about_to_be_made() {
            debug!(
                target: "circuit_breaker",
                state = %self.state,
                "Request cancelled"
            );
            return TickOutcome::Cancelled;
        }

        match self.action.send_request() {
            Ok(()) => {
                self.act_upon_success();
                TickOutcome::Sent
            }
            Err(error) => {
                let reason = error.to_string();
                let state = self.state;
                self.act_upon_failure();
                warn!(
                    target: "circuit_breaker",
                    %state,
                    failures = self.failure_count,
                    error = %reason,
                    "Guarded request failed"
                );
                TickOutcome::Failed { reason }
            }
        }
    }

    /// Records a successful request.
    ///
    /// Closed resets the failure count; HalfOpen closes the circuit. Ignored
    /// while open, since no request can have been sent.
    pub fn act_upon_success(&mut self) {
        match self.state {
            CircuitState::Closed => self.reset_failure_count(),
            CircuitState::HalfOpen => self.move_to_closed(),
            CircuitState::Open { .. } => {}
        }
    }

    /// Records a failed request.
    ///
    /// Closed counts the failure and opens at the threshold; HalfOpen reopens
    /// immediately. Ignored while open.
    pub fn act_upon_failure(&mut self) {
        match self.state {
            CircuitState::Closed => {
                self.increment_failure_count();
                if self.failure_count >= self.failure_threshold {
                    self.move_to_open();
                }
            }
            CircuitState::HalfOpen => self.move_to_open(),
            CircuitState::Open { .. } => {}
        }
    }

    fn increment_failure_count(&mut self) {
        self.failure_count = self.failure_count.saturating_add(1);
    }

    fn reset_failure_count(&mut self) {
        self.failure_count = 0;
    }

    fn move_to_closed(&mut self) {
        self.reset_failure_count();
        self.state = CircuitState::Closed;
        info!(target: "circuit_breaker", "Circuit closed");
    }

    fn move_to_open(&mut self) {
        self.state = CircuitState::open(self.circuit_timeout);
        info!(
            target: "circuit_breaker",
            failures = self.failure_count,
            timeout = self.circuit_timeout,
            "Circuit opened"
        );
    }

    fn move_to_half_open(&mut self) {
        self.state = CircuitState::HalfOpen;
        info!(target: "circuit_breaker", "Circuit half-open, next request is a trial");
    }
}

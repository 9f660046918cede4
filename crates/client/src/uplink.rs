//! Simulated telegraph uplink guarded by the circuit breaker.
use circuit_breaker::RequestAction;
use game_core::{PcgRng, RngSource};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("telegraph line is down (attempt {attempt})")]
pub struct UplinkError {
    pub attempt: u64,
}

/// Fails a fixed share of requests, drawn from its own random stream so the
/// journey's rolls are not disturbed.
pub struct FlakyUplink {
    failure_percent: u32,
    rng: PcgRng,
    attempts: u64,
}

impl FlakyUplink {
    pub fn new(failure_percent: u32, seed: u64) -> Self {
        Self {
            failure_percent: failure_percent.min(100),
            rng: PcgRng::seed_from(seed),
            attempts: 0,
        }
    }

    pub fn attempts(&self) -> u64 {
        self.attempts
    }
}

impl RequestAction for FlakyUplink {
    type Error = UplinkError;

    fn send_request(&mut self) -> Result<(), UplinkError> {
        self.attempts += 1;
        if self.rng.chance(self.failure_percent) {
            Err(UplinkError {
                attempt: self.attempts,
            })
        } else {
            Ok(())
        }
    }
}

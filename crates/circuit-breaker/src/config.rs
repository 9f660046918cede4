//! Breaker tuning.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BreakerConfigError {
    #[error("failure threshold must be greater than zero")]
    ZeroThreshold,

    #[error("circuit timeout must be greater than zero ticks")]
    ZeroTimeout,
}

/// Failure threshold and open-state timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BreakerConfig {
    /// Consecutive failures while closed that open the circuit.
    pub failure_threshold: u32,
    /// Ticks the circuit stays open before allowing a trial request.
    pub circuit_timeout: u32,
}

impl BreakerConfig {
    pub const DEFAULT_FAILURE_THRESHOLD: u32 = 3;
    pub const DEFAULT_CIRCUIT_TIMEOUT: u32 = 5;

    pub const fn new(failure_threshold: u32, circuit_timeout: u32) -> Self {
        Self {
            failure_threshold,
            circuit_timeout,
        }
    }

    pub fn validate(&self) -> Result<(), BreakerConfigError> {
        if self.failure_threshold == 0 {
            return Err(BreakerConfigError::ZeroThreshold);
        }
        if self.circuit_timeout == 0 {
            return Err(BreakerConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

impl Default for BreakerConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FAILURE_THRESHOLD, Self::DEFAULT_CIRCUIT_TIMEOUT)
    }
}

//! Injected dependencies that keep the engine deterministic under test.

use crate::types::RegisterNumber;
use chrono::{DateTime, Utc};

/// Clock trait - abstracts time operations for testability.
pub trait Clock: Send + Sync {
    /// Get the current time
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Source of fresh register numbers.
pub trait RegisterNumberGenerator: Send + Sync {
    /// Produce a register number that has never been handed out before.
    fn next_register_number(&self) -> RegisterNumber;
}

/// UUID v4 register numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRegisterNumbers;

impl RegisterNumberGenerator for UuidRegisterNumbers {
    fn next_register_number(&self) -> RegisterNumber {
        RegisterNumber::new()
    }
}

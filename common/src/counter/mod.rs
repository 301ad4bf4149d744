//! Counter
//!
//! A single 256-bit unsigned register mutated with checked arithmetic.
//! Reaching either bound is reported to the caller instead of wrapping.

use log::{debug, warn};
use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    value: U256,
}

impl Counter {
    /// Create a counter starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: U256) -> Self {
        Self { value }
    }

    /// Current value, never fails
    pub fn number(&self) -> U256 {
        self.value
    }

    pub fn increment(&mut self) -> Result<(), LedgerError> {
        let Some(value) = self.value.checked_add(U256::one()) else {
            if log::log_enabled!(log::Level::Warn) {
                warn!("Counter: increment rejected at maximum value");
            }
            return Err(LedgerError::Overflow);
        };

        self.value = value;
        if log::log_enabled!(log::Level::Debug) {
            debug!("Counter: incremented to {}", self.value);
        }
        Ok(())
    }

    pub fn decrement(&mut self) -> Result<(), LedgerError> {
        let Some(value) = self.value.checked_sub(U256::one()) else {
            if log::log_enabled!(log::Level::Warn) {
                warn!("Counter: decrement rejected at zero");
            }
            return Err(LedgerError::Underflow);
        };

        self.value = value;
        if log::log_enabled!(log::Level::Debug) {
            debug!("Counter: decremented to {}", self.value);
        }
        Ok(())
    }

    /// Overwrite the value; any U256 is accepted
    pub fn set_number(&mut self, value: U256) {
        self.value = value;
        if log::log_enabled!(log::Level::Debug) {
            debug!("Counter: set to {}", self.value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(Counter::new().number(), U256::zero());
    }

    #[test]
    fn test_increment() {
        let mut counter = Counter::new();
        counter.increment().unwrap();
        assert_eq!(counter.number(), U256::one());
    }

    #[test]
    fn test_set_then_decrement() {
        let mut counter = Counter::new();
        counter.set_number(U256::from(10u64));
        counter.decrement().unwrap();
        assert_eq!(counter.number(), U256::from(9u64));
    }

    #[test]
    fn test_decrement_at_zero_underflows() {
        let mut counter = Counter::new();
        assert_eq!(counter.decrement(), Err(LedgerError::Underflow));
        assert_eq!(counter.number(), U256::zero());
    }

    #[test]
    fn test_increment_at_max_overflows() {
        let mut counter = Counter::with_value(U256::MAX);
        assert_eq!(counter.increment(), Err(LedgerError::Overflow));
        assert_eq!(counter.number(), U256::MAX);

        counter.decrement().unwrap();
        counter.increment().unwrap();
        assert_eq!(counter.number(), U256::MAX);
    }

    #[test]
    fn test_snapshot_json() {
        let counter = Counter::with_value(U256::from(42u64));
        let json = serde_json::to_string(&counter).unwrap();
        let back: Counter = serde_json::from_str(&json).unwrap();
        assert_eq!(back, counter);
    }
}

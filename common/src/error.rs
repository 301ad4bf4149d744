//! Ledger Error Codes
//!
//! Range: 0x0100 - 0x01FF
//! Format: LEDGER_ERROR_<CATEGORY>_<SPECIFIC>

use primitive_types::U256;
use thiserror::Error;

// ===== Arithmetic Errors (0x0100 - 0x010F) =====

pub const LEDGER_ERROR_OVERFLOW: u64 = 0x0100;
pub const LEDGER_ERROR_UNDERFLOW: u64 = 0x0101;

// ===== Balance Errors (0x0110 - 0x011F) =====

pub const LEDGER_ERROR_INSUFFICIENT_BALANCE: u64 = 0x0110;
pub const LEDGER_ERROR_CONSERVATION_VIOLATED: u64 = 0x0111;

// ===== Validation Errors (0x0120 - 0x012F) =====

pub const LEDGER_ERROR_INVALID_AMOUNT: u64 = 0x0120;
pub const LEDGER_ERROR_INVALID_ACCOUNT: u64 = 0x0121;
pub const LEDGER_ERROR_DECIMALS_TOO_HIGH: u64 = 0x0122;

/// Every failure a counter or ledger operation can report.
///
/// None of them is fatal to the instance: a failed operation leaves
/// the state exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Arithmetic overflow")]
    Overflow,

    #[error("Arithmetic underflow")]
    Underflow,

    #[error("Insufficient balance: need {need}, have {have}")]
    InsufficientBalance { need: U256, have: U256 },

    #[error("Balances do not add up to the total supply")]
    ConservationViolated,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid account: {0}")]
    InvalidAccount(String),

    #[error("Decimals too high: {0}")]
    DecimalsTooHigh(u8),
}

impl LedgerError {
    /// Convert error to u64 error code
    pub fn to_code(&self) -> u64 {
        match self {
            Self::Overflow => LEDGER_ERROR_OVERFLOW,
            Self::Underflow => LEDGER_ERROR_UNDERFLOW,
            Self::InsufficientBalance { .. } => LEDGER_ERROR_INSUFFICIENT_BALANCE,
            Self::ConservationViolated => LEDGER_ERROR_CONSERVATION_VIOLATED,
            Self::InvalidAmount(_) => LEDGER_ERROR_INVALID_AMOUNT,
            Self::InvalidAccount(_) => LEDGER_ERROR_INVALID_ACCOUNT,
            Self::DecimalsTooHigh(_) => LEDGER_ERROR_DECIMALS_TOO_HIGH,
        }
    }

    /// Create error from u64 error code
    ///
    /// Variants carrying data come back with empty payloads.
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            LEDGER_ERROR_OVERFLOW => Some(Self::Overflow),
            LEDGER_ERROR_UNDERFLOW => Some(Self::Underflow),
            LEDGER_ERROR_INSUFFICIENT_BALANCE => Some(Self::InsufficientBalance {
                need: U256::zero(),
                have: U256::zero(),
            }),
            LEDGER_ERROR_CONSERVATION_VIOLATED => Some(Self::ConservationViolated),
            LEDGER_ERROR_INVALID_AMOUNT => Some(Self::InvalidAmount(String::new())),
            LEDGER_ERROR_INVALID_ACCOUNT => Some(Self::InvalidAccount(String::new())),
            LEDGER_ERROR_DECIMALS_TOO_HIGH => Some(Self::DecimalsTooHigh(0)),
            _ => None,
        }
    }
}

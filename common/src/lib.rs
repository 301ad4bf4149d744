pub mod account;
pub mod amount;
pub mod config;
pub mod counter;
pub mod error;
pub mod sync;
pub mod token;

pub use account::AccountId;
pub use counter::Counter;
pub use error::LedgerError;
pub use primitive_types::U256;
pub use sync::Shared;
pub use token::{TokenLedger, TokenMetadata};

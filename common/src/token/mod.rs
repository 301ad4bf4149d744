//! Token Module
//!
//! A fixed-supply fungible token: the whole supply is minted to one owner
//! at creation and afterwards only moves between accounts via `transfer`.
//!
//! # Invariants
//!
//! - The balances always add up to the total supply
//! - Every balance lies between zero and the total supply
//! - A rejected transfer changes nothing

pub mod ledger;
pub mod types;

pub use ledger::*;
pub use types::*;

use std::collections::HashMap;

use log::{debug, warn};
use primitive_types::U256;
use serde::{Deserialize, Serialize};

use super::TokenMetadata;
use crate::{account::AccountId, error::LedgerError};

/// Balance table of a fixed-supply token.
///
/// Accounts that were never credited are implicitly at zero and
/// are not stored. Accounts whose balance drops to zero are removed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TokenLedgerSnapshot")]
pub struct TokenLedger {
    metadata: TokenMetadata,
    total_supply: U256,
    balances: HashMap<AccountId, U256>,
}

impl TokenLedger {
    /// Mint `initial_supply` to `owner` using the default 18 decimals.
    ///
    /// A zero supply is accepted and yields a ledger with no holders.
    pub fn create(
        owner: AccountId,
        initial_supply: U256,
        name: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Self {
        let metadata = TokenMetadata {
            name: name.into(),
            symbol: symbol.into(),
            ..Default::default()
        };
        Self::with_metadata(owner, initial_supply, metadata)
    }

    pub fn with_metadata(owner: AccountId, initial_supply: U256, metadata: TokenMetadata) -> Self {
        let mut balances = HashMap::new();
        if !initial_supply.is_zero() {
            balances.insert(owner, initial_supply);
        }

        if log::log_enabled!(log::Level::Debug) {
            debug!(
                "Token {}: minted {} to {}",
                metadata.symbol, initial_supply, owner
            );
        }

        Self {
            metadata,
            total_supply: initial_supply,
            balances,
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn symbol(&self) -> &str {
        &self.metadata.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.metadata.decimals
    }

    pub fn metadata(&self) -> &TokenMetadata {
        &self.metadata
    }

    pub fn total_supply(&self) -> U256 {
        self.total_supply
    }

    /// Balance of `account`, zero if it was never credited
    pub fn balance_of(&self, account: &AccountId) -> U256 {
        self.balances.get(account).copied().unwrap_or_default()
    }

    /// Accounts holding a nonzero balance, in no particular order
    pub fn holders(&self) -> impl Iterator<Item = (AccountId, U256)> + '_ {
        self.balances.iter().map(|(account, balance)| (*account, *balance))
    }

    /// Sum of all balances
    pub fn circulating_supply(&self) -> Result<U256, LedgerError> {
        sum_balances(&self.balances)
    }

    pub fn check_conservation(&self) -> Result<(), LedgerError> {
        if self.circulating_supply()? != self.total_supply {
            return Err(LedgerError::ConservationViolated);
        }
        Ok(())
    }

    /// Move `amount` from `caller` to `to`.
    ///
    /// Every check runs before the first write, so a rejected transfer
    /// leaves both balances untouched.
    pub fn transfer(
        &mut self,
        caller: AccountId,
        to: AccountId,
        amount: U256,
    ) -> Result<(), LedgerError> {
        let have = self.balance_of(&caller);
        if have < amount {
            if log::log_enabled!(log::Level::Warn) {
                warn!(
                    "Token {}: transfer of {} from {} rejected, balance is {}",
                    self.metadata.symbol, amount, caller, have
                );
            }
            return Err(LedgerError::InsufficientBalance { need: amount, have });
        }

        // Self-transfers and zero amounts leave every balance as it is
        if caller == to || amount.is_zero() {
            if log::log_enabled!(log::Level::Debug) {
                debug!(
                    "Token {}: transfer of {} from {} to {} has no effect",
                    self.metadata.symbol, amount, caller, to
                );
            }
            return Ok(());
        }

        // balance(to) + amount <= total_supply while balances are conserved,
        // so this cannot fail on a consistent ledger
        let credited = self
            .balance_of(&to)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        let debited = have - amount;

        self.store_balance(caller, debited);
        self.store_balance(to, credited);

        if log::log_enabled!(log::Level::Debug) {
            debug!(
                "Token {}: transferred {} from {} to {}",
                self.metadata.symbol, amount, caller, to
            );
        }
        Ok(())
    }

    fn store_balance(&mut self, account: AccountId, balance: U256) {
        if balance.is_zero() {
            self.balances.remove(&account);
        } else {
            self.balances.insert(account, balance);
        }
    }
}

fn sum_balances(balances: &HashMap<AccountId, U256>) -> Result<U256, LedgerError> {
    balances
        .values()
        .try_fold(U256::zero(), |sum, balance| sum.checked_add(*balance))
        .ok_or(LedgerError::Overflow)
}

/// Unchecked shape of a serialized ledger
#[derive(Deserialize)]
struct TokenLedgerSnapshot {
    metadata: TokenMetadata,
    total_supply: U256,
    balances: HashMap<AccountId, U256>,
}

impl TryFrom<TokenLedgerSnapshot> for TokenLedger {
    type Error = LedgerError;

    fn try_from(snapshot: TokenLedgerSnapshot) -> Result<Self, Self::Error> {
        let metadata = TokenMetadata::new(
            snapshot.metadata.name,
            snapshot.metadata.symbol,
            snapshot.metadata.decimals,
        )?;

        let mut balances = snapshot.balances;
        balances.retain(|_, balance| !balance.is_zero());

        // a sum past U256::MAX cannot match any total supply either
        match sum_balances(&balances) {
            Ok(sum) if sum == snapshot.total_supply => {}
            _ => return Err(LedgerError::ConservationViolated),
        }

        Ok(Self {
            metadata,
            total_supply: snapshot.total_supply,
            balances,
        })
    }
}

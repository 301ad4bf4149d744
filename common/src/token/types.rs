use serde::{Deserialize, Serialize};

use crate::{
    config::{MAX_DECIMALS, TOKEN_DECIMALS, TOKEN_NAME, TOKEN_SYMBOL},
    error::LedgerError,
};

/// Immutable descriptor of a token
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Token name
    pub name: String,
    /// Token symbol/ticker
    pub symbol: String,
    /// Decimal places used for display (0-18)
    pub decimals: u8,
}

impl TokenMetadata {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        decimals: u8,
    ) -> Result<Self, LedgerError> {
        if decimals > MAX_DECIMALS {
            return Err(LedgerError::DecimalsTooHigh(decimals));
        }

        Ok(Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals,
        })
    }
}

impl Default for TokenMetadata {
    fn default() -> Self {
        Self {
            name: TOKEN_NAME.to_owned(),
            symbol: TOKEN_SYMBOL.to_owned(),
            decimals: TOKEN_DECIMALS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_metadata() {
        let metadata = TokenMetadata::default();
        assert_eq!(metadata.name, "MyToken");
        assert_eq!(metadata.symbol, "MTK");
        assert_eq!(metadata.decimals, 18);
    }

    #[test]
    fn test_decimals_bound() {
        assert!(TokenMetadata::new("A", "A", 18).is_ok());
        assert_eq!(
            TokenMetadata::new("A", "A", 19),
            Err(LedgerError::DecimalsTooHigh(19))
        );
    }
}

use std::{fmt, str::FromStr};

use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::LedgerError;

pub const ACCOUNT_ID_SIZE: usize = 32;

/// Opaque identity of a ledger participant.
///
/// The ledger never interprets the bytes: two accounts are the same
/// account iff their bytes are equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId([u8; ACCOUNT_ID_SIZE]);

impl AccountId {
    pub const fn new(bytes: [u8; ACCOUNT_ID_SIZE]) -> Self {
        Self(bytes)
    }

    pub const fn zero() -> Self {
        Self([0u8; ACCOUNT_ID_SIZE])
    }

    pub fn as_bytes(&self) -> &[u8; ACCOUNT_ID_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(value: &str) -> Result<Self, LedgerError> {
        let value = value.strip_prefix("0x").unwrap_or(value);
        let bytes = hex::decode(value).map_err(|e| LedgerError::InvalidAccount(e.to_string()))?;
        let bytes: [u8; ACCOUNT_ID_SIZE] = bytes.try_into().map_err(|v: Vec<u8>| {
            LedgerError::InvalidAccount(format!(
                "expected {} bytes, got {}",
                ACCOUNT_ID_SIZE,
                v.len()
            ))
        })?;
        Ok(Self(bytes))
    }
}

impl FromStr for AccountId {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", self.to_hex())
    }
}

impl Serialize for AccountId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'a> Deserialize<'a> for AccountId {
    fn deserialize<D: Deserializer<'a>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(D::Error::custom)
    }
}

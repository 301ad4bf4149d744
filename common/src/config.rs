use primitive_types::U256;

pub const VERSION: &str = env!("BUILD_VERSION");

// Default token deployed by the harness
pub const TOKEN_NAME: &str = "MyToken";
pub const TOKEN_SYMBOL: &str = "MTK";

// 18 decimals, so one whole token is 10^18 base units
pub const TOKEN_DECIMALS: u8 = 18;

// Maximum decimals for a token
pub const MAX_DECIMALS: u8 = 18;

// Supply minted to the owner at deployment, in whole tokens
pub const INITIAL_SUPPLY_UNITS: u64 = 1_000_000;

/// Base units in one whole token for the given decimals
pub fn coin_value(decimals: u8) -> U256 {
    U256::exp10(decimals as usize)
}

/// Default initial supply in base units (1,000,000 MTK)
pub fn initial_supply() -> U256 {
    U256::from(INITIAL_SUPPLY_UNITS) * coin_value(TOKEN_DECIMALS)
}

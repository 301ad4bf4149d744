//! Conversions between decimal token strings and base units.

use primitive_types::U256;

use crate::{
    config::{coin_value, MAX_DECIMALS},
    error::LedgerError,
};

fn check_decimals(decimals: u8) -> Result<(), LedgerError> {
    if decimals > MAX_DECIMALS {
        return Err(LedgerError::DecimalsTooHigh(decimals));
    }
    Ok(())
}

/// Parse a decimal string such as "50" or "0.25" into base units.
pub fn parse_units(text: &str, decimals: u8) -> Result<U256, LedgerError> {
    check_decimals(decimals)?;
    let text = text.trim();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (text, ""),
    };

    if integer.is_empty() && fraction.is_empty() {
        return Err(LedgerError::InvalidAmount(format!("'{}' is empty", text)));
    }

    if !integer.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return Err(LedgerError::InvalidAmount(format!(
            "'{}' is not a decimal number",
            text
        )));
    }

    if fraction.len() > decimals as usize {
        return Err(LedgerError::InvalidAmount(format!(
            "'{}' has more than {} fractional digits",
            text, decimals
        )));
    }

    let overflow = || LedgerError::InvalidAmount(format!("'{}' does not fit in 256 bits", text));

    let integer = if integer.is_empty() {
        U256::zero()
    } else {
        U256::from_dec_str(integer).map_err(|_| overflow())?
    };
    let fraction = if fraction.is_empty() {
        U256::zero()
    } else {
        U256::from_dec_str(fraction).map_err(|_| overflow())?
            * U256::exp10(decimals as usize - fraction.len())
    };

    integer
        .checked_mul(coin_value(decimals))
        .and_then(|v| v.checked_add(fraction))
        .ok_or_else(overflow)
}

/// Format base units as a decimal string, keeping at least one fractional digit.
pub fn format_units(value: U256, decimals: u8) -> Result<String, LedgerError> {
    check_decimals(decimals)?;
    let unit = coin_value(decimals);
    let integer = value / unit;
    let fraction = value % unit;

    if fraction.is_zero() {
        return Ok(format!("{}.0", integer));
    }

    let digits = format!("{:0>width$}", fraction.to_string(), width = decimals as usize);
    Ok(format!("{}.{}", integer, digits.trim_end_matches('0')))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ether(n: u64) -> U256 {
        U256::from(n) * U256::exp10(18)
    }

    #[test]
    fn test_parse_whole_tokens() {
        assert_eq!(parse_units("50", 18).unwrap(), ether(50));
        assert_eq!(parse_units(" 1000000 ", 18).unwrap(), ether(1_000_000));
    }

    #[test]
    fn test_parse_fraction() {
        assert_eq!(
            parse_units("0.5", 18).unwrap(),
            U256::from(5u64) * U256::exp10(17)
        );
        assert_eq!(parse_units(".25", 2).unwrap(), U256::from(25u64));
        assert_eq!(parse_units("1.", 2).unwrap(), U256::from(100u64));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_units("", 18).is_err());
        assert!(parse_units(".", 18).is_err());
        assert!(parse_units("1.2.3", 18).is_err());
        assert!(parse_units("-5", 18).is_err());
        assert!(parse_units("0x10", 18).is_err());
    }

    #[test]
    fn test_parse_rejects_extra_precision() {
        assert!(parse_units("1.234", 2).is_err());
        assert!(parse_units("1.5", 0).is_err());
    }

    #[test]
    fn test_parse_rejects_overflow() {
        let max = U256::MAX.to_string();
        assert_eq!(parse_units(&max, 0).unwrap(), U256::MAX);
        assert!(parse_units(&max, 1).is_err());
    }

    #[test]
    fn test_parse_rejects_decimals_above_max() {
        assert_eq!(
            parse_units("1", 19).unwrap_err(),
            LedgerError::DecimalsTooHigh(19)
        );
    }

    #[test]
    fn test_format() {
        let format = |value, decimals| format_units(value, decimals).unwrap();
        assert_eq!(format(ether(50), 18), "50.0");
        assert_eq!(format(ether(1_000_000), 18), "1000000.0");
        assert_eq!(format(U256::from(5u64) * U256::exp10(17), 18), "0.5");
        assert_eq!(format(U256::from(1u64), 18), "0.000000000000000001");
        assert_eq!(format(U256::from(42u64), 0), "42.0");
        assert_eq!(format(U256::zero(), 18), "0.0");
        assert!(format_units(U256::one(), 200).is_err());
    }
}

//! Parsing of caller-supplied values and calldata.

use alloy_primitives::{Bytes, U256};

use crate::errors::EncodeError;

/// Parse a native value given as a decimal string or a `0x`-prefixed hex string.
///
/// Values above `2^256 - 1` are rejected, never truncated.
pub fn parse_value(input: &str) -> Result<U256, EncodeError> {
    let s = input.trim();
    let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex_digits) => (hex_digits, 16),
        None => (s, 10),
    };
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Err(EncodeError::ValueOutOfRange(input.to_string()));
    }
    U256::from_str_radix(digits, radix).map_err(|_| EncodeError::ValueOutOfRange(input.to_string()))
}

/// Parse hex calldata. `""` and `"0x"` are both empty.
pub fn parse_data(input: &str) -> Result<Bytes, EncodeError> {
    let s = input.trim();
    let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
    hex::decode(digits)
        .map(Bytes::from)
        .map_err(|e| EncodeError::InvalidData(format!("{input}: {e}")))
}

#[cfg(test)]
mod tests {
    use alloy_primitives::U256;

    use super::*;

    #[test]
    fn test_parse_value_decimal_and_hex() {
        assert_eq!(parse_value("10000000000000"), Ok(U256::from(10_000_000_000_000u64)));
        assert_eq!(parse_value("0x9184e72a000"), Ok(U256::from(10_000_000_000_000u64)));
        assert_eq!(parse_value("0"), Ok(U256::ZERO));
    }

    #[test]
    fn test_parse_value_bounds() {
        let max = format!("0x{}", "f".repeat(64));
        assert_eq!(parse_value(&max), Ok(U256::MAX));

        let too_big = format!("0x1{}", "0".repeat(64));
        assert!(matches!(parse_value(&too_big), Err(EncodeError::ValueOutOfRange(_))));
        // 2^256
        let too_big_dec =
            "115792089237316195423570985008687907853269984665640564039457584007913129639936";
        assert!(matches!(parse_value(too_big_dec), Err(EncodeError::ValueOutOfRange(_))));
    }

    #[test]
    fn test_parse_value_rejects_garbage() {
        for bad in ["", "0x", "-1", "1.5", "abc"] {
            assert!(parse_value(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_parse_data() {
        assert!(parse_data("0x").unwrap().is_empty());
        assert!(parse_data("").unwrap().is_empty());
        assert_eq!(parse_data("0xa9059cbb").unwrap().as_ref(), &[0xa9, 0x05, 0x9c, 0xbb]);
        assert!(matches!(parse_data("0xabc"), Err(EncodeError::InvalidData(_))));
    }
}

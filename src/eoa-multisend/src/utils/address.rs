//! Address parsing and EIP-55 presentation.

use alloy_primitives::Address;

use crate::errors::EncodeError;

/// Parse a 20-byte address from hex, with or without `0x`.
///
/// All-lowercase and all-uppercase input is accepted as-is; mixed case must be a valid
/// EIP-55 checksum.
pub fn parse_address(input: &str) -> Result<Address, EncodeError> {
    let s = input.trim();
    let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
    let invalid = || EncodeError::InvalidAddress(input.to_string());

    let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Address::parse_checksummed(format!("0x{digits}"), None).map_err(|_| invalid());
    }

    let raw = hex::decode(digits).map_err(|_| invalid())?;
    if raw.len() != 20 {
        return Err(invalid());
    }
    Ok(Address::from_slice(&raw))
}

/// Canonical mixed-case form of `address`. Presentation only.
pub fn checksum(address: &Address) -> String {
    address.to_checksum(None)
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::*;

    #[test]
    fn test_parse_address_forms() {
        let expected = address!("Da51eBfBb740D2183e91FAf762666B169A1A9a62");
        assert_eq!(parse_address("0xDa51eBfBb740D2183e91FAf762666B169A1A9a62"), Ok(expected));
        assert_eq!(parse_address("0xda51ebfbb740d2183e91faf762666b169a1a9a62"), Ok(expected));
        assert_eq!(parse_address("da51ebfbb740d2183e91faf762666b169a1a9a62"), Ok(expected));
    }

    #[test]
    fn test_parse_address_rejects_bad_checksum() {
        // last letter case flipped
        assert!(parse_address("0xDa51eBfBb740D2183e91FAf762666B169A1A9A62").is_err());
    }

    #[test]
    fn test_parse_address_rejects_wrong_length() {
        assert!(parse_address("0x1111").is_err());
        assert!(parse_address(&format!("0x{}", "11".repeat(21))).is_err());
    }

    #[test]
    fn test_checksum() {
        let addr = address!("da51ebfbb740d2183e91faf762666b169a1a9a62");
        assert_eq!(checksum(&addr), "0xDa51eBfBb740D2183e91FAf762666B169A1A9a62");
        assert_eq!(checksum(&Address::ZERO), "0x0000000000000000000000000000000000000000");
    }
}

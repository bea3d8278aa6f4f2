//! Bounds-checked big-endian readers over a flat byte slice.
//!
//! Each reader advances the cursor `i` only on success.

use alloy_primitives::{Address, U256};

use eoa_multisend_types::{ADDRESS_LEN, WORD_LEN};

use crate::errors::DecodeError;

/// Fails with [`DecodeError::Truncated`] unless `len` bytes remain at `i`.
pub fn ensure_remaining(bytes: &[u8], i: usize, len: usize) -> Result<(), DecodeError> {
    let available = bytes.len().saturating_sub(i);
    if available < len {
        return Err(DecodeError::Truncated { offset: i, needed: len, available });
    }
    Ok(())
}

pub fn read_slice<'a>(bytes: &'a [u8], i: &mut usize, len: usize) -> Result<&'a [u8], DecodeError> {
    ensure_remaining(bytes, *i, len)?;
    let out = &bytes[*i..*i + len];
    *i += len;
    Ok(out)
}

pub fn read_u8(bytes: &[u8], i: &mut usize) -> Result<u8, DecodeError> {
    let b = read_slice(bytes, i, 1)?;
    Ok(b[0])
}

pub fn read_address(bytes: &[u8], i: &mut usize) -> Result<Address, DecodeError> {
    let raw = read_slice(bytes, i, ADDRESS_LEN)?;
    Ok(Address::from_slice(raw))
}

pub fn read_u256(bytes: &[u8], i: &mut usize) -> Result<U256, DecodeError> {
    let word = read_slice(bytes, i, WORD_LEN)?;
    Ok(U256::from_be_slice(word))
}

#[cfg(test)]
mod tests {
    use alloy_primitives::U256;

    use super::*;

    #[test]
    fn test_read_advances_cursor() {
        let mut bytes = [0u8; 33];
        bytes[0] = 0x01;
        bytes[32] = 0x2a;
        let mut i = 0usize;
        assert_eq!(read_u8(&bytes, &mut i), Ok(1));
        assert_eq!(read_u256(&bytes, &mut i), Ok(U256::from(0x2au64)));
        assert_eq!(i, 33);
    }

    #[test]
    fn test_read_past_end_keeps_cursor() {
        let bytes = [0u8; 10];
        let mut i = 4usize;
        assert_eq!(
            read_address(&bytes, &mut i),
            Err(DecodeError::Truncated { offset: 4, needed: 20, available: 6 })
        );
        assert_eq!(i, 4);
    }
}

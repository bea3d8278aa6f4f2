use alloy_primitives::FixedBytes;
use thiserror::Error;

/// Errors while parsing a packed multisend blob.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Operation byte other than `Call` (0) or `DelegateCall` (1).
    #[error("unknown operation {operation:#04x} at offset {offset}")]
    UnknownOperation { offset: usize, operation: u8 },
    /// Entry header or declared data runs past the end of the blob.
    #[error("truncated or corrupt entry at offset {offset}: need {needed} bytes, {available} available")]
    Truncated { offset: usize, needed: usize, available: usize },
    /// Declared data length does not fit in the address space.
    #[error("data length at offset {offset} overflows")]
    DataLengthOverflow { offset: usize },
}

/// Errors while unwrapping function calldata.
#[derive(Debug, Error)]
pub enum CallDataError {
    /// Calldata shorter than a 4-byte selector.
    #[error("calldata too short for a function selector ({len} bytes)")]
    TooShort { len: usize },
    /// Leading selector does not match the expected function.
    #[error("unexpected function selector {found}, expected {expected}")]
    UnexpectedSelector { expected: FixedBytes<4>, found: FixedBytes<4> },
    /// Argument encoding rejected by the ABI decoder.
    #[error(transparent)]
    Abi(#[from] alloy_sol_types::Error),
}

/// Errors while turning caller input into call records or calldata.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Value is not a non-negative integer below 2^256.
    #[error("value out of range: {0}")]
    ValueOutOfRange(String),
    /// Address is not 20 hex-encoded bytes or fails its checksum.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    /// Calldata is not valid hex.
    #[error("invalid hex data: {0}")]
    InvalidData(String),
    /// The structured batch strategy only executes plain calls.
    #[error("call {index} is a delegatecall, which the batch executor cannot express")]
    DelegateCallUnsupported { index: usize },
}

/// Any failure surfaced by the codec.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    CallData(#[from] CallDataError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

//! Function-call wrapping of packed multisend blobs.
//!
//! Outbound payloads target `execute(bytes)` on the EOA multisend delegate; inbound payloads are
//! read from `multiSend(bytes)` calls. Both carry the blob as their single `bytes` argument.

pub mod constants;
pub mod interfaces;

use alloy_primitives::{Bytes, FixedBytes};
use alloy_sol_types::SolCall;
use tracing::debug;

use crate::errors::CallDataError;

pub use constants::{
    BATCH_CALLER_ADDRESS, EOA_MULTISEND_ADDRESS, EXECUTE_SIGNATURE, MULTI_SEND_SIGNATURE,
};
pub use interfaces::{IBatchCallAndSponsor, IEOAMultiSend, IMultiSend};

/// Wrap a packed blob as calldata for `execute(bytes)`.
pub fn wrap_execute(blob: &[u8]) -> Bytes {
    IEOAMultiSend::executeCall { calls: Bytes::copy_from_slice(blob) }.abi_encode().into()
}

/// Recover the packed blob from `multiSend(bytes)` calldata.
pub fn unwrap_multi_send(call_data: &[u8]) -> Result<Bytes, CallDataError> {
    let args = strip_selector(call_data, IMultiSend::multiSendCall::SELECTOR)?;
    let call = IMultiSend::multiSendCall::abi_decode_raw(args, true)?;
    Ok(call.transactions)
}

/// Recover the packed blob from `execute(bytes)` calldata, the inverse of [`wrap_execute`].
pub fn unwrap_execute(call_data: &[u8]) -> Result<Bytes, CallDataError> {
    let args = strip_selector(call_data, IEOAMultiSend::executeCall::SELECTOR)?;
    let call = IEOAMultiSend::executeCall::abi_decode_raw(args, true)?;
    Ok(call.calls)
}

/// Recover the packed blob from either `execute(bytes)` or `multiSend(bytes)` calldata.
pub fn unwrap_packed_calls(call_data: &[u8]) -> Result<Bytes, CallDataError> {
    if selector_of(call_data)?.0 == IEOAMultiSend::executeCall::SELECTOR {
        unwrap_execute(call_data)
    } else {
        unwrap_multi_send(call_data)
    }
}

/// Leading 4-byte function selector of `call_data`.
pub fn selector_of(call_data: &[u8]) -> Result<FixedBytes<4>, CallDataError> {
    call_data
        .get(..4)
        .map(FixedBytes::from_slice)
        .ok_or(CallDataError::TooShort { len: call_data.len() })
}

/// Check the selector and return the ABI-encoded arguments after it.
pub(crate) fn strip_selector(call_data: &[u8], expected: [u8; 4]) -> Result<&[u8], CallDataError> {
    let found = selector_of(call_data)?;
    if found.0 != expected {
        debug!(%found, expected = %FixedBytes(expected), "calldata selector mismatch");
        return Err(CallDataError::UnexpectedSelector { expected: FixedBytes(expected), found });
    }
    Ok(&call_data[4..])
}

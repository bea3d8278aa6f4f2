//! Packed multisend codec for batching EOA calls behind an EIP-7702 delegate.
//!
//! An EOA that temporarily runs a batching contract's code can execute many calls in one
//! transaction. Two delegate shapes are supported:
//! - the EOA multisend delegate, fed one packed blob through `execute(bytes)`
//!   ([`encode_multi`] / [`decode_multi`]);
//! - `BatchCallAndSponsor`, fed an ABI array of calls ([`batch`]).
//!
//! Everything here is a pure transformation over bytes. Building, signing and submitting
//! the transaction (and the authorisation itself) is left to the caller.

pub mod abi;
pub mod batch;
pub mod decoder;
pub mod encoder;
pub mod errors;
pub mod utils;


use alloy_primitives::Bytes;

pub use eoa_multisend_types::{MetaTransaction, Operation, PACKED_HEADER_LEN};

pub use crate::{
    abi::{unwrap_execute, unwrap_multi_send, unwrap_packed_calls, wrap_execute},
    batch::{decode_batch_execute, encode_batch_execute},
    decoder::{decode_multi_send, unpack},
    encoder::{encode_meta_tx, encode_multi_send},
    errors::{CallDataError, DecodeError, EncodeError, Error},
};

/// Pack `txs` and wrap them as `execute(bytes)` calldata for the EOA multisend delegate.
pub fn encode_multi(txs: &[MetaTransaction]) -> Bytes {
    wrap_execute(&encode_multi_send(txs))
}

/// Unwrap `multiSend(bytes)` calldata and decode the packed calls it carries.
pub fn decode_multi(call_data: &[u8]) -> Result<Vec<MetaTransaction>, Error> {
    let blob = unwrap_multi_send(call_data)?;
    Ok(decode_multi_send(&blob)?)
}

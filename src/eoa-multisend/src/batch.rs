//! Structured batching through `BatchCallAndSponsor.execute(Call[])`.
//!
//! Unlike the packed blob, each call travels as an ABI tuple and there is no operation tag:
//! the delegate can only `call`, so delegatecall records are refused.

use alloy_primitives::Bytes;
use alloy_sol_types::SolCall;
use tracing::trace;

use eoa_multisend_types::{MetaTransaction, Operation};

use crate::{
    abi::{strip_selector, IBatchCallAndSponsor},
    errors::{CallDataError, EncodeError},
};

/// Calldata for `BatchCallAndSponsor.execute(Call[])`.
pub fn encode_batch_execute(txs: &[MetaTransaction]) -> Result<Bytes, EncodeError> {
    let calls = txs
        .iter()
        .enumerate()
        .map(|(index, tx)| match tx.operation {
            Operation::Call => Ok(IBatchCallAndSponsor::Call {
                to: tx.to,
                value: tx.value,
                data: tx.data.clone(),
            }),
            Operation::DelegateCall => Err(EncodeError::DelegateCallUnsupported { index }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    trace!(calls = calls.len(), "encoding structured batch");
    Ok(IBatchCallAndSponsor::executeCall { calls }.abi_encode().into())
}

/// Decode `BatchCallAndSponsor.execute(Call[])` calldata into call records.
pub fn decode_batch_execute(call_data: &[u8]) -> Result<Vec<MetaTransaction>, CallDataError> {
    let args = strip_selector(call_data, IBatchCallAndSponsor::executeCall::SELECTOR)?;
    let call = IBatchCallAndSponsor::executeCall::abi_decode_raw(args, true)?;
    Ok(call
        .calls
        .into_iter()
        .map(|c| MetaTransaction::call(c.to, c.value, c.data))
        .collect())
}

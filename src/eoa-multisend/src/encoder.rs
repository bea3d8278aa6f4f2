use alloy_primitives::{Bytes, U256};
use tracing::trace;

use eoa_multisend_types::MetaTransaction;

/// Append one packed entry to `buf`.
///
/// Layout (big-endian, no padding between fields):
/// - `uint8` operation (`0` call, `1` delegatecall)
/// - `address` to (20 bytes)
/// - `uint256` value
/// - `uint256` data length
/// - `bytes` data
pub fn encode_meta_tx(tx: &MetaTransaction, buf: &mut Vec<u8>) {
    buf.push(tx.operation.as_u8());
    buf.extend_from_slice(tx.to.as_slice());
    buf.extend_from_slice(&tx.value.to_be_bytes::<32>());
    buf.extend_from_slice(&U256::from(tx.data.len()).to_be_bytes::<32>());
    buf.extend_from_slice(&tx.data);
}

/// Concatenate the packed entries of `txs` in order. No count prefix, no separators.
pub fn encode_multi_send(txs: &[MetaTransaction]) -> Bytes {
    let total: usize = txs.iter().map(MetaTransaction::packed_len).sum();
    let mut buf = Vec::with_capacity(total);
    for tx in txs {
        encode_meta_tx(tx, &mut buf);
    }
    trace!(calls = txs.len(), len = buf.len(), "encoded multisend blob");
    buf.into()
}

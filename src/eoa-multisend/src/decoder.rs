use alloy_primitives::Bytes;
use tracing::{debug, trace};

use eoa_multisend_types::{MetaTransaction, Operation, PACKED_HEADER_LEN};

use crate::{
    errors::DecodeError,
    utils::bytes::{ensure_remaining, read_address, read_slice, read_u256, read_u8},
};

/// Decode the packed entry starting at `offset`.
///
/// Returns the record and the offset just past its data. The declared data length is
/// checked against the blob, so a corrupt length fails instead of over-reading.
pub fn unpack(blob: &[u8], offset: usize) -> Result<(MetaTransaction, usize), DecodeError> {
    let mut i = offset;
    ensure_remaining(blob, i, PACKED_HEADER_LEN)?;

    let operation = read_u8(blob, &mut i)?;
    let operation = Operation::try_from(operation)
        .map_err(|_| DecodeError::UnknownOperation { offset, operation })?;
    let to = read_address(blob, &mut i)?;
    let value = read_u256(blob, &mut i)?;

    let len_offset = i;
    let data_len = read_u256(blob, &mut i)?;
    let data_len = usize::try_from(data_len)
        .map_err(|_| DecodeError::DataLengthOverflow { offset: len_offset })?;
    let data = Bytes::copy_from_slice(read_slice(blob, &mut i, data_len)?);

    Ok((MetaTransaction { operation, to, value, data }, i))
}

/// Decode a whole packed blob back into its calls, in order.
///
/// Stops exactly at the end of `blob`; an empty blob yields no calls.
pub fn decode_multi_send(blob: &[u8]) -> Result<Vec<MetaTransaction>, DecodeError> {
    let mut txs = Vec::new();
    let mut i = 0usize;

    while i < blob.len() {
        let (tx, next) = unpack(blob, i).inspect_err(|err| {
            debug!(%err, decoded = txs.len(), "rejecting multisend blob");
        })?;
        trace!(offset = i, next, operation = ?tx.operation, "decoded entry");
        txs.push(tx);
        i = next;
    }

    Ok(txs)
}

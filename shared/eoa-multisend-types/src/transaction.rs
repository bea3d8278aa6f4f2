use alloy_primitives::{Address, Bytes, U256};

use crate::operation::Operation;

/// Width of the operation tag.
pub const OPERATION_LEN: usize = 1;
/// Width of a raw destination address.
pub const ADDRESS_LEN: usize = 20;
/// Width of a big-endian `uint256` word (value and data length).
pub const WORD_LEN: usize = 32;
/// Fixed part of a packed entry: operation || to || value || data length.
pub const PACKED_HEADER_LEN: usize = OPERATION_LEN + ADDRESS_LEN + WORD_LEN + WORD_LEN;

/// A single call within a batch.
///
/// Records carry no identity beyond their position in the batch; order is execution order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MetaTransaction {
    /// Call or delegatecall at the destination.
    pub operation: Operation,
    /// Destination account.
    pub to: Address,
    /// Native value forwarded with the call (wei).
    pub value: U256,
    /// Calldata for the destination; may be empty.
    pub data: Bytes,
}

impl MetaTransaction {
    /// Plain `Call` record. This is the only form the tooling produces.
    pub fn call(to: Address, value: U256, data: impl Into<Bytes>) -> Self {
        Self { operation: Operation::Call, to, value, data: data.into() }
    }

    /// Number of bytes this record occupies once packed.
    pub fn packed_len(&self) -> usize {
        PACKED_HEADER_LEN + self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use alloy_primitives::{Address, U256};

    use super::{MetaTransaction, PACKED_HEADER_LEN};
    use crate::Operation;

    #[test]
    fn test_header_len() {
        assert_eq!(PACKED_HEADER_LEN, 85);
    }

    #[test]
    fn test_call_constructor() {
        let tx = MetaTransaction::call(Address::ZERO, U256::from(7u64), vec![0xdeu8, 0xad]);
        assert_eq!(tx.operation, Operation::Call);
        assert_eq!(tx.value, U256::from(7u64));
        assert_eq!(tx.packed_len(), 87);
    }
}

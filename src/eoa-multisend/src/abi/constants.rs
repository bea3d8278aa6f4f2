//! Fixed identifiers of the delegate contracts.

use alloy_primitives::{address, Address};

/// Signature of the packed-batch entrypoint on the EOA multisend delegate.
pub const EXECUTE_SIGNATURE: &str = "execute(bytes)";
/// Signature of the multisend entrypoint packed batches are read from.
pub const MULTI_SEND_SIGNATURE: &str = "multiSend(bytes)";

/// EOA multisend delegate (packed batches), Sepolia.
pub const EOA_MULTISEND_ADDRESS: Address = address!("Da51eBfBb740D2183e91FAf762666B169A1A9a62");
/// `BatchCallAndSponsor` delegate (structured batches), Sepolia.
pub const BATCH_CALLER_ADDRESS: Address = address!("862d8Fd8dc4979b1AA72E808E73773dD0AAC3211");

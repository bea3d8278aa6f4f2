//! Shared types for packed multisend batches: the call record and its operation tag.

#![no_std]

extern crate alloc;

pub mod operation;
pub mod transaction;

pub use operation::Operation;
pub use transaction::{
    MetaTransaction, ADDRESS_LEN, OPERATION_LEN, PACKED_HEADER_LEN, WORD_LEN,
};

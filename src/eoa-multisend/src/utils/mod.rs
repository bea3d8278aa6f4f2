//! Input parsing and byte-level helpers shared by the codec.

pub mod address;
pub mod bytes;
pub mod value;

pub use address::{checksum, parse_address};
pub use value::{parse_data, parse_value};

//! # Encoding Module
//!
//! The codec layers, leaves first:
//!
//! - **Varint encoding**: base-128 unsigned varints and zigzag signed varints
//! - **Scalar codecs**: strings, bools, floats, and fixed-width integers
//! - **Timestamp codec**: the fixed 15-byte wall-clock representation
//! - **Presence framing**: the [`Wire`] trait plus generic optional/sequence
//!   combinators

pub mod framing;
pub mod scalar;
pub mod timestamp;
pub mod varint;

pub use framing::{
    decode_optional, decode_sequence, encode_optional, encode_sequence, optional_max_len,
    sequence_max_len, Wire, PRESENCE_LEN,
};
pub use scalar::{
    decode_bool, decode_f64, decode_str, encode_bool, encode_f64, encode_str, str_len, BOOL_LEN,
};
pub use timestamp::{
    decode_timestamp, encode_timestamp, encode_timestamp_unrolled, TIMESTAMP_LEN,
};
pub use varint::{
    decode_ivarint, decode_uvarint, encode_ivarint, encode_uvarint, ivarint_len, uvarint_len,
    MAX_VARINT_LEN16, MAX_VARINT_LEN32, MAX_VARINT_LEN64, MAX_VARINT_LEN8,
};

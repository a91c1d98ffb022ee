//! # wirebin - Compact Schema-Bound Binary Record Codec
//!
//! `wirebin` serializes a fixed family of nested record types into a dense
//! binary form, built to measure serialization density and speed against
//! general-purpose formats. The format is schema-bound, not self-describing:
//! encoder and decoder agree on field order and types out of band, so the
//! wire carries payload bytes and nothing else.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Collection Codec (records::batch)  │
//! ├─────────────────────────────────────┤
//! │   Record Codecs (Record, SubRecord)  │
//! ├─────────────────────────────────────┤
//! │ Optional / Sequence Framing (Wire)   │
//! ├─────────────────────────────────────┤
//! │  Scalar + Timestamp Codecs           │
//! ├─────────────────────────────────────┤
//! │  Varint Codec (LEB128 + zigzag)      │
//! └─────────────────────────────────────┘
//! ```
//!
//! Encoding computes a conservative upper-bound size bottom-up, allocates
//! one destination buffer, writes top-down, and truncates to the bytes
//! actually written - the write pass never reallocates. Decoding walks a
//! byte cursor top-down; every step returns its consumed-byte count so the
//! caller can advance, and every length read from the wire is bounds-checked
//! before use. Malformed or truncated input is always a `Result` error,
//! never a panic or an out-of-range read.
//!
//! ## Quick Start
//!
//! ```ignore
//! use wirebin::{decode_records, encode_records, Record};
//!
//! let bytes = encode_records(Some(&records))?;
//! let (decoded, consumed) = decode_records(&bytes)?;
//! assert_eq!(consumed, bytes.len());
//! ```
//!
//! ## Concurrency
//!
//! Every operation is pure, synchronous, and allocation-local; there is no
//! shared state anywhere in the crate, so all calls are safe from
//! independent threads on independent inputs.
//!
//! ## Module Overview
//!
//! - [`encoding`]: varint, scalar, timestamp, and framing layers
//! - [`records`]: the record shapes and the top-level collection codec

pub mod encoding;
pub mod records;

pub use encoding::framing::Wire;
pub use records::{decode_records, encode_records, records_max_encoded_len, Record, SubRecord};

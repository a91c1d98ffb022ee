//! # Record Codecs
//!
//! The fixed record family this codec serializes, and its orchestration:
//!
//! ```text
//! collection (batch)            optional ordered sequence of Record
//!   └── Record                  scalars + Option<SubRecord> + Option<Vec<SubRecord>>
//!         └── SubRecord         scalars only, leaf
//! ```
//!
//! The format is schema-bound, not self-describing: both sides agree on
//! field order and types out of band, and every encoded length is fully
//! determined by walking the fields in declared order. Each shape
//! implements [`Wire`](crate::encoding::framing::Wire): a conservative
//! upper-bound size so the encode pass never reallocates, an
//! encode-into-slice pass, and a decode pass reporting consumed bytes.
//!
//! ## Module Structure
//!
//! - `sub`: the leaf shape, scalar fields only
//! - `record`: the nesting shape with optional sub-record and sequence
//! - `batch`: the top-level collection codec

pub mod batch;
pub mod record;
pub mod sub;


pub use batch::{decode_records, encode_records, records_max_encoded_len};
pub use record::Record;
pub use sub::SubRecord;

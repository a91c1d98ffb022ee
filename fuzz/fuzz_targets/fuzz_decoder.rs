//! Fuzz testing for the wire decoders.
//!
//! Feeds arbitrary byte sequences into the collection decoder and the leaf
//! decoders to ensure malformed input is always a recoverable error, never
//! a panic or an out-of-range read.

#![no_main]

use libfuzzer_sys::fuzz_target;

use wirebin::encoding::scalar::{decode_bool, decode_f64, decode_str};
use wirebin::encoding::timestamp::decode_timestamp;
use wirebin::encoding::varint::{decode_ivarint, decode_uvarint};
use wirebin::{decode_records, Record, SubRecord, Wire};

fuzz_target!(|data: &[u8]| {
    let _ = decode_records(data);
    let _ = Record::decode_from(data);
    let _ = SubRecord::decode_from(data);
    let _ = decode_uvarint(data);
    let _ = decode_ivarint(data);
    let _ = decode_str(data);
    let _ = decode_bool(data);
    let _ = decode_f64(data);
    let _ = decode_timestamp(data);
});

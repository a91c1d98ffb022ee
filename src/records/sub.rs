//! The leaf record shape: scalar fields only, no nesting.

use eyre::Result;
use time::OffsetDateTime;

use crate::encoding::framing::Wire;
use crate::encoding::scalar::{
    decode_bool, decode_str, encode_bool, encode_str, BOOL_LEN,
};
use crate::encoding::timestamp::{decode_timestamp, encode_timestamp, TIMESTAMP_LEN};
use crate::encoding::varint::{
    decode_ivarint, decode_uvarint, encode_ivarint, encode_uvarint, MAX_VARINT_LEN16,
    MAX_VARINT_LEN32, MAX_VARINT_LEN64, MAX_VARINT_LEN8,
};

/// Leaf record: the full scalar field set and nothing else.
///
/// Field order is the wire order; encode and decode both walk the fields
/// exactly as declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubRecord {
    pub text: String,
    pub flag: bool,
    pub signed: i64,
    pub signed16: i16,
    pub signed64: i64,
    pub unsigned: u64,
    pub unsigned8: u8,
    pub unsigned32: u32,
    pub timestamp: OffsetDateTime,
}

impl Wire for SubRecord {
    fn max_encoded_len(&self) -> usize {
        MAX_VARINT_LEN64 + self.text.len()  // text: worst-case length prefix + bytes
            + BOOL_LEN                      // flag
            + MAX_VARINT_LEN64              // signed
            + MAX_VARINT_LEN16              // signed16
            + MAX_VARINT_LEN64              // signed64
            + MAX_VARINT_LEN64              // unsigned
            + MAX_VARINT_LEN8               // unsigned8
            + MAX_VARINT_LEN32              // unsigned32
            + TIMESTAMP_LEN                 // timestamp
    }

    fn encode_into(&self, out: &mut [u8]) -> Result<usize> {
        let mut n = encode_str(&self.text, out);
        n += encode_bool(self.flag, &mut out[n..]);
        n += encode_ivarint(self.signed, &mut out[n..]);
        n += encode_ivarint(i64::from(self.signed16), &mut out[n..]);
        n += encode_ivarint(self.signed64, &mut out[n..]);
        n += encode_uvarint(self.unsigned, &mut out[n..]);
        n += encode_uvarint(u64::from(self.unsigned8), &mut out[n..]);
        n += encode_uvarint(u64::from(self.unsigned32), &mut out[n..]);
        n += encode_timestamp(self.timestamp, &mut out[n..])?;
        Ok(n)
    }

    /// Narrow fields truncate: a wire value outside `i16`/`u8`/`u32` range
    /// keeps only its low bits, matching the encode-side extension.
    fn decode_from(input: &[u8]) -> Result<(Self, usize)> {
        let (text, mut n) = decode_str(input)?;
        let (flag, consumed) = decode_bool(&input[n..])?;
        n += consumed;
        let (signed, consumed) = decode_ivarint(&input[n..])?;
        n += consumed;
        let (signed16, consumed) = decode_ivarint(&input[n..])?;
        n += consumed;
        let (signed64, consumed) = decode_ivarint(&input[n..])?;
        n += consumed;
        let (unsigned, consumed) = decode_uvarint(&input[n..])?;
        n += consumed;
        let (unsigned8, consumed) = decode_uvarint(&input[n..])?;
        n += consumed;
        let (unsigned32, consumed) = decode_uvarint(&input[n..])?;
        n += consumed;
        let (timestamp, consumed) = decode_timestamp(&input[n..])?;
        n += consumed;

        Ok((
            SubRecord {
                text,
                flag,
                signed,
                signed16: signed16 as i16,
                signed64,
                unsigned,
                unsigned8: unsigned8 as u8,
                unsigned32: unsigned32 as u32,
                timestamp,
            },
            n,
        ))
    }
}

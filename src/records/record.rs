//! The nesting record shape: scalars plus an optional sub-record and an
//! optional sequence of sub-records.

use eyre::Result;
use time::OffsetDateTime;

use crate::encoding::framing::{
    decode_optional, decode_sequence, encode_optional, encode_sequence, optional_max_len,
    sequence_max_len, Wire,
};
use crate::encoding::scalar::{
    decode_bool, decode_str, encode_bool, encode_str, BOOL_LEN,
};
use crate::encoding::timestamp::{decode_timestamp, encode_timestamp, TIMESTAMP_LEN};
use crate::encoding::varint::{
    decode_ivarint, decode_uvarint, encode_ivarint, encode_uvarint, MAX_VARINT_LEN16,
    MAX_VARINT_LEN32, MAX_VARINT_LEN64, MAX_VARINT_LEN8,
};
use crate::records::sub::SubRecord;

/// Outer record: the scalar field set, one optional nested [`SubRecord`],
/// and one optional ordered sequence of them.
///
/// `sub` and `subs` make the presence discriminant explicit in the type:
/// `None` is absent on the wire, `Some` is present, and for `subs` a
/// `Some(vec![])` is "present but empty", a third distinct wire state.
/// Nesting stops at the sub-record, so recursion depth is bounded at two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub text: String,
    pub flag: bool,
    pub signed: i64,
    pub signed16: i16,
    pub signed64: i64,
    pub unsigned: u64,
    pub unsigned8: u8,
    pub unsigned32: u32,
    pub timestamp: OffsetDateTime,
    pub sub: Option<SubRecord>,
    pub subs: Option<Vec<SubRecord>>,
}

impl Wire for Record {
    fn max_encoded_len(&self) -> usize {
        MAX_VARINT_LEN64 + self.text.len()
            + BOOL_LEN
            + MAX_VARINT_LEN64
            + MAX_VARINT_LEN16
            + MAX_VARINT_LEN64
            + MAX_VARINT_LEN64
            + MAX_VARINT_LEN8
            + MAX_VARINT_LEN32
            + TIMESTAMP_LEN
            + optional_max_len(self.sub.as_ref())
            + sequence_max_len(self.subs.as_deref())
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
        n += encode_optional(self.sub.as_ref(), &mut out[n..])?;
        n += encode_sequence(self.subs.as_deref(), &mut out[n..])?;
        Ok(n)
    }

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
        let (sub, consumed) = decode_optional(&input[n..])?;
        n += consumed;
        let (subs, consumed) = decode_sequence(&input[n..])?;
        n += consumed;

        Ok((
            Record {
                text,
                flag,
                signed,
                signed16: signed16 as i16,
                signed64,
                unsigned,
                unsigned8: unsigned8 as u8,
                unsigned32: unsigned32 as u32,
                timestamp,
                sub,
                subs,
            },
            n,
        ))
    }
}

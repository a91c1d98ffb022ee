//! # Presence Framing
//!
//! Generic combinators for nullable values and nullable sequences, shared by
//! every record shape instead of being restated field by field.
//!
//! ## Wire Format
//!
//! | State                  | Bytes                                        |
//! |------------------------|----------------------------------------------|
//! | absent optional        | `00`                                         |
//! | present optional       | `01`, then the payload's own encoding        |
//! | absent sequence        | `00`                                         |
//! | present sequence       | `01`, ivarint element count, then elements   |
//!
//! The single presence byte distinguishes "absent" from "present"; a present
//! sequence carries its count, so "present but empty" (`01 00`) stays
//! distinct from both "absent" (`00`) and a one-element sequence.
//!
//! Decoders read the presence indicator as a varint, mirroring the encoders'
//! 0/1 uvarint, and propagate the payload decoder's consumed-byte count. The
//! first element failure in a sequence aborts the whole decode.

use eyre::{ensure, Result};

use crate::encoding::varint::{
    decode_ivarint, decode_uvarint, encode_ivarint, encode_uvarint, MAX_VARINT_LEN64,
};

/// Encoded width of a presence indicator.
pub const PRESENCE_LEN: usize = 1;

/// A value with a deterministic wire form.
///
/// Implementors promise that [`encode_into`](Wire::encode_into) never writes
/// more than [`max_encoded_len`](Wire::max_encoded_len) bytes, so callers can
/// presize a destination buffer once and never reallocate during the write
/// pass.
pub trait Wire: Sized {
    /// Conservative upper bound on the encoded size of `self`.
    ///
    /// Charges each integer field its worst-case varint width rather than its
    /// actual width; the bound is cheap to compute and always sufficient.
    fn max_encoded_len(&self) -> usize;

    /// Encodes `self` into the front of `out`, returning the bytes written.
    ///
    /// `out` must hold at least [`max_encoded_len`](Wire::max_encoded_len)
    /// bytes.
    fn encode_into(&self, out: &mut [u8]) -> Result<usize>;

    /// Decodes a value from the front of `input`, returning it with the
    /// exact number of bytes consumed so the caller can advance its cursor.
    fn decode_from(input: &[u8]) -> Result<(Self, usize)>;

    /// Encodes `self` into a freshly allocated buffer, sized once from the
    /// upper bound and truncated to the bytes actually written.
    fn encode(&self) -> Result<Vec<u8>> {
        let mut out = vec![0u8; self.max_encoded_len()];
        let n = self.encode_into(&mut out)?;
        out.truncate(n);
        Ok(out)
    }
}

/// Upper bound for an optional value: presence byte plus the payload bound.
pub fn optional_max_len<T: Wire>(value: Option<&T>) -> usize {
    PRESENCE_LEN + value.map_or(0, Wire::max_encoded_len)
}

/// Encodes an optional value, returning the bytes written.
pub fn encode_optional<T: Wire>(value: Option<&T>, out: &mut [u8]) -> Result<usize> {
    match value {
        None => Ok(encode_uvarint(0, out)),
        Some(payload) => {
            let mut n = encode_uvarint(1, out);
            n += payload.encode_into(&mut out[n..])?;
            Ok(n)
        }
    }
}

/// Decodes an optional value, returning it with the bytes consumed.
pub fn decode_optional<T: Wire>(input: &[u8]) -> Result<(Option<T>, usize)> {
    let (present, mut n) = decode_uvarint(input)?;
    if present == 0 {
        return Ok((None, n));
    }
    let (value, consumed) = T::decode_from(&input[n..])?;
    n += consumed;
    Ok((Some(value), n))
}

/// Upper bound for an optional sequence: presence byte, worst-case count
/// width, and every element's own bound.
pub fn sequence_max_len<T: Wire>(items: Option<&[T]>) -> usize {
    match items {
        None => PRESENCE_LEN,
        Some(items) => {
            PRESENCE_LEN
                + MAX_VARINT_LEN64
                + items.iter().map(Wire::max_encoded_len).sum::<usize>()
        }
    }
}

/// Encodes an optional sequence, returning the bytes written.
pub fn encode_sequence<T: Wire>(items: Option<&[T]>, out: &mut [u8]) -> Result<usize> {
    let items = match items {
        None => return Ok(encode_uvarint(0, out)),
        Some(items) => items,
    };
    let mut n = encode_uvarint(1, out);
    n += encode_ivarint(items.len() as i64, &mut out[n..]);
    for item in items {
        n += item.encode_into(&mut out[n..])?;
    }
    Ok(n)
}

/// Decodes an optional sequence, returning it with the bytes consumed.
///
/// The output vector is allocated to exactly the decoded count. A negative
/// count, or one exceeding the remaining input (every element occupies at
/// least one byte), is rejected before any allocation.
pub fn decode_sequence<T: Wire>(input: &[u8]) -> Result<(Option<Vec<T>>, usize)> {
    let (present, mut n) = decode_uvarint(input)?;
    if present == 0 {
        return Ok((None, n));
    }

    let (count, consumed) = decode_ivarint(&input[n..])?;
    n += consumed;
    ensure!(count >= 0, "negative sequence count {count}");
    let remaining = input.len() - n;
    ensure!(
        count as u64 <= remaining as u64,
        "truncated sequence: count {count} exceeds {remaining} remaining bytes"
    );

    let count = count as usize;
    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        let (item, consumed) = T::decode_from(&input[n..])?;
        items.push(item);
        n += consumed;
    }
    Ok((Some(items), n))
}

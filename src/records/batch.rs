//! Top-level collection codec: the sequence framing applied over [`Record`],
//! the outermost unit exchanged over the wire.
//!
//! Encoding sizes the whole buffer bottom-up once (every record's upper
//! bound plus the framing overhead), writes top-down into that single
//! allocation, and truncates to the bytes actually written. Decoding
//! reports its consumed-byte count so a caller can decode a second value
//! immediately after in the same buffer.

use eyre::Result;

use crate::encoding::framing::{decode_sequence, encode_sequence, sequence_max_len};
use crate::records::record::Record;

/// Conservative upper bound on the encoded size of a collection.
///
/// An absent collection still needs its one presence byte.
pub fn records_max_encoded_len(records: Option<&[Record]>) -> usize {
    sequence_max_len(records)
}

/// Encodes a collection into a freshly allocated buffer.
///
/// An absent collection encodes to the single byte `00`. Fails only on a
/// record with a malformed timestamp; no partial buffer is returned.
pub fn encode_records(records: Option<&[Record]>) -> Result<Vec<u8>> {
    let mut out = vec![0u8; records_max_encoded_len(records)];
    let n = encode_sequence(records, &mut out)?;
    out.truncate(n);
    Ok(out)
}

/// Decodes a collection from the front of `input`, returning it with the
/// exact number of bytes consumed.
pub fn decode_records(input: &[u8]) -> Result<(Option<Vec<Record>>, usize)> {
    decode_sequence(input)
}

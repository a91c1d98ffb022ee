//! # Scalar Codecs
//!
//! Wire forms for the scalar field kinds that appear in records, all built on
//! the varint layer:
//!
//! | Field kind   | Wire form                                        |
//! |--------------|--------------------------------------------------|
//! | string       | uvarint byte length, then raw UTF-8 bytes        |
//! | bool         | uvarint 0 or 1 (always exactly one byte)         |
//! | signed int   | zigzag varint of the sign-extended `i64`         |
//! | unsigned int | uvarint of the zero-extended `u64`               |
//! | f64          | uvarint of the IEEE-754 bit pattern (`to_bits`)  |
//!
//! Narrower integer fields travel as their 64-bit extension; decoding narrows
//! back with an `as` cast, so a wire value outside the target width silently
//! loses its high bits. Callers must not rely on round-tripping out-of-range
//! inputs.
//!
//! The float form is not portable across codecs: it is the bit pattern fed
//! through the varint packer, exact only for encode/decode pairs from this
//! crate.
//!
//! String lengths count bytes, not characters. The length read from the wire
//! is checked against the remaining input before the payload is sliced, and
//! the payload must be valid UTF-8.

use eyre::{ensure, Result};

use crate::encoding::varint::{decode_uvarint, encode_uvarint, uvarint_len};

/// Encoded width of a bool: a 0/1 uvarint is always one byte.
pub const BOOL_LEN: usize = 1;

/// Exact encoded width of `text`: length prefix plus payload bytes.
pub fn str_len(text: &str) -> usize {
    uvarint_len(text.len() as u64) + text.len()
}

/// Encodes `text` into `out`, returning the number of bytes written.
pub fn encode_str(text: &str, out: &mut [u8]) -> usize {
    let mut n = encode_uvarint(text.len() as u64, out);
    out[n..n + text.len()].copy_from_slice(text.as_bytes());
    n += text.len();
    n
}

/// Decodes a length-prefixed string from the front of `input`.
pub fn decode_str(input: &[u8]) -> Result<(String, usize)> {
    let (len, n) = decode_uvarint(input)?;
    let remaining = input.len() - n;
    ensure!(
        len <= remaining as u64,
        "truncated string: length {len} exceeds {remaining} remaining bytes"
    );
    let end = n + len as usize;
    let text = std::str::from_utf8(&input[n..end])?.to_owned();
    Ok((text, end))
}

/// Encodes `value` into `out` as a single 0/1 byte.
pub fn encode_bool(value: bool, out: &mut [u8]) -> usize {
    encode_uvarint(u64::from(value), out)
}

/// Decodes a bool from the front of `input`. Exactly 1 is true.
pub fn decode_bool(input: &[u8]) -> Result<(bool, usize)> {
    let (raw, n) = decode_uvarint(input)?;
    Ok((raw == 1, n))
}

/// Encodes `value` into `out` as a uvarint of its bit pattern.
pub fn encode_f64(value: f64, out: &mut [u8]) -> usize {
    encode_uvarint(value.to_bits(), out)
}

/// Decodes an f64 from the front of `input`.
pub fn decode_f64(input: &[u8]) -> Result<(f64, usize)> {
    let (bits, n) = decode_uvarint(input)?;
    Ok((f64::from_bits(bits), n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_str() {
        for text in ["", "a", "test_string", "日本語のテキスト"] {
            let mut buf = vec![0u8; str_len(text)];
            let written = encode_str(text, &mut buf);
            assert_eq!(written, str_len(text));
            let (decoded, consumed) = decode_str(&buf[..written]).unwrap();
            assert_eq!(decoded, text);
            assert_eq!(consumed, written);
        }
    }

    #[test]
    fn empty_str_is_single_byte() {
        let mut buf = [0u8; 1];
        assert_eq!(encode_str("", &mut buf), 1);
        assert_eq!(buf[0], 0);
    }

    #[test]
    fn decode_str_truncated_payload_fails() {
        let mut buf = [0u8; 16];
        let written = encode_str("hello world", &mut buf);
        for cut in 0..written {
            assert!(decode_str(&buf[..cut]).is_err(), "prefix {cut} should fail");
        }
    }

    #[test]
    fn decode_str_invalid_utf8_fails() {
        // Length 2, then a lone continuation byte pair.
        let buf = [0x02u8, 0xFF, 0xFE];
        assert!(decode_str(&buf).is_err());
    }

    #[test]
    fn decode_str_huge_length_fails() {
        // Claims u64::MAX bytes follow.
        let mut buf = [0u8; crate::encoding::varint::MAX_VARINT_LEN64];
        let n = encode_uvarint(u64::MAX, &mut buf);
        assert!(decode_str(&buf[..n]).is_err());
    }

    #[test]
    fn bool_wire_bytes() {
        let mut buf = [0xAAu8; 2];
        assert_eq!(encode_bool(true, &mut buf), BOOL_LEN);
        assert_eq!(buf[0], 0x01);
        assert_eq!(encode_bool(false, &mut buf), BOOL_LEN);
        assert_eq!(buf[0], 0x00);
    }

    #[test]
    fn roundtrip_bool() {
        for value in [true, false] {
            let mut buf = [0u8; BOOL_LEN];
            let written = encode_bool(value, &mut buf);
            let (decoded, consumed) = decode_bool(&buf[..written]).unwrap();
            assert_eq!(decoded, value);
            assert_eq!(consumed, written);
        }
    }

    #[test]
    fn roundtrip_f64() {
        for value in [
            0.0f64,
            -0.0,
            1234.5678,
            f64::MIN,
            f64::MAX,
            f64::MIN_POSITIVE,
            f64::INFINITY,
            f64::NEG_INFINITY,
        ] {
            let mut buf = [0u8; 10];
            let written = encode_f64(value, &mut buf);
            let (decoded, consumed) = decode_f64(&buf[..written]).unwrap();
            assert_eq!(decoded.to_bits(), value.to_bits());
            assert_eq!(consumed, written);
        }
    }

    #[test]
    fn f64_nan_roundtrips_by_bit_pattern() {
        let mut buf = [0u8; 10];
        let written = encode_f64(f64::NAN, &mut buf);
        let (decoded, _) = decode_f64(&buf[..written]).unwrap();
        assert!(decoded.is_nan());
        assert_eq!(decoded.to_bits(), f64::NAN.to_bits());
    }

    #[test]
    fn decode_f64_truncated_fails() {
        let mut buf = [0u8; 10];
        let written = encode_f64(1234.5678, &mut buf);
        assert!(decode_f64(&buf[..written - 1]).is_err());
    }
}

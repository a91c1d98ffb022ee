//! # Timestamp Codec
//!
//! Fixed 15-byte wall-clock representation. Timestamp fields are never
//! optional in this schema, so there is no presence byte.
//!
//! ## Wire Format
//!
//! | Bytes | Content                                                    |
//! |-------|------------------------------------------------------------|
//! | 0     | format version, must be 1                                  |
//! | 1-8   | seconds since 0001-01-01T00:00:00Z, big-endian `i64`       |
//! | 9-12  | nanosecond-of-second, big-endian `u32`                     |
//! | 13-14 | UTC offset in whole minutes, big-endian `i16`; -1 = UTC    |
//!
//! Two encode routines produce byte-identical output for the same logical
//! value: [`encode_timestamp`] assembles the layout from `to_be_bytes`
//! slices, [`encode_timestamp_unrolled`] writes every byte by hand with
//! shifts. Both are public so a calling layer can compare them bit-exactly;
//! the layouts are identical, so a single [`decode_timestamp`] suffices.
//!
//! Encoding validates the zone offset: a fractional-minute offset and an
//! offset outside the `i16` minute range (or colliding with the -1 UTC
//! sentinel) both abort the encode. Named-zone daylight-saving information
//! is not preserved; only the flat minute offset survives a round trip.
//! That approximation is part of the format, not a defect.

use eyre::{bail, ensure, Result};
use time::macros::datetime;
use time::{OffsetDateTime, UtcOffset};

/// Encoded width of a timestamp.
pub const TIMESTAMP_LEN: usize = 15;

const TIMESTAMP_VERSION: u8 = 1;

/// Offset-minutes sentinel marking a UTC timestamp.
const UTC_SENTINEL: i16 = -1;

/// Reference epoch the seconds field counts from.
const WIRE_EPOCH: OffsetDateTime = datetime!(0001-01-01 00:00 UTC);

/// Unix timestamp of [`WIRE_EPOCH`] (negative: the epoch predates 1970).
const EPOCH_UNIX_SECS: i64 = -62_135_596_800;

const NANOS_PER_SEC: i128 = 1_000_000_000;

/// Encodes `ts` into the first [`TIMESTAMP_LEN`] bytes of `out`.
///
/// Fails if the zone offset has a fractional minute or is not representable
/// in the wire form; on failure nothing useful is in `out`.
pub fn encode_timestamp(ts: OffsetDateTime, out: &mut [u8]) -> Result<usize> {
    let (sec, nsec, offset_min) = wire_fields(ts)?;
    out[0] = TIMESTAMP_VERSION;
    out[1..9].copy_from_slice(&sec.to_be_bytes());
    out[9..13].copy_from_slice(&nsec.to_be_bytes());
    out[13..15].copy_from_slice(&offset_min.to_be_bytes());
    Ok(TIMESTAMP_LEN)
}

/// Byte-for-byte equivalent of [`encode_timestamp`], assembled by hand with
/// shifts instead of `to_be_bytes`. Retained so callers can cross-check the
/// two writers bit-exactly.
pub fn encode_timestamp_unrolled(ts: OffsetDateTime, out: &mut [u8]) -> Result<usize> {
    let (sec, nsec, offset_min) = wire_fields(ts)?;
    out[0] = TIMESTAMP_VERSION;
    out[1] = (sec >> 56) as u8;
    out[2] = (sec >> 48) as u8;
    out[3] = (sec >> 40) as u8;
    out[4] = (sec >> 32) as u8;
    out[5] = (sec >> 24) as u8;
    out[6] = (sec >> 16) as u8;
    out[7] = (sec >> 8) as u8;
    out[8] = sec as u8;
    out[9] = (nsec >> 24) as u8;
    out[10] = (nsec >> 16) as u8;
    out[11] = (nsec >> 8) as u8;
    out[12] = nsec as u8;
    out[13] = (offset_min >> 8) as u8;
    out[14] = offset_min as u8;
    Ok(TIMESTAMP_LEN)
}

/// Decodes a timestamp from the front of `input`.
///
/// Fails on short input and on any version byte other than 1.
pub fn decode_timestamp(input: &[u8]) -> Result<(OffsetDateTime, usize)> {
    ensure!(
        input.len() >= TIMESTAMP_LEN,
        "truncated timestamp: need {TIMESTAMP_LEN} bytes, have {}",
        input.len()
    );
    let version = input[0];
    ensure!(
        version == TIMESTAMP_VERSION,
        "unsupported timestamp version {version}"
    );

    // INVARIANT: slice lengths validated by the ensure above.
    let sec = i64::from_be_bytes(input[1..9].try_into().unwrap());
    let nsec = u32::from_be_bytes(input[9..13].try_into().unwrap());
    let offset_min = i16::from_be_bytes(input[13..15].try_into().unwrap());

    let unix_nanos =
        (i128::from(sec) + i128::from(EPOCH_UNIX_SECS)) * NANOS_PER_SEC + i128::from(nsec);
    let mut ts = OffsetDateTime::from_unix_timestamp_nanos(unix_nanos)?;
    if offset_min != UTC_SENTINEL {
        let offset = UtcOffset::from_whole_seconds(i32::from(offset_min) * 60)?;
        ts = ts
            .checked_to_offset(offset)
            .ok_or_else(|| eyre::eyre!("timestamp out of range at offset {offset_min} minutes"))?;
    }
    Ok((ts, TIMESTAMP_LEN))
}

/// Validates the zone offset and splits `ts` into the three wire fields.
fn wire_fields(ts: OffsetDateTime) -> Result<(i64, u32, i16)> {
    let offset_min = if ts.offset() == UtcOffset::UTC {
        UTC_SENTINEL
    } else {
        let offset_secs = ts.offset().whole_seconds();
        if offset_secs % 60 != 0 {
            bail!("zone offset has fractional minute");
        }
        let minutes = offset_secs / 60;
        if minutes < i32::from(i16::MIN)
            || minutes > i32::from(i16::MAX)
            || minutes == i32::from(UTC_SENTINEL)
        {
            bail!("unsupported zone offset: {minutes} minutes");
        }
        minutes as i16
    };

    let unix_nanos = ts.unix_timestamp_nanos();
    let sec = unix_nanos.div_euclid(NANOS_PER_SEC) as i64 - EPOCH_UNIX_SECS;
    let nsec = unix_nanos.rem_euclid(NANOS_PER_SEC) as u32;
    Ok((sec, nsec, offset_min))
}

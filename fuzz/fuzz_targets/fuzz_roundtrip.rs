//! Fuzz testing for encode/decode round trips.
//!
//! Builds records from arbitrary field values and checks that every
//! successful encode decodes back to an equal value within the upper-bound
//! buffer, with the consumed count matching the encoded length.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use time::{OffsetDateTime, UtcOffset};
use wirebin::{Record, SubRecord, Wire};

#[derive(Debug, Arbitrary)]
struct FuzzTimestamp {
    unix_secs: i64,
    nanos: u32,
    offset_minutes: i16,
}

impl FuzzTimestamp {
    fn build(&self) -> Option<OffsetDateTime> {
        let ts = OffsetDateTime::from_unix_timestamp(self.unix_secs)
            .ok()?
            .checked_add(time::Duration::nanoseconds(i64::from(
                self.nanos % 1_000_000_000,
            )))?;
        // Stay on whole minutes and off the UTC sentinel, as the format requires.
        let minutes = i32::from(self.offset_minutes) % 1440;
        if minutes == -1 {
            return Some(ts);
        }
        let offset = UtcOffset::from_whole_seconds(minutes * 60).ok()?;
        ts.checked_to_offset(offset)
    }
}

#[derive(Debug, Arbitrary)]
struct FuzzSub {
    text: String,
    flag: bool,
    signed: i64,
    signed16: i16,
    signed64: i64,
    unsigned: u64,
    unsigned8: u8,
    unsigned32: u32,
    timestamp: FuzzTimestamp,
}

impl FuzzSub {
    fn build(&self) -> Option<SubRecord> {
        Some(SubRecord {
            text: self.text.clone(),
            flag: self.flag,
            signed: self.signed,
            signed16: self.signed16,
            signed64: self.signed64,
            unsigned: self.unsigned,
            unsigned8: self.unsigned8,
            unsigned32: self.unsigned32,
            timestamp: self.timestamp.build()?,
        })
    }
}

#[derive(Debug, Arbitrary)]
struct FuzzRecord {
    base: FuzzSub,
    sub: Option<FuzzSub>,
    subs: Option<Vec<FuzzSub>>,
}

impl FuzzRecord {
    fn build(&self) -> Option<Record> {
        let base = self.base.build()?;
        let sub = match &self.sub {
            None => None,
            Some(s) => Some(s.build()?),
        };
        let subs = match &self.subs {
            None => None,
            Some(items) => Some(items.iter().map(FuzzSub::build).collect::<Option<Vec<_>>>()?),
        };
        Some(Record {
            text: base.text,
            flag: base.flag,
            signed: base.signed,
            signed16: base.signed16,
            signed64: base.signed64,
            unsigned: base.unsigned,
            unsigned8: base.unsigned8,
            unsigned32: base.unsigned32,
            timestamp: base.timestamp,
            sub,
            subs,
        })
    }
}

fuzz_target!(|input: FuzzRecord| {
    let record = match input.build() {
        Some(record) => record,
        None => return,
    };

    let bytes = record.encode().expect("whole-minute offsets must encode");
    assert!(bytes.len() <= record.max_encoded_len());

    let (decoded, consumed) = Record::decode_from(&bytes).expect("own encoding must decode");
    assert_eq!(consumed, bytes.len());
    assert_eq!(decoded, record);
});

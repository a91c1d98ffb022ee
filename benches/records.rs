//! Record and collection benchmarks for wirebin
//!
//! These benchmarks measure the full encode/decode paths: upper-bound
//! sizing, single-record round trips, and whole collections at several
//! sizes. They are the numbers the cross-format comparison harness cares
//! about.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box as hint_black_box;
use time::macros::datetime;
use wirebin::{decode_records, encode_records, Record, SubRecord, Wire};

fn make_sub(tag: u64) -> SubRecord {
    SubRecord {
        text: format!("sub_record_{tag}"),
        flag: tag % 2 == 0,
        signed: tag as i64 - 500,
        signed16: (tag % 30_000) as i16,
        signed64: (tag as i64).wrapping_mul(1_000_000_007),
        unsigned: tag.wrapping_mul(0x9E37_79B9_7F4A_7C15),
        unsigned8: (tag % 256) as u8,
        unsigned32: (tag % 4_000_000_000) as u32,
        timestamp: datetime!(2024-05-20 10:00:00.123456789 UTC),
    }
}

fn make_record(tag: u64) -> Record {
    Record {
        text: format!("record_{tag}"),
        flag: tag % 2 == 1,
        signed: -(tag as i64),
        signed16: -1234,
        signed64: i64::MAX - tag as i64,
        unsigned: tag,
        unsigned8: 200,
        unsigned32: 3_000_000_000,
        timestamp: datetime!(2024-05-20 19:00:00 +09:00),
        sub: Some(make_sub(tag)),
        subs: Some((0..10).map(|i| make_sub(tag + i)).collect()),
    }
}

fn bench_record_sizing(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_sizing");

    let record = make_record(1);
    group.bench_function("max_encoded_len", |b| {
        b.iter(|| hint_black_box(black_box(&record).max_encoded_len()));
    });

    group.finish();
}

fn bench_record_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("record");

    let record = make_record(1);
    let encoded = record.encode().unwrap();
    group.throughput(Throughput::Bytes(encoded.len() as u64));

    group.bench_function("encode", |b| {
        let mut buf = vec![0u8; record.max_encoded_len()];
        b.iter(|| {
            let n = black_box(&record).encode_into(&mut buf).unwrap();
            hint_black_box(n)
        });
    });

    group.bench_function("decode", |b| {
        b.iter(|| {
            let result = Record::decode_from(black_box(&encoded)).unwrap();
            hint_black_box(result)
        });
    });

    group.finish();
}

fn bench_collection_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("collection");

    for size in [10usize, 100, 1000] {
        let records: Vec<Record> = (0..size as u64).map(make_record).collect();
        let encoded = encode_records(Some(&records)).unwrap();
        group.throughput(Throughput::Bytes(encoded.len() as u64));

        group.bench_with_input(BenchmarkId::new("encode", size), &records, |b, records| {
            b.iter(|| {
                let bytes = encode_records(Some(black_box(records))).unwrap();
                hint_black_box(bytes.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, encoded| {
            b.iter(|| {
                let result = decode_records(black_box(encoded)).unwrap();
                hint_black_box(result.1)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_record_sizing,
    bench_record_roundtrip,
    bench_collection_roundtrip
);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rtcm3::prelude::Message;

/// MSB first bit packer.
struct BitWriter {
    bits: Vec<bool>,
}

impl BitWriter {
    fn new() -> Self {
        Self { bits: Vec::new() }
    }
    fn push(&mut self, value: u64, width: usize) {
        for shift in (0..width).rev() {
            self.bits.push(value >> shift & 1 == 1);
        }
    }
    fn into_bytes(self) -> Vec<u8> {
        let mut bytes = vec![0_u8; (self.bits.len() + 7) / 8];
        for (index, bit) in self.bits.iter().enumerate() {
            if *bit {
                bytes[index / 8] |= 1 << (7 - index % 8);
            }
        }
        bytes
    }
}

/// Message 1005 payload
fn reference_station_payload() -> Vec<u8> {
    let mut w = BitWriter::new();
    w.push(1005, 12);
    w.push(1000, 12);
    w.push(0, 6);
    w.push(1, 1);
    w.push(1, 1);
    w.push(0, 1);
    w.push(0, 1);
    w.push(11_141_045_999, 38);
    w.push(0, 1);
    w.push(0, 1);
    w.push((-48_507_297_108_i64 as u64) & ((1 << 38) - 1), 38);
    w.push(2, 2);
    w.push(39_755_214_643, 38);
    w.into_bytes()
}

/// MSM7 payload: 4 satellites, 2 signals, all 8 cells active
fn msm7_payload() -> Vec<u8> {
    let mut w = BitWriter::new();
    w.push(1077, 12);
    w.push(1000, 12);
    w.push(345_600_000, 30);
    w.push(0, 1);
    w.push(0, 3);
    w.push(0, 7);
    w.push(0, 2);
    w.push(0, 2);
    w.push(0, 1);
    w.push(0, 3);
    w.push(0xF << 60, 64);
    w.push(0x3 << 30, 32);
    w.push(0xFF, 8);
    for sat in 0..4 {
        w.push(70 + sat, 8); // DF397
    }
    for _ in 0..4 {
        w.push(0, 4); // DF419
    }
    for sat in 0..4 {
        w.push(sat * 100, 10); // DF398
    }
    for sat in 0..4 {
        w.push(sat * 11, 14); // DF399
    }
    for cell in 0..8 {
        w.push(cell * 1000, 20); // DF405
    }
    for cell in 0..8 {
        w.push(cell * 2000, 24); // DF406
    }
    for cell in 0..8 {
        w.push(cell * 80, 10); // DF407
    }
    for cell in 0..8 {
        w.push(cell & 1, 1); // DF420
    }
    for cell in 0..8 {
        w.push(500 + cell, 10); // DF408
    }
    for cell in 0..8 {
        w.push(cell * 40, 15); // DF404
    }
    w.into_bytes()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let payload = reference_station_payload();
    c.bench_function("decoding-1005", |b| {
        b.iter(|| {
            black_box(Message::decode(&payload).unwrap());
        })
    });

    let payload = msm7_payload();
    c.bench_function("decoding-msm7", |b| {
        b.iter(|| {
            black_box(Message::decode(&payload).unwrap());
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use std::time::Duration;
use warlords_assets::{decode_pck_bytes, palette, pck, PckHeader};

/// Build a compressed stream that expands to `size` bytes, with a chosen
/// mix of literal runs and self-referential backreferences
fn generate_stream(size: usize, pattern: &str) -> Vec<u8> {
    let mut out = Vec::new();
    match pattern {
        "literal" => {
            // Incompressible: nothing but maximum-length literal runs
            let raw: Vec<u8> = (0..size).map(|i| ((i * 17 + 11) % 256) as u8).collect();
            for chunk in raw.chunks(0x80) {
                out.push((chunk.len() - 1) as u8);
                out.extend_from_slice(chunk);
            }
        }
        "repetitive" => {
            // One seed byte, then offset -1 backreferences expanding it
            out.extend_from_slice(&[0x00, 0x5A]);
            let mut produced = 1;
            while produced < size {
                let len = (size - produced).min(256);
                out.extend_from_slice(&[0xFF, 0xFF, (len - 1) as u8]);
                produced += len;
            }
        }
        "mixed" => {
            // Alternating 64-byte literal runs and -64 backreferences
            let raw: Vec<u8> = (0..64u8).collect();
            out.push(63);
            out.extend_from_slice(&raw);
            let mut produced = 64;
            while produced < size {
                out.extend_from_slice(&[0xFF, 0xC0, 63]);
                produced += 64;
            }
        }
        _ => panic!("Unknown pattern: {}", pattern),
    }
    out
}

fn header_for(size: usize) -> PckHeader {
    // Dimensions only feed the capacity hint; pick a plausible shape
    PckHeader {
        tag: 0,
        width: 320,
        height: (size / (40 * 4)) as u16,
    }
}

fn decompression_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompression_throughput");
    group.measurement_time(Duration::from_secs(10));

    for size in [8_000, 32_000, 320_000].iter() {
        for pattern in ["literal", "repetitive", "mixed"].iter() {
            let stream = generate_stream(*size, pattern);
            let header = header_for(*size);

            let benchmark_id = BenchmarkId::from_parameter(format!("{}B/{}", size, pattern));
            group.throughput(Throughput::Bytes(*size as u64));
            group.bench_with_input(benchmark_id, &stream, |b, data| {
                b.iter(|| {
                    pck::lzss::decompress(black_box(&header), black_box(data))
                        .expect("Decompression failed")
                });
            });
        }
    }

    group.finish();
}

fn full_pck_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pck_decode");
    group.measurement_time(Duration::from_secs(10));

    // A full 320x200 screen: 32000 plane bytes, the size of MAIN.PCK
    let mut file = vec![0x00, 0x00, 0x40, 0x01, 0xC8, 0x00];
    file.extend_from_slice(&generate_stream(32_000, "mixed"));

    group.throughput(Throughput::Bytes(32_000));
    group.bench_function("320x200_mixed", |b| {
        b.iter(|| {
            decode_pck_bytes(black_box(&file), &palette::GAME, Some(0))
                .expect("Decoding failed")
        });
    });

    group.finish();
}

criterion_group!(benches, decompression_throughput, full_pck_decode);
criterion_main!(benches);

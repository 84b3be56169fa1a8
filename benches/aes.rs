//! Benchmarks for the AES block cipher and CBC mode
//!
//! Covers key expansion for the three strengths, single-block
//! encryption/decryption, and CBC throughput over multi-block messages.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rijndael::{Aes, BlockCipher, Cbc, Key, KeyLength, Nonce};

/// Benchmark key expansion for all strengths
fn bench_key_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("aes_key_expansion");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for length in [KeyLength::Bits128, KeyLength::Bits192, KeyLength::Bits256] {
        let key = Key::random(&mut rng, length);
        group.bench_function(length.name(), |b| {
            b.iter(|| {
                let cipher = Aes::new(black_box(&key));
                black_box(cipher);
            });
        });
    }

    group.finish();
}

/// Benchmark single block encryption and decryption
fn bench_block_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("aes_block");
    group.throughput(Throughput::Bytes(16));
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for length in [KeyLength::Bits128, KeyLength::Bits192, KeyLength::Bits256] {
        let cipher = Aes::new(&Key::random(&mut rng, length));
        let mut block = [0u8; 16];
        rng.fill(&mut block);

        group.bench_function(BenchmarkId::new("encrypt", length.name()), |b| {
            b.iter(|| {
                let mut buf = black_box(block);
                cipher.encrypt_block(&mut buf).unwrap();
                black_box(buf);
            });
        });

        group.bench_function(BenchmarkId::new("decrypt", length.name()), |b| {
            b.iter(|| {
                let mut buf = black_box(block);
                cipher.decrypt_block(&mut buf).unwrap();
                black_box(buf);
            });
        });
    }

    group.finish();
}

/// Benchmark CBC mode over multi-block messages
fn bench_cbc(c: &mut Criterion) {
    let mut group = c.benchmark_group("aes_cbc");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for size in [256usize, 1024, 8192] {
        group.throughput(Throughput::Bytes(size as u64));
        let key = Key::random(&mut rng, KeyLength::Bits128);
        let iv = Nonce::<16>::random(&mut rng);
        let cbc = Cbc::new(Aes::new(&key), &iv).unwrap();

        let mut message = vec![0u8; size];
        rng.fill(&mut message[..]);

        group.bench_function(BenchmarkId::new("encrypt", size), |b| {
            b.iter(|| {
                let mut buf = message.clone();
                cbc.encrypt_in_place(&mut buf).unwrap();
                black_box(buf);
            });
        });

        let ciphertext = cbc.encrypt(&message).unwrap();
        group.bench_function(BenchmarkId::new("decrypt", size), |b| {
            b.iter(|| {
                let mut buf = ciphertext.clone();
                cbc.decrypt_in_place(&mut buf).unwrap();
                black_box(buf);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_key_expansion, bench_block_transform, bench_cbc);
criterion_main!(benches);

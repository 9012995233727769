//! # ML-01 Proof-of-Work Benchmarks
//!
//! - Digest throughput over realistic block content
//! - Full nonce search at increasing prefix lengths

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use ml_01_proof_of_work::{codec, FixedPrefix, ProofOfWork};
use rand::Rng;
use shared_types::{BlockContent, Transaction, GENESIS_HASH};
use std::sync::Arc;
use std::time::Duration;

fn random_content(tx_count: usize) -> BlockContent {
    let mut rng = rand::thread_rng();
    BlockContent {
        transactions: (0..tx_count)
            .map(|_| Transaction::new(rng.gen_range(1..10_000), "addrA", "addrB"))
            .collect(),
        number: 2,
    }
}

pub fn bench_hashing(c: &mut Criterion) {
    let mut group = c.benchmark_group("ml-01-hashing");

    for tx_count in [0usize, 10, 100] {
        let content = random_content(tx_count);
        let encoded = codec::encode_content(&content).expect("content encodes");

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::new("digest_per_nonce", tx_count),
            &encoded,
            |b, encoded| {
                let mut nonce = 0u64;
                b.iter(|| {
                    nonce = nonce.wrapping_add(1);
                    black_box(codec::digest(&codec::serialize_encoded(
                        GENESIS_HASH,
                        encoded,
                        nonce,
                    )))
                })
            },
        );
    }

    group.finish();
}

pub fn bench_seal(c: &mut Criterion) {
    let mut group = c.benchmark_group("ml-01-seal");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(20);

    let content = random_content(10);
    for prefix in ["0", "00", "000"] {
        let miner = ProofOfWork::new(Arc::new(FixedPrefix::new(prefix)));
        group.bench_with_input(BenchmarkId::new("seal", prefix), &content, |b, content| {
            b.iter(|| black_box(miner.seal(GENESIS_HASH, content)))
        });
    }

    group.finish();
}

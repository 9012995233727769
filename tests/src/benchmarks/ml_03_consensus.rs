//! # ML-03 Consensus Benchmarks
//!
//! - Whole-chain validation cost as the chain grows
//! - Resolution against many peer reports

use crate::fixtures::{easy_resolver, easy_validator, ledger_of_len};
use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use ml_03_consensus::ValidationPolicy;

pub fn bench_validate_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("ml-03-validate");

    for len in [10usize, 100, 500] {
        let chain = ledger_of_len(len, "bench").chain().to_vec();
        for policy in [ValidationPolicy::Strict, ValidationPolicy::Legacy] {
            let validator = easy_validator(policy);
            group.throughput(Throughput::Elements(len as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("{policy:?}").to_lowercase(), len),
                &chain,
                |b, chain| b.iter(|| black_box(validator.is_valid(chain))),
            );
        }
    }

    group.finish();
}

pub fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("ml-03-resolve");

    let local = ledger_of_len(50, "local");
    for peer_count in [1usize, 8, 32] {
        let peers: Vec<_> = (0..peer_count)
            .map(|i| ledger_of_len(50 + i % 3, "peer").snapshot())
            .collect();
        let resolver = easy_resolver();

        group.bench_with_input(
            BenchmarkId::new("resolve", peer_count),
            &peers,
            |b, peers| {
                b.iter(|| {
                    black_box(resolver.resolve(
                        local.chain().to_vec(),
                        local.pending_transactions().to_vec(),
                        peers.clone(),
                    ))
                })
            },
        );
    }

    group.finish();
}

//! Benchmarks pour la validation et le découpage en blocs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use peptidiff_core::{diff_blocks, validate_pair, PeptideSequence};

/// Génère une séquence déterministe de la longueur demandée
fn synthetic_sequence(len: usize, phase: usize) -> String {
    const ALPHABET: &[u8] = b"ARNDCEQGHILKMFPSTWYV";

    (0..len)
        .map(|i| ALPHABET[(i + phase) % ALPHABET.len()] as char)
        .collect()
}

fn benchmark_validation(c: &mut Criterion) {
    let test_pairs = vec![
        ("short", 30),
        ("medium", 300),
        ("long", 3000),
    ];

    let mut group = c.benchmark_group("Validation");

    for (name, len) in test_pairs {
        let first = synthetic_sequence(len, 0);
        let second = synthetic_sequence(len, 3);

        group.bench_function(format!("validate_{}", name), |b| {
            b.iter(|| validate_pair(black_box(&first), black_box(&second)));
        });
    }

    group.finish();
}

fn benchmark_diff_blocks(c: &mut Criterion) {
    let first = PeptideSequence::parse(&synthetic_sequence(300, 0)).unwrap();
    let second = PeptideSequence::parse(&synthetic_sequence(300, 3)).unwrap();

    let mut group = c.benchmark_group("Diff Blocks");

    for width in [10usize, 30] {
        group.bench_function(format!("diff_blocks_w{}", width), |b| {
            b.iter(|| diff_blocks(black_box(&first), black_box(&second), width));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_validation, benchmark_diff_blocks);
criterion_main!(benches);

//! Criterion benchmarks for the merge engine.
//!
//! Run with:
//!   cargo bench --bench merge

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mergetext::{merge, EventSink};

/// Builds a synthetic (base, ours, theirs) triple of roughly `len` bytes,
/// with edits scattered every `edit_every` bytes on each side at disjoint
/// offsets so the merge is conflict-free.
fn synthetic_triple(len: usize, edit_every: usize) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    let base: Vec<u8> = (0..len).map(|i| b'a' + (i % 26) as u8).collect();
    let mut ours = base.clone();
    let mut theirs = base.clone();

    let mut i = 0;
    while i < len {
        ours[i] = b'O';
        i += edit_every;
    }
    let mut j = edit_every / 2;
    while j < len {
        theirs[j] = b'T';
        j += edit_every;
    }
    (base, ours, theirs)
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    for &size in &[1_024usize, 16_384, 65_535] {
        for &density in &[64usize, 256] {
            let (base, ours, theirs) = synthetic_triple(size, density);
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("edit_every_{density}"), size),
                &(base, ours, theirs),
                |b, (base, ours, theirs)| {
                    b.iter(|| {
                        let mut sink = EventSink::new();
                        merge(base, ours, theirs, &mut sink)
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_merge);
criterion_main!(benches);

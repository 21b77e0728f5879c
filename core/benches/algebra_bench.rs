use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ir_core::algebra::{difference, intersect, union};
use ir_core::DocId;

fn stride(step: DocId, len: usize) -> Vec<DocId> {
    (1..).step_by(step as usize).take(len).collect()
}

fn bench_merges(c: &mut Criterion) {
    let a = stride(2, 100_000);
    let b = stride(3, 100_000);
    c.bench_function("intersect_100k", |bch| bch.iter(|| intersect(black_box(&a), black_box(&b))));
    c.bench_function("union_100k", |bch| bch.iter(|| union(black_box(&a), black_box(&b))));
    c.bench_function("difference_100k", |bch| bch.iter(|| difference(black_box(&a), black_box(&b))));
}

criterion_group!(benches, bench_merges);
criterion_main!(benches);

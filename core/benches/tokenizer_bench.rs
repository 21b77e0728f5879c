use criterion::{criterion_group, criterion_main, Criterion};
use ir_core::tokenizer::tokenize;
use ir_core::IndexBuilder;

fn bench_tokenize(c: &mut Criterion) {
    let text = include_str!("../../sample_data/corpus/ap890101");
    c.bench_function("tokenize_sample_corpus", |b| b.iter(|| tokenize(text)));
    c.bench_function("index_sample_corpus", |b| {
        b.iter(|| {
            let mut builder = IndexBuilder::default();
            builder.index_content(text).expect("sample corpus is well formed");
            builder.finish()
        })
    });
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);

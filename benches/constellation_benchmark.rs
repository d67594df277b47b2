//! Criterion benchmarks for the build pipeline

use constella::builder::ConstellationBuilder;
use constella::tags::TagTables;
use constella::ExpansionEngine;
use constella_lexicon::Lexicon;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;

fn bench_build(c: &mut Criterion) {
    let lexicon = Arc::new(Lexicon::bundled().unwrap());
    let tables = Arc::new(TagTables::bundled().unwrap());
    let builder = ConstellationBuilder::new(Arc::clone(&lexicon), tables);

    let two_seeds: Vec<String> = vec!["cow".into(), "milk".into()];
    c.bench_function("build_two_seeds", |b| {
        b.iter(|| builder.build(black_box(&two_seeds)).unwrap())
    });

    let six_seeds: Vec<String> = ["cow", "milk", "guitar", "piano", "bank", "computer"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    c.bench_function("build_six_seeds", |b| {
        b.iter(|| builder.build(black_box(&six_seeds)).unwrap())
    });
}

fn bench_expand(c: &mut Criterion) {
    let lexicon = Arc::new(Lexicon::bundled().unwrap());
    let engine = ExpansionEngine::new(lexicon);

    c.bench_function("expand_cow", |b| {
        b.iter(|| engine.expand(black_box("cow"), black_box(10)))
    });
}

criterion_group!(benches, bench_build, bench_expand);
criterion_main!(benches);

use criterion::{Criterion, criterion_group, criterion_main};
use spotter_engine::{ReferenceIndex, build_interval_timeline, parse, parse_workout};
mod common;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let structured = common::generate_caption(50);
    group.bench_function("structured_blocks", |b| {
        b.iter(|| {
            let parsed = parse(std::hint::black_box(&structured));
            std::hint::black_box(parsed);
        });
    });

    let noisy = common::generate_noisy_caption(500);
    group.bench_function("noisy_caption", |b| {
        b.iter(|| {
            let ast = parse_workout(std::hint::black_box(&noisy), None, ReferenceIndex::shared());
            std::hint::black_box(ast);
        });
    });

    group.finish();
}

fn bench_index_and_timeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("reference");
    group.sample_size(10);

    group.bench_function("build_builtin_index", |b| {
        b.iter(|| std::hint::black_box(ReferenceIndex::builtin()));
    });

    let ast = parse(&common::generate_caption(20)).ast;
    group.bench_function("interval_timeline", |b| {
        b.iter(|| std::hint::black_box(build_interval_timeline(std::hint::black_box(&ast))));
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_index_and_timeline);
criterion_main!(benches);

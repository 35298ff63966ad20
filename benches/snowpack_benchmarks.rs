use criterion::{criterion_group, criterion_main, Criterion};
use snowpack::{
    encode, generate_at, Snowflake, SnowflakeConfig, SnowflakeGenerator, SnowflakeOptions,
};
use std::hint::black_box;

pub fn encode_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Encode");
    let options = SnowflakeOptions::new()
        .epoch(1_704_067_200_000)
        .worker(7)
        .pid(3)
        .increment(1234);
    let config = options.resolve();
    let time = 1_750_000_000_000;

    group.bench_function("encode_u64", |b| {
        b.iter(|| black_box(encode(black_box(time), black_box(&config))));
    });

    group.bench_function("generate_decimal", |b| {
        b.iter(|| black_box(generate_at(black_box(time), black_box(options))));
    });

    group.bench_function("resolve_options", |b| {
        b.iter(|| black_box(black_box(SnowflakeOptions::new().worker(1)).resolve()));
    });

    group.finish();
}

pub fn generator_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Generator");
    let generator = SnowflakeGenerator::with_config(SnowflakeConfig::default()).unwrap();

    group.bench_function("next_id_now", |b| {
        b.iter(|| black_box(generator.next_id()));
    });

    group.bench_function("next_id_at", |b| {
        b.iter(|| black_box(generator.next_id_at(black_box(1_000))));
    });

    group.finish();
}

pub fn decode_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Decode");
    let decimal = Snowflake::MAX.to_string();
    let id = Snowflake::MAX;

    group.bench_function("parse_decimal", |b| {
        b.iter(|| black_box(black_box(decimal.as_str()).parse::<Snowflake>()));
    });

    group.bench_function("decompose", |b| {
        b.iter(|| black_box(black_box(id).decompose()));
    });

    group.finish();
}

criterion_group!(
    benches,
    encode_benchmarks,
    generator_benchmarks,
    decode_benchmarks
);
criterion_main!(benches);

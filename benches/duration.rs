use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use iso_duration::{parse, to_string, Duration};

const INPUTS: [(&str, &str); 4] = [
    ("single", "PT1H"),
    ("fractional", "P1.75D"),
    ("comma", "PT2H1,5M"),
    ("composite", "P3Y6M4DT12H30M5S"),
];

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for (name, input) in INPUTS.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| parse(black_box(input)))
        });
    }
    group.finish();
}

fn benchmark_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    for (name, input) in INPUTS.iter() {
        let duration = parse(input).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), &duration, |b, duration| {
            b.iter(|| to_string(black_box(duration)))
        });
    }
    group.finish();
}

fn benchmark_fractional_seconds(c: &mut Criterion) {
    let duration = Duration::from_nanos(61_234_567_891);

    c.bench_function("format_fractional_seconds", |b| {
        b.iter(|| to_string(black_box(&duration)))
    });
}

fn benchmark_parse_errors(c: &mut Criterion) {
    let numeral = format!("P{}D", "9".repeat(300));

    c.bench_function("parse_malformed_numeral", |b| {
        b.iter(|| parse(black_box(&numeral)))
    });
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_format,
    benchmark_fractional_seconds,
    benchmark_parse_errors
);
criterion_main!(benches);

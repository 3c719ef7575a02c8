//! Scanner Benchmarks
//!
//! Run with: `cargo bench --package mioc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use mioc_lex::source::BufferSource;
use mioc_lex::Scanner;
use mioc_util::Handler;

fn scan_token_count(source: &str) -> usize {
    let handler = Handler::new();
    let mut scanner = Scanner::new(&handler);
    scanner.push_owned(BufferSource::new(source));
    // Scanner implements Iterator, so we can use it directly
    scanner.count()
}

fn bench_scanner_keywords(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner");

    let source = "val x = 42 function main() { val y = x + 1 return y }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_val", |b| {
        b.iter(|| scan_token_count(black_box("val x = 42")))
    });

    group.bench_function("function_with_body", |b| {
        b.iter(|| scan_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_scanner_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner_complex");

    let source = r#"
        package demo

        function fibonacci(n: int) -> int {
            if n <= 1 {
                return n
            }
            return fibonacci(n - 1) + fibonacci(n - 2)
        }

        struct point {
            x: f64
            y: f64
        }

        function main() -> void {
            val origin = point { 0.0D 0.0D }
            var count = 0
            while count < 10 {
                count = count + 1
            }
        }
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("complex_source", |b| {
        b.iter(|| scan_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_scanner_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner_strings");

    group.bench_function("short_string", |b| {
        b.iter(|| scan_token_count(black_box("val s = 'hello'")))
    });

    group.bench_function("escaped_string", |b| {
        b.iter(|| scan_token_count(black_box("val s = 'line\\none\\tand\\x41'")))
    });

    group.bench_function("long_string", |b| {
        let source =
            "val s = 'This is a longer string that contains some text for benchmarking purposes.'";
        b.iter(|| scan_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_scanner_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner_numbers");

    group.bench_function("integer", |b| {
        b.iter(|| scan_token_count(black_box("val x = 123456")))
    });

    group.bench_function("suffixed", |b| {
        b.iter(|| scan_token_count(black_box("val x = 123w val y = 70000d val z = 1q")))
    });

    group.bench_function("float", |b| {
        b.iter(|| scan_token_count(black_box("val x = 3.14159D")))
    });

    group.bench_function("hex", |b| {
        b.iter(|| scan_token_count(black_box("val x = 0xdeadbeef")))
    });

    group.finish();
}

fn bench_scanner_identifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner_identifiers");

    group.bench_function("short_ident", |b| {
        b.iter(|| scan_token_count(black_box("val x = 42")))
    });

    group.bench_function("long_ident", |b| {
        b.iter(|| scan_token_count(black_box("val very_long_variable_name = 42")))
    });

    group.bench_function("many_ident", |b| {
        b.iter(|| {
            scan_token_count(black_box(
                "val a = 1 val b = 2 val c = 3 val d = 4 val e = 5",
            ))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scanner_keywords,
    bench_scanner_complex,
    bench_scanner_strings,
    bench_scanner_numbers,
    bench_scanner_identifiers
);
criterion_main!(benches);

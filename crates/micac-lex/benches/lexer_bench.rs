//! Lexer Benchmarks
//!
//! Measures tokenization throughput over representative Mica sources.
//! Run with: `cargo bench --package micac-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use micac_lex::Lexer;

fn lexer_token_count(source: &str) -> usize {
    Lexer::new(source)
        .tokenize()
        .map(|output| output.tokens.len())
        .unwrap_or(0)
}

fn bench_lexer_statements(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "let x = 42; fn main() { let y = x + 1; return y; }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_let", |b| {
        b.iter(|| lexer_token_count(black_box("let x = 42;")))
    });

    group.bench_function("function_with_body", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_complex");

    let source = r#"
        fn classify(n) {
            if n < 0 {
                return "negative";
            } else if n == 0 {
                return "zero";
            }
            return "positive";
        }

        for (i = 0; i <= 100; i++) {
            /* classify and report */
            let label = classify(i - 50);
            print(label);
        }
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("complex_source", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");

    group.bench_function("short_string", |b| {
        b.iter(|| lexer_token_count(black_box("let s = \"hello\";")))
    });

    group.bench_function("escaped_string", |b| {
        let source = r#"let s = "line1\nline2\ttabbed \"quoted\" and 'plain'";"#;
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("integer", |b| {
        b.iter(|| lexer_token_count(black_box("let x = 123456;")))
    });

    group.bench_function("scientific", |b| {
        b.iter(|| lexer_token_count(black_box("let x = 5.1e3 + 1e-2 + 2.0E+5;")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_statements,
    bench_lexer_complex,
    bench_lexer_strings,
    bench_lexer_numbers
);
criterion_main!(benches);

//! TAP lexer throughput benchmarks.
//!
//! Drains the token sequence in a tight loop without collecting into a Vec.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tap_lexer::{LexerConfig, TapLexer};

/// Generate a TAP document with N test points.
fn generate_n_tests(n: usize) -> String {
    let mut out = String::from("TAP version 14\n");
    out.push_str(&format!("1..{n}\n"));
    for i in 1..=n {
        if i % 7 == 0 {
            out.push_str(&format!("not ok {i} - case number {i} # TODO later\n"));
        } else {
            out.push_str(&format!("ok {i} - case number {i}\n"));
        }
        if i % 10 == 0 {
            out.push_str("# checkpoint\n");
        }
    }
    out
}

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("tap_lexer/throughput");

    for num_tests in [10, 100, 1000, 10_000] {
        let source = generate_n_tests(num_tests);
        let bytes = source.len() as u64;

        group.throughput(Throughput::Bytes(bytes));
        group.bench_with_input(BenchmarkId::from_parameter(num_tests), &source, |b, src| {
            b.iter(|| {
                let mut lexer = TapLexer::new(src);
                for token in lexer.scan() {
                    black_box(token.ok());
                }
            });
        });
    }

    group.finish();
}

fn bench_trivia(c: &mut Criterion) {
    let source = generate_n_tests(1000);
    c.bench_function("tap_lexer/trivia/1000", |b| {
        b.iter(|| {
            let mut lexer = TapLexer::with_config(&source, LexerConfig::with_trivia());
            black_box(lexer.scan().count());
        });
    });
}

criterion_group!(benches, bench_throughput, bench_trivia);
criterion_main!(benches);

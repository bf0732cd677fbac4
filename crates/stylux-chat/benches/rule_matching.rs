//! Benchmarks for rule-table reply lookup.
//!
//! Measures first-match lookup over the built-in table for inputs that hit
//! the first rule, the last rule, and no rule at all (full scan).

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stylux_chat::RuleTable;

fn padded(core: &str) -> String {
    format!(
        "I have a few events coming up next month and I am not sure what to pack. \
         {} Budget is moderate and I prefer natural fabrics.",
        core
    )
}

fn bench_rule_lookup(c: &mut Criterion) {
    let table = RuleTable::default();
    let first = padded("Hello!");
    let last = padded("Which color suits me?");
    let miss = padded("Any advice?");

    let mut group = c.benchmark_group("rule_lookup");
    group.bench_function("first_rule", |b| {
        b.iter(|| table.reply_for(black_box(&first)))
    });
    group.bench_function("last_rule", |b| b.iter(|| table.reply_for(black_box(&last))));
    group.bench_function("no_match", |b| b.iter(|| table.reply_for(black_box(&miss))));
    group.finish();
}

criterion_group!(benches, bench_rule_lookup);
criterion_main!(benches);

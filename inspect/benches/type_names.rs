use std::collections::HashMap;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

use redlilium_inspect::testing::ScriptedWidgets;
use redlilium_inspect::{Inspect, Inspector, TypeNames};

#[derive(Inspect)]
struct Stats {
    health: f32,
    armor: u16,
    tags: Vec<String>,
    slots: HashMap<u32, Option<i64>>,
}

fn stats() -> Stats {
    Stats {
        health: 100.0,
        armor: 12,
        tags: (0..16).map(|i| format!("tag{i}")).collect(),
        slots: (0..16).map(|i| (i, Some(i as i64 * 3))).collect(),
    }
}

// ---------------------------------------------------------------------------
// Type-name normalization
// ---------------------------------------------------------------------------

const RAW: &str = "std::collections::hash::map::HashMap<u32, core::option::Option<alloc::vec::Vec<alloc::string::String, alloc::alloc::Global>>>";

fn bench_normalize_uncached(c: &mut Criterion) {
    c.bench_function("normalize_uncached", |b| {
        b.iter_batched(
            TypeNames::new,
            |names| black_box(names.normalize(RAW)),
            BatchSize::SmallInput,
        );
    });
}

fn bench_normalize_cached(c: &mut Criterion) {
    let names = TypeNames::new();
    names.normalize(RAW);
    c.bench_function("normalize_cached", |b| {
        b.iter(|| black_box(names.normalize(RAW)));
    });
}

// ---------------------------------------------------------------------------
// Full dispatch
// ---------------------------------------------------------------------------

fn bench_show_aggregate(c: &mut Criterion) {
    let inspector = Inspector::new();
    let value = stats();
    c.bench_function("show_aggregate", |b| {
        b.iter(|| {
            let mut ui = ScriptedWidgets::new();
            inspector.show(&mut ui, &value, "stats");
            black_box(ui.events().len())
        });
    });
}

fn bench_show_mut_aggregate(c: &mut Criterion) {
    let inspector = Inspector::new();
    let mut value = stats();
    c.bench_function("show_mut_aggregate", |b| {
        b.iter(|| {
            let mut ui = ScriptedWidgets::new();
            inspector.show_mut(&mut ui, &mut value, "stats");
            black_box(ui.events().len())
        });
    });
}

criterion_group!(
    benches,
    bench_normalize_uncached,
    bench_normalize_cached,
    bench_show_aggregate,
    bench_show_mut_aggregate,
);

criterion_main!(benches);

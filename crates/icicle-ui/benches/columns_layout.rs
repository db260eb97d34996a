//! Benchmarks for the columns layout engine.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use icicle_ui::columns::assign_columns;
use icicle_ui::{ColumnsPanel, FixedItem, PanelConfig, Size};

/// Generate `n` stretched items with heights cycling through 50..350.
fn generate_items(n: usize) -> Vec<FixedItem> {
    (0..n)
        .map(|i| FixedItem::stretched(50.0 + ((i * 37) % 300) as f64))
        .collect()
}

fn sample_config() -> PanelConfig {
    PanelConfig::default()
        .with_gap(10.0)
        .with_column_gap(10.0)
        .with_column_width(200.0)
        .with_columns(1, 5)
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("columns_layout");

    for n in [100, 1_000, 10_000] {
        let mut items = generate_items(n);
        let mut panel = ColumnsPanel::new(sample_config());
        let label = format!("{n}_items");

        group.bench_with_input(BenchmarkId::new("measure_arrange", &label), &n, |b, _| {
            b.iter(|| panel.layout(&mut items, Size::new(1100.0, 800.0)));
        });
    }

    group.finish();
}

fn bench_template_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("columns_template");

    let config = sample_config().with_column_spec("Auto, 2*, *, 120");
    for n in [100, 1_000] {
        let mut items = generate_items(n);
        let mut panel = ColumnsPanel::new(config.clone());
        let label = format!("{n}_items");

        group.bench_with_input(BenchmarkId::new("measure_arrange", &label), &n, |b, _| {
            b.iter(|| panel.layout(&mut items, Size::new(1100.0, 800.0)));
        });
    }

    group.finish();
}

fn bench_assignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("columns_assign");

    let heights: Vec<f64> = (0..10_000).map(|i| 50.0 + ((i * 37) % 300) as f64).collect();
    for count in [2, 5, 12] {
        group.bench_with_input(
            BenchmarkId::new("assign_columns", count),
            &count,
            |b, &count| {
                b.iter(|| assign_columns(heights.iter().copied(), count, 10.0));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_layout, bench_template_layout, bench_assignment);
criterion_main!(benches);

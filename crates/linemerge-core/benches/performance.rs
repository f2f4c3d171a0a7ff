// Rust guideline compliant 2026-10-14

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use linemerge_core::{Destination, LineOrder, MergeCoordinator, SourceId};
use std::path::Path;
use tempfile::TempDir;

fn build_sources(dir: &Path, files: usize, lines_per_file: usize) -> Vec<SourceId> {
    (0..files)
        .map(|f| {
            let path = dir.join(format!("source_{}.txt", f));
            let content: String = (0..lines_per_file)
                .map(|i| format!("line-{:08}-{}\n", (i * 7919 + f * 104_729) % 1_000_003, f))
                .collect();
            std::fs::write(&path, content).expect("Failed to write benchmark source");
            SourceId::try_from(path).expect("Benchmark paths are UTF-8")
        })
        .collect()
}

fn bench_merge_sorted(c: &mut Criterion) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let sources = build_sources(temp_dir.path(), 16, 5_000);
    let coordinator = MergeCoordinator::new();
    c.bench_function("merge_sorted_16x5000", |b| {
        b.iter(|| black_box(coordinator.merge_sorted(&sources)))
    });
}

fn bench_merge_to_file(c: &mut Criterion) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let sources = build_sources(temp_dir.path(), 8, 2_000);
    let destination = Destination::new(temp_dir.path().join("merged.txt"));
    let coordinator = MergeCoordinator::new();
    c.bench_function("merge_file_8x2000", |b| {
        b.iter(|| black_box(coordinator.merge(&sources, &destination)).expect("Merge failed"))
    });
}

fn bench_sort_case_insensitive(c: &mut Criterion) {
    let lines: Vec<String> = (0..50_000)
        .map(|i| format!("Line-{}", (i * 7919) % 50_021))
        .collect();
    c.bench_function("sort_case_insensitive_50000", |b| {
        b.iter_batched(
            || lines.clone(),
            |mut lines| {
                LineOrder::CaseInsensitive.sort(&mut lines);
                black_box(lines)
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    benches,
    bench_merge_sorted,
    bench_merge_to_file,
    bench_sort_case_insensitive
);
criterion_main!(benches);

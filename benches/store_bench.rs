use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pouch::core::codec::{self, Markers};
use pouch::core::constants::{DEFAULT_URL_MARKER, DEFAULT_USERNAME_MARKER};
use pouch::core::scanner;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

/// Build a store with `folders` folders of `per_folder` files each.
fn build_store(folders: usize, per_folder: usize) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join(".git")).unwrap();
    for f in 0..folders {
        let dir = tmp.path().join(format!("folder-{:03}", f));
        fs::create_dir(&dir).unwrap();
        for i in 0..per_folder {
            fs::write(dir.join(format!("site-{:04}.gpg", i)), "x").unwrap();
        }
    }
    tmp
}

/// Benchmark scanning stores of increasing size, with and without filter.
fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    group.sample_size(30);
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for (folders, per_folder) in [(5, 20), (20, 50), (50, 100)] {
        let store = build_store(folders, per_folder);
        let total = folders * per_folder;
        group.throughput(Throughput::Elements(total as u64));

        group.bench_with_input(
            BenchmarkId::new("all", total),
            &store,
            |b, store| {
                b.iter(|| black_box(scanner::list_secrets(store.path(), "").unwrap()));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("filtered", total),
            &store,
            |b, store| {
                b.iter(|| black_box(scanner::list_secrets(store.path(), black_box("E-00")).unwrap()));
            },
        );
    }

    group.finish();
}

/// Benchmark parsing decrypted bodies with growing comments.
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.sample_size(50);

    let markers = Markers::new(DEFAULT_USERNAME_MARKER, DEFAULT_URL_MARKER);
    for lines in [0, 10, 100, 1000] {
        let comment = (0..lines)
            .map(|i| format!("note line {}", i))
            .collect::<Vec<_>>()
            .join("\n");
        let body = codec::serialize("p@ss", "alice", "https://example.com", &comment, &markers);

        group.throughput(Throughput::Bytes(body.len() as u64));
        group.bench_with_input(BenchmarkId::new("comment_lines", lines), &body, |b, body| {
            b.iter(|| black_box(codec::parse("site.gpg", black_box(body), &markers)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scan, bench_parse);
criterion_main!(benches);

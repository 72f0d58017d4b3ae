use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rootguard::fs::MemoryFs;
use rootguard::path::{normalize, CanonicalDir, PathRelationship, PathResolver};
use rootguard::RestrictionChecker;
use std::path::Path;

fn sample_fs() -> MemoryFs {
    let mut fs = MemoryFs::new();
    fs.write_file("/cfg/app/base/kustomization.yaml", "")
        .write_file("/cfg/shared/common.yaml", "")
        .write_file("/elsewhere/secret.yaml", "")
        .symlink("/cfg/shared", "/cfg/app/shared")
        .symlink("/elsewhere/secret.yaml", "/cfg/app/secret.yaml");
    fs
}

fn bench_clean(c: &mut Criterion) {
    let mut group = c.benchmark_group("clean");

    for (name, path) in [
        ("plain", "/a/b/c/d"),
        ("with_dots", "/a/b/../c/./d"),
        ("many_backsteps", "/a/b/c/d/../../../../../../e"),
        ("relative", "../../a/./b"),
    ] {
        group.bench_with_input(BenchmarkId::new("clean", name), &path, |b, &p| {
            b.iter(|| normalize::clean(black_box(Path::new(p))));
        });
    }

    group.finish();
}

fn bench_relationship(c: &mut Criterion) {
    let mut group = c.benchmark_group("relationship");

    let root = Path::new("/cfg/app");
    let inside = Path::new("/cfg/app/base/overlays/prod");
    let sibling = Path::new("/cfg/application");

    group.bench_function("is_within", |b| {
        b.iter(|| PathRelationship::is_within(black_box(inside), black_box(root)));
    });

    group.bench_function("is_within_prefix_sibling", |b| {
        b.iter(|| PathRelationship::is_within(black_box(sibling), black_box(root)));
    });

    group.finish();
}

fn bench_resolver(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolver");

    let fs = sample_fs();
    let root = CanonicalDir::new_unchecked("/cfg/app");
    let resolver = PathResolver::new();

    for (name, candidate) in [
        ("no_links", "base/kustomization.yaml"),
        ("dir_link", "shared/common.yaml"),
        ("missing", "base/not/there.yaml"),
    ] {
        group.bench_with_input(BenchmarkId::new("resolve", name), &candidate, |b, &p| {
            b.iter(|| resolver.resolve(&fs, &root, black_box(Path::new(p))));
        });
    }

    group.finish();
}

fn bench_checkers(c: &mut Criterion) {
    let mut group = c.benchmark_group("checkers");

    let fs = sample_fs();
    let root = CanonicalDir::new_unchecked("/cfg/app");

    for checker in [
        RestrictionChecker::RootOnly,
        RestrictionChecker::DominatedShallowly,
        RestrictionChecker::None,
    ] {
        let name = checker.restrictions().short_name();
        group.bench_function(BenchmarkId::new("accepted", name), |b| {
            b.iter(|| checker.check(&fs, &root, black_box(Path::new("base/kustomization.yaml"))));
        });
        group.bench_function(BenchmarkId::new("escaping_link", name), |b| {
            b.iter(|| checker.check(&fs, &root, black_box(Path::new("secret.yaml"))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_clean,
    bench_relationship,
    bench_resolver,
    bench_checkers
);
criterion_main!(benches);

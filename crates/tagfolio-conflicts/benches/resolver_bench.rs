use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tagfolio_conflicts::ConflictResolver;
use tagfolio_core::{Region, Species};
use test_fixtures::builders::*;

fn bench_resolve(c: &mut Criterion) {
    let regions = [Region::Colorado, Region::Wyoming, Region::Montana, Region::Utah];
    let years = (2025..2045)
        .map(|y| {
            let mut actions: Vec<_> = regions
                .iter()
                .map(|&r| buy_points(r, Species::Elk, 60.0))
                .collect();
            if y % 3 == 0 {
                actions.push(hunt(Region::Colorado, Species::MuleDeer, 800.0));
                actions.push(hunt(Region::Wyoming, Species::Pronghorn, 600.0));
                actions.push(with_description(
                    hunt(Region::Montana, Species::Elk, 1200.0),
                    "archery",
                ));
            }
            year(y, actions)
        })
        .collect();
    let rm = roadmap(years);
    let ledger: Vec<_> = regions
        .iter()
        .map(|&r| ledger_entry(r, Species::Elk, 7))
        .collect();
    let m = mandate(3000.0, 20);
    let resolver = ConflictResolver::default();

    c.bench_function("resolve_20_year_roadmap", |b| {
        b.iter(|| resolver.resolve(black_box(&rm), black_box(&ledger), &m, 2025))
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::{TimeDelta, Utc};
use custdash_customers::{
    city_percentages, email_domain_distribution, search, top_cities, CustomerInput,
    CustomerRecord, CustomerStore, InMemoryCustomerStore, StatsOptions, StatsReport,
};

const CITIES: &[&str] = &["New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Denver"];
const DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "outlook.com", "example.org"];
const NAMES: &[&str] = &["Ava", "Liam", "Noah", "Emma", "Mia", "Lucas", "Zoe"];

fn populated(size: usize) -> Vec<CustomerRecord> {
    let now = Utc::now();
    let mut store = InMemoryCustomerStore::new();
    for n in 0..size {
        let input = CustomerInput::new(
            NAMES[n % NAMES.len()],
            format!("Last{n}"),
            format!("user{n}@{}", DOMAINS[n % DOMAINS.len()]),
            format!("{:010}", n),
            CITIES[n % CITIES.len()],
        )
        .added_at(now - TimeDelta::days((n % 90) as i64));
        store.add(input);
    }
    store.snapshot()
}

fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");

    for size in [100usize, 1_000, 10_000] {
        let records = populated(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("top_cities", size), &records, |b, r| {
            b.iter(|| top_cities(black_box(r), 5))
        });
        group.bench_with_input(BenchmarkId::new("city_percentages", size), &records, |b, r| {
            b.iter(|| city_percentages(black_box(r)))
        });
        group.bench_with_input(BenchmarkId::new("email_domains", size), &records, |b, r| {
            b.iter(|| email_domain_distribution(black_box(r)))
        });
        group.bench_with_input(BenchmarkId::new("full_report", size), &records, |b, r| {
            let options = StatsOptions::default();
            let now = Utc::now();
            b.iter(|| StatsReport::build(black_box(r), &options, now))
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let records = populated(10_000);
    c.bench_function("search/10000", |b| b.iter(|| search(black_box(&records), "user42")));
}

criterion_group!(benches, bench_statistics, bench_search);
criterion_main!(benches);

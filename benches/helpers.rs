use criterion::{black_box, criterion_group, criterion_main, Criterion};
use record_helpers::processing::{paginate, sort_by_number_field, sort_users};
use record_helpers::types::{Role, User};

fn bench_sorting(c: &mut Criterion) {
    let values: Vec<(u32, f64)> = (0..10_000u32).map(|i| (i, f64::from((i * 7919) % 1_000))).collect();
    c.bench_function("sort_by_number_field_10k", |b| {
        b.iter(|| sort_by_number_field(black_box(&values), |(_, k)| *k))
    });

    let roles = [Role::Viewer, Role::Admin, Role::Editor];
    let users: Vec<User> = (0..5_000usize)
        .map(|i| User::with_role(format!("user{}", (i * 31) % 5_000), roles[i % roles.len()]))
        .collect();
    c.bench_function("sort_users_5k", |b| b.iter(|| sort_users(black_box(&users))));
}

fn bench_paginate(c: &mut Criterion) {
    let items: Vec<u64> = (0..100_000).collect();
    c.bench_function("paginate_100k_page_500", |b| {
        b.iter(|| paginate(black_box(&items), black_box(500), black_box(50)))
    });
}

criterion_group!(benches, bench_sorting, bench_paginate);
criterion_main!(benches);

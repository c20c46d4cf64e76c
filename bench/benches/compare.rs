use std::cmp::Ordering;
use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use keypath::{KeyPath, SortByKeyPath, SortDescriptor, SortSchema, their};

#[derive(Clone)]
struct Record {
    id: u64,
    group: u16,
    name: String,
}

const ID: KeyPath<Record, u64> = KeyPath::new(|r: &Record| &r.id);
const GROUP: KeyPath<Record, u16> = KeyPath::new(|r: &Record| &r.group);
const NAME: KeyPath<Record, String> = KeyPath::new(|r: &Record| &r.name);

fn records(len: usize) -> Vec<Record> {
    // xorshift keeps the input deterministic without pulling in an RNG
    let mut state = 0x2545_f491_4f6c_dd1d_u64;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            Record {
                id: state,
                group: (state % 64) as u16,
                name: format!("record-{}", state % 1000),
            }
        })
        .collect()
}

fn single_key(c: &mut Criterion) {
    let input = records(10_000);
    let mut group = c.benchmark_group("single_key");

    group.bench_function("closure", |b| {
        b.iter_batched(
            || input.clone(),
            |mut v| {
                v.sort_by(|l, r| l.id.cmp(&r.id));
                black_box(v)
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("their", |b| {
        b.iter_batched(
            || input.clone(),
            |mut v| {
                v.sort_by_predicate(their(ID));
                black_box(v)
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("descriptor", |b| {
        let rules = [SortDescriptor::ascending(ID)];
        b.iter_batched(
            || input.clone(),
            |mut v| {
                v.sort_by_descriptors(&rules);
                black_box(v)
            },
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

fn multi_key(c: &mut Criterion) {
    let input = records(10_000);
    let mut group = c.benchmark_group("multi_key");

    group.bench_function("closure", |b| {
        b.iter_batched(
            || input.clone(),
            |mut v| {
                v.sort_by(|l, r| {
                    l.group
                        .cmp(&r.group)
                        .then_with(|| r.name.cmp(&l.name))
                        .then_with(|| l.id.cmp(&r.id))
                });
                black_box(v)
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("descriptors", |b| {
        let rules = [
            SortDescriptor::ascending(GROUP),
            SortDescriptor::descending(NAME),
            SortDescriptor::ascending(ID),
        ];
        b.iter_batched(
            || input.clone(),
            |mut v| {
                v.sort_by_descriptors(&rules);
                black_box(v)
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("schema", |b| {
        let schema = SortSchema::new()
            .with_key("group", GROUP)
            .and_then(|s| s.with_key("name", NAME))
            .and_then(|s| s.with_key("id", ID))
            .unwrap();
        let rules = schema.parse("group,-name,id").unwrap();
        b.iter_batched(
            || input.clone(),
            |mut v| {
                v.sort_by_descriptors(&rules);
                black_box(v)
            },
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

fn compare_only(c: &mut Criterion) {
    let input = records(2);
    let rules = [
        SortDescriptor::ascending(GROUP),
        SortDescriptor::descending(NAME),
    ];
    c.bench_function("compare_all", |b| {
        b.iter(|| {
            let ordering = keypath::compare_all(&rules, black_box(&input[0]), black_box(&input[1]));
            black_box(ordering == Ordering::Less)
        })
    });
}

criterion_group!(benches, single_key, multi_key, compare_only);
criterion_main!(benches);

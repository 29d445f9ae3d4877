use animbridge_handles::{HandlePool, HandleRange};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_churn(c: &mut Criterion) {
    let range = HandleRange::new(0, 4096).unwrap();

    c.bench_function("allocate_release_4096", |b| {
        let mut pool: HandlePool<u32> = HandlePool::new(range);
        b.iter(|| {
            for i in 0..4096u32 {
                black_box(pool.allocate(i));
            }
            for i in 0..4096u32 {
                black_box(pool.release(&i));
            }
        })
    });

    c.bench_function("lookup_hit", |b| {
        let mut pool: HandlePool<u32> = HandlePool::new(range);
        for i in 0..1024u32 {
            pool.allocate(i);
        }
        b.iter(|| black_box(pool.lookup(&black_box(512))))
    });
}

criterion_group!(benches, bench_churn);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use lazy_aig::{lazy, primitives, AigLike, LazyAig, Wiring};

const HORIZON: usize = 16;

fn running_conjunction(width: usize) -> LazyAig {
    let inputs: Vec<String> = (0..width).map(|i| format!("x{i}")).collect();
    lazy(primitives::and_gate(inputs, "acc"))
        .loopback([Wiring::new("x0", "acc").init(true)])
        .expect("loopback ports exist")
}

fn unroll(c: &mut Criterion) {
    c.bench_function("unroll", |b| {
        b.iter_batched(
            || running_conjunction(8),
            |circ| circ.unroll(HORIZON).expect("failed to unroll"),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("unroll_flatten", |b| {
        b.iter_batched(
            || {
                running_conjunction(8)
                    .unroll(HORIZON)
                    .expect("failed to unroll")
            },
            |circ| circ.flatten().expect("failed to flatten"),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, unroll);
criterion_main!(benches);

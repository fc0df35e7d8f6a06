use criterion::{Criterion, criterion_group, criterion_main};
use ct_mpi::{BoxedMpi, ConstChoice, Limb, MpiRef, Word};
use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};
use std::hint::black_box;

fn random_limbs(rng: &mut ChaCha8Rng, nlimbs: usize) -> Vec<Limb> {
    (0..nlimbs).map(|_| Limb(rng.next_u64() as Word)).collect()
}

fn bench_conditional_ops(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut group = c.benchmark_group("conditional ops");

    let u = random_limbs(&mut rng, 32);
    let v = random_limbs(&mut rng, 32);

    group.bench_function("conditional_carrying_add_assign, 32 limbs", |b| {
        let mut w = u.clone();
        b.iter(|| {
            black_box(
                MpiRef::new_mut(&mut w)
                    .conditional_carrying_add_assign(MpiRef::new(&v), ConstChoice::TRUE),
            )
        });
    });

    group.bench_function("conditional_borrowing_sub_assign, 32 limbs", |b| {
        let mut w = u.clone();
        b.iter(|| {
            black_box(
                MpiRef::new_mut(&mut w)
                    .conditional_borrowing_sub_assign(MpiRef::new(&v), ConstChoice::TRUE),
            )
        });
    });

    group.bench_function("conditional_swap, 32 limbs", |b| {
        let mut a = u.clone();
        let mut b2 = v.clone();
        b.iter(|| {
            MpiRef::conditional_swap(
                MpiRef::new_mut(&mut a),
                MpiRef::new_mut(&mut b2),
                ConstChoice::TRUE,
            )
        });
    });

    group.bench_function("conditional_wrapping_neg_assign, 32 limbs", |b| {
        let mut w = u.clone();
        b.iter(|| MpiRef::new_mut(&mut w).conditional_wrapping_neg_assign(ConstChoice::TRUE));
    });

    group.finish();
}

fn bench_rem(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut group = c.benchmark_group("modular reduction");

    let value = BoxedMpi::from_words((0..16).map(|_| rng.next_u64() as Word));
    let modulus = BoxedMpi::from_words((0..4).map(|_| rng.next_u64() as Word | 1));

    group.bench_function("rem, 16 by 4 limbs", |b| {
        b.iter(|| black_box(value.rem(&modulus)))
    });

    group.finish();
}

criterion_group!(benches, bench_conditional_ops, bench_rem);
criterion_main!(benches);

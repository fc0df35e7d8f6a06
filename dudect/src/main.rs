//! Side-channel tests for `ct-mpi`.
//!
//! These use the `dudect_bencher` crate to check the conditional limb
//! operations and the modular reduction for constant-time behavior: the
//! Left/Right classes hold operands of very different magnitudes (or flag
//! values), and a timing distinguisher between the classes indicates a leak.

use ct_mpi::{BoxedMpi, ConstChoice, Limb, MpiRef, Word};
use dudect_bencher::{BenchRng, Class, CtRunner, ctbench_main};
use dudect_bencher::rand::Rng;

const NLIMBS: usize = 8;
const ITERATIONS_OUTER: usize = 10_000;
const ITERATIONS_INNER: usize = 100;

fn random_limbs(rng: &mut BenchRng) -> [Limb; NLIMBS] {
    core::array::from_fn(|_| Limb(rng.r#gen::<u64>() as Word))
}

/// Check the conditional add sweep for flag-independent timing.
fn conditional_add(runner: &mut CtRunner, rng: &mut BenchRng) {
    let u = random_limbs(rng);
    let v = random_limbs(rng);

    let mut inputs = vec![];
    for _ in 0..ITERATIONS_OUTER {
        inputs.push((Class::Left, ConstChoice::FALSE));
        inputs.push((Class::Right, ConstChoice::TRUE));
    }

    for (class, flag) in inputs {
        let mut w = u;
        runner.run_one(class, || {
            for _ in 0..ITERATIONS_INNER {
                MpiRef::new_mut(&mut w).conditional_carrying_add_assign(MpiRef::new(&v), flag);
            }
        })
    }
}

/// Check the reduction for value-independent timing: a tiny dividend versus
/// a full-width one, both reduced by the same modulus.
fn rem(runner: &mut CtRunner, rng: &mut BenchRng) {
    let mut small_words = [0 as Word; NLIMBS];
    small_words[0] = 1;
    let small = BoxedMpi::from_words(small_words);
    let large = BoxedMpi::from_words((0..NLIMBS).map(|_| rng.r#gen::<u64>() as Word));
    let modulus = BoxedMpi::from_words((0..2).map(|_| rng.r#gen::<u64>() as Word | 1));

    let mut inputs = vec![];
    for _ in 0..ITERATIONS_OUTER {
        inputs.push((Class::Left, small.clone()));
        inputs.push((Class::Right, large.clone()));
    }

    for (class, input) in inputs {
        runner.run_one(class, || {
            let _ = input.rem(&modulus);
        })
    }
}

ctbench_main!(conditional_add, rem);

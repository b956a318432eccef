// Exercises the decapsulation timing claim: a valid ciphertext and a
// tampered one (implicit rejection) must take the same code path. See the
// dudect-bencher docs for interpreting the t statistics.

use dudect_bencher::{ctbench_main, BenchRng, Class, CtRunner};
use frodokem::frodo640_shake;
use frodokem::frodo640_shake::{CipherText, PublicKey, SecretKey};
use frodokem::traits::{Decaps, Encaps, KeyGen, SerDes};

fn encaps(runner: &mut CtRunner, mut _rng: &mut BenchRng) {
    const ITERATIONS_OUTER: usize = 100;
    const ITERATIONS_INNER: usize = 10;

    let (pk1, _sk1) = frodo640_shake::KG::try_keygen().unwrap();
    let (pk2, _sk2) = frodo640_shake::KG::try_keygen().unwrap();

    let mut inputs: Vec<PublicKey> = Vec::new();
    let mut classes = Vec::new();

    for _ in 0..ITERATIONS_OUTER {
        inputs.push(pk1.clone());
        classes.push(Class::Left);
    }

    for _ in 0..ITERATIONS_OUTER {
        inputs.push(pk2.clone());
        classes.push(Class::Right);
    }

    for (class, input) in classes.into_iter().zip(inputs.into_iter()) {
        runner.run_one(class, || {
            for _ in 0..ITERATIONS_INNER {
                let _ = input.try_encaps();
            }
        })
    }
}

fn decaps(runner: &mut CtRunner, mut _rng: &mut BenchRng) {
    const ITERATIONS_OUTER: usize = 100;
    const ITERATIONS_INNER: usize = 10;

    // Left: a well-formed ciphertext. Right: the same ciphertext with its
    // final byte flipped, driving the implicit-rejection path.
    let (pk, sk) = frodo640_shake::KG::try_keygen().unwrap();
    let (_ss, ct_good) = pk.try_encaps().unwrap();
    let mut ct_bytes = ct_good.clone().into_bytes();
    ct_bytes[frodo640_shake::CT_LEN - 1] ^= 0xFF;
    let ct_reject = CipherText::try_from_bytes(&ct_bytes).unwrap();

    let mut inputs: Vec<(SecretKey, CipherText)> = Vec::new();
    let mut classes = Vec::new();

    for _ in 0..ITERATIONS_OUTER {
        inputs.push((sk.clone(), ct_good.clone()));
        classes.push(Class::Left);
    }

    for _ in 0..ITERATIONS_OUTER {
        inputs.push((sk.clone(), ct_reject.clone()));
        classes.push(Class::Right);
    }

    for (class, input) in classes.into_iter().zip(inputs.into_iter()) {
        runner.run_one(class, || {
            for _ in 0..ITERATIONS_INNER {
                let _ = input.0.try_decaps(&input.1);
            }
        })
    }
}

ctbench_main!(encaps, decaps);

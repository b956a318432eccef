use criterion::{criterion_group, criterion_main, Criterion};

use frodokem::traits::{Decaps, Encaps, KeyGen};
use frodokem::{
    frodo1344_aes, frodo1344_shake, frodo640_aes, frodo640_shake, frodo976_aes, frodo976_shake,
};

#[allow(clippy::redundant_closure)]
pub fn criterion_benchmark(c: &mut Criterion) {
    let (pk_640a, sk_640a) = frodo640_aes::KG::try_keygen().unwrap();
    let (_, ct_640a) = pk_640a.try_encaps().unwrap();
    let (pk_640s, sk_640s) = frodo640_shake::KG::try_keygen().unwrap();
    let (_, ct_640s) = pk_640s.try_encaps().unwrap();
    let (pk_976a, sk_976a) = frodo976_aes::KG::try_keygen().unwrap();
    let (_, ct_976a) = pk_976a.try_encaps().unwrap();
    let (pk_976s, sk_976s) = frodo976_shake::KG::try_keygen().unwrap();
    let (_, ct_976s) = pk_976s.try_encaps().unwrap();
    let (pk_1344a, sk_1344a) = frodo1344_aes::KG::try_keygen().unwrap();
    let (_, ct_1344a) = pk_1344a.try_encaps().unwrap();
    let (pk_1344s, sk_1344s) = frodo1344_shake::KG::try_keygen().unwrap();
    let (_, ct_1344s) = pk_1344s.try_encaps().unwrap();

    c.bench_function("frodo640_aes KeyGen", |b| b.iter(|| frodo640_aes::KG::try_keygen()));
    c.bench_function("frodo640_aes Encaps", |b| b.iter(|| pk_640a.try_encaps()));
    c.bench_function("frodo640_aes Decaps", |b| b.iter(|| sk_640a.try_decaps(&ct_640a)));

    c.bench_function("frodo640_shake KeyGen", |b| b.iter(|| frodo640_shake::KG::try_keygen()));
    c.bench_function("frodo640_shake Encaps", |b| b.iter(|| pk_640s.try_encaps()));
    c.bench_function("frodo640_shake Decaps", |b| b.iter(|| sk_640s.try_decaps(&ct_640s)));

    c.bench_function("frodo976_aes KeyGen", |b| b.iter(|| frodo976_aes::KG::try_keygen()));
    c.bench_function("frodo976_aes Encaps", |b| b.iter(|| pk_976a.try_encaps()));
    c.bench_function("frodo976_aes Decaps", |b| b.iter(|| sk_976a.try_decaps(&ct_976a)));

    c.bench_function("frodo976_shake KeyGen", |b| b.iter(|| frodo976_shake::KG::try_keygen()));
    c.bench_function("frodo976_shake Encaps", |b| b.iter(|| pk_976s.try_encaps()));
    c.bench_function("frodo976_shake Decaps", |b| b.iter(|| sk_976s.try_decaps(&ct_976s)));

    c.bench_function("frodo1344_aes KeyGen", |b| b.iter(|| frodo1344_aes::KG::try_keygen()));
    c.bench_function("frodo1344_aes Encaps", |b| b.iter(|| pk_1344a.try_encaps()));
    c.bench_function("frodo1344_aes Decaps", |b| b.iter(|| sk_1344a.try_decaps(&ct_1344a)));

    c.bench_function("frodo1344_shake KeyGen", |b| b.iter(|| frodo1344_shake::KG::try_keygen()));
    c.bench_function("frodo1344_shake Encaps", |b| b.iter(|| pk_1344s.try_encaps()));
    c.bench_function("frodo1344_shake Decaps", |b| b.iter(|| sk_1344s.try_decaps(&ct_1344s)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

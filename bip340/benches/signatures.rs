use bip340::{SigningKey, VerifyingKey};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_sign(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let msg = [0x42u8; 32];
    let aux = [0x24u8; 32];

    c.bench_function("schnorr_sign", |bencher| {
        bencher.iter(|| {
            let sig = sk.sign(black_box(&msg), black_box(&aux)).expect("sign");
            black_box(sig);
        })
    });
}

fn bench_verify(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let vk = VerifyingKey::from(&sk);
    let msg = [0x42u8; 32];
    let aux = [0x24u8; 32];
    let sig = sk.sign(&msg, &aux).expect("sign");

    c.bench_function("schnorr_verify", |bencher| {
        bencher.iter(|| {
            let ok = vk.verify(black_box(&msg), black_box(&sig));
            black_box(ok);
        })
    });
}

criterion_group!(benches, bench_sign, bench_verify);
criterion_main!(benches);

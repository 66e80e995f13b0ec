use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use secp256k1::{
    double_scalar_mul_basepoint_affine, mul_generator_affine, Affine, Group, RandomField,
    ScalarField,
};

fn random_scalar(rng: &mut StdRng) -> ScalarField {
    ScalarField::random(rng)
}

fn bench_affine_double(c: &mut Criterion) {
    let g = Affine::generator();
    c.bench_function("affine_double", |bencher| {
        bencher.iter(|| black_box(black_box(g).double()))
    });
}

fn bench_affine_add(c: &mut Criterion) {
    let g = Affine::generator();
    let h = g.double();
    c.bench_function("affine_add", |bencher| {
        bencher.iter(|| black_box(black_box(g) + black_box(h)))
    });
}

fn bench_affine_scalar_mul(c: &mut Criterion) {
    let g = Affine::generator();
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng);

    c.bench_function("affine_scalar_mul", |bencher| {
        bencher.iter(|| black_box(black_box(g).scalar_mul(black_box(&scalar))))
    });
}

fn bench_affine_scalar_mul_windowed(c: &mut Criterion) {
    let g = Affine::generator();
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng);

    c.bench_function("affine_scalar_mul_windowed", |bencher| {
        bencher.iter(|| black_box(black_box(g).scalar_mul_windowed(black_box(&scalar))))
    });
}

fn bench_mul_generator(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng);

    c.bench_function("mul_generator", |bencher| {
        bencher.iter(|| black_box(mul_generator_affine(black_box(&scalar))))
    });
}

fn bench_double_scalar_mul_basepoint(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = random_scalar(&mut rng);
    let b = random_scalar(&mut rng);
    let p = Affine::generator().mul_u64(12345);

    c.bench_function("double_scalar_mul_basepoint", |bencher| {
        bencher.iter(|| {
            black_box(double_scalar_mul_basepoint_affine(
                black_box(&a),
                black_box(&b),
                black_box(&p),
            ))
        })
    });
}

criterion_group!(
    benches,
    bench_affine_double,
    bench_affine_add,
    bench_affine_scalar_mul,
    bench_affine_scalar_mul_windowed,
    bench_mul_generator,
    bench_double_scalar_mul_basepoint
);
criterion_main!(benches);

use ark_bn254::Fr;
use ark_ff::UniformRand;
use criterion::{criterion_group, criterion_main, Criterion};
use da_kzg_bn254::{
    primitives::{consts::FIELD_ELEMENTS_PER_BLOB, validator::check_well_formed},
    Context, TrustedSetup,
};
use std::time::Duration;

fn bench_kzg_setup(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let setup = TrustedSetup::insecure_from_secret(&Fr::rand(&mut rng), FIELD_ELEMENTS_PER_BLOB);

    c.bench_function("bench_trusted_setup_check_4096", |b| {
        b.iter(|| check_well_formed(&setup, FIELD_ELEMENTS_PER_BLOB).unwrap());
    });

    // validation, IFFT of the G1 points and bit reversal
    c.bench_function("bench_context_new_4096", |b| {
        b.iter(|| {
            Context::new(setup.clone(), FIELD_ELEMENTS_PER_BLOB, FIELD_ELEMENTS_PER_BLOB).unwrap()
        });
    });
}

fn criterion_config() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_secs(5)) // Warm-up time
        .measurement_time(Duration::from_secs(10)) // Measurement time
        .sample_size(10) // Number of samples to take
}

criterion_group!(
    name = benches;
    config = criterion_config();
    targets = bench_kzg_setup
);
criterion_main!(benches);

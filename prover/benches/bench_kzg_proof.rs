use ark_bn254::Fr;
use ark_ff::UniformRand;
use criterion::{criterion_group, criterion_main, Criterion};
use da_kzg_bn254_primitives::{
    domain::Domain, keys::SetupKeys, polynomial::PolynomialEvalForm,
    trusted_setup::TrustedSetup, validator::validate,
};
use da_kzg_bn254_prover::kzg::KZG;
use rand::Rng;
use std::time::Duration;

fn bench_kzg_proof(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let size = 4096;

    let setup = validate(
        TrustedSetup::insecure_from_secret(&Fr::rand(&mut rng), size),
        size,
    )
    .unwrap();
    let mut domain = Domain::new(size).unwrap();
    domain.reverse_order();
    let keys = SetupKeys::derive(&setup, &domain).unwrap();
    let kzg = KZG::new(domain, keys.commit_key).unwrap();

    let input_poly = PolynomialEvalForm::new((0..size).map(|_| Fr::rand(&mut rng)).collect());

    c.bench_function("bench_kzg_proof_4096_random_point", |b| {
        let z_fr = Fr::rand(&mut rng);
        b.iter(|| kzg.compute_proof(&input_poly, &z_fr).unwrap());
    });

    c.bench_function("bench_kzg_proof_4096_root_of_unity", |b| {
        let index = rng.gen_range(0..size);
        b.iter(|| {
            kzg.compute_proof_with_known_z_fr_index(&input_poly, index)
                .unwrap()
        });
    });
}

fn criterion_config() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_secs(5))  // Warm-up time
        .measurement_time(Duration::from_secs(10))  // Measurement time
        .sample_size(10) // Number of samples to take
}

criterion_group!(
    name = benches;
    config = criterion_config();
    targets = bench_kzg_proof
);
criterion_main!(benches);

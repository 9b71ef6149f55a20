use ark_bn254::{Fr, G1Affine};
use ark_ff::UniformRand;
use criterion::{criterion_group, criterion_main, Criterion};
use da_kzg_bn254_primitives::{
    domain::Domain,
    keys::{OpeningKey, SetupKeys},
    polynomial::PolynomialEvalForm,
    proof::OpeningProof,
    trusted_setup::TrustedSetup,
    validator::validate,
};
use da_kzg_bn254_prover::kzg::KZG;
use da_kzg_bn254_verifier::{batch::verify_kzg_proof_batch, verify::verify_proof};
use std::time::Duration;

const SIZE: usize = 4096;

fn bench_kzg_verify(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let setup = validate(
        TrustedSetup::insecure_from_secret(&Fr::rand(&mut rng), SIZE),
        SIZE,
    )
    .unwrap();
    let mut domain = Domain::new(SIZE).unwrap();
    domain.reverse_order();
    let SetupKeys {
        commit_key,
        opening_key,
    } = SetupKeys::derive(&setup, &domain).unwrap();
    let kzg = KZG::new(domain, commit_key).unwrap();

    let mut open_random = |kzg: &KZG| -> (G1Affine, OpeningProof) {
        let input_poly = PolynomialEvalForm::new((0..SIZE).map(|_| Fr::rand(&mut rng)).collect());
        let z_fr = Fr::rand(&mut rng);
        let commitment = kzg.commit_eval_form(&input_poly).unwrap();
        let proof = kzg.compute_proof(&input_poly, &z_fr).unwrap();
        (commitment, proof)
    };

    let (commitment, proof) = open_random(&kzg);
    c.bench_function("bench_kzg_verify_single", |b| {
        b.iter(|| verify_proof(&commitment, &proof, &opening_key).unwrap());
    });

    for batch_size in [4usize, 16, 64] {
        let (commitments, proofs): (Vec<G1Affine>, Vec<OpeningProof>) =
            (0..batch_size).map(|_| open_random(&kzg)).unzip();
        bench_batch(c, batch_size, &commitments, &proofs, &opening_key);
    }
}

fn bench_batch(
    c: &mut Criterion,
    batch_size: usize,
    commitments: &[G1Affine],
    proofs: &[OpeningProof],
    opening_key: &OpeningKey,
) {
    c.bench_function(&format!("bench_kzg_verify_batch_{}", batch_size), |b| {
        b.iter(|| verify_kzg_proof_batch(commitments, proofs, opening_key).unwrap());
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
    targets = bench_kzg_verify
);
criterion_main!(benches);

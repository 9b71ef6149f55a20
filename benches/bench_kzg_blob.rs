use ark_bn254::Fr;
use ark_ff::UniformRand;
use criterion::{criterion_group, criterion_main, Criterion};
use da_kzg_bn254::{primitives::consts::FIELD_ELEMENTS_PER_BLOB, Blob, Context, TrustedSetup};
use std::time::Duration;

fn random_blob(rng: &mut impl rand::Rng) -> Vec<u8> {
    let elements: Vec<Fr> = (0..FIELD_ELEMENTS_PER_BLOB)
        .map(|_| Fr::rand(rng))
        .collect();
    Blob::from_field_elements(&elements).unwrap().into()
}

fn bench_kzg_blob(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let setup = TrustedSetup::insecure_from_secret(&Fr::rand(&mut rng), FIELD_ELEMENTS_PER_BLOB);
    let ctx = Context::new(setup, FIELD_ELEMENTS_PER_BLOB, FIELD_ELEMENTS_PER_BLOB).unwrap();

    let blob = random_blob(&mut rng);
    let commitment = ctx.blob_to_kzg_commitment(&blob).unwrap();
    let proof = ctx.compute_blob_kzg_proof(&blob, &commitment).unwrap();

    c.bench_function("bench_blob_to_kzg_commitment", |b| {
        b.iter(|| ctx.blob_to_kzg_commitment(&blob).unwrap());
    });

    c.bench_function("bench_compute_blob_kzg_proof", |b| {
        b.iter(|| ctx.compute_blob_kzg_proof(&blob, &commitment).unwrap());
    });

    c.bench_function("bench_verify_blob_kzg_proof", |b| {
        b.iter(|| ctx.verify_blob_kzg_proof(&blob, &commitment, &proof).unwrap());
    });

    let blobs: Vec<Vec<u8>> = (0..16).map(|_| random_blob(&mut rng)).collect();
    let commitments: Vec<[u8; 32]> = blobs
        .iter()
        .map(|blob| ctx.blob_to_kzg_commitment(blob).unwrap())
        .collect();
    let proofs: Vec<[u8; 32]> = blobs
        .iter()
        .zip(commitments.iter())
        .map(|(blob, commitment)| ctx.compute_blob_kzg_proof(blob, commitment).unwrap())
        .collect();

    c.bench_function("bench_verify_blob_kzg_proof_batch_16", |b| {
        b.iter(|| {
            ctx.verify_blob_kzg_proof_batch(&blobs, &commitments, &proofs)
                .unwrap()
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
    targets = bench_kzg_blob
);
criterion_main!(benches);

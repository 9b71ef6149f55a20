#[cfg(test)]
mod tests {
    use ark_bn254::Fr;
    use ark_ff::UniformRand;
    use da_kzg_bn254::{
        primitives::traits::WriteBytesBe, Blob, Context, KzgError, TrustedSetup,
    };
    use lazy_static::lazy_static;
    use std::io::Write;

    const FIELD_ELEMENTS_PER_BLOB: usize = 16;
    const SETUP_LEN: usize = 64;

    lazy_static! {
        static ref SETUP: TrustedSetup = {
            let mut rng = rand::thread_rng();
            TrustedSetup::insecure_from_secret(&Fr::rand(&mut rng), SETUP_LEN)
        };
        static ref CONTEXT: Context = {
            let _ = tracing_subscriber::fmt()
                .with_max_level(tracing::Level::DEBUG)
                .with_test_writer()
                .try_init();
            Context::new(SETUP.clone(), SETUP_LEN, FIELD_ELEMENTS_PER_BLOB).unwrap()
        };
    }

    fn random_blob() -> Vec<u8> {
        let mut rng = rand::thread_rng();
        let elements: Vec<Fr> = (0..FIELD_ELEMENTS_PER_BLOB)
            .map(|_| Fr::rand(&mut rng))
            .collect();
        Blob::from_field_elements(&elements).unwrap().into()
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("da-kzg-context-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_blob_proof_round_trip() {
        for _ in 0..5 {
            let blob = random_blob();
            let commitment = CONTEXT.blob_to_kzg_commitment(&blob).unwrap();
            let proof = CONTEXT.compute_blob_kzg_proof(&blob, &commitment).unwrap();
            assert_eq!(
                CONTEXT.verify_blob_kzg_proof(&blob, &commitment, &proof),
                Ok(())
            );
        }
    }

    #[test]
    fn test_blob_proof_rejects_other_blob() {
        let blob = random_blob();
        let commitment = CONTEXT.blob_to_kzg_commitment(&blob).unwrap();
        let proof = CONTEXT.compute_blob_kzg_proof(&blob, &commitment).unwrap();

        let other_blob = random_blob();
        let other_commitment = CONTEXT.blob_to_kzg_commitment(&other_blob).unwrap();
        assert_eq!(
            CONTEXT.verify_blob_kzg_proof(&other_blob, &other_commitment, &proof),
            Err(KzgError::VerificationFailed)
        );
    }

    #[test]
    fn test_kzg_proof_round_trip() {
        let mut rng = rand::thread_rng();
        let blob = random_blob();
        let commitment = CONTEXT.blob_to_kzg_commitment(&blob).unwrap();

        let z = Fr::rand(&mut rng).to_bytes_be().unwrap();
        let (proof, y) = CONTEXT.compute_kzg_proof(&blob, &z).unwrap();
        assert_eq!(CONTEXT.verify_kzg_proof(&commitment, &z, &y, &proof), Ok(()));

        let wrong_y = (Fr::rand(&mut rng)).to_bytes_be().unwrap();
        let result = CONTEXT.verify_kzg_proof(&commitment, &z, &wrong_y, &proof);
        assert_eq!(result, Err(KzgError::VerificationFailed));
        assert!(result.unwrap_err().is_verification_failure());
    }

    #[test]
    fn test_kzg_proof_at_root_of_unity() {
        let blob = random_blob();
        let commitment = CONTEXT.blob_to_kzg_commitment(&blob).unwrap();

        // blob element i sits at the i-th root of the (bit-reversed) domain
        for i in 0..FIELD_ELEMENTS_PER_BLOB {
            let z = CONTEXT.domain().roots()[i].to_bytes_be().unwrap();
            let (proof, y) = CONTEXT.compute_kzg_proof(&blob, &z).unwrap();
            assert_eq!(&y[..], &blob[i * 32..(i + 1) * 32]);
            assert_eq!(CONTEXT.verify_kzg_proof(&commitment, &z, &y, &proof), Ok(()));
        }
    }

    #[test]
    fn test_blob_proof_batch() {
        let blobs: Vec<Vec<u8>> = (0..4).map(|_| random_blob()).collect();
        let commitments: Vec<[u8; 32]> = blobs
            .iter()
            .map(|blob| CONTEXT.blob_to_kzg_commitment(blob).unwrap())
            .collect();
        let proofs: Vec<[u8; 32]> = blobs
            .iter()
            .zip(commitments.iter())
            .map(|(blob, commitment)| CONTEXT.compute_blob_kzg_proof(blob, commitment).unwrap())
            .collect();

        assert_eq!(
            CONTEXT.verify_blob_kzg_proof_batch(&blobs, &commitments, &proofs),
            Ok(())
        );
        assert_eq!(CONTEXT.verify_blob_kzg_proof_batch(&[], &[], &[]), Ok(()));

        let mut tampered_blobs = blobs.clone();
        tampered_blobs[2] = random_blob();
        assert_eq!(
            CONTEXT.verify_blob_kzg_proof_batch(&tampered_blobs, &commitments, &proofs),
            Err(KzgError::VerificationFailed)
        );

        assert_eq!(
            CONTEXT.verify_blob_kzg_proof_batch(&blobs, &commitments, &proofs[..2]),
            Err(KzgError::LengthMismatch {
                commitments: 4,
                proofs: 2
            })
        );
        assert_eq!(
            CONTEXT.verify_blob_kzg_proof_batch(&blobs[..3], &commitments, &proofs),
            Err(KzgError::InvalidInputLength)
        );
    }

    #[test]
    fn test_malformed_inputs() {
        let blob = random_blob();
        let commitment = CONTEXT.blob_to_kzg_commitment(&blob).unwrap();

        assert_eq!(
            CONTEXT.blob_to_kzg_commitment(&blob[..blob.len() - 32]),
            Err(KzgError::InvalidInputLength)
        );

        let mut non_canonical_blob = blob.clone();
        non_canonical_blob[..32].copy_from_slice(&[0xff; 32]);
        assert!(matches!(
            CONTEXT.blob_to_kzg_commitment(&non_canonical_blob),
            Err(KzgError::DeserializationError(_))
        ));

        assert!(matches!(
            CONTEXT.compute_kzg_proof(&blob, &[0xff; 32]),
            Err(KzgError::DeserializationError(_))
        ));

        assert!(matches!(
            CONTEXT.compute_blob_kzg_proof(&blob, &[0xff; 32]),
            Err(KzgError::DeserializationError(_))
        ));

        let proof = CONTEXT.compute_blob_kzg_proof(&blob, &commitment).unwrap();
        assert!(matches!(
            CONTEXT.verify_blob_kzg_proof(&blob, &[0xff; 32], &proof),
            Err(KzgError::DeserializationError(_))
        ));
    }

    #[test]
    fn test_context_construction_errors() {
        assert_eq!(
            Context::new(SETUP.clone(), SETUP_LEN, 12),
            Err(KzgError::DomainSizeMismatch {
                expected: 16,
                actual: 12
            })
        );
        assert_eq!(
            Context::new(SETUP.clone(), SETUP_LEN, 128),
            Err(KzgError::InsufficientSetupPoints {
                required: 128,
                available: 64
            })
        );

        let mut g1 = SETUP.g1_monomial().to_vec();
        g1.swap(3, 4);
        let tampered = TrustedSetup::new(g1, SETUP.g2_monomial().to_vec());
        assert!(matches!(
            Context::new(tampered, SETUP_LEN, FIELD_ELEMENTS_PER_BLOB),
            Err(KzgError::MalformedTrustedSetup(_))
        ));
    }

    #[test]
    fn test_context_declared_setup_len() {
        // a setup that is longer or shorter than configured is rejected
        assert_eq!(
            Context::new(SETUP.clone(), 32, FIELD_ELEMENTS_PER_BLOB),
            Err(KzgError::SRSLengthMismatch {
                declared: 32,
                actual: SETUP_LEN
            })
        );

        let json = SETUP.to_json_string().unwrap();
        assert_eq!(
            Context::from_json_str(&json, SETUP_LEN + 1, FIELD_ELEMENTS_PER_BLOB),
            Err(KzgError::SRSLengthMismatch {
                declared: SETUP_LEN + 1,
                actual: SETUP_LEN
            })
        );
    }

    #[test]
    fn test_context_from_point_files_checks_blob_size_first() {
        let oversized = usize::MAX >> 1;
        assert_eq!(
            Context::from_point_files(
                "/nonexistent/g1.point",
                "/nonexistent/g2.point",
                16,
                oversized
            ),
            Err(KzgError::DomainTooLarge {
                requested_log2: usize::BITS - 1,
                max_log2: 28
            })
        );
        assert_eq!(
            Context::from_point_files("/nonexistent/g1.point", "/nonexistent/g2.point", 16, 12),
            Err(KzgError::DomainSizeMismatch {
                expected: 16,
                actual: 12
            })
        );

        // a huge point count is an io error, not an allocation failure
        assert!(matches!(
            Context::from_point_files(
                "/nonexistent/g1.point",
                "/nonexistent/g2.point",
                oversized,
                FIELD_ELEMENTS_PER_BLOB
            ),
            Err(KzgError::IoError(_))
        ));
    }

    #[test]
    fn test_context_from_json() {
        let json = SETUP.to_json_string().unwrap();
        let from_json = Context::from_json_str(&json, SETUP_LEN, FIELD_ELEMENTS_PER_BLOB).unwrap();
        assert_eq!(from_json, *CONTEXT);
        assert_eq!(from_json.field_elements_per_blob(), FIELD_ELEMENTS_PER_BLOB);

        let path = temp_path("setup.json");
        std::fs::write(&path, json).unwrap();
        let from_file =
            Context::from_json_file(path.to_str().unwrap(), SETUP_LEN, FIELD_ELEMENTS_PER_BLOB)
                .unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(from_file, *CONTEXT);

        assert!(matches!(
            Context::from_json_file("/nonexistent/setup.json", SETUP_LEN, FIELD_ELEMENTS_PER_BLOB),
            Err(KzgError::IoError(_))
        ));
    }

    #[test]
    fn test_context_from_point_files() {
        let g1_path = temp_path("g1.point");
        let g2_path = temp_path("g2.point");

        let mut g1_file = std::fs::File::create(&g1_path).unwrap();
        for point in SETUP.g1_monomial() {
            g1_file.write_all(&point.to_bytes_be().unwrap()).unwrap();
        }
        let mut g2_file = std::fs::File::create(&g2_path).unwrap();
        for point in SETUP.g2_monomial() {
            g2_file.write_all(&point.to_bytes_be().unwrap()).unwrap();
        }
        drop(g1_file);
        drop(g2_file);

        let context = Context::from_point_files(
            g1_path.to_str().unwrap(),
            g2_path.to_str().unwrap(),
            FIELD_ELEMENTS_PER_BLOB,
            FIELD_ELEMENTS_PER_BLOB,
        );
        std::fs::remove_file(&g1_path).unwrap();
        std::fs::remove_file(&g2_path).unwrap();
        let context = context.unwrap();

        // only the first num_g1_points G1 points are read
        let blob = random_blob();
        assert_eq!(
            context.blob_to_kzg_commitment(&blob),
            CONTEXT.blob_to_kzg_commitment(&blob)
        );
    }

    #[test]
    fn test_context_shared_between_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Context>();

        let blobs: Vec<Vec<u8>> = (0..4).map(|_| random_blob()).collect();
        std::thread::scope(|scope| {
            for blob in &blobs {
                scope.spawn(move || {
                    let commitment = CONTEXT.blob_to_kzg_commitment(blob).unwrap();
                    let proof = CONTEXT.compute_blob_kzg_proof(blob, &commitment).unwrap();
                    assert_eq!(
                        CONTEXT.verify_blob_kzg_proof(blob, &commitment, &proof),
                        Ok(())
                    );
                });
            }
        });
    }
}

use ark_bn254::{G1Affine, G2Affine};
use crossbeam_channel::{bounded, Receiver, Sender};
use da_kzg_bn254_primitives::{
    errors::KzgError, traits::ReadPointFromBytes, trusted_setup::TrustedSetup,
};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::thread;
use tracing::debug;

/// Chunks in flight between the reader thread and the decoders.
const CHANNEL_CAPACITY: usize = 1000;

/// Loads a monomial setup from two binary point files: `num_g1_points`
/// 32-byte G1 points and `num_g2_points` 64-byte G2 points, all in the
/// big-endian compressed encoding. Points are not validated against each
/// other here; pass the result through
/// [da_kzg_bn254_primitives::validator::validate].
pub fn read_setup_files(
    path_to_g1_points: &str,
    path_to_g2_points: &str,
    num_g1_points: usize,
    num_g2_points: usize,
) -> Result<TrustedSetup, KzgError> {
    let g1_monomial = parallel_read_points::<G1Affine>(path_to_g1_points, num_g1_points)?;
    let g2_monomial = parallel_read_points::<G2Affine>(path_to_g2_points, num_g2_points)?;
    Ok(TrustedSetup::new(g1_monomial, g2_monomial))
}

/// Reads the first `points_to_load` points of a file in parallel.
///
/// One reader thread pulls fixed size chunks from the file and fans them out
/// over a bounded channel to one decoder per cpu. The decoders send back
/// `(point, position)` pairs, which are sorted by position so the output
/// keeps file order.
///
/// # Errors
/// * [KzgError::IoError] if the file can't be opened or holds fewer than
///   `points_to_load` points
/// * [KzgError::DeserializationError] for the first chunk that is not a valid
///   point
pub fn parallel_read_points<T>(file_path: &str, points_to_load: usize) -> Result<Vec<T>, KzgError>
where
    T: ReadPointFromBytes + Send + 'static,
{
    // Channel contains (bytes, position) tuples. The position is used to
    // reorder the points after decoding them.
    let (sender, receiver) = bounded::<(Vec<u8>, usize)>(CHANNEL_CAPACITY);

    let path = file_path.to_owned();
    let reader_handle =
        thread::spawn(move || read_file_chunks(&path, sender, T::COMPRESSED_SIZE, points_to_load));

    let num_workers = num_cpus::get();
    let workers: Vec<_> = (0..num_workers)
        .map(|_| {
            let receiver = receiver.clone();
            thread::spawn(move || process_chunks::<T>(receiver))
        })
        .collect();
    drop(receiver);

    // Join every worker before looking at the reader so no thread is left
    // blocked on the channel.
    // points_to_load is caller supplied, so nothing is allocated up front
    let mut all_points = Vec::new();
    let mut first_decode_error = None;
    for worker in workers {
        match worker.join() {
            Ok(Ok(points)) => all_points.extend(points),
            Ok(Err(err)) => {
                first_decode_error.get_or_insert(err);
            },
            Err(_) => {
                first_decode_error
                    .get_or_insert(KzgError::IoError("decoder thread panicked".to_string()));
            },
        }
    }

    match reader_handle.join() {
        Ok(Ok(())) => {},
        Ok(Err(err)) => return Err(KzgError::IoError(format!("{}: {}", file_path, err))),
        Err(_) => return Err(KzgError::IoError("reader thread panicked".to_string())),
    }

    if let Some(err) = first_decode_error {
        return Err(err);
    }

    // Sort by original position to maintain order
    all_points.sort_unstable_by_key(|&(_, position)| position);

    if all_points.len() != points_to_load {
        return Err(KzgError::IoError(format!(
            "expected {} points, but got {}",
            points_to_load,
            all_points.len()
        )));
    }

    debug!(file = file_path, points = points_to_load, "read setup points");
    Ok(all_points.into_iter().map(|(point, _)| point).collect())
}

/// Decodes chunks until the channel is closed. Stops at the first invalid
/// chunk; dropping the receiver then lets the reader notice and stop early.
fn process_chunks<T>(receiver: Receiver<(Vec<u8>, usize)>) -> Result<Vec<(T, usize)>, KzgError>
where
    T: ReadPointFromBytes,
{
    let mut points = Vec::new();
    for (chunk, position) in receiver.iter() {
        let point = T::read_point_from_bytes_native_compressed_be(&chunk).map_err(|err| {
            KzgError::DeserializationError(format!("point {}: {}", position, err))
        })?;
        points.push((point, position));
    }
    Ok(points)
}

/// Sends `num_points` chunks of `point_size` bytes down the channel, each
/// tagged with its index in the file.
fn read_file_chunks(
    file_path: &str,
    sender: Sender<(Vec<u8>, usize)>,
    point_size: usize,
    num_points: usize,
) -> io::Result<()> {
    let file = File::open(file_path)?;
    let mut reader = BufReader::new(file);

    for position in 0..num_points {
        let mut buffer = vec![0u8; point_size];
        reader.read_exact(&mut buffer).map_err(|err| {
            if err.kind() == io::ErrorKind::UnexpectedEof {
                io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("file holds only {} of {} points", position, num_points),
                )
            } else {
                err
            }
        })?;
        // every decoder hung up after an error, which they report themselves
        if sender.send((buffer, position)).is_err() {
            break;
        }
    }
    Ok(())
}

use latch_core::{ImageView, Keypoint, LatchConfig, DESCRIPTOR_BYTES};
use crate::error::{LatchError, LatchResult};
use crate::packer::describe_keypoint;

/// Fewer keypoints than this per worker are not worth a thread
pub const MIN_KEYPOINTS_PER_WORKER: usize = 16;

/// Number of workers for `n_keypoints` given `available` threads, never below 1
pub fn worker_count(n_keypoints: usize, available: usize) -> usize {
    (n_keypoints / MIN_KEYPOINTS_PER_WORKER).min(available).max(1)
}

/// Keypoints per worker; the last range takes whatever is left
pub fn range_len(n_keypoints: usize, workers: usize) -> usize {
    n_keypoints.div_ceil(workers.max(1))
}

/// Describe `keypoints` in order into consecutive 64-byte blocks of `out`
pub fn describe_range(image: &ImageView<'_>, keypoints: &[Keypoint], out: &mut [u8]) {
    for (kp, block) in keypoints.iter().zip(out.chunks_exact_mut(DESCRIPTOR_BYTES)) {
        describe_keypoint(image, kp, block);
    }
}

/// Describe every keypoint into `out[i * 64 .. (i + 1) * 64]`.
///
/// Ranges are split up front so each worker owns a disjoint slice of `out`,
/// and the call returns only after every worker has finished. Output does
/// not depend on how many workers ran. Fails with
/// [`LatchError::OutputTooSmall`] when `out` cannot hold every block.
pub fn dispatch(
    image: &ImageView<'_>,
    keypoints: &[Keypoint],
    out: &mut [u8],
    cfg: &LatchConfig,
) -> LatchResult<()> {
    let n = keypoints.len();
    let expected_len = n * DESCRIPTOR_BYTES;
    if out.len() < expected_len {
        return Err(LatchError::OutputTooSmall {
            expected_len,
            actual_len: out.len(),
        });
    }
    let out = &mut out[..expected_len];

    let workers = if cfg.multithread {
        worker_count(n, cfg.n_threads)
    } else {
        1
    };

    if workers <= 1 {
        describe_range(image, keypoints, out);
        return Ok(());
    }

    let per_worker = range_len(n, workers);

    #[cfg(feature = "tracing")]
    tracing::debug!(keypoints = n, workers, per_worker, "dispatching descriptor ranges");

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("latch-worker-{}", i))
        .build()?;

    let image = *image;
    pool.scope(|s| {
        for (kps, blocks) in keypoints
            .chunks(per_worker)
            .zip(out.chunks_mut(per_worker * DESCRIPTOR_BYTES))
        {
            s.spawn(move |_| describe_range(&image, kps, blocks));
        }
    });

    Ok(())
}

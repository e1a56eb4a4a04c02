use latch_core::{Descriptor, ImageView, Keypoint, LatchConfig, DESCRIPTOR_BYTES};
use crate::dispatcher::dispatch;
use crate::error::{LatchError, LatchResult};
use crate::filter::retain_interior;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// LATCH descriptor engine bound to a threading configuration
#[derive(Debug, Clone)]
pub struct LatchExtractor {
    cfg: LatchConfig,
}

impl LatchExtractor {
    /// Creates a new extractor with validation
    pub fn new(cfg: LatchConfig) -> LatchResult<Self> {
        if cfg.n_threads == 0 {
            return Err(LatchError::InvalidThreadCount(cfg.n_threads));
        }
        Ok(Self { cfg })
    }

    /// Validates the image view before any pixel is touched
    fn validate_image(image: &ImageView<'_>) -> LatchResult<()> {
        if image.width == 0 || image.height == 0 {
            return Err(LatchError::InvalidImageSize {
                width: image.width,
                height: image.height,
            });
        }
        if image.stride < image.width {
            return Err(LatchError::InvalidStride {
                stride: image.stride,
                width: image.width,
            });
        }
        let expected_len = image.required_len();
        if image.data.len() < expected_len {
            return Err(LatchError::InvalidImageData {
                expected_len,
                actual_len: image.data.len(),
            });
        }
        Ok(())
    }

    /// Filter `keypoints` in place and write one 64-byte descriptor per survivor.
    ///
    /// Descriptor `i` lands at `out[i * 64 .. (i + 1) * 64]`; bytes past the last
    /// survivor are left untouched. Returns the number of descriptors written,
    /// which always equals the new `keypoints.len()`.
    #[cfg_attr(
        feature = "tracing",
        instrument(
            level = "debug",
            skip_all,
            fields(keypoints = keypoints.len(), width = image.width, height = image.height)
        )
    )]
    pub fn compute_into(
        &self,
        image: ImageView<'_>,
        keypoints: &mut Vec<Keypoint>,
        out: &mut [u8],
    ) -> LatchResult<usize> {
        Self::validate_image(&image)?;
        retain_interior(keypoints, image.width, image.height);

        let expected_len = keypoints.len() * DESCRIPTOR_BYTES;
        if out.len() < expected_len {
            return Err(LatchError::OutputTooSmall {
                expected_len,
                actual_len: out.len(),
            });
        }

        dispatch(&image, keypoints, out, &self.cfg)?;
        Ok(keypoints.len())
    }

    /// Like [`compute_into`](Self::compute_into) but allocates the descriptors
    pub fn compute(&self, image: ImageView<'_>, keypoints: &mut Vec<Keypoint>) -> LatchResult<Vec<Descriptor>> {
        let mut buf = vec![0u8; keypoints.len() * DESCRIPTOR_BYTES];
        let n = self.compute_into(image, keypoints, &mut buf)?;

        Ok(buf
            .chunks_exact(DESCRIPTOR_BYTES)
            .take(n)
            .map(|block| {
                let mut d = [0u8; DESCRIPTOR_BYTES];
                d.copy_from_slice(block);
                d
            })
            .collect())
    }

    /// Get extractor configuration
    pub fn config(&self) -> &LatchConfig {
        &self.cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use latch_core::Image;

    fn create_test_image(width: usize, height: usize) -> Image {
        (0..width * height)
            .map(|i| ((i % width) * 3 + (i / width) * 5) as u8)
            .collect()
    }

    #[test]
    fn test_zero_threads_rejected() {
        let cfg = LatchConfig { multithread: true, n_threads: 0 };
        assert!(matches!(LatchExtractor::new(cfg), Err(LatchError::InvalidThreadCount(0))));
    }

    #[test]
    fn test_invalid_dimensions() {
        let ex = LatchExtractor::new(LatchConfig::sequential()).unwrap();
        let mut kps = vec![Keypoint::new(50.0, 50.0, 7.0, 0.0)];
        let mut out = vec![0u8; 64];

        let result = ex.compute_into(ImageView::new(&[], 0, 100), &mut kps, &mut out);
        assert!(matches!(result, Err(LatchError::InvalidImageSize { .. })));
    }

    #[test]
    fn test_invalid_stride() {
        let ex = LatchExtractor::new(LatchConfig::sequential()).unwrap();
        let img = create_test_image(100, 100);
        let mut kps = vec![Keypoint::new(50.0, 50.0, 7.0, 0.0)];
        let mut out = vec![0u8; 64];

        let result = ex.compute_into(ImageView::with_stride(&img, 100, 100, 99), &mut kps, &mut out);
        assert!(matches!(result, Err(LatchError::InvalidStride { stride: 99, width: 100 })));
    }

    #[test]
    fn test_invalid_image_data() {
        let ex = LatchExtractor::new(LatchConfig::sequential()).unwrap();
        let img = create_test_image(100, 50);
        let mut kps = vec![Keypoint::new(50.0, 50.0, 7.0, 0.0)];
        let mut out = vec![0u8; 64];

        let result = ex.compute_into(ImageView::new(&img, 100, 100), &mut kps, &mut out);
        assert!(matches!(
            result,
            Err(LatchError::InvalidImageData { expected_len: 10_000, actual_len: 5_000 })
        ));
        // Nothing filtered on failed validation
        assert_eq!(kps.len(), 1);
    }

    #[test]
    fn test_output_too_small() {
        let ex = LatchExtractor::new(LatchConfig::sequential()).unwrap();
        let img = create_test_image(100, 100);
        let mut kps = vec![
            Keypoint::new(50.0, 50.0, 7.0, 0.0),
            Keypoint::new(60.0, 40.0, 7.0, 1.0),
        ];
        let mut out = vec![0u8; 100];

        let result = ex.compute_into(ImageView::new(&img, 100, 100), &mut kps, &mut out);
        assert!(matches!(
            result,
            Err(LatchError::OutputTooSmall { expected_len: 128, actual_len: 100 })
        ));
    }

    #[test]
    fn test_buffer_sized_for_survivors_only() {
        let ex = LatchExtractor::new(LatchConfig::sequential()).unwrap();
        let img = create_test_image(100, 100);
        let mut kps = vec![
            Keypoint::new(10.0, 50.0, 7.0, 0.0),
            Keypoint::new(50.0, 50.0, 7.0, 0.0),
        ];
        let mut out = vec![0u8; 64];

        let n = ex.compute_into(ImageView::new(&img, 100, 100), &mut kps, &mut out).unwrap();
        assert_eq!(n, 1);
        assert_eq!(kps, vec![Keypoint::new(50.0, 50.0, 7.0, 0.0)]);
    }

    #[test]
    fn test_all_filtered_is_not_an_error() {
        let ex = LatchExtractor::new(LatchConfig::default()).unwrap();
        let img = create_test_image(60, 60);
        let mut kps = vec![Keypoint::new(30.0, 30.0, 7.0, 0.0)];
        let mut out: Vec<u8> = Vec::new();

        let n = ex.compute_into(ImageView::new(&img, 60, 60), &mut kps, &mut out).unwrap();
        assert_eq!(n, 0);
        assert!(kps.is_empty());
    }

    #[test]
    fn test_compute_allocates_one_descriptor_per_survivor() {
        let ex = LatchExtractor::new(LatchConfig::sequential()).unwrap();
        let img = create_test_image(100, 100);
        let mut kps = vec![
            Keypoint::new(50.0, 50.0, 7.0, 0.0),
            Keypoint::new(99.0, 50.0, 7.0, 0.0),
            Keypoint::new(45.0, 55.0, 9.0, 2.0),
        ];

        let descs = ex.compute(ImageView::new(&img, 100, 100), &mut kps).unwrap();
        assert_eq!(descs.len(), 2);
        assert_eq!(kps.len(), 2);

        let mut out = vec![0u8; 128];
        let mut again = vec![
            Keypoint::new(50.0, 50.0, 7.0, 0.0),
            Keypoint::new(45.0, 55.0, 9.0, 2.0),
        ];
        ex.compute_into(ImageView::new(&img, 100, 100), &mut again, &mut out).unwrap();
        assert_eq!(&out[..64], &descs[0][..]);
        assert_eq!(&out[64..], &descs[1][..]);
    }
}

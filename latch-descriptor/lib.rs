//! LATCH (Learned Arrangements of Three Patch Codes) binary descriptors.
//!
//! Each of the 512 bits compares two patch distances: whether patch A is
//! closer to patch B than patch C is, in sum of squared differences over
//! 8x8 windows. Sample positions come from a fixed learned table and follow
//! the keypoint's scale and orientation.

pub mod builder;
pub mod comparator;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod extractor;
pub mod filter;
pub mod packer;
pub mod transform;
pub mod triplets;

pub use builder::LatchBuilder;
pub use config::DescriptorConfig;
pub use error::{LatchError, LatchResult};
pub use extractor::LatchExtractor;
pub use filter::{retain_interior, BORDER_MARGIN};
pub use latch_core::{Descriptor, Image, ImageView, Keypoint, LatchConfig, DESCRIPTOR_BYTES};

/// Compute LATCH descriptors for `keypoints` into a caller-owned buffer.
///
/// Keypoints within [`BORDER_MARGIN`] pixels of an edge are removed from
/// `keypoints` first. `descriptors` must hold at least 64 bytes per
/// surviving keypoint. Returns the number of descriptors written.
pub fn compute_latch(
    image: ImageView<'_>,
    keypoints: &mut Vec<Keypoint>,
    descriptors: &mut [u8],
    multithread: bool,
) -> LatchResult<usize> {
    let cfg = if multithread {
        LatchConfig::default()
    } else {
        LatchConfig::sequential()
    };
    LatchExtractor::new(cfg)?.compute_into(image, keypoints, descriptors)
}

use latch_core::{ImageView, Keypoint, DESCRIPTOR_BYTES};
use crate::comparator::compare_patches;
use crate::transform::KeypointFrame;
use crate::triplets::TRIPLETS;

/// Bits per descriptor byte
pub const BITS_PER_FRAGMENT: usize = 8;

/// Pack up to 8 bits into one byte, first bit in the most significant position
#[inline]
pub fn pack_fragment<I: IntoIterator<Item = bool>>(bits: I) -> u8 {
    bits.into_iter()
        .take(BITS_PER_FRAGMENT)
        .enumerate()
        .fold(0u8, |byte, (bit, set)| byte | ((set as u8) << (7 - bit)))
}

/// Compute the full descriptor of one keypoint into `block`.
///
/// `block` must be exactly [`DESCRIPTOR_BYTES`] long; every byte is overwritten.
pub fn describe_keypoint(image: &ImageView<'_>, kp: &Keypoint, block: &mut [u8]) {
    debug_assert_eq!(block.len(), DESCRIPTOR_BYTES);

    let frame = KeypointFrame::new(kp);
    for (fragment, triplets) in block.iter_mut().zip(TRIPLETS.chunks_exact(BITS_PER_FRAGMENT)) {
        *fragment = pack_fragment(
            triplets
                .iter()
                .map(|t| compare_patches(image, frame.sample_points(t))),
        );
    }
}

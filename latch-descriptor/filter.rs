use latch_core::Keypoint;

/// Keypoints closer than this to any edge are dropped before sampling.
///
/// Covers the largest clamped sample offset plus half the 8x8 patch window.
pub const BORDER_MARGIN: f32 = 36.0;

/// True when every patch sampled around `kp` stays inside a `width` x `height` image
#[inline]
pub fn is_interior(kp: &Keypoint, width: usize, height: usize) -> bool {
    let (w, h) = (width as f32, height as f32);
    !(kp.x <= BORDER_MARGIN
        || kp.y <= BORDER_MARGIN
        || kp.x >= w - BORDER_MARGIN
        || kp.y >= h - BORDER_MARGIN)
}

/// Drop keypoints too close to the border, keeping the order of the rest.
///
/// Returns how many keypoints were removed.
pub fn retain_interior(keypoints: &mut Vec<Keypoint>, width: usize, height: usize) -> usize {
    let before = keypoints.len();
    keypoints.retain(|kp| is_interior(kp, width, height));
    let removed = before - keypoints.len();

    #[cfg(feature = "tracing")]
    tracing::debug!(removed, kept = keypoints.len(), width, height, "border filter applied");

    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn kp(x: f32, y: f32) -> Keypoint {
        Keypoint::new(x, y, 7.0, 0.0)
    }

    #[test]
    fn test_left_margin_on_128_image() {
        let mut kps = vec![kp(35.0, 64.0), kp(37.0, 64.0)];
        let removed = retain_interior(&mut kps, 128, 128);
        assert_eq!(removed, 1);
        assert_eq!(kps, vec![kp(37.0, 64.0)]);
    }

    #[test]
    fn test_margin_is_inclusive() {
        assert!(!is_interior(&kp(36.0, 64.0), 128, 128));
        assert!(!is_interior(&kp(64.0, 36.0), 128, 128));
        assert!(!is_interior(&kp(92.0, 64.0), 128, 128));
        assert!(!is_interior(&kp(64.0, 92.0), 128, 128));
        assert!(is_interior(&kp(36.01, 91.99), 128, 128));
    }

    #[test]
    fn test_small_image_keeps_nothing() {
        let mut kps = vec![kp(30.0, 30.0), kp(36.5, 36.5)];
        assert_eq!(retain_interior(&mut kps, 72, 72), 2);
        assert!(kps.is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let mut kps = vec![
            kp(50.0, 50.0),
            kp(10.0, 50.0),
            kp(60.0, 70.0),
            kp(50.0, 120.0),
            kp(40.0, 40.0),
        ];
        retain_interior(&mut kps, 128, 128);
        assert_eq!(kps, vec![kp(50.0, 50.0), kp(60.0, 70.0), kp(40.0, 40.0)]);
    }

    #[test]
    fn test_empty_input() {
        let mut kps = Vec::new();
        assert_eq!(retain_interior(&mut kps, 640, 480), 0);
        assert!(kps.is_empty());
    }

    proptest! {
        #[test]
        fn prop_filter_matches_margin(
            width in 1usize..400,
            height in 1usize..400,
            coords in prop::collection::vec((0.0f32..400.0, 0.0f32..400.0), 0..64),
        ) {
            let original: Vec<Keypoint> = coords.iter().map(|&(x, y)| kp(x, y)).collect();
            let mut kps = original.clone();
            retain_interior(&mut kps, width, height);

            let (w, h) = (width as f32, height as f32);
            let expected: Vec<Keypoint> = original
                .into_iter()
                .filter(|k| k.x > 36.0 && k.y > 36.0 && k.x < w - 36.0 && k.y < h - 36.0)
                .collect();
            prop_assert_eq!(kps, expected);
        }
    }
}

use latch_core::Keypoint;
use crate::triplets::{Triplet, REFERENCE_SCALE};

/// Rotated offsets are clamped to this many pixels on each axis
pub const MAX_OFFSET: f32 = 32.0;

/// Integer pixel center of one sample patch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplePoint {
    pub x: i32,
    pub y: i32,
}

/// Per-keypoint similarity transform applied to every triplet.
///
/// Built once per keypoint and reused for all 512 records.
#[derive(Debug, Clone, Copy)]
pub struct KeypointFrame {
    x: f32,
    y: f32,
    sin: f32,
    cos: f32,
    scale: f32,
}

impl KeypointFrame {
    pub fn new(kp: &Keypoint) -> Self {
        // Trig in double precision, narrowed once, to match reference sample positions
        let (sin, cos) = (kp.angle as f64).sin_cos();
        Self {
            x: kp.x,
            y: kp.y,
            sin: sin as f32,
            cos: cos as f32,
            scale: kp.scale / REFERENCE_SCALE,
        }
    }

    /// Map one stored offset to an absolute pixel position.
    ///
    /// Scale, rotate, clamp to [`MAX_OFFSET`], translate, then round to the
    /// nearest pixel with ties going to the even neighbour.
    #[inline]
    pub fn project(&self, dx: f32, dy: f32) -> SamplePoint {
        let sx = dx * self.scale;
        let sy = dy * self.scale;
        let rx = (sx * self.cos - sy * self.sin).clamp(-MAX_OFFSET, MAX_OFFSET);
        let ry = (sx * self.sin + sy * self.cos).clamp(-MAX_OFFSET, MAX_OFFSET);
        SamplePoint {
            x: (rx + self.x).round_ties_even() as i32,
            y: (ry + self.y).round_ties_even() as i32,
        }
    }

    /// Patch centers A, B and C for one triplet
    #[inline]
    pub fn sample_points(&self, t: &Triplet) -> [SamplePoint; 3] {
        [
            self.project(t[0], t[3]),
            self.project(t[1], t[4]),
            self.project(t[2], t[5]),
        ]
    }
}

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Row-major 8-bit grayscale image
pub type Image = Vec<u8>;

/// Number of bytes in one LATCH descriptor
pub const DESCRIPTOR_BYTES: usize = 64;

/// 512-bit binary descriptor = 64 bytes
pub type Descriptor = [u8; DESCRIPTOR_BYTES];

/// Key-point ≙ detected location + scale + orientation (radians)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Keypoint {
    pub x: f32,      // Subpixel x coordinate
    pub y: f32,      // Subpixel y coordinate
    pub scale: f32,
    pub angle: f32,  // Radians
}

impl Keypoint {
    pub fn new(x: f32, y: f32, scale: f32, angle: f32) -> Self {
        Self { x, y, scale, angle }
    }
}

/// Borrowed 8-bit grayscale image whose rows may be padded.
///
/// Pixel `(x, y)` lives at `data[y * stride + x]`.
#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a> {
    pub data: &'a [u8],
    pub width: usize,
    pub height: usize,
    /// Distance in bytes between the starts of two consecutive rows
    pub stride: usize,
}

impl<'a> ImageView<'a> {
    /// View over a tightly packed image (`stride == width`)
    pub fn new(data: &'a [u8], width: usize, height: usize) -> Self {
        Self { data, width, height, stride: width }
    }

    pub fn with_stride(data: &'a [u8], width: usize, height: usize, stride: usize) -> Self {
        Self { data, width, height, stride }
    }

    /// Minimum buffer length holding every visible pixel
    pub fn required_len(&self) -> usize {
        if self.height == 0 {
            return 0;
        }
        self.stride * (self.height - 1) + self.width
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatchConfig {
    /// Fan work out over worker threads once there are enough keypoints
    pub multithread: bool,
    /// Upper bound on worker threads
    pub n_threads: usize,
}

impl LatchConfig {
    /// Run everything on the calling thread
    pub fn sequential() -> Self {
        Self {
            multithread: false,
            n_threads: 1,
        }
    }
}

impl Default for LatchConfig {
    fn default() -> Self {
        Self {
            multithread: true,
            n_threads: num_cpus::get().max(1),
        }
    }
}

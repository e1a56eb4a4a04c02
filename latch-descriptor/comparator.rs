use latch_core::ImageView;
use crate::transform::SamplePoint;
use std::ops::RangeInclusive;

/// Width of a sample patch in pixels
pub const PATCH_WIDTH: usize = 8;

/// Row offsets covered by a sample patch, relative to its center.
///
/// The window reaches one row further below the center than above. Columns
/// follow the same -3..=4 layout.
pub const PATCH_ROWS: RangeInclusive<i32> = -3..=4;

/// First column of a patch, relative to its center
const PATCH_LEFT: i32 = -3;

/// Copy the 8 pixels of one patch row starting at column `center_x - 3`.
///
/// Pixels that would fall outside the buffer read as 0. The border filter
/// keeps well-formed calls away from that path.
#[inline]
fn load_row(image: &ImageView<'_>, center_x: i32, y: i32) -> [u8; PATCH_WIDTH] {
    let mut row = [0u8; PATCH_WIDTH];
    let start = y as i64 * image.stride as i64 + (center_x + PATCH_LEFT) as i64;
    if start < 0 {
        return row;
    }
    let start = start as usize;
    match image.data.get(start..start + PATCH_WIDTH) {
        Some(src) => row.copy_from_slice(src),
        None => {
            if let Some(tail) = image.data.get(start..) {
                row[..tail.len()].copy_from_slice(tail);
            }
        }
    }
    row
}

/// `SSD(A, B) - SSD(C, B)` over the three 8x8 patches.
///
/// Each sum is at most 64 * 255^2, so plain `i32` accumulation cannot overflow.
pub fn ssd_difference(image: &ImageView<'_>, a: SamplePoint, b: SamplePoint, c: SamplePoint) -> i32 {
    let mut sum_a = 0i32;
    let mut sum_c = 0i32;

    for dy in PATCH_ROWS {
        let row_a = load_row(image, a.x, a.y + dy);
        let row_b = load_row(image, b.x, b.y + dy);
        let row_c = load_row(image, c.x, c.y + dy);

        for i in 0..PATCH_WIDTH {
            let pb = row_b[i] as i32;
            let da = row_a[i] as i32 - pb;
            let dc = row_c[i] as i32 - pb;
            sum_a += da * da;
            sum_c += dc * dc;
        }
    }

    sum_a - sum_c
}

/// Descriptor bit for one triplet: set iff patch A is strictly closer to B than C is.
///
/// Ties leave the bit clear.
#[inline]
pub fn compare_patches(image: &ImageView<'_>, [a, b, c]: [SamplePoint; 3]) -> bool {
    ssd_difference(image, a, b, c).is_negative()
}

#[cfg(test)]
mod tests {
    use super::*;
    use latch_core::Image;

    const W: usize = 32;
    const H: usize = 32;

    fn create_test_image(value: u8) -> Image {
        vec![value; W * H]
    }

    /// Fill the 8x8 window of the patch centered at `p`
    fn paint_patch(img: &mut Image, p: SamplePoint, value: u8) {
        for dy in PATCH_ROWS {
            for dx in -3..=4 {
                let x = (p.x + dx) as usize;
                let y = (p.y + dy) as usize;
                img[y * W + x] = value;
            }
        }
    }

    fn pt(x: i32, y: i32) -> SamplePoint {
        SamplePoint { x, y }
    }

    #[test]
    fn test_uniform_image_is_a_tie() {
        let img = create_test_image(90);
        let view = ImageView::new(&img, W, H);
        let pts = [pt(8, 8), pt(16, 8), pt(24, 20)];
        assert_eq!(ssd_difference(&view, pts[0], pts[1], pts[2]), 0);
        assert!(!compare_patches(&view, pts));
    }

    #[test]
    fn test_equal_distances_clear_the_bit() {
        // A and C are equally far from B, in opposite directions
        let mut img = create_test_image(100);
        let (a, b, c) = (pt(6, 6), pt(16, 16), pt(25, 6));
        paint_patch(&mut img, a, 80);
        paint_patch(&mut img, c, 120);
        let view = ImageView::new(&img, W, H);

        assert_eq!(ssd_difference(&view, a, b, c), 0);
        assert!(!compare_patches(&view, [a, b, c]));
    }

    #[test]
    fn test_closer_a_sets_the_bit() {
        let mut img = create_test_image(100);
        let (a, b, c) = (pt(6, 6), pt(16, 16), pt(25, 6));
        paint_patch(&mut img, a, 110);
        paint_patch(&mut img, c, 160);
        let view = ImageView::new(&img, W, H);

        assert_eq!(ssd_difference(&view, a, b, c), 64 * (100 - 3600));
        assert!(compare_patches(&view, [a, b, c]));
        assert!(!compare_patches(&view, [c, b, a]));
    }

    #[test]
    fn test_window_rows_are_asymmetric() {
        // Only the row 4 below A's center differs from B
        let mut img = create_test_image(50);
        let (a, b, c) = (pt(8, 8), pt(20, 8), pt(20, 20));
        for x in 5..13 {
            img[12 * W + x] = 60;
        }
        let view = ImageView::new(&img, W, H);
        assert_eq!(ssd_difference(&view, a, b, c), 8 * 100);

        // Row 4 above is outside the window
        let mut img = create_test_image(50);
        for x in 5..13 {
            img[4 * W + x] = 60;
        }
        let view = ImageView::new(&img, W, H);
        assert_eq!(ssd_difference(&view, a, b, c), 0);
    }

    #[test]
    fn test_window_columns_are_asymmetric() {
        let mut img = create_test_image(50);
        let (a, b, c) = (pt(8, 8), pt(20, 8), pt(20, 20));
        for y in 5..13 {
            img[y * W + 12] = 53;
            img[y * W + 4] = 200;
        }
        let view = ImageView::new(&img, W, H);
        assert_eq!(ssd_difference(&view, a, b, c), 8 * 9);
    }

    #[test]
    fn test_padded_stride() {
        // Padding bytes must never be sampled
        const STRIDE: usize = 40;
        let mut img = vec![255u8; STRIDE * H];
        for y in 0..H {
            for x in 0..W {
                img[y * STRIDE + x] = 70;
            }
        }
        let view = ImageView::with_stride(&img, W, H, STRIDE);
        let pts = [pt(10, 10), pt(20, 12), pt(12, 20)];
        assert_eq!(ssd_difference(&view, pts[0], pts[1], pts[2]), 0);
    }

    #[test]
    fn test_worst_case_fits_in_i32() {
        let mut img = create_test_image(0);
        let (a, b, c) = (pt(6, 6), pt(16, 16), pt(25, 6));
        paint_patch(&mut img, a, 255);
        let view = ImageView::new(&img, W, H);
        assert_eq!(ssd_difference(&view, a, b, c), 64 * 255 * 255);
        assert_eq!(ssd_difference(&view, c, b, a), -64 * 255 * 255);
    }

    #[test]
    fn test_reads_past_the_buffer_are_zero() {
        let img = create_test_image(10);
        let view = ImageView::new(&img, W, H);
        assert_eq!(load_row(&view, (W - 2) as i32, (H - 1) as i32), [10, 10, 10, 10, 10, 0, 0, 0]);
        assert_eq!(load_row(&view, 4, H as i32), [0; PATCH_WIDTH]);
        assert_eq!(load_row(&view, 1, 0), [0; PATCH_WIDTH]);
    }
}

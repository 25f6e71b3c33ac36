//! Binary mask dilation by local summing and clamping.
use super::convolve::apply_kernel;
use crate::image::ImageRgbU8;

/// Grow the "on" pixels of a binary mask: each pixel becomes the plain box
/// sum of its neighborhood, clamped to `[0, 255]` and replicated across the
/// first three channels. Any activated neighbor saturates the result, which
/// thickens edge strokes by `dilation_radius` pixels.
///
/// Same scratch-then-commit double buffering as the edge detector. No-op
/// when the buffer has fewer than 3 channels.
pub fn dilate(img: &mut ImageRgbU8, dilation_radius: usize) {
    if img.channels < 3 {
        return;
    }

    let mut scratch = vec![0u8; img.data.len()];

    for y in 0..img.h {
        for x in 0..img.w {
            let sum = apply_kernel(img, x, y, None, dilation_radius);
            let value = if sum.x > 255.0 { 255 } else { sum.x as u8 };
            let off = img.idx(x, y);
            scratch[off..off + 3].fill(value);
        }
    }

    super::commit_rgb(img, &scratch);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_zero_mask_stays_zero() {
        let mut img = ImageRgbU8::new(7, 5, 3);
        dilate(&mut img, 2);
        assert!(img.data.iter().all(|&v| v == 0));
    }

    #[test]
    fn single_pixel_grows_by_the_radius() {
        let mut img = ImageRgbU8::new(5, 5, 3);
        img.fill_rgb(2, 2, 255);
        dilate(&mut img, 1);
        for y in 0..5 {
            for x in 0..5 {
                let off = img.idx(x, y);
                let near = x.abs_diff(2) <= 1 && y.abs_diff(2) <= 1;
                let expected = if near { 255 } else { 0 };
                assert_eq!(img.data[off], expected, "wrong value at ({x},{y})");
            }
        }
    }

    #[test]
    fn sums_above_255_clamp() {
        let mut img = ImageRgbU8::new(3, 1, 3);
        img.fill_rgb(0, 0, 255);
        img.fill_rgb(1, 0, 255);
        dilate(&mut img, 1);
        // (1, 0) sees two activated neighbors: 510 clamps to 255.
        assert_eq!(img.data[img.idx(1, 0)], 255);
    }

    #[test]
    fn one_channel_buffer_is_untouched() {
        let mut img = ImageRgbU8::new(4, 4, 1);
        img.data.fill(255);
        let before = img.clone();
        dilate(&mut img, 1);
        assert_eq!(img, before);
    }
}

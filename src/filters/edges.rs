//! Edge detection: Sobel gradient magnitude binarized against a locally
//! adaptive threshold.
//!
//! The threshold for each pixel is the unweighted box average of its
//! neighborhood. The divisor is always the full window area `(2r+1)²` even
//! though out-of-range taps are skipped, so border thresholds come out low;
//! that approximation is part of the contract.
//!
//! Binarization compares the red channel of the magnitude against the red
//! channel of the threshold with `>=`: equal counts as edge. On a uniform
//! black image both sides are zero everywhere, so every pixel binarizes to
//! an edge.
use super::convolve::apply_kernel;
use crate::image::ImageRgbU8;

pub(crate) const SOBEL_X: [i32; 9] = [-1, 0, 1, -2, 0, 2, -1, 0, 1];
pub(crate) const SOBEL_Y: [i32; 9] = [1, 2, 1, 0, 0, 0, -1, -2, -1];

/// Replace the image with its binarized edge map: 255 on the first three
/// channels where the Sobel magnitude reaches the local box average, else 0.
///
/// Double-buffered: every pixel's gradient and threshold read the original
/// neighborhood, so results are staged in scratch and committed after the
/// full scan. No-op when the buffer has fewer than 3 channels.
pub fn detect_edges(img: &mut ImageRgbU8, local_threshold_radius: usize) {
    if img.channels < 3 {
        return;
    }

    let window = 2 * local_threshold_radius + 1;
    let area = (window * window) as f32;
    let mut scratch = vec![0u8; img.data.len()];

    for y in 0..img.h {
        for x in 0..img.w {
            let sum_x = apply_kernel(img, x, y, Some(&SOBEL_X), 1);
            let sum_y = apply_kernel(img, x, y, Some(&SOBEL_Y), 1);
            let magnitude = sum_x.abs() + sum_y.abs();

            // Local brightness average used as the binarization cutoff.
            let threshold = apply_kernel(img, x, y, None, local_threshold_radius) / area;

            let value = if magnitude.x >= threshold.x { 255 } else { 0 };
            let off = img.idx(x, y);
            scratch[off..off + 3].fill(value);
        }
    }

    super::commit_rgb(img, &scratch);
}

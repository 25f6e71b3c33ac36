//! Per-pixel filter stages: kernel convolution, adaptive edge detection,
//! binary mask dilation, image blending and grayscale reduction.
//!
//! Every stage shares the same contract:
//!
//! - Buffers with fewer than 3 channels are left untouched (silent no-op);
//!   the algorithms are undefined on non-color data.
//! - Out-of-bounds kernel taps are skipped — no mirroring, no wraparound.
//!   Averages still divide by the full window area near borders; the
//!   resulting bias is accepted, not corrected.
//! - Stages whose output depends on unmodified neighbor values (edge
//!   detection, dilation) compute into a scratch buffer and commit the
//!   result only after the full scan. In-place mutation mid-scan would feed
//!   already-updated neighbors into later pixels.
//! - Extra channels beyond the first three (alpha) pass through unmodified.

pub mod combine;
pub mod convolve;
pub mod dilate;
pub mod edges;
pub mod grayscale;

pub use combine::combine;
pub use convolve::apply_kernel;
pub use dilate::dilate;
pub use edges::detect_edges;
pub use grayscale::grayscale;

use crate::image::ImageRgbU8;

/// Commit a scratch buffer: copy the first three channels of every pixel
/// back into `img`, leaving extra channels as they were.
pub(crate) fn commit_rgb(img: &mut ImageRgbU8, scratch: &[u8]) {
    for y in 0..img.h {
        for x in 0..img.w {
            let off = img.idx(x, y);
            img.data[off..off + 3].copy_from_slice(&scratch[off..off + 3]);
        }
    }
}

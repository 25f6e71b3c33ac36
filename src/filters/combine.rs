//! Per-channel blending of two same-size images.
use crate::image::ImageRgbU8;

/// Blend `image1` into `image2`: per pixel, per channel (first three),
/// compute `image1 ± image2`, clamp to `[0, 255]` and write the result into
/// `image2`. `image1` is left unmodified.
///
/// With `subtract = true` this carves a dilated edge mask out of the
/// original photograph: activated mask pixels drive the result to black.
///
/// No-op when the buffers have fewer than 3 channels or their shapes differ.
pub fn combine(image1: &ImageRgbU8, image2: &mut ImageRgbU8, subtract: bool) {
    if image1.channels < 3
        || image1.channels != image2.channels
        || image1.w != image2.w
        || image1.h != image2.h
    {
        return;
    }

    for y in 0..image2.h {
        for x in 0..image2.w {
            let off = image2.idx(x, y);
            for c in 0..3 {
                let v1 = image1.data[off + c] as i32;
                let v2 = image2.data[off + c] as i32;
                let v = if subtract { v1 - v2 } else { v1 + v2 };
                image2.data[off + c] = v.clamp(0, 255) as u8;
            }
        }
    }
}

//! Grayscale reduction replicated across the color channels.
use crate::image::ImageRgbU8;

/// Replace the first three channels of every pixel with the weighted
/// luminance `R·0.21 + G·0.71 + B·0.07`.
///
/// The weights sum to 0.99 and the float sum is narrowed through an integer
/// cast before landing back in a byte, so repeated application keeps eroding
/// the value by roughly one percent; black is the only fixed point.
/// No-op when the buffer has fewer than 3 channels.
pub fn grayscale(img: &mut ImageRgbU8) {
    if img.channels < 3 {
        return;
    }

    for y in 0..img.h {
        for x in 0..img.w {
            let off = img.idx(x, y);
            let sum = img.data[off] as f32 * 0.21
                + img.data[off + 1] as f32 * 0.71
                + img.data[off + 2] as f32 * 0.07;
            // Truncate through an integer, not a round: max value is 252.45
            // so the narrowing never wraps.
            let value = sum as i32 as u8;
            img.data[off..off + 3].fill(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_color_reduces_to_truncated_luminance() {
        let mut img = ImageRgbU8::new(1, 1, 3);
        img.data.copy_from_slice(&[100, 150, 200]);
        grayscale(&mut img);
        // 100*0.21 + 150*0.71 + 200*0.07 = 141.5, truncated to 141.
        assert_eq!(img.data, vec![141, 141, 141]);
    }

    #[test]
    fn channels_are_equalized() {
        let mut img = ImageRgbU8::new(4, 4, 3);
        for (i, v) in img.data.iter_mut().enumerate() {
            *v = (i * 31 % 256) as u8;
        }
        grayscale(&mut img);
        for y in 0..4 {
            for x in 0..4 {
                let off = img.idx(x, y);
                assert_eq!(img.data[off], img.data[off + 1]);
                assert_eq!(img.data[off], img.data[off + 2]);
            }
        }
    }

    #[test]
    fn second_pass_applies_the_same_reduction_to_the_gray_value() {
        // The weights sum to 0.99, so a second pass maps v to trunc(0.99*v)
        // rather than leaving it alone; black is the only fixed point.
        let mut img = ImageRgbU8::new(1, 1, 3);
        img.data.copy_from_slice(&[100, 150, 200]);
        grayscale(&mut img);
        let v = img.data[0];
        grayscale(&mut img);
        let expected =
            (v as f32 * 0.21 + v as f32 * 0.71 + v as f32 * 0.07) as i32 as u8;
        assert_eq!(img.data[0], expected);
        assert!(img.data[0] <= v);
    }

    #[test]
    fn black_is_a_fixed_point() {
        let mut img = ImageRgbU8::new(3, 3, 3);
        grayscale(&mut img);
        grayscale(&mut img);
        assert!(img.data.iter().all(|&v| v == 0));
    }

    #[test]
    fn two_channel_buffer_is_untouched() {
        let mut img = ImageRgbU8::new(3, 3, 2);
        img.data.fill(123);
        let before = img.clone();
        grayscale(&mut img);
        assert_eq!(img, before);
    }
}

use cartoon_filter::ImageRgbU8;

/// Generates a solid-color interleaved RGB buffer.
pub fn solid_rgb(width: usize, height: usize, color: [u8; 3]) -> ImageRgbU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = ImageRgbU8::new(width, height, 3);
    for y in 0..height {
        for x in 0..width {
            let off = img.idx(x, y);
            img.data[off..off + 3].copy_from_slice(&color);
        }
    }
    img
}

/// Generates a quadrant image: `top_left` fills the top-left block, the
/// other three quadrants take `other`.
pub fn quadrants_rgb(
    width: usize,
    height: usize,
    top_left: [u8; 3],
    other: [u8; 3],
) -> ImageRgbU8 {
    assert!(width > 1 && height > 1, "need room for four quadrants");

    let mut img = ImageRgbU8::new(width, height, 3);
    for y in 0..height {
        for x in 0..width {
            let off = img.idx(x, y);
            let color = if x < width / 2 && y < height / 2 {
                top_left
            } else {
                other
            };
            img.data[off..off + 3].copy_from_slice(&color);
        }
    }
    img
}

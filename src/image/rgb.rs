//! Owned interleaved 8-bit color image in row-major layout.
//!
//! The buffer carries `channels` bytes per pixel; the processing stages read
//! and write the first three channels and pass any extra channels (alpha)
//! through untouched. The pipeline mutates the buffer in place and never
//! resizes it.
use nalgebra::Vector3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRgbU8 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Interleaved channels per pixel (3 = RGB, 4 = RGBA, ...)
    pub channels: usize,
    /// Backing storage in row-major order, `channels` bytes per pixel
    pub data: Vec<u8>,
}

impl ImageRgbU8 {
    /// Construct a zero-initialized buffer of size `w × h × channels`.
    pub fn new(w: usize, h: usize, channels: usize) -> Self {
        Self {
            w,
            h,
            channels,
            data: vec![0; w * h * channels],
        }
    }

    /// Wrap an existing interleaved buffer, checking its length.
    pub fn from_raw(w: usize, h: usize, channels: usize, data: Vec<u8>) -> Result<Self, String> {
        let expected = w * h * channels;
        if data.len() != expected {
            return Err(format!(
                "buffer length {} does not match {w}x{h}x{channels} ({expected})",
                data.len()
            ));
        }
        Ok(Self {
            w,
            h,
            channels,
            data,
        })
    }

    #[inline]
    /// Convert (x, y) to the linear index of the pixel's first channel.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        self.channels * (y * self.w + x)
    }

    #[inline]
    /// First three channels at (x, y) as a float color vector.
    ///
    /// Requires `channels >= 3`; the stages guard this before scanning.
    pub fn pixel(&self, x: usize, y: usize) -> Vector3<f32> {
        let off = self.idx(x, y);
        Vector3::new(
            self.data[off] as f32,
            self.data[off + 1] as f32,
            self.data[off + 2] as f32,
        )
    }

    #[inline]
    /// Write a color vector into the first three channels at (x, y).
    pub fn set_rgb(&mut self, x: usize, y: usize, color: Vector3<f32>) {
        let off = self.idx(x, y);
        self.data[off] = color.x as u8;
        self.data[off + 1] = color.y as u8;
        self.data[off + 2] = color.z as u8;
    }

    #[inline]
    /// Replicate one value across the first three channels at (x, y).
    pub fn fill_rgb(&mut self, x: usize, y: usize, value: u8) {
        let off = self.idx(x, y);
        self.data[off..off + 3].fill(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_rejects_wrong_length() {
        let err = ImageRgbU8::from_raw(2, 2, 3, vec![0u8; 11]);
        assert!(err.is_err(), "expected length mismatch to be rejected");
    }

    #[test]
    fn indexing_respects_channels() {
        let mut img = ImageRgbU8::new(4, 3, 4);
        img.fill_rgb(2, 1, 200);
        let off = img.idx(2, 1);
        assert_eq!(off, 4 * (1 * 4 + 2));
        assert_eq!(&img.data[off..off + 4], &[200, 200, 200, 0]);
        assert_eq!(img.pixel(2, 1), nalgebra::Vector3::new(200.0, 200.0, 200.0));
    }
}

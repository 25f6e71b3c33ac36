//! I/O helpers for color images and JSON.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into an owned interleaved RGB buffer.
//! - `save_rgb_image`: write the first three channels of an [`ImageRgbU8`] to disk.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::ImageRgbU8;
use image::{Rgb, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to interleaved 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<ImageRgbU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    ImageRgbU8::from_raw(width, height, 3, img.into_raw())
        .map_err(|e| format!("Failed to wrap {}: {e}", path.display()))
}

/// Save the first three channels of a color buffer to a PNG/JPEG/etc.
pub fn save_rgb_image(img: &ImageRgbU8, path: &Path) -> Result<(), String> {
    if img.channels < 3 {
        return Err(format!(
            "cannot save {}-channel buffer as RGB: {}",
            img.channels,
            path.display()
        ));
    }
    ensure_parent_dir(path)?;
    let mut out = RgbImage::new(img.w as u32, img.h as u32);
    for y in 0..img.h {
        for x in 0..img.w {
            let off = img.idx(x, y);
            out.put_pixel(
                x as u32,
                y as u32,
                Rgb([img.data[off], img.data[off + 1], img.data[off + 2]]),
            );
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

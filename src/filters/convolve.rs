//! Kernel convolution primitive shared by the edge detector and the dilator.
use crate::image::ImageRgbU8;
use nalgebra::Vector3;

/// Sum the `(2·radius+1)²` neighborhood of (x, y), weighting each pixel by
/// the matching kernel entry, or by 1 when no kernel is supplied.
///
/// The kernel is an odd-sized square array of signed weights addressed
/// top-left to bottom-right: offset `(k, l)` with `k, l ∈ [-radius, radius]`
/// maps to index `(k+radius)·(2·radius+1) + (l+radius)`. Neighbors outside
/// the image contribute nothing; the caller is responsible for any divisor.
///
/// Read-only on the image; only the first three channels participate.
pub fn apply_kernel(
    img: &ImageRgbU8,
    x: usize,
    y: usize,
    kernel: Option<&[i32]>,
    radius: usize,
) -> Vector3<f32> {
    let side = 2 * radius + 1;
    let r = radius as isize;
    let mut sum = Vector3::zeros();

    for k in -r..=r {
        let yy = y as isize + k;
        if yy < 0 || yy >= img.h as isize {
            continue;
        }
        for l in -r..=r {
            let xx = x as isize + l;
            if xx < 0 || xx >= img.w as isize {
                continue;
            }
            let color = img.pixel(xx as usize, yy as usize);
            match kernel {
                None => sum += color,
                Some(weights) => {
                    let ki = (k + r) as usize;
                    let kj = (l + r) as usize;
                    sum += weights[ki * side + kj] as f32 * color;
                }
            }
        }
    }

    sum
}

use super::region::Region;
use crate::image::ImageRgbU8;
use nalgebra::Vector3;

/// Grid sentinel for pixels not yet assigned to a region.
const UNASSIGNED: u32 = u32::MAX;

/// Partition the image into connected regions of similar color and flatten
/// each region to its mean, in place. Returns the number of regions created.
///
/// One row-major forward pass assigns every pixel to a neighboring region
/// or founds a new one; a second pass overwrites each pixel's first three
/// channels with its region's running mean. Only previously finalized
/// region identities and original colors are read during the scan, so no
/// scratch buffer is needed before the flatten pass.
///
/// No-op (returning 0) when the buffer has fewer than 3 channels.
pub fn segment_regions(img: &mut ImageRgbU8) -> usize {
    if img.channels < 3 {
        return 0;
    }

    let (w, h) = (img.w, img.h);
    let mut regions: Vec<Region> = Vec::new();
    let mut assigned = vec![UNASSIGNED; w * h];

    for y in 0..h {
        for x in 0..w {
            let color = img.pixel(x, y);
            let mut candidate: Option<u32> = None;

            // Top-left neighbor: initial candidate whenever it fits,
            // regardless of fit quality.
            if y > 0 && x > 0 {
                let handle = assigned[(y - 1) * w + (x - 1)];
                if regions[handle as usize].check_if_similar(color) {
                    candidate = Some(handle);
                }
            }

            // Top neighbor competes on distance to the running mean.
            if y > 0 {
                let handle = assigned[(y - 1) * w + x];
                if regions[handle as usize].check_if_similar(color) {
                    candidate = Some(closer_region(&regions, candidate, handle, color));
                }
            }

            // Left neighbor, same competition rule.
            if x > 0 {
                let handle = assigned[y * w + (x - 1)];
                if regions[handle as usize].check_if_similar(color) {
                    candidate = Some(closer_region(&regions, candidate, handle, color));
                }
            }

            let handle = candidate.unwrap_or_else(|| {
                regions.push(Region::new());
                (regions.len() - 1) as u32
            });
            assigned[y * w + x] = handle;
            regions[handle as usize].add_pixel(color);
        }
    }

    // Flatten: every pixel takes the mean color of its region.
    for y in 0..h {
        for x in 0..w {
            let handle = assigned[y * w + x];
            img.set_rgb(x, y, regions[handle as usize].avg());
        }
    }

    regions.len()
}

/// Keep `current` unless `challenger` sits strictly closer to the pixel.
fn closer_region(
    regions: &[Region],
    current: Option<u32>,
    challenger: u32,
    color: Vector3<f32>,
) -> u32 {
    match current {
        None => challenger,
        Some(cur) => {
            let cur_dist = (color - regions[cur as usize].avg()).norm();
            let challenger_dist = (color - regions[challenger as usize].avg()).norm();
            if cur_dist > challenger_dist {
                challenger
            } else {
                cur
            }
        }
    }
}

//! Cartoon pipeline orchestrating the classical-vision stages.
//!
//! Fixed sequence, run once per call on a working buffer:
//! grayscale → edge detect → dilate → combine(original, edges, subtract) →
//! segment. The original colors are cloned up front so the dilated edge
//! mask can be carved out of the photograph before segmentation.
//!
//! Single-threaded and synchronous: every stage is a full-image scan that
//! completes before the next stage starts, and the buffer is exclusively
//! owned for the pipeline's duration. There is no cancellation — a run
//! either completes fully or (on a sub-3-channel buffer) touches nothing.
//!
//! Typical usage:
//! ```no_run
//! use cartoon_filter::{CartoonFilter, CartoonParams, ImageRgbU8};
//!
//! # fn example(img: &mut ImageRgbU8) {
//! let filter = CartoonFilter::new(CartoonParams::default());
//! let report = filter.process(img);
//! println!("{} regions in {:.1} ms", report.region_count, report.timing.total_ms);
//! # }
//! ```

mod params;

pub use params::CartoonParams;

use crate::diagnostics::TimingBreakdown;
use crate::filters::{combine, detect_edges, dilate, grayscale};
use crate::image::ImageRgbU8;
use crate::segment::segment_regions;
use log::debug;
use serde::Serialize;
use std::time::Instant;

/// Outcome of one pipeline run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartoonReport {
    /// Number of color regions created by the segmentation stage.
    pub region_count: usize,
    /// Per-stage and total wall-clock timings.
    pub timing: TimingBreakdown,
}

/// Orchestrator sequencing grayscale, edge detection, dilation, blending
/// and segmentation over one image buffer.
pub struct CartoonFilter {
    params: CartoonParams,
}

impl CartoonFilter {
    /// Create a pipeline with the supplied parameters.
    pub fn new(params: CartoonParams) -> Self {
        Self { params }
    }

    /// Run the full pipeline in place on `img` and report what happened.
    ///
    /// A buffer with fewer than 3 channels makes every stage a no-op; the
    /// report then carries a region count of zero.
    pub fn process(&self, img: &mut ImageRgbU8) -> CartoonReport {
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();

        // Pristine copy for the blend stage.
        let original = img.clone();

        let start = Instant::now();
        grayscale(img);
        timing.push("grayscale", elapsed_ms(start));

        let start = Instant::now();
        detect_edges(img, self.params.local_threshold_radius);
        timing.push("detect_edges", elapsed_ms(start));
        debug!(
            "CartoonFilter::process edges binarized (local_threshold_radius={})",
            self.params.local_threshold_radius
        );

        let start = Instant::now();
        dilate(img, self.params.dilation_radius);
        timing.push("dilate", elapsed_ms(start));

        // Subtractive blend: edge strokes become dark lines in the original.
        let start = Instant::now();
        combine(&original, img, true);
        timing.push("combine", elapsed_ms(start));

        let start = Instant::now();
        let region_count = segment_regions(img);
        timing.push("segment", elapsed_ms(start));
        debug!("CartoonFilter::process segmentation created {region_count} regions");

        timing.total_ms = elapsed_ms(total_start);
        CartoonReport {
            region_count,
            timing,
        }
    }
}

/// Copy the first three channels of every pixel from `original` back into
/// `img`, undoing a previous run so the pipeline can be applied again with
/// different parameters. Extra channels stay as they are.
///
/// No-op when the buffers have fewer than 3 channels or their shapes differ.
pub fn restore_original(original: &ImageRgbU8, img: &mut ImageRgbU8) {
    if original.channels < 3
        || original.channels != img.channels
        || original.w != img.w
        || original.h != img.h
    {
        return;
    }
    for y in 0..img.h {
        for x in 0..img.w {
            let off = img.idx(x, y);
            img.data[off..off + 3].copy_from_slice(&original.data[off..off + 3]);
        }
    }
}

#[inline]
fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

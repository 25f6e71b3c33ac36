#![doc = include_str!("../README.md")]

pub mod diagnostics;
pub mod filters;
pub mod image;
pub mod pipeline;
pub mod segment;

// --- High-level re-exports -------------------------------------------------

// Main entry points: pipeline + report.
pub use crate::image::ImageRgbU8;
pub use crate::pipeline::{restore_original, CartoonFilter, CartoonParams, CartoonReport};

// Stage timing captured by the pipeline.
pub use crate::diagnostics::{StageTiming, TimingBreakdown};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use cartoon_filter::prelude::*;
///
/// # fn main() {
/// let mut img = ImageRgbU8::new(640, 480, 3);
/// let filter = CartoonFilter::new(CartoonParams::default());
/// let report = filter.process(&mut img);
/// println!(
///     "regions={} total_ms={:.3}",
///     report.region_count, report.timing.total_ms
/// );
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageRgbU8;
    pub use crate::{CartoonFilter, CartoonParams, CartoonReport};
}

// --- Stage-level API (for tools & advanced users) ---------------------------

pub mod stages {
    // Individual pipeline stages, callable outside the orchestrator.
    pub use crate::filters::{apply_kernel, combine, detect_edges, dilate, grayscale};
    pub use crate::segment::segment_regions;
}

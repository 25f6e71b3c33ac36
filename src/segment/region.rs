//! Running mean/variance accumulator for one color region.
use nalgebra::Vector3;

/// Acceptance scale of the self-adaptive similarity test.
const GLOBAL_THRESHOLD: f32 = 60.0;

/// A connected cluster of similarly colored pixels, tracked via incremental
/// statistics. `pixel_count` equals the number of `add_pixel` calls; `avg`
/// and `sqr_dev` are only ever updated one sample at a time.
#[derive(Clone, Debug, Default)]
pub struct Region {
    pixel_count: u32,
    avg: Vector3<f32>,
    sqr_dev: Vector3<f32>,
}

impl Region {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn pixel_count(&self) -> u32 {
        self.pixel_count
    }

    /// Running per-channel mean of the member pixels.
    #[inline]
    pub fn avg(&self) -> Vector3<f32> {
        self.avg
    }

    /// Fold one pixel into the running statistics. With `n` the count before
    /// the call:
    ///
    /// - `avg = (avg·n + pixel) / (n+1)`
    /// - `sqr_dev = sqr_dev·(n−1)/n + (pixel − avg_new)² / (n+1)` for `n > 0`;
    ///   the mean is updated first, so the deviation term uses the new mean.
    ///   For `n == 0` there is no prior sample to compare against and the
    ///   deviation stays zero.
    pub fn add_pixel(&mut self, pixel: Vector3<f32>) {
        let n = self.pixel_count as f32;
        self.pixel_count += 1;
        self.avg = (self.avg * n + pixel) / (n + 1.0);

        if n > 0.0 {
            let diff = pixel - self.avg;
            self.sqr_dev =
                self.sqr_dev * (n - 1.0) / n + diff.component_mul(&diff) / (n + 1.0);
        }
    }

    /// Decide whether `pixel` belongs to this region.
    ///
    /// Provisionally computes the mean and standard deviation the region
    /// would have after adding `pixel` (without committing; the provisional
    /// deviation term compares against the current mean) and accepts iff
    ///
    /// `|pixel − avg| < (1 − |test_dev ∘/ test_avg|) · 60.0`
    ///
    /// with Euclidean norms and component-wise division. The division is
    /// unguarded: a near-zero mean channel (a pure-black region, say) turns
    /// the ratio into NaN and the comparison into false, so such a region
    /// never accepts another pixel. Known artefact, kept as-is.
    ///
    /// Must only be called on a region holding at least one pixel; the
    /// segmenter feeds every region its founding pixel on creation.
    pub fn check_if_similar(&self, pixel: Vector3<f32>) -> bool {
        let n = self.pixel_count as f32;

        let test_avg = (self.avg * n + pixel) / (n + 1.0);

        let diff = pixel - self.avg;
        let test_dev = (self.sqr_dev * (n - 1.0) / n
            + diff.component_mul(&diff) / (n + 1.0))
        .map(f32::sqrt);

        let ratio = test_dev.component_div(&test_avg);
        (pixel - self.avg).norm() < (1.0 - ratio.norm()) * GLOBAL_THRESHOLD
    }
}

//! Parameter types configuring the pipeline stages.
use serde::Deserialize;

/// Immutable configuration for one pipeline invocation.
///
/// The pipeline itself is stateless: an interactive host that wants
/// run-once semantics caches its own "already processed" flag and calls
/// [`crate::restore_original`] before re-running with new parameters.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct CartoonParams {
    /// Radius of the box window whose average binarizes the Sobel magnitude.
    /// Observed configurations use values between 5 and 11.
    pub local_threshold_radius: usize,
    /// Radius of the box window used to grow the binary edge mask.
    pub dilation_radius: usize,
}

impl Default for CartoonParams {
    fn default() -> Self {
        Self {
            local_threshold_radius: 5,
            dilation_radius: 1,
        }
    }
}

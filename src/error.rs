use thiserror::Error;

/// Errors produced when validating [`crate::ViewerOptions`].
///
/// The lifecycle hook itself never raises: a missing locator attribute is a
/// logged no-op, and downstream failures belong to the external viewer.
/// Validation exists for embedders that build options by hand instead of
/// taking the default block.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Zoom bounds must be positive and ordered min < max
    #[error("Invalid zoom bounds: min {min} must be positive and below max {max}")]
    InvalidZoomBounds { min: f64, max: f64 },

    /// Zoom animation duration cannot be negative
    #[error("Invalid animation time: {0} (must be non-negative)")]
    InvalidAnimationTime(f64),

    /// Opacity is a blend factor in [0, 1]
    #[error("Invalid opacity: {0} (must be within [0, 1])")]
    InvalidOpacity(f64),

    /// Control icons cannot load without an asset prefix
    #[error("Empty prefix URL: control icons need an asset location")]
    EmptyPrefixUrl,
}

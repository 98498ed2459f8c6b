use thiserror::Error;

/// Sample-data construction and precondition errors.
///
/// Raised when building a [`crate::samples::SampleSet`] or
/// [`crate::samples::OrderedSet`] from caller data, or when a locator
/// precondition is violated. Query misses are never errors; they surface
/// as `None` from the interpolators.
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("non-finite value in input: got {got}")]
    NonFinite { got: f64 },

    #[error("duplicate x key: {x} appears more than once")]
    DuplicateX { x: f64 },

    #[error("empty ordered set: nearest is undefined")]
    EmptySet,
}

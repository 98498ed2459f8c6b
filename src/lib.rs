//! Axis-aware interpolation over sparse sample sets.
//!
//! `confluence` answers three questions about a finite set of `(x, y)`
//! samples under linear or logarithmic axis scaling:
//! - what is y at an arbitrary x ([`interpolation::interpolate_y`]),
//! - at which x does the curve reach a given y, multiple crossings
//!   included ([`interpolation::interpolate_x`]),
//! - where do two sampled lines cross ([`intersection::intersect_lines`]).
//!
//! All operations are pure functions of their inputs: sample sets are
//! read, never mutated, and nothing is retained across calls. Queries
//! with no answer return `None`; degenerate geometry (vertical segments,
//! parallel lines) fails with a typed error rather than a NaN or
//! infinite stand-in.

pub mod axes;
pub mod interpolation;
pub mod intersection;
pub mod samples;

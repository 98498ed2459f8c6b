//! Line-segment intersection.
//!
//! Fits each two-point segment to its `y = a * f(x) + b` form under the
//! given axis scales and solves the pair of lines for the crossing point.


use crate::axes::errors::EquationError;
use crate::axes::scales::Axes;


/// A two-point line segment, endpoints as `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: (f64, f64),
    pub end  : (f64, f64),
}

impl Segment {
    #[must_use]
    pub const fn new(start: (f64, f64), end: (f64, f64)) -> Self {
        Self { start, end }
    }
}


/// Solves two segments for the point where their fitted lines cross.
///
/// # Behavior
/// Each segment is fitted to `y = a * f(x) + b` under `axes` and the two
/// lines are solved simultaneously; a logarithmic x-scale exponentiates
/// the solved coordinate back out of log space. The crossing point lies
/// on both fitted lines, not necessarily inside either segment's x-range.
///
/// # Errors
/// - [`EquationError::NonFiniteEndpoint`], [`EquationError::LogDomain`],
///   or [`EquationError::DegenerateSegment`] if either segment cannot be
///   fitted.
/// - [`EquationError::ParallelLines`] if the fitted slopes are equal —
///   there is no finite crossing and no numeric answer is fabricated.
pub fn intersect_lines(a: Segment, b: Segment, axes: Axes) -> Result<(f64, f64), EquationError> {
    let family = axes.family();

    let ea = family.fit(a.start, a.end)?;
    let eb = family.fit(b.start, b.end)?;

    family.intersection(ea, eb)
}

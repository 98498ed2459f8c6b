//! Equation forms for the axis families.
//!
//! Every family works in its transformed x-space: a segment between two
//! samples fits the line `y = a * f(x) + b`, where `f` is the identity for a
//! linear x-axis and the natural log for a logarithmic one. Interpolation
//! evaluates that line directly; intersection solves two fitted lines and
//! maps the solution back through `f` inverse.


use crate::axes::errors::EquationError;
use crate::axes::scales::Family;


/// A line fitted in a family's transformed space: `y = a * f(x) + b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineEquation {
    pub a: f64,
    pub b: f64,
}


impl Family {
    /// `f(x)`: into the family's transformed x-space.
    #[inline]
    fn forward(self, x: f64) -> f64 {
        match self {
            Family::LinearLinear => x,
            Family::LogLinear => x.ln(),
        }
    }

    /// `f^-1(t)`: back out of the transformed x-space.
    #[inline]
    fn inverse(self, t: f64) -> f64 {
        match self {
            Family::LinearLinear => t,
            Family::LogLinear => t.exp(),
        }
    }

    /// Interpolates y at `x` on the segment through `(x1, y1)` and `(x2, y2)`.
    ///
    /// ```text
    /// y = y1 + (y2 - y1) * (f(x) - f(x1)) / (f(x2) - f(x1))
    /// ```
    ///
    /// The caller supplies a bracketing pair with distinct keys, so the
    /// denominator is nonzero. A logarithmic family assumes positive x's;
    /// non-positive inputs propagate NaN the way the underlying log does.
    #[must_use]
    pub fn y_between(self, x: f64, (x1, y1): (f64, f64), (x2, y2): (f64, f64)) -> f64 {
        let t = self.forward(x);
        let t1 = self.forward(x1);
        let t2 = self.forward(x2);
        y1 + (y2 - y1) * (t - t1) / (t2 - t1)
    }

    /// Solves for x at `y` on the segment through `(x1, y1)` and `(x2, y2)`.
    ///
    /// The inverse of [`Family::y_between`]: the affine solve runs in the
    /// family's transformed space and maps back through `f` inverse. For the
    /// linear family this is exactly
    ///
    /// ```text
    /// x = x1 + (x2 - x1) * (y - y1) / (y2 - y1)
    /// ```
    ///
    /// The caller supplies a pair that strictly brackets `y`, so `y1 != y2`.
    #[must_use]
    pub fn x_between(self, y: f64, (x1, y1): (f64, f64), (x2, y2): (f64, f64)) -> f64 {
        let t1 = self.forward(x1);
        let t2 = self.forward(x2);
        self.inverse(t1 + (t2 - t1) * (y - y1) / (y2 - y1))
    }

    /// Fits the segment through `(x1, y1)` and `(x2, y2)` to `y = a * f(x) + b`.
    ///
    /// # Errors
    /// - [`EquationError::NonFiniteEndpoint`] if any coordinate is NaN or
    ///   infinite.
    /// - [`EquationError::LogDomain`] if the family is logarithmic and an
    ///   x is not strictly positive.
    /// - [`EquationError::DegenerateSegment`] if the x's coincide (a
    ///   vertical segment has no slope in any family).
    pub fn fit(self, (x1, y1): (f64, f64), (x2, y2): (f64, f64)) -> Result<LineEquation, EquationError> {
        for (x, y) in [(x1, y1), (x2, y2)] {
            if !x.is_finite() || !y.is_finite() {
                return Err(EquationError::NonFiniteEndpoint { x, y });
            }
        }
        if let Family::LogLinear = self {
            for x in [x1, x2] {
                if x <= 0.0 {
                    return Err(EquationError::LogDomain { x });
                }
            }
        }

        let t1 = self.forward(x1);
        let t2 = self.forward(x2);
        if t1 == t2 {
            return Err(EquationError::DegenerateSegment { x1, x2 });
        }

        let a = (y2 - y1) / (t2 - t1);
        Ok(LineEquation { a, b: y1 - a * t1 })
    }

    /// Solves two fitted lines for their crossing point `(x, y)`.
    ///
    /// Solves `a1 * t + b1 = a2 * t + b2` for `t`, then y; a logarithmic
    /// family exponentiates `t` to undo the log transform before returning.
    ///
    /// # Errors
    /// - [`EquationError::ParallelLines`] if the slopes are equal (exact
    ///   comparison) -- there is no finite intersection.
    pub fn intersection(self, e1: LineEquation, e2: LineEquation) -> Result<(f64, f64), EquationError> {
        if e1.a == e2.a {
            return Err(EquationError::ParallelLines { slope: e1.a });
        }

        let t = (e2.b - e1.b) / (e1.a - e2.a);
        let y = e1.a * t + e1.b;
        Ok((self.inverse(t), y))
    }
}

//! Sample-set data model.
//!
//! A [`SampleSet`] is a finite mapping from x to y: the raw material every
//! interpolation query reads. Keys are unique; values may repeat. Points are
//! sorted by x once at construction so queries can binary-search for exact
//! hits and bracketing neighbors.


use crate::samples::errors::SampleError;


/// An immutable set of `(x, y)` samples, sorted by x.
///
/// # Construction
/// - Use [`SampleSet::new`]; input order does not matter.
///
/// # Validation
/// - Every coordinate must be finite.
/// - x keys must be unique (the set is a mapping, not a multiset).
/// - An empty set is legal; every query over it is absent.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    points: Vec<(f64, f64)>,
}

impl SampleSet {
    /// Builds a sample set from `(x, y)` pairs, sorting by x.
    ///
    /// # Errors
    /// - [`SampleError::NonFinite`] if any coordinate is NaN or infinite.
    /// - [`SampleError::DuplicateX`] if two pairs share an x key.
    pub fn new(points: &[(f64, f64)]) -> Result<Self, SampleError> {
        for &(x, y) in points {
            if !x.is_finite() {
                return Err(SampleError::NonFinite { got: x });
            }
            if !y.is_finite() {
                return Err(SampleError::NonFinite { got: y });
            }
        }

        let mut points = points.to_vec();
        points.sort_unstable_by(|p, q| p.0.total_cmp(&q.0));

        for i in 1..points.len() {
            if points[i].0 == points[i - 1].0 {
                return Err(SampleError::DuplicateX { x: points[i].0 });
            }
        }

        Ok(Self { points })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All samples in ascending-x order.
    #[must_use]
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// The sampled x-range as `(min, max)`, or `None` for an empty set.
    #[must_use]
    pub fn domain(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        Some((first.0, last.0))
    }

    /// Exact-key lookup: the stored y for `x`, if `x` is a key.
    #[must_use]
    pub fn get(&self, x: f64) -> Option<f64> {
        let i = self.points.partition_point(|p| p.0 < x);
        self.points.get(i).filter(|p| p.0 == x).map(|p| p.1)
    }

    /// The sample with the greatest key <= `x`.
    pub(crate) fn below(&self, x: f64) -> Option<(f64, f64)> {
        let i = self.points.partition_point(|p| p.0 <= x);
        if i == 0 {
            return None;
        }
        Some(self.points[i - 1])
    }

    /// The sample with the smallest key >= `x`.
    pub(crate) fn above(&self, x: f64) -> Option<(f64, f64)> {
        let i = self.points.partition_point(|p| p.0 < x);
        self.points.get(i).copied()
    }
}

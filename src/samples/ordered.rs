//! Nearest-neighbor location over an ordered set of numbers.
//!
//! An [`OrderedSet`] is a deduplicated, sorted set of reals built on demand
//! from an input slice. [`OrderedSet::nearest`] snaps an arbitrary query to
//! the closest member; [`nearest_sequence`] maps a whole sequence at once.


use crate::samples::errors::SampleError;


/// A deduplicated, totally ordered set of finite reals.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedSet {
    values: Vec<f64>,
}

impl OrderedSet {
    /// Builds the set from a slice, sorting and dropping exact duplicates.
    ///
    /// # Errors
    /// - [`SampleError::NonFinite`] if any member is NaN or infinite.
    pub fn new(values: &[f64]) -> Result<Self, SampleError> {
        for &v in values {
            if !v.is_finite() {
                return Err(SampleError::NonFinite { got: v });
            }
        }

        let mut values = values.to_vec();
        values.sort_unstable_by(f64::total_cmp);
        values.dedup_by(|a, b| a == b);

        Ok(Self { values })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Members in ascending order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Snaps `x` to the closest member of the set.
    ///
    /// # Behavior
    /// Finds the smallest member >= `x` ("above") and the greatest member
    /// <= `x` ("below"); whichever is nearer in absolute distance wins, and
    /// above wins exact ties. A query outside the set's range clamps to the
    /// nearest end. A member query returns itself.
    ///
    /// # Errors
    /// - [`SampleError::EmptySet`] if the set has no members.
    /// - [`SampleError::NonFinite`] if `x` is NaN or infinite.
    pub fn nearest(&self, x: f64) -> Result<f64, SampleError> {
        if !x.is_finite() {
            return Err(SampleError::NonFinite { got: x });
        }
        if self.values.is_empty() {
            return Err(SampleError::EmptySet);
        }

        let above = self
            .values
            .get(self.values.partition_point(|&v| v < x))
            .copied();
        let below = match self.values.partition_point(|&v| v <= x) {
            0 => None,
            i => Some(self.values[i - 1]),
        };

        match (above, below) {
            // strict comparison: an equidistant below loses to above
            (Some(a), Some(b)) => Ok(if (x - b).abs() < (a - x).abs() { b } else { a }),
            (Some(a), None) => Ok(a),
            (None, Some(b)) => Ok(b),
            (None, None) => Err(SampleError::EmptySet),
        }
    }
}


/// Maps every element of `b` to its nearest element in `a`.
///
/// # Behavior
/// - If `a` is empty, returns `b` unchanged (identity fallback, not an
///   error), before any validation of either slice.
/// - Otherwise builds an [`OrderedSet`] from `a` and snaps each element
///   of `b` through [`OrderedSet::nearest`].
///
/// # Errors
/// - [`SampleError::NonFinite`] if `a` is non-empty and either slice holds
///   a NaN or infinite value.
pub fn nearest_sequence(a: &[f64], b: &[f64]) -> Result<Vec<f64>, SampleError> {
    if a.is_empty() {
        return Ok(b.to_vec());
    }

    let set = OrderedSet::new(a)?;
    b.iter().map(|&x| set.nearest(x)).collect()
}

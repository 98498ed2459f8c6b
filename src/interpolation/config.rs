//! Shared configuration for the interpolators.
//!
//! Provides [`CommonCfg`] with the axis scale pair and the optional gap
//! predicate. Shared by both interpolation directions.
//!
//! [`CommonCfg`] — universal fields
//! - `axes` : axis scale pair selecting the equation family
//! - `gap`  : predicate over a bracketing pair; interpolation across the
//!            pair is permitted only while it returns true
//!
//! [`CommonCfg::new`] initializes configuration with linear axes and no
//! gap predicate installed.


use core::fmt;

use crate::axes::scales::Axes;


/// Caller-supplied gate over a bracketing pair.
///
/// Receives the two bracketing values (both x's or both y's, matching the
/// interpolation direction) and returns whether interpolating across that
/// gap is permitted.
pub type GapPredicate = dyn Fn(f64, f64) -> bool;

/// Caller-supplied reducer picking one answer from a non-empty candidate
/// list.
pub type Selector = dyn Fn(&[f64]) -> f64;


#[derive(Copy, Clone)]
pub struct CommonCfg<'a> {
    pub(crate) axes: Axes,
    pub(crate) gap : Option<&'a GapPredicate>,
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self {
            axes: Axes::linear(),
            gap : None,
        }
    }

    /// Whether interpolation across the bracketing pair `(lo, hi)` is
    /// permitted. Permissive when no predicate is installed.
    pub(crate) fn gap_allows(&self, lo: f64, hi: f64) -> bool {
        self.gap.map_or(true, |permit| permit(lo, hi))
    }

    // getters
    pub fn axes(&self) -> Axes { self.axes }

    // setters
    pub(crate) fn with_axes(&mut self, v: Axes) { self.axes = v; }
    pub(crate) fn with_gap(&mut self, v: &'a GapPredicate) { self.gap = Some(v); }
}

impl fmt::Debug for CommonCfg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommonCfg")
            .field("axes", &self.axes)
            .field("gap", &self.gap.map(|_| "<fn>"))
            .finish()
    }
}


macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a> $cfg {
            /// Selects the axis scale pair (default linear/linear).
            #[must_use]
            pub fn set_axes(mut self, v: $crate::axes::scales::Axes) -> Self {
                self.common.with_axes(v);
                self
            }

            /// Installs the gap predicate gating each bracketing pair.
            #[must_use]
            pub fn set_gap_predicate(
                mut self,
                v: &'a $crate::interpolation::config::GapPredicate,
            ) -> Self {
                self.common.with_gap(v);
                self
            }
        }
    };
}
pub(crate) use impl_common_cfg;

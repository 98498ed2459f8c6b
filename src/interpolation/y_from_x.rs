//! Y-from-X interpolation.
//!
//! Answers "what is y at this x" over a sample set: an exact key returns
//! its stored value untouched; any other query interpolates between the
//! two bracketing samples under the configured axis scales.


use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::samples::set::SampleSet;


/// Y-from-X configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`YFromXCfg::new`] then optional setters.
///
/// # Defaults
/// - Linear scales on both axes; no gap predicate, so every bracketing
///   pair may be interpolated across.
#[derive(Debug, Clone, Copy)]
pub struct YFromXCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> YFromXCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(YFromXCfg<'a>);


/// Interpolates y at `x` over `samples`.
///
/// # Behavior
/// - If `x` is an exact key, returns its stored value immediately.
/// - Otherwise finds the bracketing pair: the sample with the greatest
///   key `<= x` and the one with the smallest key `>= x`. If either side
///   is missing, the query lies outside the sampled domain and the result
///   is `None`.
/// - If a gap predicate is installed and rejects the bracketing keys,
///   the result is `None`.
/// - Otherwise evaluates the configured family's segment through the
///   bracketing pair at `x`.
///
/// `None` marks the expected "no value here" outcomes, never a failure.
#[must_use]
pub fn interpolate_y(samples: &SampleSet, x: f64, cfg: &YFromXCfg) -> Option<f64> {
    if let Some(y) = samples.get(x) {
        return Some(y);
    }

    let below = samples.below(x)?;
    let above = samples.above(x)?;
    if !cfg.common.gap_allows(below.0, above.0) {
        return None;
    }

    Some(cfg.common.axes.family().y_between(x, below, above))
}

/// Interpolates y at each x in `xs`, preserving order and length.
///
/// Equivalent to [`interpolate_y`] per element; queries outside the
/// domain or across a rejected gap yield `None` in place.
#[must_use]
pub fn interpolate_y_many(samples: &SampleSet, xs: &[f64], cfg: &YFromXCfg) -> Vec<Option<f64>> {
    xs.iter().map(|&x| interpolate_y(samples, x, cfg)).collect()
}

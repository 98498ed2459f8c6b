//! X-from-Y interpolation.
//!
//! The inverse problem: answers "at which x does the curve reach this y".
//! A horizontal line can cross a piecewise curve any number of times, so
//! the scan collects every candidate — exact sample hits plus one crossing
//! per segment whose y-range strictly straddles the query — and a selector
//! reduces the candidates to the single answer (default: minimum).


use core::fmt;

use crate::interpolation::config::{impl_common_cfg, CommonCfg, Selector};
use crate::samples::set::SampleSet;


/// X-from-Y configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
/// - `select` : reducer over the candidate x's
///
/// # Construction
/// - Use [`XFromYCfg::new`] then optional setters.
///
/// # Defaults
/// - Linear scales on both axes; no gap predicate; minimum candidate wins.
#[derive(Clone, Copy)]
pub struct XFromYCfg<'a> {
    common: CommonCfg<'a>,
    select: Option<&'a Selector>,
}
impl<'a> XFromYCfg<'a> {
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
            select: None,
        }
    }

    /// Installs the reducer applied to the candidate list (default picks
    /// the minimum). Only called on a non-empty list.
    #[must_use]
    pub fn set_selector(mut self, v: &'a Selector) -> Self {
        self.select = Some(v);
        self
    }
}
impl_common_cfg!(XFromYCfg<'a>);

impl fmt::Debug for XFromYCfg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XFromYCfg")
            .field("common", &self.common)
            .field("select", &self.select.map(|_| "<fn>"))
            .finish()
    }
}


/// Whether `y` lies strictly between `y1` and `y2`, in either direction.
/// Strictness keeps flat segments (`y1 == y2`) from ever bracketing.
#[inline]
fn brackets(y: f64, y1: f64, y2: f64) -> bool {
    (y1 < y && y < y2) || (y2 < y && y < y1)
}

/// Collects every candidate x where the sampled curve reaches `y`.
///
/// # Behavior
/// - Exact matches first: each sample whose value equals `y` contributes
///   its key, in ascending-x order.
/// - Then one crossing per bracketing segment: consecutive samples
///   `(x1, y1)`, `(x2, y2)` bracket when `y` lies strictly between `y1`
///   and `y2` (ascending or descending). A bracketing segment whose
///   endpoint values pass the gap predicate contributes the x solved from
///   the configured family's segment equation at `y`.
///
/// A query equal to a local peak or trough is never strictly inside the
/// adjacent segments, so an extremum contributes only its exact match.
#[must_use]
pub fn crossings(samples: &SampleSet, y: f64, cfg: &XFromYCfg) -> Vec<f64> {
    let points = samples.points();
    let family = cfg.common.axes.family();

    let mut found: Vec<f64> = points
        .iter()
        .filter(|p| p.1 == y)
        .map(|p| p.0)
        .collect();

    for pair in points.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);
        if brackets(y, p1.1, p2.1) && cfg.common.gap_allows(p1.1, p2.1) {
            found.push(family.x_between(y, p1, p2));
        }
    }

    found
}

/// Interpolates x at `y` over `samples`.
///
/// # Behavior
/// Gathers the candidates via [`crossings`] and reduces them with the
/// configured selector (default: minimum). An empty candidate list — no
/// exact hit and no strictly bracketing segment — yields `None`.
///
/// `None` marks the expected "curve never reaches this y" outcome, never
/// a failure.
#[must_use]
pub fn interpolate_x(samples: &SampleSet, y: f64, cfg: &XFromYCfg) -> Option<f64> {
    let found = crossings(samples, y, cfg);
    if found.is_empty() {
        return None;
    }

    Some(match cfg.select {
        Some(pick) => pick(&found),
        None       => found.iter().copied().fold(f64::INFINITY, f64::min),
    })
}

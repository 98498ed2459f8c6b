//! Axis scale declarations and equation-family selection.
//!
//! Provides the [`Scale`] variants, the [`Axes`] pair declared by a chart's
//! axis model, and the [`Family`] lookup that picks the equation forms every
//! downstream computation uses.


/// Axis scale variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Linear,
    Logarithmic,
}


/// The `(x, y)` scale pair declared by an axis model.
///
/// # Defaults
/// - [`Axes::linear`]: linear x, linear y.
///
/// # Notes
/// - Only a linear y-scale is supported. Any pairing outside the fixed
///   lookup in [`Axes::family`] falls back to the linear/linear family
///   silently; an unrecognized combination is a documented default, not
///   an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Axes {
    pub x: Scale,
    pub y: Scale,
}

impl Axes {
    #[must_use]
    pub const fn new(x: Scale, y: Scale) -> Self {
        Self { x, y }
    }

    /// Linear x, linear y.
    #[must_use]
    pub const fn linear() -> Self {
        Self::new(Scale::Linear, Scale::Linear)
    }

    /// Logarithmic x, linear y.
    #[must_use]
    pub const fn log_x() -> Self {
        Self::new(Scale::Logarithmic, Scale::Linear)
    }

    /// Selects the equation family for this scale pair.
    ///
    /// Fixed lookup keyed by `(x, y)`; every unmatched pairing uses
    /// [`Family::LinearLinear`].
    #[must_use]
    pub const fn family(self) -> Family {
        match (self.x, self.y) {
            (Scale::Linear, Scale::Linear) => Family::LinearLinear,
            (Scale::Logarithmic, Scale::Linear) => Family::LogLinear,
            _ => Family::LinearLinear,
        }
    }
}

impl Default for Axes {
    fn default() -> Self {
        Self::linear()
    }
}


/// Equation families.
///
/// Each family fits segments to `y = a * f(x) + b`:
/// - [`Family::LinearLinear`] : `f` is the identity
/// - [`Family::LogLinear`]    : `f` is the natural log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    LinearLinear,
    LogLinear,
}

impl Family {
    pub const fn family_name(self) -> &'static str {
        match self {
            Family::LinearLinear => "linear_linear",
            Family::LogLinear => "log_linear",
        }
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.family_name())
    }
}

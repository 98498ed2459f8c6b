//! Axis scales, their equation families, and segment line forms.
//!
//! An [`Axes`] pair names the scale of each chart axis. [`Axes::family`]
//! maps the pair to the [`Family`] that knows how to fit and evaluate
//! `y = a * f(x) + b` segments under those scales.


pub mod equations;
pub mod errors;
pub mod scales;

pub use equations::LineEquation;
pub use errors::EquationError;
pub use scales::{Axes, Family, Scale};

pub mod errors;
pub mod ordered;
pub mod set;

pub use errors::SampleError;
pub use ordered::{nearest_sequence, OrderedSet};
pub use set::SampleSet;

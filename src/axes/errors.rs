//! Equation-fitting and intersection error types.
//!
//! Domain errors only: a degenerate or out-of-domain segment, or a parallel
//! pair of fitted lines, is a caller-supplied input the math cannot answer
//! for. None of these conditions may ever surface as a NaN or infinite
//! "result" instead.


use thiserror::Error;


#[derive(Debug, Error)]
pub enum EquationError {
    #[error("non-finite segment endpoint: ({x}, {y})")]
    NonFiniteEndpoint { x: f64, y: f64 },

    #[error("logarithmic x-axis requires x > 0. got {x}")]
    LogDomain { x: f64 },

    #[error("degenerate segment: x1 and x2 must differ. got x1={x1}, x2={x2}")]
    DegenerateSegment { x1: f64, x2: f64 },

    #[error("parallel lines: both slopes equal {slope}, no finite intersection")]
    ParallelLines { slope: f64 },
}

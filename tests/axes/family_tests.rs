use confluence::axes::equations::LineEquation;
use confluence::axes::errors::EquationError;
use confluence::axes::scales::{Axes, Family, Scale};

type ConfluenceResult = Result<(), EquationError>;

const ATOL: f64 = 1e-12;
const RTOL: f64 = 0.0;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL + RTOL * b.abs()
}

#[test]
fn supported_pairs_map_to_their_family() {
    assert_eq!(Axes::linear().family(), Family::LinearLinear);
    assert_eq!(Axes::log_x().family(), Family::LogLinear);
    assert_eq!(Axes::default().family(), Family::LinearLinear);
}

#[test]
fn unmatched_pairs_fall_back_to_linear() {
    let log_y = Axes::new(Scale::Linear, Scale::Logarithmic);
    let log_log = Axes::new(Scale::Logarithmic, Scale::Logarithmic);
    assert_eq!(log_y.family(), Family::LinearLinear);
    assert_eq!(log_log.family(), Family::LinearLinear);
}

#[test]
fn family_names() {
    assert_eq!(Family::LinearLinear.family_name(), "linear_linear");
    assert_eq!(Family::LogLinear.family_name(), "log_linear");
    assert_eq!(Family::LogLinear.to_string(), "log_linear");
}

#[test]
fn linear_point_interpolation() {
    let y = Family::LinearLinear.y_between(5.0, (0.0, 0.0), (10.0, 20.0));
    assert!(approx_eq(y, 10.0));
}

#[test]
fn log_point_interpolation_midpoint() {
    let y = Family::LogLinear.y_between(10.0, (1.0, 0.0), (100.0, 2.0));
    assert!(approx_eq(y, 1.0));
}

#[test]
fn x_between_inverts_y_between() {
    let x = Family::LogLinear.x_between(1.0, (1.0, 0.0), (100.0, 2.0));
    assert!(approx_eq(x, 10.0));
}

#[test]
fn linear_fit_recovers_slope_and_intercept() -> ConfluenceResult {
    let eq = Family::LinearLinear.fit((1.0, 5.0), (2.0, 7.0))?;
    assert!(approx_eq(eq.a, 2.0));
    assert!(approx_eq(eq.b, 3.0));
    Ok(())
}

#[test]
fn log_fit_works_in_log_space() -> ConfluenceResult {
    let eq = Family::LogLinear.fit((1.0, 0.0), (std::f64::consts::E, 1.0))?;
    assert!(approx_eq(eq.a, 1.0));
    assert!(approx_eq(eq.b, 0.0));
    Ok(())
}

#[test]
fn vertical_segment_fit_fails() {
    let err = Family::LinearLinear.fit((3.0, 0.0), (3.0, 10.0)).unwrap_err();
    assert!(matches!(err, EquationError::DegenerateSegment { x1, x2 }
        if x1 == 3.0 && x2 == 3.0));
}

#[test]
fn log_fit_rejects_non_positive_x() {
    let err = Family::LogLinear.fit((0.0, 0.0), (10.0, 1.0)).unwrap_err();
    assert!(matches!(err, EquationError::LogDomain { x } if x == 0.0));
}

#[test]
fn fit_rejects_non_finite_endpoint() {
    let err = Family::LinearLinear.fit((f64::NAN, 0.0), (1.0, 1.0)).unwrap_err();
    assert!(matches!(err, EquationError::NonFiniteEndpoint { x, y }
        if x.is_nan() && y == 0.0));
}

#[test]
fn intersection_solves_both_equations() -> ConfluenceResult {
    let e1 = LineEquation { a: 1.0, b: 0.0 };
    let e2 = LineEquation { a: -1.0, b: 10.0 };
    let (x, y) = Family::LinearLinear.intersection(e1, e2)?;
    assert!(approx_eq(x, 5.0));
    assert!(approx_eq(y, 5.0));
    Ok(())
}

#[test]
fn parallel_lines_have_no_intersection() {
    let e1 = LineEquation { a: 1.0, b: 0.0 };
    let e2 = LineEquation { a: 1.0, b: 5.0 };
    let err = Family::LinearLinear.intersection(e1, e2).unwrap_err();
    assert!(matches!(err, EquationError::ParallelLines { slope } if slope == 1.0));
}

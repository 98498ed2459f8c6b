use confluence::samples::errors::SampleError;
use confluence::samples::ordered::{nearest_sequence, OrderedSet};

type ConfluenceResult = Result<(), SampleError>;

#[test]
fn member_query_returns_itself() -> ConfluenceResult {
    let members = [-3.0, 0.0, 1.5, 8.0];
    let set = OrderedSet::new(&members)?;
    for m in members {
        assert_eq!(set.nearest(m)?, m);
    }
    Ok(())
}

#[test]
fn snaps_to_closer_neighbor() -> ConfluenceResult {
    let set = OrderedSet::new(&[0.0, 10.0])?;
    assert_eq!(set.nearest(2.0)?, 0.0);
    assert_eq!(set.nearest(8.0)?, 10.0);
    Ok(())
}

#[test]
fn equidistant_query_snaps_upward() -> ConfluenceResult {
    let set = OrderedSet::new(&[1.0, 3.0])?;
    assert_eq!(set.nearest(2.0)?, 3.0);
    Ok(())
}

#[test]
fn outside_range_clamps_to_ends() -> ConfluenceResult {
    let set = OrderedSet::new(&[0.0, 5.0, 10.0])?;
    assert_eq!(set.nearest(-100.0)?, 0.0);
    assert_eq!(set.nearest(100.0)?, 10.0);
    Ok(())
}

#[test]
fn duplicates_collapse() -> ConfluenceResult {
    let set = OrderedSet::new(&[2.0, 2.0, 2.0])?;
    assert_eq!(set.len(), 1);
    assert_eq!(set.nearest(50.0)?, 2.0);
    Ok(())
}

#[test]
fn empty_set_error() {
    let set = OrderedSet::new(&[]).unwrap();
    let err = set.nearest(1.0).unwrap_err();
    assert!(matches!(err, SampleError::EmptySet));
}

#[test]
fn non_finite_query_error() {
    let set = OrderedSet::new(&[0.0]).unwrap();
    let err = set.nearest(f64::NAN).unwrap_err();
    assert!(matches!(err, SampleError::NonFinite { got } if got.is_nan()));
}

#[test]
fn sequence_snaps_each_element() -> ConfluenceResult {
    let snapped = nearest_sequence(&[0.0, 10.0], &[1.0, 9.0, 5.0])?;
    assert_eq!(snapped, vec![0.0, 10.0, 10.0]);
    Ok(())
}

#[test]
fn sequence_identity_when_reference_empty() -> ConfluenceResult {
    let snapped = nearest_sequence(&[], &[1.0, 2.0, 3.0])?;
    assert_eq!(snapped, vec![1.0, 2.0, 3.0]);
    Ok(())
}

#[test]
fn sequence_length_matches_input() -> ConfluenceResult {
    let snapped = nearest_sequence(&[7.0], &[0.0, 100.0, -3.5, 7.0])?;
    assert_eq!(snapped, vec![7.0; 4]);
    Ok(())
}

#[test]
fn sequence_rejects_non_finite_reference() {
    let err = nearest_sequence(&[f64::NAN], &[1.0]).unwrap_err();
    assert!(matches!(err, SampleError::NonFinite { got } if got.is_nan()));
}

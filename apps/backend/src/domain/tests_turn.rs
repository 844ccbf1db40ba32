use crate::domain::turn::Turn;
use crate::errors::domain::{DomainError, ValidationKind};

#[test]
fn add_throw_assigns_indices_and_recomputes_total() {
    let mut turn = Turn::new(1, 1);

    let first = turn.add_throw(20, 3).unwrap();
    assert_eq!(first.throw_index, 1);
    assert_eq!(turn.total_score, 60);

    let second = turn.add_throw(5, 1).unwrap();
    assert_eq!(second.throw_index, 2);
    assert_eq!(turn.total_score, 65);

    let third = turn.add_throw(0, 0).unwrap();
    assert_eq!(third.throw_index, 3);
    assert_eq!(turn.total_score, 65);
    assert!(turn.is_complete());
}

#[test]
fn fourth_throw_is_rejected() {
    let mut turn = Turn::new(1, 1);
    for _ in 0..3 {
        turn.add_throw(20, 1).unwrap();
    }

    let err = turn.add_throw(20, 1).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::TurnComplete, _)
    ));
    assert_eq!(turn.throw_count(), 3);
}

#[test]
fn invalid_throw_leaves_turn_untouched() {
    let mut turn = Turn::new(1, 1);
    turn.add_throw(20, 3).unwrap();

    let err = turn.add_throw(25, 3).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidThrow, _)
    ));
    assert_eq!(turn.throw_count(), 1);
    assert_eq!(turn.total_score, 60);
}

#[test]
fn ends_with_double_tracks_the_latest_throw() {
    let mut turn = Turn::new(1, 1);
    assert!(!turn.ends_with_double());

    turn.add_throw(16, 2).unwrap();
    assert!(turn.ends_with_double());

    turn.add_throw(16, 1).unwrap();
    assert!(!turn.ends_with_double());

    // Double bull counts as a double.
    turn.add_throw(25, 2).unwrap();
    assert!(turn.ends_with_double());
}

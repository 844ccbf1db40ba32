use crate::domain::throws::{evaluate_throw, Throw};
use crate::errors::domain::{DomainError, ValidationKind};

fn assert_invalid(result: Result<u16, DomainError>) {
    match result {
        Err(DomainError::Validation(kind, _)) => assert_eq!(kind, ValidationKind::InvalidThrow),
        other => panic!("expected InvalidThrow, got {other:?}"),
    }
}

#[test]
fn miss_scores_zero() {
    assert_eq!(evaluate_throw(0, 0).unwrap(), 0);
}

#[test]
fn miss_rejects_any_multiplier() {
    assert_invalid(evaluate_throw(0, 1));
    assert_invalid(evaluate_throw(0, 2));
    assert_invalid(evaluate_throw(0, 3));
}

#[test]
fn singles_doubles_triples_score_as_product() {
    assert_eq!(evaluate_throw(1, 1).unwrap(), 1);
    assert_eq!(evaluate_throw(16, 2).unwrap(), 32);
    assert_eq!(evaluate_throw(20, 3).unwrap(), 60);
}

#[test]
fn bull_is_single_or_double_only() {
    assert_eq!(evaluate_throw(25, 1).unwrap(), 25);
    assert_eq!(evaluate_throw(25, 2).unwrap(), 50);
    assert_invalid(evaluate_throw(25, 3));
}

#[test]
fn sectors_off_the_board_are_rejected() {
    for sector in [21, 22, 23, 24, 26, 100, 255] {
        assert_invalid(evaluate_throw(sector, 1));
    }
}

#[test]
fn zero_multiplier_on_scoring_sector_is_rejected() {
    assert_invalid(evaluate_throw(20, 0));
    assert_invalid(evaluate_throw(25, 0));
}

#[test]
fn multiplier_above_three_is_rejected() {
    assert_invalid(evaluate_throw(20, 4));
    assert_invalid(evaluate_throw(5, 200));
}

#[test]
fn throw_new_derives_score_and_keeps_index() {
    let dart = Throw::new(19, 3, 2).unwrap();
    assert_eq!(dart.score, 57);
    assert_eq!(dart.throw_index, 2);
    assert!(!dart.is_double());

    let double_bull = Throw::new(25, 2, 1).unwrap();
    assert!(double_bull.is_double());
}

use crate::domain::scoring::{apply_throw, ThrowOutcome};
use crate::domain::state::GameMode;
use crate::domain::throws::Throw;

fn dart(sector: u8, multiplier: u8) -> Throw {
    Throw::new(sector, multiplier, 1).expect("valid test throw")
}

#[test]
fn training_always_continues_with_input_unchanged() {
    let outcome = apply_throw(GameMode::Training, 0, &dart(20, 3));
    assert_eq!(outcome, ThrowOutcome::Continue { remaining: 0 });

    let outcome = apply_throw(GameMode::Training, 500, &dart(25, 2));
    assert_eq!(outcome, ThrowOutcome::Continue { remaining: 500 });
}

#[test]
fn standard_continue_subtracts() {
    let outcome = apply_throw(GameMode::Standard301, 301, &dart(20, 3));
    assert_eq!(outcome, ThrowOutcome::Continue { remaining: 241 });
}

#[test]
fn overshoot_is_a_bust_in_both_301_modes() {
    assert_eq!(
        apply_throw(GameMode::Standard301, 40, &dart(20, 3)),
        ThrowOutcome::Bust
    );
    assert_eq!(
        apply_throw(GameMode::DoubleOut301, 40, &dart(20, 3)),
        ThrowOutcome::Bust
    );
}

#[test]
fn standard_finishes_on_any_exact_zero() {
    assert_eq!(
        apply_throw(GameMode::Standard301, 60, &dart(20, 3)),
        ThrowOutcome::Finish
    );
    assert_eq!(
        apply_throw(GameMode::Standard301, 2, &dart(2, 1)),
        ThrowOutcome::Finish
    );
}

#[test]
fn double_out_requires_a_double_to_finish() {
    // Exact zero with a single is a bust, not a finish.
    assert_eq!(
        apply_throw(GameMode::DoubleOut301, 2, &dart(2, 1)),
        ThrowOutcome::Bust
    );
    // Exact zero with a triple is a bust too.
    assert_eq!(
        apply_throw(GameMode::DoubleOut301, 60, &dart(20, 3)),
        ThrowOutcome::Bust
    );
    assert_eq!(
        apply_throw(GameMode::DoubleOut301, 32, &dart(16, 2)),
        ThrowOutcome::Finish
    );
}

#[test]
fn double_bull_finishes_a_double_out_game() {
    assert_eq!(
        apply_throw(GameMode::DoubleOut301, 50, &dart(25, 2)),
        ThrowOutcome::Finish
    );
}

#[test]
fn reaching_one_is_a_plain_continue() {
    // One point left is a dead end in double-out, but the engine only rules
    // on the throw at hand.
    assert_eq!(
        apply_throw(GameMode::DoubleOut301, 3, &dart(2, 1)),
        ThrowOutcome::Continue { remaining: 1 }
    );
}

#[test]
fn a_missed_dart_changes_nothing_but_is_legal() {
    assert_eq!(
        apply_throw(GameMode::Standard301, 100, &dart(0, 0)),
        ThrowOutcome::Continue { remaining: 100 }
    );
}

//! Stateless scoring engine: rule evaluation for a single throw.

use crate::domain::state::GameMode;
use crate::domain::throws::Throw;

/// Result of applying one throw to a player's pre-throw score-to-go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrowOutcome {
    /// Play continues with the new score-to-go.
    Continue { remaining: u16 },
    /// Rule violation: score-to-go reverts to its pre-throw value. The throw
    /// stays in the turn history but contributes no progress.
    Bust,
    /// Exact finish: the thrower wins and the game ends.
    Finish,
}

/// Evaluate one throw against the active ruleset.
///
/// Pure function: callers apply the outcome to game and turn state.
/// Training mode has no score-to-go concept, so it always continues with the
/// input value unchanged.
pub fn apply_throw(mode: GameMode, score_before: u16, dart: &Throw) -> ThrowOutcome {
    if !mode.tracks_remaining() {
        return ThrowOutcome::Continue {
            remaining: score_before,
        };
    }

    let after = i32::from(score_before) - i32::from(dart.score);
    if after < 0 {
        return ThrowOutcome::Bust;
    }
    if after == 0 {
        // Double-out demands the zeroing dart be a double (double bull counts).
        if mode == GameMode::DoubleOut301 && !dart.is_double() {
            return ThrowOutcome::Bust;
        }
        return ThrowOutcome::Finish;
    }
    ThrowOutcome::Continue {
        remaining: after as u16,
    }
}

//! One player's turn: an ordered, capped sequence of throws within a round.

use crate::domain::player::PlayerId;
use crate::domain::rules::THROWS_PER_TURN;
use crate::domain::throws::Throw;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub player_id: PlayerId,
    /// 1-based round this turn belongs to.
    pub round_number: u32,
    throws: Vec<Throw>,
    /// Sum of the contained throw scores; recomputed on every mutation.
    pub total_score: u16,
    /// Score-to-go after this turn's latest throw. Only tracked by the 301
    /// rulesets; `None` in training games and before the first scored throw.
    pub remaining_score: Option<u16>,
    /// Whether the latest throw of this turn violated a rule (over-shoot or
    /// invalid finish). Cleared again by a subsequent legal throw.
    pub is_bust: bool,
}

impl Turn {
    pub fn new(player_id: PlayerId, round_number: u32) -> Self {
        Self {
            player_id,
            round_number,
            throws: Vec::with_capacity(THROWS_PER_TURN),
            total_score: 0,
            remaining_score: None,
            is_bust: false,
        }
    }

    /// Validate and append a dart, assigning it the next throw index.
    ///
    /// Fails with `TurnComplete` once the turn holds three throws and with
    /// `InvalidThrow` for a malformed sector/multiplier pair.
    pub fn add_throw(&mut self, sector: u8, multiplier: u8) -> Result<Throw, DomainError> {
        if self.is_complete() {
            return Err(DomainError::validation(
                ValidationKind::TurnComplete,
                "Turn already has three throws",
            ));
        }
        let dart = Throw::new(sector, multiplier, self.throws.len() as u8 + 1)?;
        self.throws.push(dart);
        self.total_score = self.throws.iter().map(|t| t.score).sum();
        Ok(dart)
    }

    pub fn throws(&self) -> &[Throw] {
        &self.throws
    }

    pub fn throw_count(&self) -> usize {
        self.throws.len()
    }

    pub fn is_complete(&self) -> bool {
        self.throws.len() >= THROWS_PER_TURN
    }

    /// Whether the most recent throw was a double (double bull included).
    /// Used by the double-out finish check.
    pub fn ends_with_double(&self) -> bool {
        self.throws.last().is_some_and(Throw::is_double)
    }
}

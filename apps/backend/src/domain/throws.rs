//! Dart impact valuation: sector and multiplier to a point value.

use serde::{Deserialize, Serialize};

use crate::domain::rules::{BULL_SECTOR, MAX_NUMBER_SECTOR, MISS_SECTOR};
use crate::errors::domain::{DomainError, ValidationKind};

/// A single recorded dart. Immutable after construction; the score is derived
/// once at creation and never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Throw {
    /// Wedge struck: 0 (miss), 1..=20, or 25 (bull ring).
    pub sector: u8,
    /// Scoring factor: 1 single, 2 double, 3 triple; 0 only for a miss.
    pub multiplier: u8,
    /// Derived point value, `sector * multiplier`.
    pub score: u16,
    /// 1-based position within the owning turn.
    pub throw_index: u8,
}

impl Throw {
    /// Validate a sector/multiplier pair and build the throw.
    pub fn new(sector: u8, multiplier: u8, throw_index: u8) -> Result<Self, DomainError> {
        let score = evaluate_throw(sector, multiplier)?;
        Ok(Self {
            sector,
            multiplier,
            score,
            throw_index,
        })
    }

    /// True for any double, the double bull included.
    pub fn is_double(&self) -> bool {
        self.multiplier == 2
    }
}

/// Pure valuation of a dart impact.
///
/// Rejects every combination outside the board's geometry:
/// - sector must be 0, 1..=20, or 25
/// - a miss (sector 0) carries no multiplier
/// - numbered wedges take multiplier 1..=3
/// - the bull ring has no triple
pub fn evaluate_throw(sector: u8, multiplier: u8) -> Result<u16, DomainError> {
    match sector {
        MISS_SECTOR => {
            if multiplier != 0 {
                return Err(invalid_throw(format!(
                    "Miss (sector 0) must have multiplier 0, got {multiplier}"
                )));
            }
            Ok(0)
        }
        1..=MAX_NUMBER_SECTOR => {
            if !(1..=3).contains(&multiplier) {
                return Err(invalid_throw(format!(
                    "Invalid multiplier {multiplier}: must be 1, 2, or 3"
                )));
            }
            Ok(u16::from(sector) * u16::from(multiplier))
        }
        BULL_SECTOR => {
            if !(1..=2).contains(&multiplier) {
                return Err(invalid_throw("Bull cannot be triple"));
            }
            Ok(u16::from(sector) * u16::from(multiplier))
        }
        _ => Err(invalid_throw(format!(
            "Invalid sector {sector}: must be 0, 1-20, or 25"
        ))),
    }
}

fn invalid_throw(detail: impl Into<String>) -> DomainError {
    DomainError::validation(ValidationKind::InvalidThrow, detail)
}

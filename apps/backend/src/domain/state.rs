//! Game aggregate: lineup, turn history, rotation, and status transitions.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::player::{Player, PlayerId};
use crate::domain::rules::{MAX_PLAYERS, STARTING_SCORE_301};
use crate::domain::turn::Turn;
use crate::errors::domain::{DomainError, ValidationKind};

pub type GameId = i64;

/// Ruleset a game is played under. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Free-form practice: totals only accumulate, nothing ends the game.
    #[serde(rename = "TRAINING")]
    Training,
    /// Count down from 301; any exact zero wins.
    #[serde(rename = "STANDARD_301")]
    Standard301,
    /// Count down from 301; the zeroing dart must be a double.
    #[serde(rename = "DOUBLE_OUT_301")]
    DoubleOut301,
}

impl GameMode {
    /// Whether this ruleset tracks a per-player score-to-go.
    pub fn tracks_remaining(&self) -> bool {
        !matches!(self, GameMode::Training)
    }

    pub fn starting_score(&self) -> Option<u16> {
        match self {
            GameMode::Training => None,
            GameMode::Standard301 | GameMode::DoubleOut301 => Some(STARTING_SCORE_301),
        }
    }
}

/// Game lifecycle. Transitions are forward-only; Completed and Cancelled are
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[serde(rename = "SETUP")]
    Setup,
    #[serde(rename = "IN_PROGRESS")]
    InProgress,
    #[serde(rename = "COMPLETED")]
    Completed,
    #[serde(rename = "CANCELLED")]
    Cancelled,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Completed | GameStatus::Cancelled)
    }
}

/// Aggregate root. Owns its turns (and their throws) by value, so deleting a
/// game drops the whole history with it; players are shared handles only.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: GameId,
    pub mode: GameMode,
    pub status: GameStatus,
    /// Lineup in rotation order; fixed once the game leaves Setup.
    pub players: Vec<Player>,
    pub turns: Vec<Turn>,
    pub current_player_index: usize,
    /// 1-based; increments exactly when rotation wraps back to the first
    /// player.
    pub current_round: u32,
    pub winner: Option<PlayerId>,
    pub created_at: OffsetDateTime,
    pub started_at: Option<OffsetDateTime>,
    pub completed_at: Option<OffsetDateTime>,
}

impl Game {
    /// New game in Setup; the id is assigned by the store on insert.
    pub fn new(mode: GameMode, now: OffsetDateTime) -> Self {
        Self {
            id: 0,
            mode,
            status: GameStatus::Setup,
            players: Vec::new(),
            turns: Vec::new(),
            current_player_index: 0,
            current_round: 1,
            winner: None,
            created_at: now,
            started_at: None,
            completed_at: None,
        }
    }

    /// Append a player to the lineup. Only legal during Setup and while the
    /// table holds fewer than eight players.
    pub fn add_player(&mut self, player: Player) -> Result<(), DomainError> {
        if self.status != GameStatus::Setup {
            return Err(DomainError::validation_other(
                "Cannot add players after the game has started",
            ));
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                format!("Maximum {MAX_PLAYERS} players allowed"),
            ));
        }
        self.players.push(player);
        Ok(())
    }

    /// Leave Setup. Requires at least one player; records the start time.
    pub fn start(&mut self, now: OffsetDateTime) -> Result<(), DomainError> {
        if self.status != GameStatus::Setup {
            return Err(DomainError::validation_other(
                "Game has already been started",
            ));
        }
        if self.players.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                "Cannot start a game without players",
            ));
        }
        self.status = GameStatus::InProgress;
        self.started_at = Some(now);
        Ok(())
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    /// Current player, or an invariant error on an empty lineup.
    pub fn require_current_player(&self) -> Result<&Player, DomainError> {
        self.current_player().ok_or_else(|| {
            DomainError::validation_other("Invariant violated: current player must exist")
        })
    }

    /// Rotate to the next player; wrapping to the first player closes the
    /// round and bumps the round counter.
    pub fn advance_player(&mut self) {
        debug_assert!(!self.players.is_empty(), "rotation needs a lineup");
        if self.players.is_empty() {
            return;
        }
        self.current_player_index = (self.current_player_index + 1) % self.players.len();
        if self.current_player_index == 0 {
            self.current_round += 1;
        }
    }

    /// The player's open (fewer than three throws) turn, newest first.
    pub fn open_turn_for(&self, player_id: PlayerId) -> Option<&Turn> {
        self.turns
            .iter()
            .rev()
            .find(|t| t.player_id == player_id && !t.is_complete())
    }

    /// The player's most recent turn regardless of completeness.
    pub fn latest_turn_for(&self, player_id: PlayerId) -> Option<&Turn> {
        self.turns.iter().rev().find(|t| t.player_id == player_id)
    }

    /// The player's turn within a specific round, if one was recorded.
    pub fn turn_for_round(&self, player_id: PlayerId, round: u32) -> Option<&Turn> {
        self.turns
            .iter()
            .rev()
            .find(|t| t.player_id == player_id && t.round_number == round)
    }

    /// Ensure the current player has an open turn and return its index.
    ///
    /// Idempotent: reuses an existing open turn, otherwise creates one for the
    /// current round, seeding its score-to-go from the derived value in the
    /// 301 rulesets. Invoked at game start, on rotation, and defensively when
    /// recording a throw.
    pub fn ensure_open_turn(&mut self) -> Result<usize, DomainError> {
        let player_id = self.require_current_player()?.id;
        if let Some(idx) = self
            .turns
            .iter()
            .rposition(|t| t.player_id == player_id && !t.is_complete())
        {
            return Ok(idx);
        }
        let mut turn = Turn::new(player_id, self.current_round);
        if self.mode.tracks_remaining() {
            turn.remaining_score = Some(self.remaining_for(player_id));
        }
        self.turns.push(turn);
        Ok(self.turns.len() - 1)
    }

    /// Derived score-to-go for a player in a 301 ruleset: the latest recorded
    /// `remaining_score` in that player's turn history, else the starting
    /// score. Never stored on the player.
    pub fn remaining_for(&self, player_id: PlayerId) -> u16 {
        self.turns
            .iter()
            .rev()
            .filter(|t| t.player_id == player_id)
            .find_map(|t| t.remaining_score)
            .unwrap_or(STARTING_SCORE_301)
    }

    /// Derived display score for a player: score-to-go in the 301 rulesets,
    /// accumulated throw total in training.
    pub fn score_for(&self, player_id: PlayerId) -> u32 {
        if self.mode.tracks_remaining() {
            u32::from(self.remaining_for(player_id))
        } else {
            self.turns
                .iter()
                .filter(|t| t.player_id == player_id)
                .map(|t| u32::from(t.total_score))
                .sum()
        }
    }

    /// Terminal transition: record the winner and completion time.
    pub fn complete(&mut self, winner: PlayerId, now: OffsetDateTime) {
        self.status = GameStatus::Completed;
        self.winner = Some(winner);
        self.completed_at = Some(now);
    }

    /// Terminal transition without a winner. Legal from Setup or InProgress.
    pub fn cancel(&mut self, now: OffsetDateTime) -> Result<(), DomainError> {
        if self.status.is_terminal() {
            return Err(DomainError::validation(
                ValidationKind::GameNotActive,
                "Game is already completed or cancelled",
            ));
        }
        self.status = GameStatus::Cancelled;
        self.completed_at = Some(now);
        Ok(())
    }
}

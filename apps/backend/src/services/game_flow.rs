//! Game flow orchestration service - bridges the pure scoring core with the
//! store and enforces per-game serialization.
//!
//! Every mutating use case validates its preconditions, then runs
//! load-mutate-save under the game's lock so no half-applied throw or
//! rotation is ever observable.

use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{debug, info};

use crate::domain::rules::{MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::scoring::{apply_throw, ThrowOutcome};
use crate::domain::state::{Game, GameId, GameMode, GameStatus};
use crate::domain::turn::Turn;
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::infra::locking::GameLocks;
use crate::repos::games::{self, GameRepo};
use crate::services::players::PlayerService;
use crate::state::app_state::AppState;

pub struct GameFlowService {
    games: Arc<dyn GameRepo>,
    players: PlayerService,
    locks: GameLocks,
}

impl GameFlowService {
    pub fn new(games: Arc<dyn GameRepo>, players: PlayerService, locks: GameLocks) -> Self {
        Self {
            games,
            players,
            locks,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(
            state.games.clone(),
            PlayerService::new(state.players.clone()),
            state.locks.clone(),
        )
    }

    /// Create a game, resolve its lineup, start it, and open the first turn.
    ///
    /// Lineup order is significant: it fixes the rotation order for the whole
    /// game.
    pub async fn create_game(
        &self,
        mode: GameMode,
        player_names: &[String],
    ) -> Result<Game, AppError> {
        if player_names.len() < MIN_PLAYERS {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                "At least one player is required",
            )
            .into());
        }
        if player_names.len() > MAX_PLAYERS {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                format!("Maximum {MAX_PLAYERS} players allowed"),
            )
            .into());
        }

        let now = OffsetDateTime::now_utc();
        let mut game = Game::new(mode, now);
        for name in player_names {
            let player = self.players.find_or_create(name).await?;
            game.add_player(player)?;
        }
        game.start(now)?;
        game.ensure_open_turn()?;

        let game = self.games.create(game).await?;
        info!(
            game_id = game.id,
            mode = ?game.mode,
            players = game.players.len(),
            "Game created"
        );
        Ok(game)
    }

    /// Record one dart for the current player.
    ///
    /// Validates the impact, appends it to the player's open turn (creating
    /// one defensively if none exists for this round), and in the 301
    /// rulesets applies the scoring engine to update score-to-go, bust state,
    /// and game completion.
    pub async fn record_throw(
        &self,
        game_id: GameId,
        sector: u8,
        multiplier: u8,
    ) -> Result<Game, AppError> {
        let _guard = self.locks.acquire(game_id).await;

        let mut game = games::require_game(self.games.as_ref(), game_id).await?;
        require_in_progress(&game)?;

        let player_id = game.require_current_player()?.id;

        // A finished turn means the caller must rotate before throwing again;
        // only a round with no turn at all gets one created on the fly.
        if let Some(turn) = game.turn_for_round(player_id, game.current_round) {
            if turn.is_complete() {
                return Err(DomainError::validation(
                    ValidationKind::TurnComplete,
                    "Current turn is already complete. Advance to the next player first.",
                )
                .into());
            }
        }

        let turn_idx = game.ensure_open_turn()?;

        // Pre-throw score-to-go, read before the turn mutates.
        let score_before = game
            .mode
            .tracks_remaining()
            .then(|| game.remaining_for(player_id));

        let dart = game.turns[turn_idx].add_throw(sector, multiplier)?;

        if let Some(before) = score_before {
            match apply_throw(game.mode, before, &dart) {
                ThrowOutcome::Continue { remaining } => {
                    let turn = &mut game.turns[turn_idx];
                    turn.remaining_score = Some(remaining);
                    turn.is_bust = false;
                }
                ThrowOutcome::Bust => {
                    let turn = &mut game.turns[turn_idx];
                    turn.remaining_score = Some(before);
                    turn.is_bust = true;
                    debug!(game_id, player_id, score = dart.score, "Bust");
                }
                ThrowOutcome::Finish => {
                    {
                        let turn = &mut game.turns[turn_idx];
                        turn.remaining_score = Some(0);
                        turn.is_bust = false;
                    }
                    game.complete(player_id, OffsetDateTime::now_utc());
                    info!(game_id, winner = player_id, "Game completed");
                }
            }
        }

        let game = self.games.update(game).await?;
        debug!(
            game_id,
            player_id,
            sector,
            multiplier,
            score = dart.score,
            "Throw recorded"
        );
        Ok(game)
    }

    /// Rotate to the next player and open their turn.
    ///
    /// Requires the current player's turn to hold all three throws. Wrapping
    /// back to the first player closes the round. The new turn is seeded with
    /// the derived score-to-go in the 301 rulesets.
    pub async fn next_player(&self, game_id: GameId) -> Result<Game, AppError> {
        let _guard = self.locks.acquire(game_id).await;

        let mut game = games::require_game(self.games.as_ref(), game_id).await?;
        require_in_progress(&game)?;

        let player_id = game.require_current_player()?.id;
        match game.latest_turn_for(player_id) {
            Some(turn) if turn.is_complete() => {}
            _ => {
                return Err(DomainError::validation(
                    ValidationKind::TurnNotComplete,
                    "Current turn is not complete",
                )
                .into())
            }
        }

        game.advance_player();
        game.ensure_open_turn()?;

        let game = self.games.update(game).await?;
        debug!(
            game_id,
            player_index = game.current_player_index,
            round = game.current_round,
            "Rotated to next player"
        );
        Ok(game)
    }

    /// Explicitly cancel a game. The only way a training game ends.
    pub async fn cancel_game(&self, game_id: GameId) -> Result<Game, AppError> {
        let _guard = self.locks.acquire(game_id).await;

        let mut game = games::require_game(self.games.as_ref(), game_id).await?;
        game.cancel(OffsetDateTime::now_utc())?;

        let game = self.games.update(game).await?;
        info!(game_id, "Game cancelled");
        Ok(game)
    }

    pub async fn get_game(&self, game_id: GameId) -> Result<Game, AppError> {
        Ok(games::require_game(self.games.as_ref(), game_id).await?)
    }

    /// Full ordered turn history of a game.
    pub async fn turn_history(&self, game_id: GameId) -> Result<Vec<Turn>, AppError> {
        let game = games::require_game(self.games.as_ref(), game_id).await?;
        Ok(game.turns)
    }

    pub async fn list_active_games(&self) -> Result<Vec<Game>, AppError> {
        Ok(self.games.list_by_status(GameStatus::InProgress).await?)
    }

    /// Delete a game and its whole turn history.
    pub async fn delete_game(&self, game_id: GameId) -> Result<(), AppError> {
        let guard = self.locks.acquire(game_id).await;
        if !self.games.delete(game_id).await? {
            return Err(DomainError::not_found(
                NotFoundKind::Game,
                format!("Game {game_id} not found"),
            )
            .into());
        }
        drop(guard);
        self.locks.discard(game_id);
        info!(game_id, "Game deleted");
        Ok(())
    }
}

/// Throws and rotation are only legal while the game is in progress.
fn require_in_progress(game: &Game) -> Result<(), DomainError> {
    match game.status {
        GameStatus::InProgress => Ok(()),
        GameStatus::Completed | GameStatus::Cancelled => Err(DomainError::validation(
            ValidationKind::GameNotActive,
            "Game is already completed or cancelled",
        )),
        GameStatus::Setup => Err(DomainError::validation(
            ValidationKind::Other("GAME_NOT_STARTED".into()),
            "Game is not in progress",
        )),
    }
}

//! Game persistence contract.
//!
//! The aggregate is stored and retrieved whole: turns and throws travel with
//! their game, so deletion cascades by construction. A durable database
//! implementation can replace the in-memory adapter behind this trait without
//! touching the services.

use async_trait::async_trait;

use crate::domain::state::{Game, GameId, GameStatus};
use crate::errors::domain::{DomainError, NotFoundKind};

#[async_trait]
pub trait GameRepo: Send + Sync {
    /// Insert a new game, assigning its id. Returns the stored aggregate.
    async fn create(&self, game: Game) -> Result<Game, DomainError>;

    /// Consistent whole-aggregate snapshot, or `None` if absent.
    async fn find_by_id(&self, game_id: GameId) -> Result<Option<Game>, DomainError>;

    /// Replace the stored aggregate. Fails if the game no longer exists.
    async fn update(&self, game: Game) -> Result<Game, DomainError>;

    /// Remove a game and, with it, its whole turn history. Returns whether
    /// anything was removed.
    async fn delete(&self, game_id: GameId) -> Result<bool, DomainError>;

    async fn list_by_status(&self, status: GameStatus) -> Result<Vec<Game>, DomainError>;
}

/// Find a game by id or return a domain not-found error.
///
/// Convenience helper that converts `None` into a `DomainError`, eliminating
/// the repetitive `ok_or_else` pattern when a game must exist.
pub async fn require_game(repo: &dyn GameRepo, game_id: GameId) -> Result<Game, DomainError> {
    repo.find_by_id(game_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} not found"))
    })
}

//! Player identity contract.
//!
//! Players are created independently of games and shared across them; this
//! collaborator owns the display-name uniqueness policy. Deleting a player
//! never touches the games that reference them.

use async_trait::async_trait;

use crate::domain::player::{Player, PlayerId};
use crate::errors::domain::{DomainError, NotFoundKind};

#[async_trait]
pub trait PlayerRepo: Send + Sync {
    /// Register a new player. Fails with a conflict when the display name is
    /// already taken.
    async fn create(&self, name: &str) -> Result<Player, DomainError>;

    async fn find_by_id(&self, player_id: PlayerId) -> Result<Option<Player>, DomainError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Player>, DomainError>;

    async fn list(&self) -> Result<Vec<Player>, DomainError>;

    /// Remove a player's identity record. Returns whether anything was
    /// removed. Games referencing the player keep their copies of the handle.
    async fn delete(&self, player_id: PlayerId) -> Result<bool, DomainError>;
}

/// Find a player by id or return a domain not-found error.
pub async fn require_player(
    repo: &dyn PlayerRepo,
    player_id: PlayerId,
) -> Result<Player, DomainError> {
    repo.find_by_id(player_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Player, format!("Player {player_id} not found"))
    })
}

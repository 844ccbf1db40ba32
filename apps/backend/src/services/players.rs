//! Player identity service.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::player::{Player, PlayerId};
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;
use crate::repos::players::{self, PlayerRepo};

/// Resolves display names to player identities, creating them on demand.
pub struct PlayerService {
    repo: Arc<dyn PlayerRepo>,
}

impl PlayerService {
    pub fn new(repo: Arc<dyn PlayerRepo>) -> Self {
        Self { repo }
    }

    /// Resolve a display name to an existing player, creating one if absent.
    ///
    /// Idempotent: repeated calls with the same name return the same player.
    /// A create that loses a race to a concurrent registration falls back to
    /// the winner's record.
    pub async fn find_or_create(&self, name: &str) -> Result<Player, AppError> {
        let name = valid_name(name)?;

        if let Some(player) = self.repo.find_by_name(name).await? {
            debug!(player_id = player.id, "Resolved existing player");
            return Ok(player);
        }

        match self.repo.create(name).await {
            Ok(player) => {
                info!(player_id = player.id, "Created player");
                Ok(player)
            }
            Err(DomainError::Conflict(_, _)) => {
                let player = self.repo.find_by_name(name).await?.ok_or_else(|| {
                    AppError::internal(format!(
                        "Player \"{name}\" vanished between conflict and lookup"
                    ))
                })?;
                debug!(player_id = player.id, "Lost create race, using winner");
                Ok(player)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Register a new player, rejecting duplicate display names.
    pub async fn create(&self, name: &str) -> Result<Player, AppError> {
        let name = valid_name(name)?;
        let player = self.repo.create(name).await?;
        info!(player_id = player.id, "Created player");
        Ok(player)
    }

    pub async fn get(&self, player_id: PlayerId) -> Result<Player, AppError> {
        Ok(players::require_player(self.repo.as_ref(), player_id).await?)
    }

    pub async fn list(&self) -> Result<Vec<Player>, AppError> {
        Ok(self.repo.list().await?)
    }

    /// Remove a player's identity record. Games referencing the player keep
    /// their lineup snapshots; no cascade in either direction.
    pub async fn delete(&self, player_id: PlayerId) -> Result<(), AppError> {
        if !self.repo.delete(player_id).await? {
            return Err(AppError::not_found(
                ErrorCode::PlayerNotFound,
                format!("Player {player_id} not found"),
            ));
        }
        info!(player_id, "Player deleted");
        Ok(())
    }
}

fn valid_name(name: &str) -> Result<&str, AppError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid(
            ErrorCode::ValidationError,
            "Player name must not be empty",
        ));
    }
    Ok(trimmed)
}

//! In-memory store implementing the repository contracts.
//!
//! Games are stored as whole aggregates, so a read is always a consistent
//! snapshot and deletion drops the full turn history in one step. Ids are
//! allocated from atomic counters, mirroring database sequences.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use time::OffsetDateTime;

use crate::domain::player::{Player, PlayerId};
use crate::domain::state::{Game, GameId, GameStatus};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::games::GameRepo;
use crate::repos::players::PlayerRepo;

pub struct InMemoryStore {
    games: DashMap<GameId, Game>,
    players: DashMap<PlayerId, Player>,
    /// Display-name uniqueness index.
    player_names: DashMap<String, PlayerId>,
    next_game_id: AtomicI64,
    next_player_id: AtomicI64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            games: DashMap::new(),
            players: DashMap::new(),
            player_names: DashMap::new(),
            next_game_id: AtomicI64::new(1),
            next_player_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GameRepo for InMemoryStore {
    async fn create(&self, mut game: Game) -> Result<Game, DomainError> {
        let id = self.next_game_id.fetch_add(1, Ordering::Relaxed);
        game.id = id;
        self.games.insert(id, game.clone());
        Ok(game)
    }

    async fn find_by_id(&self, game_id: GameId) -> Result<Option<Game>, DomainError> {
        Ok(self.games.get(&game_id).map(|g| g.clone()))
    }

    async fn update(&self, game: Game) -> Result<Game, DomainError> {
        match self.games.get_mut(&game.id) {
            Some(mut slot) => {
                *slot = game.clone();
                Ok(game)
            }
            None => Err(DomainError::not_found(
                NotFoundKind::Game,
                format!("Game {} not found", game.id),
            )),
        }
    }

    async fn delete(&self, game_id: GameId) -> Result<bool, DomainError> {
        Ok(self.games.remove(&game_id).is_some())
    }

    async fn list_by_status(&self, status: GameStatus) -> Result<Vec<Game>, DomainError> {
        let mut games: Vec<Game> = self
            .games
            .iter()
            .filter(|entry| entry.status == status)
            .map(|entry| entry.clone())
            .collect();
        games.sort_by_key(|g| g.id);
        Ok(games)
    }
}

#[async_trait]
impl PlayerRepo for InMemoryStore {
    async fn create(&self, name: &str) -> Result<Player, DomainError> {
        use dashmap::mapref::entry::Entry;

        match self.player_names.entry(name.to_string()) {
            Entry::Occupied(_) => Err(DomainError::conflict(
                ConflictKind::PlayerNameTaken,
                format!("Player \"{name}\" already exists"),
            )),
            Entry::Vacant(vacant) => {
                let id = self.next_player_id.fetch_add(1, Ordering::Relaxed);
                let player = Player {
                    id,
                    name: name.to_string(),
                    created_at: OffsetDateTime::now_utc(),
                };
                self.players.insert(id, player.clone());
                vacant.insert(id);
                Ok(player)
            }
        }
    }

    async fn find_by_id(&self, player_id: PlayerId) -> Result<Option<Player>, DomainError> {
        Ok(self.players.get(&player_id).map(|p| p.clone()))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Player>, DomainError> {
        let id = match self.player_names.get(name) {
            Some(entry) => *entry.value(),
            None => return Ok(None),
        };
        Ok(self.players.get(&id).map(|p| p.clone()))
    }

    async fn list(&self) -> Result<Vec<Player>, DomainError> {
        let mut players: Vec<Player> = self.players.iter().map(|entry| entry.clone()).collect();
        players.sort_by_key(|p| p.id);
        Ok(players)
    }

    async fn delete(&self, player_id: PlayerId) -> Result<bool, DomainError> {
        match self.players.remove(&player_id) {
            Some((_, player)) => {
                self.player_names.remove(&player.name);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::state::GameMode;

    #[tokio::test]
    async fn game_ids_are_sequential_and_cascade_on_delete() {
        let store = InMemoryStore::new();
        let games: &dyn GameRepo = &store;
        let now = OffsetDateTime::now_utc();

        let a = games.create(Game::new(GameMode::Training, now)).await.unwrap();
        let b = games
            .create(Game::new(GameMode::Standard301, now))
            .await
            .unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);

        assert!(games.delete(a.id).await.unwrap());
        assert!(!games.delete(a.id).await.unwrap());
        assert!(games.find_by_id(a.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn player_names_are_unique() {
        let store = InMemoryStore::new();
        let players: &dyn PlayerRepo = &store;

        let alice = players.create("Alice").await.unwrap();
        let err = players.create("Alice").await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Conflict(ConflictKind::PlayerNameTaken, _)
        ));

        let found = players.find_by_name("Alice").await.unwrap().unwrap();
        assert_eq!(found.id, alice.id);

        // Deleting frees the name for re-registration.
        assert!(players.delete(alice.id).await.unwrap());
        assert!(players.find_by_name("Alice").await.unwrap().is_none());
        players.create("Alice").await.unwrap();
    }

    #[tokio::test]
    async fn update_missing_game_is_not_found() {
        let store = InMemoryStore::new();
        let games: &dyn GameRepo = &store;
        let mut game = Game::new(GameMode::Training, OffsetDateTime::now_utc());
        game.id = 42;
        let err = games.update(game).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(NotFoundKind::Game, _)));
    }
}

//! Application state containing shared resources.

use std::sync::Arc;

use crate::adapters::memory::InMemoryStore;
use crate::infra::locking::GameLocks;
use crate::repos::games::GameRepo;
use crate::repos::players::PlayerRepo;

#[derive(Clone)]
pub struct AppState {
    pub games: Arc<dyn GameRepo>,
    pub players: Arc<dyn PlayerRepo>,
    pub locks: GameLocks,
}

impl AppState {
    pub fn new(games: Arc<dyn GameRepo>, players: Arc<dyn PlayerRepo>) -> Self {
        Self {
            games,
            players,
            locks: GameLocks::new(),
        }
    }

    /// One shared in-memory store backing both repositories.
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self::new(store.clone(), store)
    }
}

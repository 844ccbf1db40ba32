//! Public snapshot API for observing game state without exposing internals.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::player::PlayerId;
use crate::domain::rules::SNAPSHOT_RECENT_TURNS;
use crate::domain::state::{Game, GameId, GameMode, GameStatus};
use crate::domain::throws::Throw;
use crate::domain::turn::Turn;

/// Public info about one player at the table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerPublic {
    pub id: PlayerId,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThrowPublic {
    pub sector: u8,
    pub multiplier: u8,
    pub score: u16,
    pub throw_index: u8,
}

impl From<&Throw> for ThrowPublic {
    fn from(t: &Throw) -> Self {
        Self {
            sector: t.sector,
            multiplier: t.multiplier,
            score: t.score,
            throw_index: t.throw_index,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnPublic {
    pub player: PlayerPublic,
    pub round_number: u32,
    pub throws: Vec<ThrowPublic>,
    pub total_score: u16,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub remaining_score: Option<u16>,
    pub is_bust: bool,
}

/// Top-level view of a game, shaped for the transport layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub id: GameId,
    pub mode: GameMode,
    pub status: GameStatus,
    pub players: Vec<PlayerPublic>,
    pub current_player: Option<PlayerPublic>,
    pub current_player_index: usize,
    pub current_round: u32,
    /// Derived display score per player id: score-to-go in the 301 rulesets,
    /// accumulated total in training.
    pub player_scores: BTreeMap<PlayerId, u32>,
    /// The current player's open turn, or their latest turn once complete.
    pub current_turn: Option<TurnPublic>,
    pub recent_turns: Vec<TurnPublic>,
    pub winner: Option<PlayerPublic>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub started_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub completed_at: Option<OffsetDateTime>,
}

/// Produce the public view of a game.
pub fn snapshot(game: &Game) -> GameSnapshot {
    let players: Vec<PlayerPublic> = game
        .players
        .iter()
        .map(|p| PlayerPublic {
            id: p.id,
            name: p.name.clone(),
        })
        .collect();

    let current_player = game.current_player().map(|p| PlayerPublic {
        id: p.id,
        name: p.name.clone(),
    });

    let current_turn = current_player.as_ref().and_then(|p| {
        game.open_turn_for(p.id)
            .or_else(|| game.latest_turn_for(p.id))
            .map(|t| turn_public(game, t))
    });

    let player_scores: BTreeMap<PlayerId, u32> = game
        .players
        .iter()
        .map(|p| (p.id, game.score_for(p.id)))
        .collect();

    let recent_turns: Vec<TurnPublic> = game
        .turns
        .iter()
        .skip(game.turns.len().saturating_sub(SNAPSHOT_RECENT_TURNS))
        .map(|t| turn_public(game, t))
        .collect();

    let winner = game
        .winner
        .and_then(|id| game.players.iter().find(|p| p.id == id))
        .map(|p| PlayerPublic {
            id: p.id,
            name: p.name.clone(),
        });

    GameSnapshot {
        id: game.id,
        mode: game.mode,
        status: game.status,
        players,
        current_player,
        current_player_index: game.current_player_index,
        current_round: game.current_round,
        player_scores,
        current_turn,
        recent_turns,
        winner,
        started_at: game.started_at,
        completed_at: game.completed_at,
    }
}

/// Build the public view of one turn, resolving the player handle from the
/// game lineup.
pub fn turn_public(game: &Game, turn: &Turn) -> TurnPublic {
    let player = game
        .players
        .iter()
        .find(|p| p.id == turn.player_id)
        .map(|p| PlayerPublic {
            id: p.id,
            name: p.name.clone(),
        })
        .unwrap_or_else(|| PlayerPublic {
            id: turn.player_id,
            name: String::new(),
        });

    TurnPublic {
        player,
        round_number: turn.round_number,
        throws: turn.throws().iter().map(ThrowPublic::from).collect(),
        total_score: turn.total_score,
        remaining_score: turn.remaining_score,
        is_bust: turn.is_bust,
    }
}

//! Player identity handle.
//!
//! Players are shared across games and never owned by one: a `Game` keeps
//! copies of these handles for its lineup, while the identity itself lives
//! behind `repos::players::PlayerRepo`.

use time::OffsetDateTime;

pub type PlayerId = i64;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub created_at: OffsetDateTime,
}

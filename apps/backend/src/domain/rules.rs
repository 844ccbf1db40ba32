//! Fixed rule constants shared by every layer.
//!
//! These live in `domain` so services, repos, and views share a single source
//! of truth for the board geometry and table limits.

/// Lower bound on the game lineup.
pub const MIN_PLAYERS: usize = 1;

/// Upper bound on the game lineup.
pub const MAX_PLAYERS: usize = 8;

/// A turn holds at most three darts.
pub const THROWS_PER_TURN: usize = 3;

/// Sector code for a dart that missed the board entirely.
pub const MISS_SECTOR: u8 = 0;

/// Highest numbered wedge on the board.
pub const MAX_NUMBER_SECTOR: u8 = 20;

/// Sector code for the bull ring (outer and inner bull).
pub const BULL_SECTOR: u8 = 25;

/// Starting score-to-go for the 301 rulesets.
pub const STARTING_SCORE_301: u16 = 301;

/// Number of recent turns included in a game snapshot.
pub const SNAPSHOT_RECENT_TURNS: usize = 10;

//! Property tests for the throw valuation and scoring engine (pure domain).

use proptest::prelude::*;
use time::OffsetDateTime;

use crate::domain::player::Player;
use crate::domain::scoring::{apply_throw, ThrowOutcome};
use crate::domain::state::{Game, GameMode};
use crate::domain::throws::{evaluate_throw, Throw};

fn valid_pairs() -> impl Strategy<Value = (u8, u8)> {
    prop_oneof![
        Just((0u8, 0u8)),
        (1u8..=20u8, 1u8..=3u8),
        (Just(25u8), 1u8..=2u8),
    ]
}

fn valid_throws() -> impl Strategy<Value = Throw> {
    valid_pairs().prop_map(|(sector, multiplier)| {
        Throw::new(sector, multiplier, 1).expect("strategy yields valid pairs")
    })
}

proptest! {
    /// Every valid pair scores exactly sector * multiplier.
    #[test]
    fn prop_score_is_the_product((sector, multiplier) in valid_pairs()) {
        let score = evaluate_throw(sector, multiplier).expect("valid pair");
        prop_assert_eq!(score, u16::from(sector) * u16::from(multiplier));
    }

    /// Sectors off the board never validate, whatever the multiplier.
    #[test]
    fn prop_unknown_sectors_rejected(
        sector in (21u8..=255u8).prop_filter("bull is valid", |s| *s != 25),
        multiplier in 0u8..=3u8,
    ) {
        prop_assert!(evaluate_throw(sector, multiplier).is_err());
    }

    /// In the 301 modes the score-to-go never goes below zero: outcomes
    /// partition into continue (strictly positive remainder), finish (exact
    /// zero), and bust (reverted by the caller).
    #[test]
    fn prop_remaining_never_negative(
        before in 0u16..=301u16,
        dart in valid_throws(),
        double_out in proptest::bool::ANY,
    ) {
        let mode = if double_out { GameMode::DoubleOut301 } else { GameMode::Standard301 };
        match apply_throw(mode, before, &dart) {
            ThrowOutcome::Continue { remaining } => {
                prop_assert_eq!(remaining, before - dart.score);
                prop_assert!(remaining > 0 || dart.score == 0);
            }
            ThrowOutcome::Finish => {
                prop_assert_eq!(dart.score, before);
                if double_out {
                    prop_assert!(dart.is_double());
                }
            }
            ThrowOutcome::Bust => {
                let overshoot = dart.score > before;
                let bad_finish = double_out && dart.score == before && !dart.is_double();
                prop_assert!(overshoot || bad_finish);
            }
        }
    }

    /// Training never busts, never finishes, and never changes the input.
    #[test]
    fn prop_training_is_inert(before in 0u16..=1000u16, dart in valid_throws()) {
        prop_assert_eq!(
            apply_throw(GameMode::Training, before, &dart),
            ThrowOutcome::Continue { remaining: before }
        );
    }

    /// The round counter advances exactly when rotation wraps to the first
    /// player: after k rotations of an n-player lineup the game is in round
    /// 1 + k / n at player k % n.
    #[test]
    fn prop_round_counter_tracks_wraps(n in 1usize..=8, k in 0usize..=40) {
        let now = OffsetDateTime::now_utc();
        let mut game = Game::new(GameMode::Training, now);
        for id in 1..=n {
            game.add_player(Player {
                id: id as i64,
                name: format!("P{id}"),
                created_at: now,
            }).expect("lineup fits");
        }
        game.start(now).expect("non-empty lineup");

        for _ in 0..k {
            game.advance_player();
        }
        prop_assert_eq!(game.current_player_index, k % n);
        prop_assert_eq!(game.current_round as usize, 1 + k / n);
    }
}

//! Property tests over random throw sequences.

use proptest::prelude::*;

use dart_cricket::core::{GameConfig, GameState, Multiplier, Target, Throw, UndoPolicy};
use dart_cricket::session::GameSession;

fn arb_throw() -> impl Strategy<Value = Throw> {
    let target = prop::sample::select(Target::ALL.to_vec());
    let multiplier = prop::sample::select(Multiplier::ALL.to_vec());
    (target, multiplier).prop_map(|(target, multiplier)| Throw::new(target, multiplier))
}

fn started(player_count: usize, config: GameConfig) -> GameSession {
    let names: Vec<String> = (0..player_count).map(|i| format!("P{}", i)).collect();
    let mut session = GameSession::new(config);
    session.start_game(&names).unwrap();
    session
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Marks stay in 0..=3 and never go down without an undo.
    #[test]
    fn marks_bounded_and_monotone(
        player_count in 1usize..=8,
        throws in prop::collection::vec(arb_throw(), 0..120),
    ) {
        let mut session = started(player_count, GameConfig::default());
        let mut previous = session.state().unwrap().clone();

        for throw in throws {
            let state = session.submit_throw(throw).unwrap().clone();
            for (player, now) in state.players.iter() {
                for (number, hits) in now.marks.iter() {
                    prop_assert!(hits <= 3);
                    prop_assert!(hits >= previous.player(player).marks.get(number));
                }
            }
            previous = state;
        }
    }

    /// Nobody's total ever decreases during play, the thrower's included.
    #[test]
    fn totals_never_decrease(
        player_count in 1usize..=8,
        throws in prop::collection::vec(arb_throw(), 0..120),
    ) {
        let mut session = started(player_count, GameConfig::default());

        for throw in throws {
            let before = session.state().unwrap().clone();
            let after = session.submit_throw(throw).unwrap();
            for (player, now) in after.players.iter() {
                prop_assert!(now.total >= before.player(player).total);
            }
        }
    }

    /// Without undo, rotation and rounds follow directly from the throw count.
    #[test]
    fn rotation_and_rounds(
        player_count in 1usize..=8,
        throws in prop::collection::vec(arb_throw(), 0..120),
    ) {
        let mut session = started(player_count, GameConfig::default());
        let total = throws.len();
        for throw in throws {
            session.submit_throw(throw).unwrap();
        }

        let state = session.state().unwrap();
        prop_assert_eq!(state.total_turns as usize, total);
        prop_assert_eq!(state.throw_count as usize, total % 3);
        prop_assert_eq!(state.current_player.index(), (total / 3) % player_count);
        prop_assert_eq!(state.round as usize, 1 + total / (3 * player_count));
    }

    /// Throw then undo is the identity on everything but `total_turns`
    /// and the display multiplier.
    #[test]
    fn undo_reverses_throw(
        player_count in 1usize..=8,
        prefix in prop::collection::vec(arb_throw(), 0..60),
        throw in arb_throw(),
    ) {
        let mut session = started(player_count, GameConfig::default());
        for t in prefix {
            session.submit_throw(t).unwrap();
        }
        let before: GameState = session.state().unwrap().clone();

        session.submit_throw(throw).unwrap();
        let after = session.undo().unwrap();

        prop_assert_eq!(&after.players, &before.players);
        prop_assert_eq!(after.current_player, before.current_player);
        prop_assert_eq!(after.throw_count, before.throw_count);
        prop_assert_eq!(after.round, before.round);
        prop_assert_eq!(after.total_turns, before.total_turns + 1);
        prop_assert_eq!(after.last_multiplier, Some(throw.multiplier));
    }

    /// With `RestoreTotalTurns`, undoing everything returns to a fresh game.
    #[test]
    fn full_undo_restores_start(
        player_count in 1usize..=8,
        throws in prop::collection::vec(arb_throw(), 1..60),
    ) {
        let config = GameConfig::new().with_undo_policy(UndoPolicy::RestoreTotalTurns);
        let mut session = started(player_count, config);
        let initial = session.state().unwrap().clone();
        let count = throws.len();

        for throw in throws {
            session.submit_throw(throw).unwrap();
        }
        for _ in 0..count {
            session.undo().unwrap();
        }

        let state = session.state().unwrap();
        prop_assert_eq!(&state.players, &initial.players);
        prop_assert_eq!(state.total_turns, 0);
        prop_assert_eq!(state.round, 1);
        prop_assert_eq!(session.history_len(), 0);
    }
}

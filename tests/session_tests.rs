//! Session lifecycle and undo tests.

use dart_cricket::core::{
    CricketNumber, GameConfig, Multiplier, PlayerId, SessionError, Target, Throw, UndoPolicy,
};
use dart_cricket::session::GameSession;

fn session_with(config: GameConfig, names: &[&str]) -> GameSession {
    let mut session = GameSession::new(config);
    session.start_game(names).unwrap();
    session
}

// =============================================================================
// Undo
// =============================================================================

/// Throw then undo restores the exact pre-throw players and pointers.
#[test]
fn test_undo_same_step() {
    let mut session = session_with(GameConfig::default(), &["A", "B", "C"]);
    for throw in [
        Throw::cricket(CricketNumber::Twenty, Multiplier::Double),
        Throw::single(Target::Open(9)),
        Throw::cricket(CricketNumber::Twenty, Multiplier::Triple),
        Throw::single(Target::bull()),
    ] {
        session.submit_throw(throw).unwrap();
    }
    let before = session.state().unwrap().clone();

    session
        .submit_throw(Throw::cricket(CricketNumber::Twenty, Multiplier::Triple))
        .unwrap();
    let after = session.undo().unwrap();

    assert_eq!(after.players, before.players);
    assert_eq!(after.current_player, before.current_player);
    assert_eq!(after.throw_count, before.throw_count);
    assert_eq!(after.round, before.round);
}

/// Undo walks back through every throw in order.
#[test]
fn test_undo_to_start() {
    let mut session = session_with(GameConfig::default(), &["A", "B"]);
    let initial = session.state().unwrap().clone();

    for _ in 0..7 {
        session.submit_throw(Throw::single(Target::Open(4))).unwrap();
    }
    for _ in 0..7 {
        session.undo().unwrap();
    }

    let state = session.state().unwrap();
    assert_eq!(state.players, initial.players);
    assert_eq!(state.current_player, initial.current_player);
    assert_eq!(state.throw_count, 0);
    assert_eq!(state.round, 1);
    assert_eq!(session.history_len(), 0);

    // One more is a no-op
    let again = session.undo().unwrap().clone();
    assert_eq!(&again, session.state().unwrap());
}

/// Undo crossing a turn boundary hands the turn back.
#[test]
fn test_undo_across_turn_boundary() {
    let mut session = session_with(GameConfig::default(), &["A", "B"]);
    for _ in 0..3 {
        session.submit_throw(Throw::miss()).unwrap();
    }
    assert_eq!(session.state().unwrap().current_player, PlayerId::new(1));

    let state = session.undo().unwrap();
    assert_eq!(state.current_player, PlayerId::new(0));
    assert_eq!(state.throw_count, 2);
}

/// The display multiplier after undo is the one of the undone throw.
#[test]
fn test_undo_sets_display_multiplier() {
    let mut session = session_with(GameConfig::default(), &["A", "B"]);
    session.submit_throw(Throw::single(Target::Open(3))).unwrap();
    session
        .submit_throw(Throw::cricket(CricketNumber::Sixteen, Multiplier::Triple))
        .unwrap();

    let state = session.undo().unwrap();
    assert_eq!(state.last_multiplier, Some(Multiplier::Triple));
}

// =============================================================================
// total_turns after undo
// =============================================================================

/// By default undo leaves `total_turns` alone, so the round can advance
/// mid-turn after an undo.
#[test]
fn test_undo_keeps_total_turns_and_round_drifts() {
    let mut session = session_with(GameConfig::default(), &["A", "B"]);
    for _ in 0..5 {
        session.submit_throw(Throw::single(Target::Open(1))).unwrap();
    }

    let state = session.undo().unwrap();
    assert_eq!(state.total_turns, 5);
    assert_eq!(state.current_player, PlayerId::new(1));
    assert_eq!(state.throw_count, 1);

    let state = session.submit_throw(Throw::single(Target::Open(1))).unwrap();
    assert_eq!(state.total_turns, 6);
    assert_eq!(state.round, 2);
    assert_eq!(state.current_player, PlayerId::new(1));
    assert_eq!(state.throw_count, 2);
}

#[test]
fn test_restore_total_turns_keeps_rounds_aligned() {
    let config = GameConfig::new().with_undo_policy(UndoPolicy::RestoreTotalTurns);
    let mut session = session_with(config, &["A", "B"]);
    for _ in 0..5 {
        session.submit_throw(Throw::single(Target::Open(1))).unwrap();
    }

    let state = session.undo().unwrap();
    assert_eq!(state.total_turns, 4);

    let state = session.submit_throw(Throw::single(Target::Open(1))).unwrap();
    assert_eq!(state.round, 1);

    let state = session.submit_throw(Throw::single(Target::Open(1))).unwrap();
    assert_eq!(state.round, 2);
    assert_eq!(state.current_player, PlayerId::new(0));
    assert_eq!(state.throw_count, 0);
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_restart_then_new_game() {
    let mut session = session_with(GameConfig::default(), &["A", "B"]);
    session.submit_throw(Throw::miss()).unwrap();

    session.restart();
    assert!(session.state().is_none());
    assert_eq!(
        session.submit_throw(Throw::miss()).unwrap_err(),
        SessionError::NoGameInProgress
    );

    let state = session.start_game(&["X", "", "Z"]).unwrap();
    assert_eq!(state.player_count(), 3);
    assert_eq!(state.player(PlayerId::new(1)).name, "Player 2");
    assert_eq!(state.total_turns, 0);
    assert_eq!(session.history_len(), 0);
}

#[test]
fn test_start_game_replaces_running_game() {
    let mut session = session_with(GameConfig::default(), &["A", "B"]);
    session.submit_throw(Throw::miss()).unwrap();

    session.start_game(&["C", "D"]).unwrap();

    assert_eq!(session.history_len(), 0);
    assert_eq!(session.undo().unwrap().total_turns, 0);
}

#[test]
fn test_player_range_from_config() {
    let mut session = GameSession::new(GameConfig::new().with_player_range(2, 4));

    assert_eq!(
        session.start_game(&["solo"]).unwrap_err(),
        SessionError::PlayerCount { count: 1, min: 2, max: 4 }
    );
    assert!(session.start_game(&["a", "b", "c", "d"]).is_ok());
}

#[test]
fn test_submit_input_parses_boundary_text() {
    let mut session = session_with(GameConfig::default(), &["A", "B"]);

    assert!(matches!(
        session.submit_input("21", "1"),
        Err(SessionError::Board(_))
    ));
    assert!(matches!(
        session.submit_input("bull", "x"),
        Err(SessionError::Board(_))
    ));

    let state = session.submit_input("Bull", "double").unwrap();
    assert_eq!(state.player(PlayerId::new(0)).marks.get(CricketNumber::Bull), 2);
}

#[test]
fn test_scoreboard_text() {
    let mut session = session_with(GameConfig::default(), &["Ann", "Bob"]);
    session
        .submit_throw(Throw::cricket(CricketNumber::Twenty, Multiplier::Double))
        .unwrap();

    let text = session.state().unwrap().to_string();
    assert!(text.starts_with("Round: 1, Ann, Throw 2 / 3"));
    assert!(text.contains("Ann (0)"));
    assert!(text.contains("20: ✅✅"));
}

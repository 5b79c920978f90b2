// tests/engine_error_tests.rs
//
// Ошибки движка: конфиг, фаза хода, индексы, отсутствие партии.
// После любой ошибки состояние и поток событий не меняются.

use shift_poker::domain::{Card, ShiftDirection};
use shift_poker::engine::{EngineError, ErrorKind, HistoryRecorder, IndexKind, ShiftPokerSession};
use shift_poker::infra::NoShuffle;
use shift_poker::GameConfig;

fn started() -> (ShiftPokerSession<NoShuffle>, HistoryRecorder) {
    let rec = HistoryRecorder::new();
    let mut s = ShiftPokerSession::with_rng(NoShuffle);
    s.start_game(&GameConfig::new(["Alice", "Bob", "Carol"], 3)).unwrap();
    s.subscribe(rec.clone());
    (s, rec)
}

#[test]
fn invalid_player_counts_are_rejected() {
    let mut s = ShiftPokerSession::with_rng(NoShuffle);
    for n in [0usize, 1, 5, 8] {
        let names: Vec<String> = (0..n).map(|i| format!("p{i}")).collect();
        let err = s.start_game(&GameConfig::new(names, 3)).unwrap_err();
        assert_eq!(err, EngineError::InvalidPlayerCount(n));
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    }
    assert!(!s.is_active());
}

#[test]
fn invalid_round_counts_are_rejected() {
    let mut s = ShiftPokerSession::with_rng(NoShuffle);
    for rounds in [0u8, 1, 8, 255] {
        let err = s.start_game(&GameConfig::new(["a", "b"], rounds)).unwrap_err();
        assert_eq!(err, EngineError::InvalidRounds(rounds));
    }
    for rounds in 2..=7u8 {
        assert!(s.start_game(&GameConfig::new(["a", "b"], rounds)).is_ok());
    }
}

#[test]
fn blank_player_name_is_rejected() {
    let mut s = ShiftPokerSession::with_rng(NoShuffle);
    let err = s.start_game(&GameConfig::new(["a", "  "], 2)).unwrap_err();
    assert_eq!(err, EngineError::InvalidPlayerName(1));
}

#[test]
fn failed_start_keeps_previous_game_and_stays_silent() {
    let (mut s, rec) = started();
    s.shift(ShiftDirection::Left).unwrap();
    let snapshot = s.game().cloned();
    let events = rec.len();

    assert!(s.start_game(&GameConfig::new(["solo"], 3)).is_err());
    assert_eq!(s.game().cloned(), snapshot);
    assert_eq!(rec.len(), events);
}

#[test]
fn phase_errors_have_illegal_state_kind() {
    let (mut s, rec) = started();

    let err = s.swap(0, 0).unwrap_err();
    assert_eq!(err, EngineError::NotShifted);
    assert_eq!(err.kind(), ErrorKind::IllegalState);
    assert_eq!(s.swap_all().unwrap_err(), EngineError::NotShifted);
    assert_eq!(s.pass_turn().unwrap_err(), EngineError::NotShifted);

    s.shift(ShiftDirection::Right).unwrap();
    assert_eq!(s.shift(ShiftDirection::Left).unwrap_err(), EngineError::AlreadyShifted);
    assert_eq!(rec.len(), 1);
}

#[test]
fn out_of_range_indices_are_rejected_before_phase_check() {
    let (mut s, rec) = started();
    let snapshot = s.game().cloned();

    // Даже без сдвига индекс проверяется первым.
    let err = s.swap(3, 0).unwrap_err();
    assert_eq!(
        err,
        EngineError::IndexOutOfRange {
            kind: IndexKind::Hand,
            index: 3
        }
    );
    assert_eq!(err.kind(), ErrorKind::OutOfRange);

    s.shift(ShiftDirection::Left).unwrap();
    let after_shift = s.game().cloned();
    assert_eq!(
        s.swap(0, 7).unwrap_err(),
        EngineError::IndexOutOfRange {
            kind: IndexKind::Middle,
            index: 7
        }
    );
    assert_eq!(s.game().cloned(), after_shift);
    assert_ne!(s.game().cloned(), snapshot);
    assert_eq!(rec.len(), 1);
}

#[test]
fn everything_fails_without_active_game() {
    let mut s = ShiftPokerSession::with_rng(NoShuffle);

    assert_eq!(s.shift(ShiftDirection::Left).unwrap_err(), EngineError::NoActiveGame);
    assert_eq!(s.swap(0, 0).unwrap_err(), EngineError::NoActiveGame);
    assert_eq!(s.swap_all().unwrap_err(), EngineError::NoActiveGame);
    assert_eq!(s.pass_turn().unwrap_err(), EngineError::NoActiveGame);
    assert_eq!(s.next_player().unwrap_err(), EngineError::NoActiveGame);
    assert_eq!(s.end_game().unwrap_err(), EngineError::NoActiveGame);
    assert_eq!(s.calc_result().unwrap_err(), EngineError::NoActiveGame);
    assert_eq!(s.select_middle_card(0).unwrap_err(), EngineError::NoActiveGame);
    assert!(s.current_player().is_none());
}

#[test]
fn evaluate_hand_needs_exactly_five_cards() {
    let s = ShiftPokerSession::with_rng(NoShuffle);
    let hand: Vec<Card> = ["Ah", "Kh", "Qh", "Jh"]
        .iter()
        .map(|c| c.parse().unwrap())
        .collect();

    assert_eq!(s.evaluate_hand(&hand).unwrap_err(), EngineError::InvalidHandSize(4));
    assert_eq!(s.evaluate_hand(&[]).unwrap_err(), EngineError::InvalidHandSize(0));
}

#[test]
fn error_messages_are_human_readable() {
    let err = EngineError::IndexOutOfRange {
        kind: IndexKind::Middle,
        index: 4,
    };
    assert!(err.to_string().contains('4'));
    assert!(!EngineError::NoActiveGame.to_string().is_empty());
}

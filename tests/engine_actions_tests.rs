//! Действия игрока: shift / swap / swap_all / pass.
//!
//! Раздача без перемешивания (NoShuffle), поэтому все карты известны заранее:
//!   Alice: open 2c 3c 4c, hidden 5c 6c
//!   Bob:   open 7c 8c 9c, hidden Tc Jc
//!   ряд:   Qc Kc Ac
//!   добор: 2d 3d 4d ...

use shift_poker::domain::{Card, Rank, ShiftDirection, Suit};
use shift_poker::engine::{GameEvent, HistoryRecorder, ShiftPokerSession, SwapKind};
use shift_poker::infra::NoShuffle;
use shift_poker::GameConfig;

use Rank::*;
use Suit::*;

fn c(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn new_session() -> (ShiftPokerSession<NoShuffle>, HistoryRecorder) {
    let rec = HistoryRecorder::new();
    let mut s = ShiftPokerSession::with_rng(NoShuffle);
    s.start_game(&GameConfig::new(["Alice", "Bob"], 3)).unwrap();
    s.subscribe(rec.clone());
    (s, rec)
}

// ============= SHIFT ============

#[test]
fn shift_left_moves_row_and_fills_right_slot() {
    let (mut s, rec) = new_session();
    let before = s.game().unwrap().board.clone();

    s.shift(ShiftDirection::Left).unwrap();
    let board = &s.game().unwrap().board;

    assert_eq!(board.discard(ShiftDirection::Left), Some(before.middle_cards.0[0]));
    assert_eq!(board.middle_cards.0[0], before.middle_cards.0[1]);
    assert_eq!(board.middle_cards.0[1], before.middle_cards.0[2]);
    assert_eq!(Some(&board.middle_cards.0[2]), before.draw_pile.front());
    assert_eq!(board.draw_pile.len(), before.draw_pile.len() - 1);
    assert_eq!(board.discard(ShiftDirection::Right), None);
    assert_eq!(board.discard(ShiftDirection::Right), board.discard_right);
    assert!(s.current_player().unwrap().has_shifted);

    assert_eq!(
        rec.snapshot().last(),
        Some(&GameEvent::Shifted {
            player: 0,
            direction: ShiftDirection::Left,
            discarded: c(Queen, Clubs),
            drawn: c(Two, Diamonds),
        })
    );
}

#[test]
fn shift_right_mirrors_shift_left() {
    let (mut s, _) = new_session();
    let before = s.game().unwrap().board.clone();

    s.shift(ShiftDirection::Right).unwrap();
    let board = &s.game().unwrap().board;

    assert_eq!(board.discard(ShiftDirection::Right), Some(before.middle_cards.0[2]));
    assert_eq!(board.middle_cards.0[2], before.middle_cards.0[1]);
    assert_eq!(board.middle_cards.0[1], before.middle_cards.0[0]);
    assert_eq!(Some(&board.middle_cards.0[0]), before.draw_pile.front());
    assert_eq!(board.draw_pile.len(), before.draw_pile.len() - 1);
    assert_eq!(board.discard(ShiftDirection::Left), None);
}

#[test]
fn discard_slot_keeps_only_latest_card() {
    let (mut s, _) = new_session();
    s.shift(ShiftDirection::Left).unwrap(); // Qc уходит влево
    s.pass_turn().unwrap();
    s.shift(ShiftDirection::Left).unwrap(); // Kc затирает Qc

    let board = &s.game().unwrap().board;
    assert_eq!(board.discard(ShiftDirection::Left), Some(c(King, Clubs)));
    assert_eq!(board.discard(ShiftDirection::Right), None);
    assert_eq!(board.middle_cards.0, [c(Ace, Clubs), c(Two, Diamonds), c(Three, Diamonds)]);
}

#[test]
fn second_shift_in_same_turn_fails_without_changes() {
    let (mut s, rec) = new_session();
    s.shift(ShiftDirection::Left).unwrap();
    let snapshot = s.game().cloned();
    let events = rec.len();

    assert!(s.shift(ShiftDirection::Right).is_err());
    assert_eq!(s.game().cloned(), snapshot);
    assert_eq!(rec.len(), events);
}

// ============= SWAP ============

#[test]
fn swap_exchanges_exactly_two_cards_and_advances() {
    let (mut s, rec) = new_session();
    s.shift(ShiftDirection::Left).unwrap(); // ряд: Kc Ac 2d

    s.swap(1, 2).unwrap();
    let game = s.game().unwrap();
    let alice = &game.players[0];

    assert_eq!(alice.open_cards, [c(Two, Clubs), c(Two, Diamonds), c(Four, Clubs)]);
    assert_eq!(alice.hidden_cards, [c(Five, Clubs), c(Six, Clubs)]);
    assert_eq!(game.board.middle_cards.0, [c(King, Clubs), c(Ace, Clubs), c(Three, Clubs)]);
    assert_eq!(game.current_player, 1);

    let events: Vec<GameEvent> = rec.snapshot().iter().cloned().collect();
    assert_eq!(
        events[1],
        GameEvent::Swapped {
            player: 0,
            kind: SwapKind::One {
                hand_index: 1,
                middle_index: 2
            }
        }
    );
    assert!(matches!(events[2], GameEvent::NextPlayer { current_player: 1, ref name } if name == "Bob"));
}

#[test]
fn every_index_pair_swaps_only_its_targets() {
    for h in 0..3 {
        for m in 0..3 {
            let (mut s, _) = new_session();
            s.shift(ShiftDirection::Right).unwrap();
            let before = s.game().cloned().unwrap();

            s.swap(h, m).unwrap();
            let after = s.game().unwrap();

            for i in 0..3 {
                let expected_hand = if i == h { before.board.middle_cards.0[m] } else { before.players[0].open_cards[i] };
                let expected_mid = if i == m { before.players[0].open_cards[h] } else { before.board.middle_cards.0[i] };
                assert_eq!(after.players[0].open_cards[i], expected_hand);
                assert_eq!(after.board.middle_cards.0[i], expected_mid);
            }
            assert_eq!(after.players[1], {
                let mut bob = before.players[1].clone();
                bob.has_shifted = false;
                bob
            });
        }
    }
}

#[test]
fn swap_before_shift_fails() {
    let (mut s, rec) = new_session();
    let snapshot = s.game().cloned();
    assert!(s.swap(0, 0).is_err());
    assert_eq!(s.game().cloned(), snapshot);
    assert!(rec.is_empty());
}

// ============= SWAP ALL / PASS ============

#[test]
fn swap_all_exchanges_whole_rows_pairwise() {
    let (mut s, rec) = new_session();
    s.shift(ShiftDirection::Right).unwrap(); // ряд: 2d Qc Kc

    s.swap_all().unwrap();
    let game = s.game().unwrap();
    assert_eq!(game.players[0].open_cards, [c(Two, Diamonds), c(Queen, Clubs), c(King, Clubs)]);
    assert_eq!(game.board.middle_cards.0, [c(Two, Clubs), c(Three, Clubs), c(Four, Clubs)]);
    assert_eq!(game.current_player, 1);
    assert!(rec.snapshot().iter().any(|e| matches!(
        e,
        GameEvent::Swapped { player: 0, kind: SwapKind::All }
    )));
}

#[test]
fn pass_moves_no_cards_and_advances() {
    let (mut s, rec) = new_session();
    s.shift(ShiftDirection::Left).unwrap();
    let before = s.game().cloned().unwrap();

    s.pass_turn().unwrap();
    let after = s.game().unwrap();
    assert_eq!(after.board, before.board);
    assert_eq!(after.players[0].open_cards, before.players[0].open_cards);
    assert_eq!(after.current_player, 1);
    assert!(rec.snapshot().iter().any(|e| matches!(
        e,
        GameEvent::Swapped { player: 0, kind: SwapKind::Pass }
    )));
}

#[test]
fn swap_all_and_pass_before_shift_fail() {
    let (mut s, _) = new_session();
    assert!(s.swap_all().is_err());
    assert!(s.pass_turn().is_err());
    assert_eq!(s.game().unwrap().current_player, 0);
}

#[test]
fn select_middle_card_only_notifies() {
    let (mut s, rec) = new_session();
    let snapshot = s.game().cloned();
    s.select_middle_card(2).unwrap();
    assert_eq!(s.game().cloned(), snapshot);
    assert_eq!(
        rec.snapshot().last(),
        Some(&GameEvent::MiddleCardSelected { middle_index: 2 })
    );
    assert!(s.select_middle_card(3).is_err());
}

/// Подписчик видит уже применённое состояние.
#[test]
fn observer_sees_post_mutation_state() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let (mut s, _) = new_session();
    let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    s.subscribe(move |e: &GameEvent| {
        if let GameEvent::Shifted { discarded, .. } = e {
            sink.borrow_mut().push(discarded.to_string());
        }
    });

    s.shift(ShiftDirection::Left).unwrap();
    assert_eq!(s.game().unwrap().board.discard_left.map(|c| c.to_string()), Some(seen.borrow()[0].clone()));
}

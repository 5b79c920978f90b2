//! Интеграционные тесты для доменной модели (crate::domain).

use std::collections::HashSet;

use shift_poker::domain::*;

/// Card/Suit/Rank: Display + FromStr.
#[test]
fn card_display_and_parse_roundtrip() {
    let cards = [
        Card::new(Rank::Ace, Suit::Hearts),    // Ah
        Card::new(Rank::Ten, Suit::Spades),    // Ts
        Card::new(Rank::Two, Suit::Clubs),     // 2c
        Card::new(Rank::Nine, Suit::Diamonds), // 9d
    ];

    for card in cards {
        let s = card.to_string();
        let parsed: Card = s.parse().expect("parse Card from Display string");
        assert_eq!(parsed, card);
    }

    // Неверные строки
    assert!("".parse::<Card>().is_err());
    assert!("1h".parse::<Card>().is_err());
    assert!("Ax".parse::<Card>().is_err());
}

/// Ранги: строгий порядок, туз старший.
#[test]
fn rank_total_order_two_to_ace() {
    for pair in Rank::ALL.windows(2) {
        assert!(pair[0] < pair[1], "{:?} должен быть младше {:?}", pair[0], pair[1]);
    }
    assert_eq!(Rank::ALL.len(), 13);
    assert_eq!(Suit::ALL.len(), 4);
}

/// Колода: 52 уникальные карты, каждая комбинация масть×ранг ровно один раз.
#[test]
fn standard_deck_covers_every_suit_rank_pair() {
    let deck = Deck::standard_52();
    let set: HashSet<Card> = deck.cards.iter().copied().collect();
    assert_eq!(set.len(), 52);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert!(deck.contains(&Card::new(rank, suit)));
        }
    }
}

#[test]
fn deck_draws_from_front() {
    let mut deck = Deck::standard_52();
    let first = deck.draw_one().unwrap();
    assert_eq!(first, Card::new(Rank::Two, Suit::Clubs));
    assert_eq!(deck.front(), Some(&Card::new(Rank::Three, Suit::Clubs)));
    assert_eq!(deck.len(), 51);
}

/// Полная рука игрока = открытые + закрытые, в этом порядке.
#[test]
fn player_full_hand_is_open_then_hidden() {
    let open = [
        Card::new(Rank::Two, Suit::Clubs),
        Card::new(Rank::Three, Suit::Clubs),
        Card::new(Rank::Four, Suit::Clubs),
    ];
    let hidden = [
        Card::new(Rank::Five, Suit::Clubs),
        Card::new(Rank::Six, Suit::Clubs),
    ];
    let p = Player::new("Alice", open, hidden);

    assert!(!p.has_shifted);
    assert_eq!(
        p.full_hand(),
        [open[0], open[1], open[2], hidden[0], hidden[1]]
    );
}

/// Сдвиг ряда не трогает исходный ряд, возвращает новый.
#[test]
fn middle_row_shift_returns_new_row() {
    let row = MiddleRow([
        Card::new(Rank::Queen, Suit::Clubs),
        Card::new(Rank::King, Suit::Clubs),
        Card::new(Rank::Ace, Suit::Clubs),
    ]);
    let incoming = Card::new(Rank::Two, Suit::Diamonds);

    let (next, out) = row.shifted(ShiftDirection::Right, incoming);
    assert_eq!(out, Card::new(Rank::Ace, Suit::Clubs));
    assert_eq!(
        next.0,
        [
            incoming,
            Card::new(Rank::Queen, Suit::Clubs),
            Card::new(Rank::King, Suit::Clubs)
        ]
    );
    assert_eq!(row.get(2), Some(&Card::new(Rank::Ace, Suit::Clubs)));
    assert!(row.get(3).is_none());
}

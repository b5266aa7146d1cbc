//! Persistence format tests.

#![cfg(feature = "serde")]

use bjrules::{Card, Deck, Rank, Round, RoundStatus, Suit};

#[test]
fn wire_spellings_match_stored_games() {
    let card = Card::new(Rank::Ace, Suit::Spades);
    assert_eq!(
        serde_json::to_string(&card).unwrap(),
        r#"{"rank":"A","suit":"Spades"}"#
    );
    assert_eq!(
        serde_json::to_string(&Card::new(Rank::Ten, Suit::Hearts)).unwrap(),
        r#"{"rank":10,"suit":"Hearts"}"#
    );

    let seven: Card = serde_json::from_str(r#"{"rank": 7, "suit": "Hearts"}"#).unwrap();
    assert_eq!(seven, Card::new(Rank::Seven, Suit::Hearts));
    assert_eq!(
        serde_json::to_string(&seven).unwrap(),
        r#"{"rank":7,"suit":"Hearts"}"#
    );
    assert_eq!(
        serde_json::to_string(&RoundStatus::PlayerWon).unwrap(),
        r#""PLAYER_WON""#
    );
}

#[test]
fn stored_round_reloads() {
    let round = Round::start(Deck::seeded(1, 5), 10).unwrap();

    let json = serde_json::to_string(&round).unwrap();
    let restored: Round = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, round);
    assert_eq!(restored.cards_remaining(), 48);
}

#[test]
fn rank_accepts_numbers_and_labels() {
    let hand: Vec<Card> = serde_json::from_str(
        r#"[{"rank": "A", "suit": "Clubs"}, {"rank": 10, "suit": "Diamonds"}, {"rank": "7", "suit": "Spades"}]"#,
    )
    .unwrap();
    assert_eq!(
        hand,
        vec![
            Card::new(Rank::Ace, Suit::Clubs),
            Card::new(Rank::Ten, Suit::Diamonds),
            Card::new(Rank::Seven, Suit::Spades),
        ]
    );

    assert!(serde_json::from_str::<Rank>("1").is_err());
    assert!(serde_json::from_str::<Rank>("11").is_err());
    assert!(serde_json::from_str::<Rank>(r#""Z""#).is_err());
}

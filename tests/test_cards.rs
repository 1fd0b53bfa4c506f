use best_hand::cards::*;
use best_hand::error::PokerError;

#[test]
fn test_rank_indices() {
    assert_eq!(Rank::Two.index(), 0);
    assert_eq!(Rank::Five.index(), 3);
    assert_eq!(Rank::Ten.index(), 8);
    assert_eq!(Rank::Ace.index(), 12);
    for (i, rank) in ALL_RANKS.iter().enumerate() {
        assert_eq!(rank.index(), i as i8);
    }
}

#[test]
fn test_rank_symbols_round_trip() {
    for rank in ALL_RANKS {
        assert_eq!(Rank::from_symbol(rank.symbol()).unwrap(), rank);
    }
}

#[test]
fn test_rank_symbol_case_insensitive() {
    assert_eq!(Rank::from_symbol("q").unwrap(), Rank::Queen);
    assert_eq!(Rank::from_symbol("a").unwrap(), Rank::Ace);
}

#[test]
fn test_invalid_rank() {
    assert!(matches!(Rank::from_symbol("1"), Err(PokerError::InvalidRank(_))));
    assert!(matches!(Rank::from_symbol("T"), Err(PokerError::InvalidRank(_))));
    assert!(matches!(Rank::from_symbol("11"), Err(PokerError::InvalidRank(_))));
}

#[test]
fn test_invalid_suit() {
    assert!(matches!(Suit::from_char('X'), Err(PokerError::InvalidSuit('X'))));
}

#[test]
fn test_card_str() {
    assert_eq!(Card::new(Rank::King, Suit::Diamonds).to_string(), "KD");
    assert_eq!(Card::new(Rank::Ten, Suit::Spades).to_string(), "10S");
}

#[test]
fn test_card_pretty() {
    assert_eq!(Card::new(Rank::Ace, Suit::Spades).pretty(), "A\u{2660}");
}

#[test]
fn test_card_serializes_as_text() {
    let card = Card::new(Rank::Ten, Suit::Hearts);
    assert_eq!(serde_json::to_string(&card).unwrap(), "\"10H\"");
}

#[test]
fn test_hand_serializes_as_text() {
    let hand = parse_hand("10s  JS QS ks AS").unwrap();
    assert_eq!(serde_json::to_string(&hand).unwrap(), "\"10S JS QS KS AS\"");
}

#[test]
fn test_parse_card_basic() {
    assert_eq!(parse_card("AS").unwrap(), Card::new(Rank::Ace, Suit::Spades));
    assert_eq!(parse_card("2c").unwrap(), Card::new(Rank::Two, Suit::Clubs));
}

#[test]
fn test_parse_card_ten_has_two_char_rank() {
    assert_eq!(parse_card("10D").unwrap(), Card::new(Rank::Ten, Suit::Diamonds));
}

#[test]
fn test_parse_card_invalid() {
    assert!(matches!(parse_card("S"), Err(PokerError::InvalidCardNotation(_))));
    assert!(matches!(parse_card(""), Err(PokerError::InvalidCardNotation(_))));
    assert!(matches!(parse_card("1S"), Err(PokerError::InvalidRank(_))));
    assert!(matches!(parse_card("10X"), Err(PokerError::InvalidSuit('X'))));
}

#[test]
fn test_parse_hand_keeps_order() {
    let hand = parse_hand("10S JS QS KS AS").unwrap();
    let ranks: Vec<Rank> = hand.cards().iter().map(|c| c.rank).collect();
    assert_eq!(ranks, vec![Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]);
    assert_eq!(hand.to_string(), "10S JS QS KS AS");
}

#[test]
fn test_parse_hand_extra_whitespace() {
    let hand = parse_hand("  2S  4H\t6S 4D JH ").unwrap();
    assert_eq!(hand.to_string(), "2S 4H 6S 4D JH");
}

#[test]
fn test_parse_hand_wrong_count() {
    assert!(matches!(
        parse_hand("2S 4H 6S 4D"),
        Err(PokerError::WrongCardCount { expected: 5, got: 4 })
    ));
    assert!(matches!(
        parse_hand("2S 4H 6S 4D JH 9C"),
        Err(PokerError::WrongCardCount { expected: 5, got: 6 })
    ));
    assert!(matches!(
        parse_hand(""),
        Err(PokerError::WrongCardCount { expected: 5, got: 0 })
    ));
}

#[test]
fn test_parse_hand_bad_token() {
    let err = parse_hand("2S 4H 6S 4D ZH").unwrap_err();
    assert!(err.is_parse_error());
    assert_eq!(err.to_string(), "Invalid rank: Z");
}

#[test]
fn test_parse_hand_duplicate_card() {
    let err = parse_hand("2S 4H 2S 4D JH").unwrap_err();
    assert!(matches!(err, PokerError::DuplicateCard(ref c) if c == "2S"));
    assert!(err.is_parse_error());
}

#[test]
fn test_rank_counts() {
    let hand = parse_hand("4S 5C 4C 5D 4H").unwrap();
    let counts = hand.rank_counts();
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[&Rank::Four], 3);
    assert_eq!(counts[&Rank::Five], 2);
}

#[test]
fn test_is_flush() {
    assert!(parse_hand("2S 4S 5S 6S 7S").unwrap().is_flush());
    assert!(!parse_hand("2S 4S 5S 6S 7H").unwrap().is_flush());
}

#[test]
fn test_empty_input_is_not_parse_error() {
    assert!(!PokerError::EmptyInput.is_parse_error());
}

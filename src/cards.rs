use std::collections::HashMap;
use std::fmt;

use itertools::Itertools;
use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};

use crate::error::{PokerError, PokerResult};

pub const HAND_SIZE: usize = 5;

/// Card ranks, lowest first. The discriminant is the rank index used in
/// ranking keys (2 → 0, A → 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

static RANK_SYMBOLS: Lazy<HashMap<&'static str, Rank>> =
    Lazy::new(|| ALL_RANKS.iter().map(|&r| (r.symbol(), r)).collect());

impl Rank {
    pub fn from_symbol(symbol: &str) -> PokerResult<Rank> {
        RANK_SYMBOLS
            .get(symbol.to_ascii_uppercase().as_str())
            .copied()
            .ok_or_else(|| PokerError::InvalidRank(symbol.to_string()))
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    pub fn index(self) -> i8 {
        self as i8
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub fn from_char(c: char) -> PokerResult<Suit> {
        match c.to_ascii_uppercase() {
            'S' => Ok(Suit::Spades),
            'H' => Ok(Suit::Hearts),
            'D' => Ok(Suit::Diamonds),
            'C' => Ok(Suit::Clubs),
            _ => Err(PokerError::InvalidSuit(c)),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Spades => "\u{2660}",
            Suit::Hearts => "\u{2665}",
            Suit::Diamonds => "\u{2666}",
            Suit::Clubs => "\u{2663}",
        }
    }
}

pub const ALL_SUITS: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    pub fn pretty(&self) -> String {
        format!("{}{}", self.rank, self.suit.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit.to_char())
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Five cards in the order they were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    pub fn new(cards: [Card; HAND_SIZE]) -> PokerResult<Hand> {
        if let Some(dup) = cards.iter().duplicates().next() {
            return Err(PokerError::DuplicateCard(dup.to_string()));
        }
        Ok(Hand { cards })
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Number of cards of each rank present in the hand.
    pub fn rank_counts(&self) -> HashMap<Rank, usize> {
        self.cards.iter().map(|c| c.rank).counts()
    }

    pub fn is_flush(&self) -> bool {
        self.cards.iter().map(|c| c.suit).all_equal()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cards.iter().join(" "))
    }
}

impl Serialize for Hand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parses a single `<rank><suit>` token such as `10S` or `qh`. The suit is the
/// last character, the rank everything before it.
pub fn parse_card(notation: &str) -> PokerResult<Card> {
    let notation = notation.trim();
    let mut chars = notation.chars();
    let suit = chars
        .next_back()
        .ok_or_else(|| PokerError::InvalidCardNotation(notation.to_string()))?;
    let rank = chars.as_str();
    if rank.is_empty() {
        return Err(PokerError::InvalidCardNotation(notation.to_string()));
    }
    Ok(Card::new(Rank::from_symbol(rank)?, Suit::from_char(suit)?))
}

pub fn parse_hand(text: &str) -> PokerResult<Hand> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != HAND_SIZE {
        return Err(PokerError::WrongCardCount {
            expected: HAND_SIZE,
            got: tokens.len(),
        });
    }
    let mut cards = [Card::new(Rank::Two, Suit::Spades); HAND_SIZE];
    for (slot, token) in cards.iter_mut().zip(tokens) {
        *slot = parse_card(token)?;
    }
    Hand::new(cards)
}

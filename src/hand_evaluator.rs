//! Five-card hand classification and winner selection.
//!
//! Every hand is reduced to a [`RankKey`]: a category profile built from the
//! rank multiplicities (with fixed profiles standing in for straights and
//! flushes) followed by the distinct rank indices ordered by multiplicity and
//! then value. Comparing keys lexicographically orders hands by poker rules.

use std::cmp::Ordering;
use std::fmt;

use itertools::Itertools;
use log::{debug, info, trace};
use rayon::prelude::*;
use serde::{Serialize, Serializer};

use crate::cards::{parse_hand, Hand, Rank, HAND_SIZE};
use crate::error::{PokerError, PokerResult};

const STRAIGHT_PROFILE: [i8; HAND_SIZE] = [3, 1, 1, 2, 1];
const FLUSH_PROFILE: [i8; HAND_SIZE] = [3, 1, 2, 1, 1];
const NO_MATCH_PROFILE: [i8; HAND_SIZE] = [1, 1, 1, 1, 1];

/// 5-4-3-2-A with the ace below the deuce.
const WHEEL_RANKS: [i8; HAND_SIZE] = [3, 2, 1, 0, -1];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandCategory::HighCard => write!(f, "High Card"),
            HandCategory::OnePair => write!(f, "One Pair"),
            HandCategory::TwoPair => write!(f, "Two Pair"),
            HandCategory::ThreeOfAKind => write!(f, "Three of a Kind"),
            HandCategory::Straight => write!(f, "Straight"),
            HandCategory::Flush => write!(f, "Flush"),
            HandCategory::FullHouse => write!(f, "Full House"),
            HandCategory::FourOfAKind => write!(f, "Four of a Kind"),
            HandCategory::StraightFlush => write!(f, "Straight Flush"),
            HandCategory::RoyalFlush => write!(f, "Royal Flush"),
        }
    }
}

impl Serialize for HandCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Comparable ranking of a five-card hand.
///
/// `category` is either the natural rank multiplicities (`[2, 2, 1]` for two
/// pair) or, when all five ranks differ, one of the fixed high card, straight,
/// flush and straight flush profiles. `ranks` holds the distinct rank indices
/// in the same order as the multiplicities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RankKey {
    pub category: Vec<i8>,
    pub ranks: Vec<i8>,
}

impl RankKey {
    pub fn category(&self) -> HandCategory {
        match self.category.as_slice() {
            [4, 2, ..] if self.ranks.first() == Some(&Rank::Ace.index()) => {
                HandCategory::RoyalFlush
            }
            [4, 2, ..] => HandCategory::StraightFlush,
            [4, ..] => HandCategory::FourOfAKind,
            [3, 2] => HandCategory::FullHouse,
            [3, 1, 2, ..] => HandCategory::Flush,
            [3, 1, 1, 2, ..] => HandCategory::Straight,
            [3, ..] => HandCategory::ThreeOfAKind,
            [2, 2, ..] => HandCategory::TwoPair,
            [2, ..] => HandCategory::OnePair,
            _ => HandCategory::HighCard,
        }
    }
}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_profiles(&self.category, &other.category)
            .then_with(|| compare_profiles(&self.ranks, &other.ranks))
    }
}

/// Element-by-element comparison where a proper prefix sorts first, so
/// three of a kind `[3, 1, 1]` ranks below a straight `[3, 1, 1, 2, 1]`.
fn compare_profiles(a: &[i8], b: &[i8]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        match x.cmp(y) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    a.len().cmp(&b.len())
}

pub fn compute_rank_key(hand: &Hand) -> RankKey {
    let (mut counts, mut ranks): (Vec<i8>, Vec<i8>) = hand
        .rank_counts()
        .into_iter()
        .map(|(rank, count)| (count as i8, rank.index()))
        .sorted_by(|a, b| b.cmp(a))
        .unzip();

    if counts.len() == HAND_SIZE {
        if ranks[..2] == [Rank::Ace.index(), Rank::Five.index()] {
            ranks = WHEEL_RANKS.to_vec();
        }
        let low = ranks[HAND_SIZE - 1];
        let straight = ranks[0] - low == 4;
        let flush = hand.is_flush();
        trace!("{hand}: straight={straight} flush={flush}");

        counts = match (straight, flush) {
            (false, false) => vec![1, 1, 1, 1, low],
            (true, false) => STRAIGHT_PROFILE.to_vec(),
            (false, true) => FLUSH_PROFILE.to_vec(),
            (true, true) => vec![4, 2, 1, 1, 1 + low],
        };
    }

    // Idempotent with the high card profile above.
    if counts == NO_MATCH_PROFILE {
        counts[HAND_SIZE - 1] = ranks[HAND_SIZE - 1];
    }

    let key = RankKey {
        category: counts,
        ranks,
    };
    debug!("{hand} => {:?} {:?}", key.category, key.ranks);
    key
}

/// A parsed hand together with the text it came from and its key.
#[derive(Debug, Clone)]
pub struct EvaluatedHand<'a> {
    pub text: &'a str,
    pub hand: Hand,
    pub key: RankKey,
}

impl EvaluatedHand<'_> {
    pub fn category(&self) -> HandCategory {
        self.key.category()
    }
}

pub fn evaluate(text: &str) -> PokerResult<EvaluatedHand<'_>> {
    let hand = parse_hand(text)?;
    let key = compute_rank_key(&hand);
    Ok(EvaluatedHand { text, hand, key })
}

fn winners<'a>(evaluated: &[EvaluatedHand<'a>]) -> Vec<&'a str> {
    let Some(best) = evaluated.iter().map(|e| &e.key).max() else {
        return Vec::new();
    };
    let tied: Vec<&'a str> = evaluated
        .iter()
        .filter(|e| &e.key == best)
        .map(|e| e.text)
        .collect();
    info!(
        "{} of {} hands share the best rank ({})",
        tied.len(),
        evaluated.len(),
        best.category()
    );
    tied
}

/// Parses and keys every hand, in input order, optionally on the rayon pool.
pub fn evaluate_hands<'a>(
    hands: &[&'a str],
    parallel: bool,
) -> PokerResult<Vec<EvaluatedHand<'a>>> {
    if hands.is_empty() {
        return Err(PokerError::EmptyInput);
    }
    if parallel {
        hands.par_iter().map(|&text| evaluate(text)).collect()
    } else {
        hands.iter().map(|&text| evaluate(text)).collect()
    }
}

/// Returns every hand tied for the highest rank, in input order.
pub fn best_hands<'a>(hands: &[&'a str]) -> PokerResult<Vec<&'a str>> {
    Ok(winners(&evaluate_hands(hands, false)?))
}

/// Same result as [`best_hands`], evaluating the hands on the rayon pool.
pub fn par_best_hands<'a>(hands: &[&'a str]) -> PokerResult<Vec<&'a str>> {
    Ok(winners(&evaluate_hands(hands, true)?))
}

pub fn compare_hands(hand1: &str, hand2: &str) -> PokerResult<Ordering> {
    let e1 = evaluate(hand1)?;
    let e2 = evaluate(hand2)?;
    Ok(e1.key.cmp(&e2.key))
}

#[derive(Debug, Clone, Serialize)]
pub struct Standing<'a> {
    pub place: usize,
    pub hand: &'a str,
    #[serde(skip)]
    pub cards: Hand,
    pub category: HandCategory,
    pub key: RankKey,
}

/// Orders evaluated hands best first. Tied hands share a place and keep their
/// input order; places are dense (1, 1, 2, ...).
pub fn standings(mut evaluated: Vec<EvaluatedHand<'_>>) -> Vec<Standing<'_>> {
    evaluated.sort_by(|a, b| b.key.cmp(&a.key));

    let mut ranked: Vec<Standing<'_>> = Vec::with_capacity(evaluated.len());
    for e in evaluated {
        let place = match ranked.last() {
            Some(prev) if prev.key == e.key => prev.place,
            Some(prev) => prev.place + 1,
            None => 1,
        };
        ranked.push(Standing {
            place,
            hand: e.text,
            category: e.key.category(),
            cards: e.hand,
            key: e.key,
        });
    }
    ranked
}

pub fn rank_hands<'a>(hands: &[&'a str]) -> PokerResult<Vec<Standing<'a>>> {
    Ok(standings(evaluate_hands(hands, false)?))
}

pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank, Suit};
use core::cmp::Ordering;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compact, comparable hand strength. Higher is better.
/// Encodes the category and every tie-break level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct HandValue(u64);

/// Poker hand category from weakest to strongest. The ordinal is also the
/// number of points a poker round pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    /// Points awarded for winning a poker round with this category.
    pub const fn points(self) -> u32 {
        self as u32
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Detailed evaluation result. `value` drives ordering.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    /// Cards that justify the category, rank then suit descending.
    pub score_cards: Vec<Card>,
    /// The whole hand, rank then suit descending.
    pub hand: [Card; 5],
    value: HandValue,
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Evaluation {}

impl HandValue {
    const CAT_SHIFT: u32 = 50;
    const RANK_STRIDE: u32 = 4;
    const SUIT_STRIDE: u32 = 2;

    /// Pack the comparison levels into one integer.
    ///
    /// Layout (most significant -> least):
    /// `[ category (4) | score-card ranks 5x4 | hand ranks 5x4 | suits 5x2 ]`.
    /// Score-card slots past the group size stay zero; within one category every
    /// hand fills the same number of slots. Suits are stored as priority - 1.
    pub(crate) fn from_parts(
        category: Category,
        score_ranks: &[Rank],
        hand_ranks: &[Rank; 5],
        suits: &[Suit; 5],
    ) -> Self {
        let mut v: u64 = (category as u64) << Self::CAT_SHIFT;
        let hand_base = Self::CAT_SHIFT - Self::RANK_STRIDE * 5;
        let suit_base = hand_base - Self::RANK_STRIDE * 5;
        for (i, r) in score_ranks.iter().take(5).enumerate() {
            v |= (r.value() as u64) << (Self::CAT_SHIFT - Self::RANK_STRIDE * (i as u32 + 1));
        }
        for (i, r) in hand_ranks.iter().enumerate() {
            v |= (r.value() as u64) << (hand_base - Self::RANK_STRIDE * (i as u32 + 1));
        }
        for (i, s) in suits.iter().enumerate() {
            v |= ((s.priority() - 1) as u64) << (suit_base - Self::SUIT_STRIDE * (i as u32 + 1));
        }
        HandValue(v)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("a poker hand needs exactly five cards, got {0}")]
    WrongCardCount(usize),
}

/// Outcome of comparing two hands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    First(Evaluation),
    Second(Evaluation),
    /// Equal at every comparison level; nobody wins.
    Tie,
}

impl Verdict {
    pub fn winner(&self) -> Option<&Evaluation> {
        match self {
            Verdict::First(e) | Verdict::Second(e) => Some(e),
            Verdict::Tie => None,
        }
    }
}

/// Evaluate exactly five cards; detects category and score cards.
///
/// Straights are Ace-high only: A-2-3-4-5 is not a straight.
///
/// ```
/// use chicago_poker::cards::parse_cards;
/// use chicago_poker::evaluator::{evaluate_hand, Category};
///
/// let cards = parse_cards("2h 3s 3c 8h 4h").unwrap();
/// let eval = evaluate_hand(&[cards[0], cards[1], cards[2], cards[3], cards[4]]);
/// assert_eq!(eval.category, Category::Pair);
/// assert_eq!(eval.score_cards.len(), 2);
/// ```
pub fn evaluate_hand(cards: &[Card; 5]) -> Evaluation {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);

    for detector in DETECTORS.iter() {
        if detector.detect(&analysis) {
            return detector.build_evaluation(&analysis);
        }
    }

    // Unreachable: HighCard detector always matches as fallback
    unreachable!("HighCard detector should always match")
}

/// Slice form of [`evaluate_hand`] for hands of unknown length.
pub fn evaluate_cards(cards: &[Card]) -> Result<Evaluation, EvalError> {
    let five: &[Card; 5] = cards.try_into().map_err(|_| EvalError::WrongCardCount(cards.len()))?;
    Ok(evaluate_hand(five))
}

/// Total order over two hands: category, score-card ranks, whole-hand ranks, then suits.
pub fn compare_hands(a: &[Card; 5], b: &[Card; 5]) -> Ordering {
    evaluate_hand(a).cmp(&evaluate_hand(b))
}

/// Compare two hands and return the winning side with its evaluation.
///
/// ```
/// use chicago_poker::cards::parse_cards;
/// use chicago_poker::evaluator::{evaluate_two_hands, Verdict};
///
/// let a = parse_cards("3h 3s Kc 9d 5d").unwrap();
/// let b = parse_cards("3d 3c Kh 9s 5c").unwrap();
/// let a: [_; 5] = a.try_into().unwrap();
/// let b: [_; 5] = b.try_into().unwrap();
/// // Same ranks everywhere; the pair of threes with the heart decides.
/// assert!(matches!(evaluate_two_hands(&a, &b), Verdict::First(_)));
/// ```
pub fn evaluate_two_hands(a: &[Card; 5], b: &[Card; 5]) -> Verdict {
    let ea = evaluate_hand(a);
    let eb = evaluate_hand(b);
    match ea.cmp(&eb) {
        Ordering::Greater => Verdict::First(ea),
        Ordering::Less => Verdict::Second(eb),
        Ordering::Equal => Verdict::Tie,
    }
}

/// Pick the single best of several hands.
///
/// Hands that are not exactly five cards are skipped. Returns `None` when no hand can be
/// evaluated or when the strongest hands tie exactly.
pub fn best_hand(hands: &[&[Card]]) -> Option<(usize, Evaluation)> {
    let evals: Vec<(usize, Evaluation)> = hands
        .iter()
        .enumerate()
        .filter_map(|(i, cards)| evaluate_cards(cards).ok().map(|e| (i, e)))
        .collect();

    let mut best: Option<&(usize, Evaluation)> = None;
    let mut tied = false;
    for entry in &evals {
        match best {
            None => best = Some(entry),
            Some(current) => match entry.1.cmp(&current.1) {
                Ordering::Greater => {
                    best = Some(entry);
                    tied = false;
                }
                Ordering::Equal => tied = true,
                Ordering::Less => {}
            },
        }
    }
    if tied {
        return None;
    }
    best.cloned()
}

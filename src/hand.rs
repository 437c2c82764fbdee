use crate::cards::{parse_cards, Card, Suit};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Cards held by each player after a deal.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("card index {index} is out of range for a hand of {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("card index {0} was given more than once")]
    DuplicateIndex(usize),
    #[error("too many cards for a hand: {0}")]
    TooManyCards(usize),
    #[error("duplicate cards in hand")]
    DuplicateCards,
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A player's held cards, at most [`HAND_SIZE`] and never duplicated.
///
/// Cards are addressed by their position, which is what move inputs refer to.
///
/// ```
/// use chicago_poker::hand::Hand;
///
/// let mut hand: Hand = "2h 3s 3c 8h 4h".parse().unwrap();
/// let tossed = hand.toss(&[0, 3]).unwrap();
/// assert_eq!(tossed.len(), 2);
/// assert_eq!(hand.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::with_capacity(HAND_SIZE) }
    }

    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() > HAND_SIZE {
            return Err(HandError::TooManyCards(cards.len()));
        }
        let set: HashSet<Card> = cards.iter().copied().collect();
        if set.len() != cards.len() {
            return Err(HandError::DuplicateCards);
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Whether any held card is of `suit`.
    pub fn has_suit(&self, suit: Suit) -> bool {
        self.cards.iter().any(|c| c.suit() == suit)
    }

    /// Indices that may be played into a trick led with `lead` (any card when leading).
    pub fn legal_plays(&self, lead: Option<Suit>) -> Vec<usize> {
        match lead {
            Some(suit) if self.has_suit(suit) => {
                (0..self.cards.len()).filter(|&i| self.cards[i].suit() == suit).collect()
            }
            _ => (0..self.cards.len()).collect(),
        }
    }

    /// Remove the cards at `indices`, returning them in hand order.
    ///
    /// Every index is checked before anything is removed, so a rejected toss leaves the hand
    /// untouched. An empty index list is a valid "keep everything".
    pub fn toss(&mut self, indices: &[usize]) -> Result<Vec<Card>, HandError> {
        let mut sorted = indices.to_vec();
        sorted.sort_unstable();
        for pair in sorted.windows(2) {
            if pair[0] == pair[1] {
                return Err(HandError::DuplicateIndex(pair[0]));
            }
        }
        if let Some(&index) = sorted.iter().find(|&&i| i >= self.cards.len()) {
            return Err(HandError::IndexOutOfRange { index, len: self.cards.len() });
        }
        // Remove from the back so earlier indices stay valid.
        let mut tossed: Vec<Card> = sorted.iter().rev().map(|&i| self.cards.remove(i)).collect();
        tossed.reverse();
        Ok(tossed)
    }

    /// Remove and return the single card at `index`.
    pub fn play(&mut self, index: usize) -> Result<Card, HandError> {
        let card = self.get(index).ok_or(HandError::IndexOutOfRange { index, len: self.len() })?;
        self.cards.remove(index);
        Ok(card)
    }

    pub(crate) fn extend<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }

    pub(crate) fn clear(&mut self) {
        self.cards.clear();
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = HandError;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Hand::try_new(cards)
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.cards
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Hand::try_new(cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", c.symbol())?;
        }
        write!(f, "]")
    }
}

use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// A standard 52-card deck. The top of the deck is the end of the sequence.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 cards in canonical order: Hearts, Spades, Clubs, Diamonds, each Two to Ace.
    ///
    /// ```
    /// use chicago_poker::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for s in Suit::ALL {
            for r in Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, bottom first.
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Shuffle with a freshly seeded thread-local RNG; order differs between runs.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut rand::rng());
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck; `None` once the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw up to `n` cards from the top of the deck.
    /// Returns fewer than `n` when the deck runs out.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).map_while(|_| self.draw()).collect()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_unique_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), 52);
        let set: HashSet<Card> = d.as_slice().iter().copied().collect();
        assert_eq!(set.len(), 52);
        for s in Suit::ALL {
            for r in Rank::ALL {
                assert!(d.contains(&Card::new(r, s)));
            }
        }
    }

    #[test]
    fn canonical_order_is_fixed() {
        let d = Deck::standard();
        assert_eq!(d.as_slice()[0], Card::new(Rank::Two, Suit::Hearts));
        assert_eq!(d.as_slice()[13], Card::new(Rank::Two, Suit::Spades));
        assert_eq!(d.as_slice()[51], Card::new(Rank::Ace, Suit::Diamonds));
        assert_eq!(Deck::standard().as_slice(), d.as_slice());
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        assert_eq!(d1.cards, d2.cards);
    }

    #[test]
    fn draw_reduces_length_and_returns_cards() {
        let mut d = Deck::standard();
        d.shuffle_seeded(7);
        let c1 = d.draw().unwrap();
        let c2 = d.draw().unwrap();
        assert_ne!(c1, c2);
        assert!(!d.contains(&c1));
        assert_eq!(d.len(), 50);
        let hand = d.draw_n(5);
        assert_eq!(hand.len(), 5);
        assert_eq!(d.len(), 45);
    }

    #[test]
    fn empty_deck_keeps_returning_none() {
        let mut d = Deck::standard();
        let _ = d.draw_n(52);
        assert!(d.is_empty());
        for _ in 0..3 {
            assert_eq!(d.draw(), None);
            assert_eq!(d.len(), 0);
        }
        assert!(d.draw_n(4).is_empty());
    }

    #[test]
    fn draw_n_stops_short_when_exhausted() {
        let mut d = Deck::standard();
        let drawn = d.draw_n(60);
        assert_eq!(drawn.len(), 52);
        assert_eq!(d.len(), 0);
    }
}

use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank, Suit};
use crate::evaluator::{Category, Evaluation, HandValue};

/// Pre-computed analysis of a 5-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub sorted_cards: [Card; 5],
    pub ranks: [Rank; 5],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    /// Analyze a 5-card hand, computing all properties needed for evaluation.
    pub fn new(cards: &[Card; 5]) -> Self {
        // Rank descending, then suit priority descending
        let mut sorted_cards = *cards;
        sorted_cards.sort_by(|a, b| b.cmp(a));

        let ranks = sorted_cards.map(|c| c.rank());

        let rank_groups = RankGroups::from_ranks(&ranks);
        let suit_info = SuitInfo::detect(&sorted_cards);
        let straight_info = StraightInfo::detect(&ranks);

        Self { sorted_cards, ranks, rank_groups, suit_info, straight_info }
    }

    /// All cards whose rank is in `ranks`, keeping the sorted order.
    pub fn cards_of_rank(&self, ranks: &[Rank]) -> Vec<Card> {
        self.sorted_cards.iter().copied().filter(|c| ranks.contains(&c.rank())).collect()
    }

    /// Build an Evaluation from a category and the cards that justify it.
    pub fn build_evaluation(&self, category: Category, score_cards: Vec<Card>) -> Evaluation {
        let score_ranks: Vec<Rank> = score_cards.iter().map(|c| c.rank()).collect();

        // Suit order for the last tie-break: score cards first, then the rest.
        let mut suits = [Suit::Clubs; 5];
        let rest = self.sorted_cards.iter().filter(|c| !score_cards.contains(c));
        for (slot, card) in suits.iter_mut().zip(score_cards.iter().chain(rest)) {
            *slot = card.suit();
        }

        let value = HandValue::from_parts(category, &score_ranks, &self.ranks, &suits);
        Evaluation { category, score_cards, hand: self.sorted_cards, value }
    }
}

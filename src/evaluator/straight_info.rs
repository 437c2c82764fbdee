use crate::cards::Rank;

/// Whether five ranks run consecutively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
}

impl StraightInfo {
    /// Detect a straight from an array of 5 ranks.
    /// Aces are always high, so A-2-3-4-5 does not count.
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let mut sorted_ranks = *ranks;
        sorted_ranks.sort_by(|a, b| b.cmp(a));

        let is_straight =
            (0..4).all(|i| sorted_ranks[i].value() == sorted_ranks[i + 1].value() + 1);
        StraightInfo { is_straight }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_straight() {
        let ranks = [Rank::Nine, Rank::Eight, Rank::Seven, Rank::Six, Rank::Five];
        assert!(StraightInfo::detect(&ranks).is_straight);
    }

    #[test]
    fn test_ace_high_straight() {
        let ranks = [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten];
        assert!(StraightInfo::detect(&ranks).is_straight);
    }

    #[test]
    fn test_wheel_is_not_straight() {
        let ranks = [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five];
        assert!(!StraightInfo::detect(&ranks).is_straight);
    }

    #[test]
    fn test_not_straight_pair() {
        let ranks = [Rank::Six, Rank::Six, Rank::Five, Rank::Four, Rank::Three];
        assert!(!StraightInfo::detect(&ranks).is_straight);
    }

    #[test]
    fn test_unsorted_input() {
        let ranks = [Rank::Nine, Rank::King, Rank::Ten, Rank::Jack, Rank::Queen];
        assert!(StraightInfo::detect(&ranks).is_straight);
    }
}

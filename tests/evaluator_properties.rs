use chicago_poker::cards::{Card, Rank, Suit};
use chicago_poker::deck::Deck;
use chicago_poker::evaluator::{
    best_hand, compare_hands, evaluate_hand, evaluate_two_hands, Category, Verdict,
};
use proptest::prelude::*;
use std::cmp::Ordering;

/// Up to `n` distinct cards in random order.
fn distinct_cards(n: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::sample::subsequence(Deck::standard().as_slice().to_vec(), n).prop_shuffle()
}

fn split_five(cards: &[Card], k: usize) -> [Card; 5] {
    [cards[5 * k], cards[5 * k + 1], cards[5 * k + 2], cards[5 * k + 3], cards[5 * k + 4]]
}

fn rank_from_val(v: u8) -> Rank {
    Rank::from_value(v).unwrap()
}

fn straight_cards(top: u8) -> [Card; 5] {
    let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];
    let mut out = [Card::new(Rank::Two, Suit::Clubs); 5];
    for (i, card) in out.iter_mut().enumerate() {
        *card = Card::new(rank_from_val(top - i as u8), suits[i]);
    }
    out
}

fn flush_rank_set() -> impl Strategy<Value = Vec<Rank>> {
    prop::collection::btree_set(2u8..=14u8, 5)
        .prop_filter("non-straight ranks", |set| {
            let vals: Vec<u8> = set.iter().copied().collect();
            !vals.windows(2).all(|w| w[1] == w[0] + 1)
        })
        .prop_map(|set| set.into_iter().map(rank_from_val).collect())
}

fn ranks_desc(ranks: &[Rank]) -> Vec<Rank> {
    let mut out = ranks.to_vec();
    out.sort_by(|a, b| b.cmp(a));
    out
}

proptest! {
    #[test]
    fn ordering_is_antisymmetric_and_transitive(cards in distinct_cards(15)) {
        let (a, b, c) = (split_five(&cards, 0), split_five(&cards, 1), split_five(&cards, 2));
        prop_assert_eq!(compare_hands(&a, &b), compare_hands(&b, &a).reverse());

        let ea = evaluate_hand(&a);
        let eb = evaluate_hand(&b);
        let ec = evaluate_hand(&c);
        if ea >= eb && eb >= ec { prop_assert!(ea >= ec); }
        if ea <= eb && eb <= ec { prop_assert!(ea <= ec); }
    }

    #[test]
    fn disjoint_hands_never_tie(cards in distinct_cards(10)) {
        let (a, b) = (split_five(&cards, 0), split_five(&cards, 1));
        prop_assert_ne!(evaluate_two_hands(&a, &b), Verdict::Tie);
    }

    #[test]
    fn reordering_a_hand_changes_nothing(cards in distinct_cards(5)) {
        let a = split_five(&cards, 0);
        let mut b = a;
        b.reverse();
        prop_assert_eq!(evaluate_two_hands(&a, &b), Verdict::Tie);
        prop_assert_eq!(evaluate_hand(&a).score_cards, evaluate_hand(&b).score_cards);
    }

    #[test]
    fn score_cards_come_from_the_hand(cards in distinct_cards(5)) {
        let hand = split_five(&cards, 0);
        let e = evaluate_hand(&hand);
        prop_assert!(!e.score_cards.is_empty());
        prop_assert!(e.score_cards.iter().all(|c| hand.contains(c)));
        prop_assert!(e.score_cards.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn verdict_agrees_with_best_hand(cards in distinct_cards(10)) {
        let (a, b) = (split_five(&cards, 0), split_five(&cards, 1));
        let best = best_hand(&[&a[..], &b[..]]).map(|(i, _)| i);
        match evaluate_two_hands(&a, &b) {
            Verdict::First(_) => prop_assert_eq!(best, Some(0)),
            Verdict::Second(_) => prop_assert_eq!(best, Some(1)),
            Verdict::Tie => prop_assert_eq!(best, None),
        }
    }

    #[test]
    fn winner_evaluation_belongs_to_the_winning_hand(cards in distinct_cards(10)) {
        let (a, b) = (split_five(&cards, 0), split_five(&cards, 1));
        match evaluate_two_hands(&a, &b) {
            Verdict::First(e) => prop_assert_eq!(e, evaluate_hand(&a)),
            Verdict::Second(e) => prop_assert_eq!(e, evaluate_hand(&b)),
            Verdict::Tie => {}
        }
    }

    #[test]
    fn straight_ordering_respects_top_card(top_hi in 7u8..=14u8, top_lo in 6u8..=13u8) {
        prop_assume!(top_hi > top_lo);
        let e_hi = evaluate_hand(&straight_cards(top_hi));
        let e_lo = evaluate_hand(&straight_cards(top_lo));
        prop_assert_eq!(e_hi.category, Category::Straight);
        prop_assert_eq!(e_lo.category, Category::Straight);
        prop_assert!(e_hi > e_lo);
    }

    #[test]
    fn flush_kicker_ordering(a in flush_rank_set(), b in flush_rank_set()) {
        let hand_a: [Card; 5] = std::array::from_fn(|i| Card::new(a[i], Suit::Hearts));
        let hand_b: [Card; 5] = std::array::from_fn(|i| Card::new(b[i], Suit::Hearts));
        let e_a = evaluate_hand(&hand_a);
        let e_b = evaluate_hand(&hand_b);
        prop_assert_eq!(e_a.category, Category::Flush);
        prop_assert_eq!(e_b.category, Category::Flush);

        match ranks_desc(&a).cmp(&ranks_desc(&b)) {
            Ordering::Greater => prop_assert!(e_a > e_b),
            Ordering::Less => prop_assert!(e_a < e_b),
            Ordering::Equal => prop_assert_eq!(e_a, e_b),
        }
    }
}

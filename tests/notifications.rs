use chicago_poker::cards::{Card, Rank, Suit};
use chicago_poker::evaluator::Category;
use chicago_poker::game::Stage;
use chicago_poker::hand::Hand;
use chicago_poker::moves::{parse_indices, MoveKind, PromptKind};
use chicago_poker::notify::Notification;
use serde_json::json;

#[test]
fn prompts_use_wire_names() {
    let value = serde_json::to_value(Notification::next_turn(PromptKind::Toss)).unwrap();
    assert_eq!(value["type"], "next_turn");
    assert_eq!(value["kind"], "poker_toss");
    assert_eq!(serde_json::to_value(PromptKind::Play).unwrap(), json!("trick_play"));
}

#[test]
fn notifications_are_tagged_objects() {
    let n = Notification::PokerRoundWon {
        player: "Ann".into(),
        category: Category::TwoPair,
        score_cards: vec![Card::new(Rank::Ace, Suit::Hearts)],
        points: 2,
    };
    let value = serde_json::to_value(&n).unwrap();
    assert_eq!(value["type"], "poker_round_won");
    assert_eq!(value["player"], "Ann");
    assert_eq!(value["points"], 2);
    assert_eq!(value["score_cards"][0], json!({ "rank": "Ace", "suit": "Hearts" }));

    assert_eq!(
        serde_json::to_value(Notification::PokerRoundTied).unwrap(),
        json!({ "type": "poker_round_tied" })
    );
}

#[test]
fn notifications_survive_a_round_trip() {
    let sent = vec![
        Notification::StageStarted { stage: Stage::Trick, round: 3 },
        Notification::Hand { hand: "2h 10s Ac".parse().unwrap() },
        Notification::CardPlayed { player: "Bo".into(), card: Card::new(Rank::Ten, Suit::Clubs) },
        Notification::Scores { scores: vec![("Ann".into(), 12), ("Bo".into(), 50)] },
        Notification::GameOver { winner: "Bo".into(), score: 50 },
    ];
    let text = serde_json::to_string(&sent).unwrap();
    let back: Vec<Notification> = serde_json::from_str(&text).unwrap();
    assert_eq!(back, sent);
}

#[test]
fn typed_line_becomes_a_move() {
    let toss = MoveKind::from_indices(PromptKind::Toss, parse_indices("0 3 4")).unwrap();
    assert_eq!(toss, MoveKind::Toss(vec![0, 3, 4]));
    let play = MoveKind::from_indices(PromptKind::Play, parse_indices(" 2 ")).unwrap();
    assert_eq!(play, MoveKind::Play(2));
    assert!(MoveKind::from_indices(PromptKind::Play, parse_indices("one")).is_err());
}

#[test]
fn invalid_hands_are_rejected_on_the_wire() {
    let ace = json!({ "rank": "Ace", "suit": "Hearts" });
    let dupes = json!({ "type": "hand", "hand": [ace.clone(), ace] });
    assert!(serde_json::from_value::<Notification>(dupes).is_err());

    let six: Vec<Card> = [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven]
        .into_iter()
        .map(|r| Card::new(r, Suit::Clubs))
        .collect();
    assert!(serde_json::from_value::<Hand>(serde_json::to_value(&six).unwrap()).is_err());

    let five: Hand = serde_json::from_value(serde_json::to_value(&six[..5]).unwrap()).unwrap();
    assert_eq!(five.len(), 5);
}

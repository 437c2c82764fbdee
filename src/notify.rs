//! Messages the game sends to players.
//!
//! Every variant serialises as a JSON object tagged with `"type"`, so a transport can
//! frame them directly; [`Display`](std::fmt::Display) gives the plain-text rendering.

use crate::cards::Card;
use crate::evaluator::Category;
use crate::game::Stage;
use crate::hand::Hand;
use crate::moves::PromptKind;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum Notification {
    PlayerJoined { player: String },
    StageStarted { stage: Stage, round: u32 },
    /// The recipient's current hand.
    Hand { hand: Hand },
    /// A move is about to be requested from the recipient.
    NextTurn { kind: PromptKind, text: String },
    MoveRejected { reason: String },
    Tossed { player: String, count: usize },
    CardPlayed { player: String, card: Card },
    TrickWon { player: String, card: Card, trick: usize },
    PokerRoundWon { player: String, category: Category, score_cards: Vec<Card>, points: u32 },
    PokerRoundTied,
    TrickRoundWon { player: String, points: u32 },
    Scores { scores: Vec<(String, u32)> },
    Forfeit { player: String, reason: String },
    GameOver { winner: String, score: u32 },
}

impl Notification {
    pub fn next_turn(kind: PromptKind) -> Self {
        Notification::NextTurn { kind, text: kind.text().to_string() }
    }
}

fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    for (i, c) in cards.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", c.symbol())?;
    }
    Ok(())
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::PlayerJoined { player } => write!(f, "{player} joined the game"),
            Notification::StageStarted { stage, round } => {
                write!(f, "Round {round}: {stage} stage")
            }
            Notification::Hand { hand } => write!(f, "Your hand: {hand}"),
            Notification::NextTurn { text, .. } => f.write_str(text),
            Notification::MoveRejected { reason } => write!(f, "Invalid move: {reason}"),
            Notification::Tossed { player, count } => write!(f, "{player} tossed {count} cards"),
            Notification::CardPlayed { player, card } => {
                write!(f, "{player} played {}", card.symbol())
            }
            Notification::TrickWon { player, card, trick } => {
                write!(f, "{player} won trick {} with {}", trick + 1, card.symbol())
            }
            Notification::PokerRoundWon { player, category, score_cards, points } => {
                write!(f, "{player} won the poker round with {category} (")?;
                write_cards(f, score_cards)?;
                write!(f, ") for {points} points")
            }
            Notification::PokerRoundTied => f.write_str("The poker round is tied, nobody scores"),
            Notification::TrickRoundWon { player, points } => {
                write!(f, "{player} won the last trick for {points} points")
            }
            Notification::Scores { scores } => {
                f.write_str("Scores:")?;
                for (name, score) in scores {
                    write!(f, " {name}={score}")?;
                }
                Ok(())
            }
            Notification::Forfeit { player, reason } => write!(f, "{player} forfeits: {reason}"),
            Notification::GameOver { winner, score } => {
                write!(f, "Game over! {winner} wins with {score} points")
            }
        }
    }
}

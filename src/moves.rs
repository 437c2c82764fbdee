//! Move inputs exchanged with whoever controls a player.
//!
//! A collaborator answers a [`MoveRequest`] with raw card indices; the engine turns them
//! into a [`MoveKind`] checked against the prompt that was asked.

use crate::cards::{Card, Suit};
use crate::game::Stage;
use crate::hand::{Hand, HandError};
use serde::{Deserialize, Serialize};

/// What a player is being asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PromptKind {
    /// Choose any number of cards to discard and replace.
    #[serde(rename = "poker_toss")]
    Toss,
    /// Choose exactly one card to play into the current trick.
    #[serde(rename = "trick_play")]
    Play,
}

impl PromptKind {
    pub const fn text(self) -> &'static str {
        match self {
            PromptKind::Toss => {
                "Enter the indices of the cards you want to toss, separated by spaces: "
            }
            PromptKind::Play => "Enter the index of the card you want to play: ",
        }
    }

    pub const fn stage(self) -> Stage {
        match self {
            PromptKind::Toss => Stage::Poker,
            PromptKind::Play => Stage::Trick,
        }
    }
}

/// A validated move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    /// Hand indices to discard; may be empty.
    Toss(Vec<usize>),
    /// Hand index of the card to play.
    Play(usize),
}

impl MoveKind {
    /// Interpret raw indices according to the prompt they answer.
    pub fn from_indices(prompt: PromptKind, indices: Vec<usize>) -> Result<Self, MoveError> {
        match prompt {
            PromptKind::Toss => Ok(MoveKind::Toss(indices)),
            PromptKind::Play => match indices.as_slice() {
                [index] => Ok(MoveKind::Play(*index)),
                _ => Err(MoveError::ExpectedOneCard(indices.len())),
            },
        }
    }

    pub fn prompt(&self) -> PromptKind {
        match self {
            MoveKind::Toss(_) => PromptKind::Toss,
            MoveKind::Play(_) => PromptKind::Play,
        }
    }
}

/// Everything a collaborator needs to answer a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub kind: PromptKind,
    /// The player's current hand; indices refer to this order.
    pub hand: Hand,
    /// First card of the trick in progress, if any.
    pub lead: Option<Card>,
    /// 1-based attempt number for this prompt.
    pub attempt: u32,
}

impl MoveRequest {
    /// Indices the engine would accept for this request.
    pub fn legal_indices(&self) -> Vec<usize> {
        match self.kind {
            PromptKind::Toss => (0..self.hand.len()).collect(),
            PromptKind::Play => self.hand.legal_plays(self.lead.map(|c| c.suit())),
        }
    }
}

/// A collaborator's answer to a [`MoveRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveReply {
    Indices(Vec<usize>),
    /// The player is gone and no move will arrive.
    Disconnected,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MoveError {
    #[error("no player at seat {0}")]
    UnknownPlayer(usize),
    #[error("move not allowed during the {actual} stage")]
    WrongStage { actual: Stage },
    #[error("not your turn, waiting on seat {expected}")]
    NotYourTurn { expected: usize },
    #[error("already tossed this round")]
    AlreadyTossed,
    #[error("the game is over")]
    GameOver,
    #[error("play exactly one card, got {0} indices")]
    ExpectedOneCard(usize),
    #[error("you must follow the lead suit ({})", .lead.symbol())]
    MustFollowSuit { lead: Suit },
    #[error("already played a card in this trick")]
    AlreadyPlayed,
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// Parse a typed move line such as `"0 2 4"` into indices.
/// Tokens that are not non-negative integers are skipped.
///
/// ```
/// use chicago_poker::moves::parse_indices;
///
/// assert_eq!(parse_indices("0 2 x 4"), vec![0, 2, 4]);
/// assert!(parse_indices("").is_empty());
/// ```
pub fn parse_indices(input: &str) -> Vec<usize> {
    input.split_whitespace().filter_map(|t| t.parse().ok()).collect()
}

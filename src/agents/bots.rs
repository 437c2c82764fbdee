use crate::cards::Card;
use crate::evaluator::{evaluate_cards, Category};
use crate::moves::{MoveReply, MoveRequest, PromptKind};
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

use super::{AgentKind, PlayerAgent};

/// Difficulty tiers; lower tiers sometimes answer with a careless index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Configuration for a bot's play style and randomness.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct BotProfile {
    pub difficulty: Difficulty,
    /// Chance of answering a prompt with a random, possibly illegal, index.
    pub mistake_rate: f64,
    pub rng_seed: Option<u64>,
}

impl BotProfile {
    /// Create a profile with tuned defaults for a difficulty tier.
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        let mistake_rate = match difficulty {
            Difficulty::Easy => 0.15,
            Difficulty::Medium => 0.05,
            Difficulty::Hard => 0.0,
        };
        Self { difficulty, mistake_rate, rng_seed: None }
    }

    /// Set a deterministic RNG seed for reproducible decisions.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

impl Default for BotProfile {
    fn default() -> Self {
        Self::for_difficulty(Difficulty::Hard)
    }
}

#[derive(Debug)]
struct BotState {
    rng: StdRng,
}

impl BotState {
    fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(v) => StdRng::seed_from_u64(v),
            None => {
                let mut seed = [0u8; 32];
                rand::rng().fill_bytes(&mut seed);
                StdRng::from_seed(seed)
            }
        };
        Self { rng }
    }
}

/// Discard everything that does not contribute to the current category.
/// A high-card hand keeps only its top card.
fn choose_toss(hand: &[Card]) -> Vec<usize> {
    let Ok(eval) = evaluate_cards(hand) else {
        return Vec::new();
    };
    let keep: Vec<Card> = match eval.category {
        Category::HighCard => vec![eval.hand[0]],
        _ => eval.score_cards,
    };
    (0..hand.len()).filter(|&i| !keep.contains(&hand[i])).collect()
}

/// Lead high, follow high when that can beat the lead card, otherwise dump low.
fn choose_play(request: &MoveRequest) -> Option<usize> {
    let cards = request.hand.as_slice();
    let legal = request.legal_indices();
    let highest = legal.iter().copied().max_by_key(|&i| cards[i]);
    let lowest = legal.iter().copied().min_by_key(|&i| cards[i]);
    match request.lead {
        None => highest,
        Some(lead) => match highest {
            Some(i) if cards[i].suit() == lead.suit() && cards[i].rank() > lead.rank() => Some(i),
            _ => lowest,
        },
    }
}

/// A rule-based bot. Deterministic apart from its mistakes.
#[derive(Debug)]
pub struct BotAgent {
    profile: BotProfile,
    state: BotState,
}

impl BotAgent {
    pub fn new(profile: BotProfile) -> Self {
        let state = BotState::new(profile.rng_seed);
        Self { profile, state }
    }

    pub fn profile(&self) -> &BotProfile {
        &self.profile
    }
}

impl PlayerAgent for BotAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Bot
    }

    fn choose(&mut self, request: &MoveRequest) -> MoveReply {
        let len = request.hand.len();
        if len > 0
            && self.profile.mistake_rate > 0.0
            && self.state.rng.random_bool(self.profile.mistake_rate.min(1.0))
        {
            // May be out of range or off-suit; the game will ask again.
            return MoveReply::Indices(vec![self.state.rng.random_range(0..=len)]);
        }
        match request.kind {
            PromptKind::Toss => MoveReply::Indices(choose_toss(request.hand.as_slice())),
            PromptKind::Play => MoveReply::Indices(choose_play(request).into_iter().collect()),
        }
    }
}

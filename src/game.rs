use crate::cards::{Card, Suit};
use crate::deck::{Deck, DECK_SIZE};
use crate::engine::Transport;
use crate::evaluator::{best_hand, Evaluation};
use crate::hand::{Hand, HandError, HAND_SIZE};
use crate::moves::{MoveError, MoveKind, MoveReply, MoveRequest, PromptKind};
use crate::notify::Notification;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};

pub const MIN_PLAYERS: usize = 2;
/// Everyone must be dealt a full hand from one deck.
pub const MAX_PLAYERS: usize = DECK_SIZE / HAND_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Stage {
    Poker,
    Trick,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Poker => f.write_str("Poker"),
            Stage::Trick => f.write_str("Trick"),
        }
    }
}

/// Rules knobs for one game. Defaults are the standard Chicago numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GameConfig {
    /// The game ends once any score reaches this.
    pub win_threshold: u32,
    /// Poker rounds before each trick round.
    pub poker_rounds: u32,
    pub tricks_per_round: usize,
    /// Points for taking the last trick.
    pub trick_bonus: u32,
    /// Prompts per move before the player forfeits. At least 1.
    pub max_attempts: u32,
    /// Fixed seed for reproducible shuffles; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            win_threshold: 50,
            poker_rounds: 3,
            tricks_per_round: HAND_SIZE,
            trick_bonus: 3,
            max_attempts: 3,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_win_threshold(mut self, threshold: u32) -> Self {
        self.win_threshold = threshold;
        self
    }

    pub fn with_poker_rounds(mut self, rounds: u32) -> Self {
        self.poker_rounds = rounds.max(1);
        self
    }

    pub fn with_tricks_per_round(mut self, tricks: usize) -> Self {
        self.tricks_per_round = tricks.min(HAND_SIZE);
        self
    }

    pub fn with_trick_bonus(mut self, bonus: u32) -> Self {
        self.trick_bonus = bonus;
        self
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ForfeitReason {
    Disconnected,
    TooManyInvalidMoves(u32),
}

impl fmt::Display for ForfeitReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForfeitReason::Disconnected => f.write_str("disconnected"),
            ForfeitReason::TooManyInvalidMoves(n) => write!(f, "{n} invalid moves in a row"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("need at least 2 players, have {0}")]
    NotEnoughPlayers(usize),
    #[error("a table seats at most 10 players, tried to seat {0}")]
    TooManyPlayers(usize),
    #[error("a player named {0:?} already joined")]
    DuplicateName(String),
    #[error("player names must not be blank")]
    EmptyName,
    #[error("the game has already started")]
    AlreadyStarted,
    #[error("the game is over")]
    GameOver,
    #[error("cannot play a {expected} round during the {actual} stage")]
    WrongStage { expected: Stage, actual: Stage },
    #[error("{player} forfeits: {reason}")]
    Forfeit { player: String, reason: ForfeitReason },
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Player {
    pub(crate) name: String,
    pub(crate) hand: Hand,
    pub(crate) score: u32,
}

impl Player {
    fn new(name: String) -> Self {
        Self { name, hand: Hand::new(), score: 0 }
    }

    /// Returns the player's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards currently held
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the running score
    pub fn score(&self) -> u32 {
        self.score
    }
}

/// What a successfully applied move did.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MoveOutcome {
    /// Cards discarded and how many replacements the deck could supply.
    Tossed { tossed: Vec<Card>, drawn: usize },
    Played(Card),
}

/// Result of one poker or trick round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct RoundSummary {
    pub stage: Stage,
    /// Seat credited this round; `None` on a tie or when nothing could be scored.
    pub winner: Option<usize>,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GameOutcome {
    pub winner: usize,
    pub winner_name: String,
    /// Final scores in seat order.
    pub scores: Vec<u32>,
    pub rounds: u32,
}

/// Highest card of the lead suit takes the trick.
pub fn trick_winner(plays: &[(usize, Card)]) -> Option<(usize, Card)> {
    let &(_, lead) = plays.first()?;
    plays
        .iter()
        .copied()
        .filter(|(_, card)| card.suit() == lead.suit())
        .max_by_key(|(_, card)| card.rank())
}

/// Chicago table state: seated players, the deck, and where the game is in its
/// poker/trick cycle.
#[derive(Debug)]
#[non_exhaustive]
pub struct Game {
    pub(crate) config: GameConfig,
    pub(crate) deck: Deck,
    pub(crate) players: Vec<Player>,
    pub(crate) stage: Stage,
    /// Completed rounds of either kind.
    pub(crate) round: u32,
    /// Poker rounds completed in the current poker stage.
    pub(crate) poker_rounds_played: u32,
    /// Seat that leads the next trick.
    pub(crate) lead: usize,
    /// Cards played into the trick in progress, in play order.
    pub(crate) trick: Vec<(usize, Card)>,
    /// Seat due to toss next in the current poker round.
    pub(crate) next_toss: usize,
    pub(crate) started: bool,
    /// Set when a player forfeits; no further rounds or moves are accepted.
    pub(crate) forfeit: Option<(String, ForfeitReason)>,
    rng: ChaCha8Rng,
}

impl Game {
    /// An empty table; seat players with [`Game::add_player`].
    pub fn new(config: GameConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        Self {
            config,
            deck: Deck::standard(),
            players: Vec::new(),
            stage: Stage::Poker,
            round: 0,
            poker_rounds_played: 0,
            lead: 0,
            trick: Vec::new(),
            next_toss: 0,
            started: false,
            forfeit: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn with_players<I, S>(names: I, config: GameConfig) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut game = Self::new(config);
        for name in names {
            game.add_player(name)?;
        }
        Ok(game)
    }

    /// Seat a player by name and return their seat index.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<usize, GameError> {
        let name = name.into();
        if self.started {
            return Err(GameError::AlreadyStarted);
        }
        if name.trim().is_empty() {
            return Err(GameError::EmptyName);
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(GameError::TooManyPlayers(self.players.len() + 1));
        }
        if self.players.iter().any(|p| p.name == name) {
            return Err(GameError::DuplicateName(name));
        }
        let seat = self.players.len();
        info!(player = %name, seat, "player joined");
        self.players.push(Player::new(name));
        Ok(seat)
    }

    /// [`Game::add_player`] and tell everyone seated so far.
    pub fn join(
        &mut self,
        name: impl Into<String>,
        transport: &mut dyn Transport,
    ) -> Result<usize, GameError> {
        let seat = self.add_player(name)?;
        let joined = Notification::PlayerJoined { player: self.players[seat].name.clone() };
        self.broadcast(transport, &joined);
        Ok(seat)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn poker_rounds_played(&self) -> u32 {
        self.poker_rounds_played
    }

    pub fn lead(&self) -> usize {
        self.lead
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn current_trick(&self) -> &[(usize, Card)] {
        &self.trick
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn scores(&self) -> Vec<(String, u32)> {
        self.players.iter().map(|p| (p.name.clone(), p.score)).collect()
    }

    /// True once any score has reached the win threshold.
    pub fn is_over(&self) -> bool {
        self.players.iter().any(|p| p.score >= self.config.win_threshold)
    }

    /// The player who forfeited and why, if the game ended that way.
    pub fn forfeited(&self) -> Option<(&str, &ForfeitReason)> {
        self.forfeit.as_ref().map(|(name, reason)| (name.as_str(), reason))
    }

    fn is_finished(&self) -> bool {
        self.forfeit.is_some() || self.is_over()
    }

    /// Highest score so far; the earliest seat wins equal scores.
    pub fn leader(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (seat, p) in self.players.iter().enumerate() {
            let better = match best {
                Some(b) => p.score > self.players[b].score,
                None => true,
            };
            if better {
                best = Some(seat);
            }
        }
        best
    }

    /// Final result, available once the game is over.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.is_over() {
            return None;
        }
        let winner = self.leader()?;
        Some(GameOutcome {
            winner,
            winner_name: self.players[winner].name.clone(),
            scores: self.players.iter().map(|p| p.score).collect(),
            rounds: self.round,
        })
    }

    /// Fresh shuffled deck and a full hand for everyone.
    pub fn deal(&mut self) {
        self.deck = Deck::standard();
        self.deck.shuffle_with(&mut self.rng);
        self.trick.clear();
        self.next_toss = 0;
        for player in &mut self.players {
            player.hand.clear();
            player.hand.extend(self.deck.draw_n(HAND_SIZE));
        }
        debug!(players = self.players.len(), remaining = self.deck.len(), "dealt hands");
    }

    /// Remove the cards at `indices` from a player's hand without drawing or turn checks.
    /// [`Game::apply_move`] is the rule-checked entry point.
    pub fn toss_cards(&mut self, seat: usize, indices: &[usize]) -> Result<Vec<Card>, MoveError> {
        let player = self.players.get_mut(seat).ok_or(MoveError::UnknownPlayer(seat))?;
        Ok(player.hand.toss(indices)?)
    }

    fn lead_suit(&self) -> Option<Suit> {
        self.trick.first().map(|&(_, card)| card.suit())
    }

    /// Validate and apply one move. A rejected move changes nothing.
    ///
    /// Each seat tosses once per poker round, in seat order. Trick cards are played
    /// clockwise from the lead.
    pub fn apply_move(&mut self, seat: usize, mv: MoveKind) -> Result<MoveOutcome, MoveError> {
        if seat >= self.players.len() {
            return Err(MoveError::UnknownPlayer(seat));
        }
        if self.is_finished() {
            return Err(MoveError::GameOver);
        }
        if mv.prompt().stage() != self.stage {
            return Err(MoveError::WrongStage { actual: self.stage });
        }
        match mv {
            MoveKind::Toss(indices) => {
                if seat < self.next_toss {
                    return Err(MoveError::AlreadyTossed);
                }
                if seat > self.next_toss {
                    return Err(MoveError::NotYourTurn { expected: self.next_toss });
                }
                let tossed = self.toss_cards(seat, &indices)?;
                self.next_toss += 1;
                let drawn = self.deck.draw_n(tossed.len());
                if drawn.len() < tossed.len() {
                    warn!(
                        player = %self.players[seat].name,
                        wanted = tossed.len(),
                        got = drawn.len(),
                        "deck exhausted, hand stays short"
                    );
                }
                let drawn_count = drawn.len();
                self.players[seat].hand.extend(drawn);
                debug!(player = %self.players[seat].name, tossed = tossed.len(), "tossed");
                Ok(MoveOutcome::Tossed { tossed, drawn: drawn_count })
            }
            MoveKind::Play(index) => {
                if self.trick.iter().any(|&(s, _)| s == seat) {
                    return Err(MoveError::AlreadyPlayed);
                }
                let expected = (self.lead + self.trick.len()) % self.players.len();
                if seat != expected {
                    return Err(MoveError::NotYourTurn { expected });
                }
                let hand = &self.players[seat].hand;
                let card =
                    hand.get(index).ok_or(HandError::IndexOutOfRange { index, len: hand.len() })?;
                if let Some(lead) = self.lead_suit() {
                    if card.suit() != lead && hand.has_suit(lead) {
                        return Err(MoveError::MustFollowSuit { lead });
                    }
                }
                self.players[seat].hand.play(index)?;
                self.trick.push((seat, card));
                debug!(player = %self.players[seat].name, card = %card, "played");
                Ok(MoveOutcome::Played(card))
            }
        }
    }

    /// Score the current hands and credit the single best one with its category points.
    /// Short hands are skipped; an exact tie at the top scores nothing.
    pub fn evaluate_hands(&mut self) -> Option<(usize, Evaluation)> {
        let hands: Vec<&[Card]> = self.players.iter().map(|p| p.hand.as_slice()).collect();
        let Some((seat, eval)) = best_hand(&hands) else {
            info!("no single best hand, nobody scores");
            return None;
        };
        let points = eval.category.points();
        self.players[seat].score += points;
        info!(player = %self.players[seat].name, category = %eval.category, points, "best hand");
        Some((seat, eval))
    }

    /// One discard round: every player tosses and redraws, then the best hand scores.
    /// After the configured number of these the game moves to the trick stage.
    pub fn poker_round(&mut self, transport: &mut dyn Transport) -> Result<RoundSummary, GameError> {
        self.check_round(Stage::Poker)?;
        info!(round = self.round, sub_round = self.poker_rounds_played + 1, "poker round");
        self.next_toss = 0;

        for seat in 0..self.players.len() {
            if let MoveOutcome::Tossed { tossed, .. } =
                self.solicit(transport, seat, PromptKind::Toss)?
            {
                let n = Notification::Tossed {
                    player: self.players[seat].name.clone(),
                    count: tossed.len(),
                };
                self.broadcast(transport, &n);
            }
        }

        let summary = match self.evaluate_hands() {
            Some((seat, eval)) => {
                let points = eval.category.points();
                let n = Notification::PokerRoundWon {
                    player: self.players[seat].name.clone(),
                    category: eval.category,
                    score_cards: eval.score_cards,
                    points,
                };
                self.broadcast(transport, &n);
                RoundSummary { stage: Stage::Poker, winner: Some(seat), points }
            }
            None => {
                self.broadcast(transport, &Notification::PokerRoundTied);
                RoundSummary { stage: Stage::Poker, winner: None, points: 0 }
            }
        };

        self.round += 1;
        self.poker_rounds_played += 1;
        if self.poker_rounds_played >= self.config.poker_rounds {
            self.poker_rounds_played = 0;
            self.stage = Stage::Trick;
            self.lead = summary.winner.unwrap_or(0);
            info!(lead = %self.players[self.lead].name, "trick stage");
            let n = Notification::StageStarted { stage: Stage::Trick, round: self.round };
            self.broadcast(transport, &n);
        }
        Ok(summary)
    }

    /// Play out the tricks. The winner of the last trick takes the bonus, then the
    /// game returns to poker with a fresh deal.
    pub fn trick_round(&mut self, transport: &mut dyn Transport) -> Result<RoundSummary, GameError> {
        self.check_round(Stage::Trick)?;
        let shortest = self.players.iter().map(|p| p.hand.len()).min().unwrap_or(0);
        let tricks = self.config.tricks_per_round.min(shortest);
        if tricks < self.config.tricks_per_round {
            warn!(tricks, "short hands, playing fewer tricks");
        }
        info!(round = self.round, lead = %self.players[self.lead].name, tricks, "trick round");

        let n = self.players.len();
        let mut last_winner = None;
        for trick in 0..tricks {
            self.trick.clear();
            for offset in 0..n {
                let seat = (self.lead + offset) % n;
                if let MoveOutcome::Played(card) = self.solicit(transport, seat, PromptKind::Play)? {
                    let played =
                        Notification::CardPlayed { player: self.players[seat].name.clone(), card };
                    self.broadcast(transport, &played);
                }
            }
            if let Some((seat, card)) = trick_winner(&self.trick) {
                debug!(trick, player = %self.players[seat].name, card = %card, "trick taken");
                let won =
                    Notification::TrickWon { player: self.players[seat].name.clone(), card, trick };
                self.broadcast(transport, &won);
                self.lead = seat;
                last_winner = Some(seat);
            }
        }
        self.trick.clear();

        let points = match last_winner {
            Some(seat) => {
                let bonus = self.config.trick_bonus;
                self.players[seat].score += bonus;
                info!(player = %self.players[seat].name, points = bonus, "last trick");
                let n = Notification::TrickRoundWon {
                    player: self.players[seat].name.clone(),
                    points: bonus,
                };
                self.broadcast(transport, &n);
                bonus
            }
            None => 0,
        };

        self.round += 1;
        self.stage = Stage::Poker;
        self.deal();
        let n = Notification::StageStarted { stage: Stage::Poker, round: self.round };
        self.broadcast(transport, &n);
        Ok(RoundSummary { stage: Stage::Trick, winner: last_winner, points })
    }

    /// Deal and alternate poker and trick rounds until someone reaches the threshold.
    pub fn start_game(&mut self, transport: &mut dyn Transport) -> Result<GameOutcome, GameError> {
        if self.started {
            return Err(GameError::AlreadyStarted);
        }
        if self.players.len() < MIN_PLAYERS {
            return Err(GameError::NotEnoughPlayers(self.players.len()));
        }
        self.started = true;
        info!(
            players = self.players.len(),
            threshold = self.config.win_threshold,
            "starting game"
        );
        self.deal();
        let n = Notification::StageStarted { stage: self.stage, round: self.round };
        self.broadcast(transport, &n);

        while !self.is_over() {
            match self.stage {
                Stage::Poker => self.poker_round(transport)?,
                Stage::Trick => self.trick_round(transport)?,
            };
            let scores = Notification::Scores { scores: self.scores() };
            self.broadcast(transport, &scores);
        }

        let Some(outcome) = self.outcome() else {
            return Err(GameError::NotEnoughPlayers(self.players.len()));
        };
        info!(winner = %outcome.winner_name, rounds = outcome.rounds, "game over");
        let over = Notification::GameOver {
            winner: outcome.winner_name.clone(),
            score: outcome.scores[outcome.winner],
        };
        self.broadcast(transport, &over);
        Ok(outcome)
    }

    fn check_round(&self, expected: Stage) -> Result<(), GameError> {
        if self.players.len() < MIN_PLAYERS {
            return Err(GameError::NotEnoughPlayers(self.players.len()));
        }
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        if self.stage != expected {
            return Err(GameError::WrongStage { expected, actual: self.stage });
        }
        Ok(())
    }

    fn broadcast(&self, transport: &mut dyn Transport, notification: &Notification) {
        let names: Vec<&str> = self.players.iter().map(|p| p.name.as_str()).collect();
        transport.broadcast(&names, notification);
    }

    /// Prompt a player until a valid move arrives, the attempts run out, or they disconnect.
    fn solicit(
        &mut self,
        transport: &mut dyn Transport,
        seat: usize,
        kind: PromptKind,
    ) -> Result<MoveOutcome, GameError> {
        let name = self.players[seat].name.clone();
        for attempt in 1..=self.config.max_attempts {
            let hand = self.players[seat].hand.clone();
            transport.notify(&name, &Notification::Hand { hand: hand.clone() });
            transport.notify(&name, &Notification::next_turn(kind));
            let request = MoveRequest {
                kind,
                hand,
                lead: self.trick.first().map(|&(_, card)| card),
                attempt,
            };
            let indices = match transport.request_move(&name, &request) {
                MoveReply::Indices(indices) => indices,
                MoveReply::Disconnected => {
                    return Err(self.forfeit(transport, name, ForfeitReason::Disconnected));
                }
            };
            match MoveKind::from_indices(kind, indices).and_then(|mv| self.apply_move(seat, mv)) {
                Ok(outcome) => return Ok(outcome),
                Err(err) => {
                    warn!(player = %name, attempt, error = %err, "rejected move");
                    transport.notify(&name, &Notification::MoveRejected { reason: err.to_string() });
                }
            }
        }
        let reason = ForfeitReason::TooManyInvalidMoves(self.config.max_attempts);
        Err(self.forfeit(transport, name, reason))
    }

    fn forfeit(
        &mut self,
        transport: &mut dyn Transport,
        player: String,
        reason: ForfeitReason,
    ) -> GameError {
        warn!(player = %player, %reason, "forfeit");
        self.trick.clear();
        self.forfeit = Some((player.clone(), reason.clone()));
        let n = Notification::Forfeit { player: player.clone(), reason: reason.to_string() };
        self.broadcast(transport, &n);
        GameError::Forfeit { player, reason }
    }
}

//! Agents: pluggable move sources for seated players (bots, or humans fed by
//! some frontend).
//!
//! `AgentTable` maps player names to agents and implements [`Transport`], so a
//! whole game can run in-process without any networking.

use crate::engine::Transport;
use crate::moves::{MoveReply, MoveRequest};
use crate::notify::Notification;
use core::fmt;
use std::collections::VecDeque;
use tracing::debug;

/// Kinds of agents attached to seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AgentKind {
    Human,
    Bot,
}

/// Something that answers move prompts for one player.
pub trait PlayerAgent {
    fn choose(&mut self, request: &MoveRequest) -> MoveReply;
    /// The kind of this agent (human, bot, etc.).
    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }
    /// Optionally look at messages sent to this player; default ignores them.
    fn observe(&mut self, _notification: &Notification) {}
}

mod bots;

pub use bots::{BotAgent, BotProfile, Difficulty};

/// Replays moves queued by a frontend, one per prompt. Runs dry as a disconnect.
#[derive(Debug, Default)]
pub struct HumanAgent {
    pending: VecDeque<MoveReply>,
}

impl HumanAgent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue raw indices, e.g. from [`parse_indices`](crate::moves::parse_indices).
    pub fn receive(&mut self, indices: Vec<usize>) {
        self.pending.push_back(MoveReply::Indices(indices));
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl PlayerAgent for HumanAgent {
    fn choose(&mut self, _request: &MoveRequest) -> MoveReply {
        self.pending.pop_front().unwrap_or(MoveReply::Disconnected)
    }
}

/// Routes prompts and notifications to the agent seated under each name.
#[derive(Default)]
pub struct AgentTable {
    seats: Vec<(String, Box<dyn PlayerAgent>)>,
}

impl fmt::Debug for AgentTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags: String = self
            .seats
            .iter()
            .map(|(_, a)| if matches!(a.kind(), AgentKind::Bot) { 'B' } else { 'H' })
            .collect();
        write!(f, "AgentTable({flags})")
    }
}

impl AgentTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign an agent to a player name, replacing any previous one.
    pub fn set_agent(&mut self, name: impl Into<String>, agent: Box<dyn PlayerAgent>) {
        let name = name.into();
        match self.seats.iter_mut().find(|(n, _)| *n == name) {
            Some(seat) => seat.1 = agent,
            None => self.seats.push((name, agent)),
        }
    }

    pub fn agent_kind(&self, name: &str) -> Option<AgentKind> {
        self.seats.iter().find(|(n, _)| n == name).map(|(_, a)| a.kind())
    }

    /// Whether any bot agents are assigned.
    pub fn any_bots(&self) -> bool {
        self.seats.iter().any(|(_, a)| matches!(a.kind(), AgentKind::Bot))
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    fn agent_mut(&mut self, name: &str) -> Option<&mut Box<dyn PlayerAgent>> {
        self.seats.iter_mut().find(|(n, _)| n == name).map(|(_, a)| a)
    }
}

impl Transport for AgentTable {
    fn request_move(&mut self, player: &str, request: &MoveRequest) -> MoveReply {
        match self.agent_mut(player) {
            Some(agent) => {
                let reply = agent.choose(request);
                debug!(player, ?reply, "agent replied");
                reply
            }
            None => MoveReply::Disconnected,
        }
    }

    fn notify(&mut self, player: &str, notification: &Notification) {
        debug!(player, %notification, "notify");
        if let Some(agent) = self.agent_mut(player) {
            agent.observe(notification);
        }
    }
}

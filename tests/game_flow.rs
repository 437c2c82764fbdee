use chicago_poker::agents::{AgentTable, BotAgent, BotProfile, Difficulty, HumanAgent};
use chicago_poker::engine::Transport;
use chicago_poker::game::{ForfeitReason, Game, GameConfig, GameError, Stage};
use chicago_poker::moves::{MoveReply, MoveRequest, PromptKind};
use chicago_poker::notify::Notification;

#[derive(Debug, Clone)]
enum Event {
    Request(String, PromptKind),
    Note(String, Notification),
}

/// Bots at every seat, with a log of everything that crossed the transport.
struct Recorder {
    table: AgentTable,
    events: Vec<Event>,
}

impl Recorder {
    fn bots(names: &[&str], difficulty: Difficulty) -> Self {
        let mut table = AgentTable::new();
        for (i, name) in names.iter().enumerate() {
            let profile = BotProfile::for_difficulty(difficulty).with_seed(100 + i as u64);
            table.set_agent(*name, Box::new(BotAgent::new(profile)));
        }
        Self { table, events: Vec::new() }
    }

    fn notes_to(&self, player: &str) -> Vec<&Notification> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Note(p, n) if p == player => Some(n),
                _ => None,
            })
            .collect()
    }
}

impl Transport for Recorder {
    fn request_move(&mut self, player: &str, request: &MoveRequest) -> MoveReply {
        self.events.push(Event::Request(player.to_string(), request.kind));
        self.table.request_move(player, request)
    }

    fn notify(&mut self, player: &str, notification: &Notification) {
        self.events.push(Event::Note(player.to_string(), notification.clone()));
        self.table.notify(player, notification);
    }
}

fn game(names: &[&str], seed: u64) -> Game {
    Game::with_players(names.iter().copied(), GameConfig::default().with_seed(seed)).unwrap()
}

#[test]
fn two_player_game_stops_once_fifty_is_reached() {
    let names = ["Ann", "Bo"];
    let mut g = game(&names, 42);
    let mut rec = Recorder::bots(&names, Difficulty::Hard);
    let outcome = g.start_game(&mut rec).unwrap();

    assert!(outcome.scores[outcome.winner] >= 50);
    assert_eq!(g.players()[outcome.winner].name(), outcome.winner_name);

    let reached = rec
        .events
        .iter()
        .position(|e| match e {
            Event::Note(p, Notification::Scores { scores }) => {
                p == "Ann" && scores.iter().any(|(_, s)| *s >= 50)
            }
            _ => false,
        })
        .expect("a score update at or above the threshold");
    assert!(
        rec.events[reached..].iter().all(|e| !matches!(e, Event::Request(..))),
        "no move may be requested after the threshold is reached"
    );
    assert!(matches!(rec.notes_to("Bo").last(), Some(Notification::GameOver { .. })));
}

#[test]
fn stages_alternate_three_poker_rounds_then_tricks() {
    let names = ["Ann", "Bo", "Cy"];
    let mut g = game(&names, 5);
    let mut rec = Recorder::bots(&names, Difficulty::Hard);
    g.start_game(&mut rec).unwrap();

    let stages: Vec<(Stage, u32)> = rec
        .notes_to("Cy")
        .into_iter()
        .filter_map(|n| match n {
            Notification::StageStarted { stage, round } => Some((*stage, *round)),
            _ => None,
        })
        .collect();
    assert!(stages.len() >= 2);
    for (i, (stage, round)) in stages.iter().enumerate() {
        let expected = if i % 2 == 0 { Stage::Poker } else { Stage::Trick };
        assert_eq!(*stage, expected);
        // Poker restarts every fourth round; tricks follow three poker rounds.
        let offset = if expected == Stage::Poker { 0 } else { 3 };
        assert_eq!(round % 4, offset);
    }

    // Each trick round asks every player for one card per trick.
    let plays = rec
        .events
        .iter()
        .filter(|e| matches!(e, Event::Request(p, PromptKind::Play) if p == "Ann"))
        .count();
    assert_eq!(plays % 5, 0);
}

#[test]
fn trick_lead_comes_from_last_poker_winner() {
    let names = ["Ann", "Bo", "Cy"];
    let mut g = game(&names, 9);
    let mut rec = Recorder::bots(&names, Difficulty::Hard);
    g.deal();
    let mut last = None;
    for _ in 0..3 {
        last = g.poker_round(&mut rec).unwrap().winner;
    }
    assert_eq!(g.stage(), Stage::Trick);
    let lead = last.unwrap_or(0);
    assert_eq!(g.lead(), lead);

    rec.events.clear();
    g.trick_round(&mut rec).unwrap();
    let first_play = rec.events.iter().find_map(|e| match e {
        Event::Request(p, PromptKind::Play) => Some(p.clone()),
        _ => None,
    });
    assert_eq!(first_play.as_deref(), Some(names[lead]));
    assert_eq!(g.stage(), Stage::Poker);
}

#[test]
fn careless_bots_finish_or_forfeit_cleanly() {
    let names = ["Ann", "Bo", "Cy", "Di"];
    for seed in 0..5 {
        let mut g = game(&names, seed);
        let mut rec = Recorder::bots(&names, Difficulty::Easy);
        match g.start_game(&mut rec) {
            Ok(outcome) => assert!(outcome.scores[outcome.winner] >= 50),
            Err(GameError::Forfeit { reason, .. }) => {
                assert_eq!(reason, ForfeitReason::TooManyInvalidMoves(3))
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn silent_human_forfeits_as_disconnected() {
    let mut g = Game::with_players(["Ann", "Bot"], GameConfig::default().with_seed(1)).unwrap();
    let mut table = AgentTable::new();
    let mut human = HumanAgent::new();
    human.receive(vec![0, 1]);
    table.set_agent("Ann", Box::new(human));
    table.set_agent("Bot", Box::new(BotAgent::new(BotProfile::default())));

    let err = g.start_game(&mut table).unwrap_err();
    assert_eq!(
        err,
        GameError::Forfeit { player: "Ann".into(), reason: ForfeitReason::Disconnected }
    );
    // The queued toss was applied before the queue ran dry.
    assert_eq!(g.round(), 1);
}

#[test]
fn joining_is_announced_and_closed_once_started() {
    let names = ["Ann", "Bo"];
    let mut g = Game::new(GameConfig::default().with_seed(3));
    let mut rec = Recorder::bots(&names, Difficulty::Hard);
    for name in names {
        g.join(name, &mut rec).unwrap();
    }
    assert_eq!(
        rec.notes_to("Ann"),
        vec![
            &Notification::PlayerJoined { player: "Ann".into() },
            &Notification::PlayerJoined { player: "Bo".into() },
        ]
    );

    g.start_game(&mut rec).unwrap();
    assert_eq!(g.join("Cy", &mut rec), Err(GameError::AlreadyStarted));
}

#[test]
fn lower_threshold_ends_sooner() {
    let names = ["Ann", "Bo"];
    let config = GameConfig::default().with_seed(8).with_win_threshold(3);
    let mut g = Game::with_players(names, config).unwrap();
    let mut rec = Recorder::bots(&names, Difficulty::Hard);
    let outcome = g.start_game(&mut rec).unwrap();
    // The first trick round alone is worth 3.
    assert!(outcome.rounds <= 4);
    assert!(outcome.scores[outcome.winner] >= 3);
}

//! chicago-poker: rules engine for Chicago Poker
//!
//! A game alternates between two stages until someone reaches the win threshold:
//! - Poker: three rounds of five-card draw; the best hand scores its category value
//! - Trick: five follow-suit tricks; the winner of the last trick scores a bonus
//!
//! The engine does no I/O. Moves come in and messages go out through the
//! [`engine::Transport`] trait; [`agents::AgentTable`] is an in-process implementation.
//!
//! ## Quick start: compare two hands
//! ```
//! use chicago_poker::cards::parse_cards;
//! use chicago_poker::evaluator::{evaluate_two_hands, Category, Verdict};
//!
//! let a: [_; 5] = parse_cards("Kh Ks 2c 3d 4h").unwrap().try_into().unwrap();
//! let b: [_; 5] = parse_cards("Qh Qs Ac Jd 9h").unwrap().try_into().unwrap();
//!
//! match evaluate_two_hands(&a, &b) {
//!     Verdict::First(eval) => assert_eq!(eval.category, Category::Pair),
//!     other => panic!("kings should win, got {other:?}"),
//! }
//! ```
//!
//! ## Quick start: a bot game
//! ```
//! use chicago_poker::agents::{AgentTable, BotAgent, BotProfile};
//! use chicago_poker::game::{Game, GameConfig};
//!
//! let names = ["Ann", "Bo", "Cy"];
//! let mut game = Game::with_players(names, GameConfig::default().with_seed(1)).unwrap();
//! let mut table = AgentTable::new();
//! for (i, name) in names.iter().enumerate() {
//!     let profile = BotProfile::default().with_seed(i as u64);
//!     table.set_agent(*name, Box::new(BotAgent::new(profile)));
//! }
//! let outcome = game.start_game(&mut table).unwrap();
//! assert!(outcome.scores[outcome.winner] >= 50);
//! ```
//!
//! ## Binary
//! Watch bots play with:
//! ```sh
//! cargo run --bin chicago -- --players Ann,Bo,Cy --seed 7
//! ```

pub mod agents;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod evaluator;
pub mod game;
pub mod hand;
pub mod moves;
pub mod notify;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

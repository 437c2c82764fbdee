use chicago_poker::agents::{AgentTable, BotAgent, BotProfile, Difficulty};
use chicago_poker::engine::Transport;
use chicago_poker::game::{Game, GameConfig};
use chicago_poker::moves::{MoveReply, MoveRequest};
use chicago_poker::notify::Notification;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Play a game of Chicago poker between bots.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Player names, comma separated (2 to 10)
    #[arg(short, long, value_delimiter = ',', default_value = "Alice,Bob,Carol")]
    players: Vec<String>,
    /// Seed for the shuffles
    #[arg(short, long)]
    seed: Option<u64>,
    /// Score that ends the game
    #[arg(short, long, default_value_t = 50)]
    win_threshold: u32,
    /// Base seed for bot decisions; seat i uses base + i
    #[arg(long)]
    bot_seed: Option<u64>,
    #[arg(short, long, value_enum, default_value_t = Level::Hard)]
    difficulty: Level,
    /// Only print the final result
    #[arg(short, long)]
    quiet: bool,
    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Level {
    Easy,
    Medium,
    Hard,
}

impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Easy => Difficulty::Easy,
            Level::Medium => Difficulty::Medium,
            Level::Hard => Difficulty::Hard,
        }
    }
}

/// Prints what the first seat sees while the bots play.
struct Narrated {
    table: AgentTable,
    watch: Option<String>,
}

impl Transport for Narrated {
    fn request_move(&mut self, player: &str, request: &MoveRequest) -> MoveReply {
        self.table.request_move(player, request)
    }

    fn notify(&mut self, player: &str, notification: &Notification) {
        if self.watch.as_deref() == Some(player) {
            println!("{notification}");
        }
        self.table.notify(player, notification);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let mut config = GameConfig::default().with_win_threshold(args.win_threshold);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut game = Game::new(config);
    let mut table = AgentTable::new();
    for (seat, name) in args.players.iter().enumerate() {
        game.add_player(name.as_str())?;
        let mut profile = BotProfile::for_difficulty(args.difficulty.into());
        if let Some(base) = args.bot_seed {
            profile = profile.with_seed(base.wrapping_add(seat as u64));
        }
        table.set_agent(name.as_str(), Box::new(BotAgent::new(profile)));
    }

    let watch = if args.quiet { None } else { args.players.first().cloned() };
    let mut transport = Narrated { table, watch };
    let outcome = game.start_game(&mut transport)?;

    println!("{} wins after {} rounds", outcome.winner_name, outcome.rounds);
    for (player, score) in game.players().iter().map(|p| (p.name(), p.score())) {
        println!("  {player:<12} {score:>3}");
    }
    println!("chicago-poker {}", chicago_poker::VERSION);
    Ok(())
}

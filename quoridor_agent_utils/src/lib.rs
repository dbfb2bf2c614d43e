mod pathing;
mod session;
pub use pathing::*;
pub use session::*;

use std::io::BufReader;
use std::net::TcpListener;

use anyhow::Context;
use clap::Args;
use quoridor::{Board, Player};
use tracing::{info, warn};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// A trait to simplify writing agents.
///
/// The policy only decides on moves. Keeping track of the game, talking to
/// the referee and serving one game after another is handled by [`Policy::run()`].
pub trait Policy {
    /// Picks a move for `player`, who is the current player on `board`.
    ///
    /// The result is sent to the referee as is. Returning an illegal move
    /// gets the player booted.
    fn choose_move(&mut self, board: &Board, player: &Player) -> String;

    /// Called after every game, so that per-game state can be cleared.
    fn reset(&mut self) {}

    fn run(&mut self, args: &AgentArgs) -> anyhow::Result<()>
    where
        Self: Sized,
    {
        let listener = TcpListener::bind(("0.0.0.0", args.port))
            .with_context(|| format!("Could not listen on port {}", args.port))?;
        serve_games(self, &listener, &args.name, args.display, None)
    }
}

/// Command line arguments shared by all agents.
#[derive(Args, Clone, Debug)]
pub struct AgentArgs {
    /// The port to accept referee connections on
    #[arg(short, long)]
    pub port: u16,

    /// The name announced to the referee
    #[arg(short, long)]
    pub name: String,

    /// Print the board to stderr whenever it changes
    #[arg(short, long, default_value_t = false)]
    pub display: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    pub log_level: LevelFilter,
}

/// Accepts referee connections and plays one game per connection, in
/// sequence. Stops after `max_games` games, or never if it is `None`.
///
/// A game that ends with an error only ends that connection.
pub fn serve_games<P: Policy + ?Sized>(
    policy: &mut P,
    listener: &TcpListener,
    name: &str,
    display: bool,
    max_games: Option<usize>,
) -> anyhow::Result<()> {
    info!(address = ?listener.local_addr()?, "Accepting connections");
    let mut games_played = 0;
    while max_games.map_or(true, |max| games_played < max) {
        let (stream, peer) = listener.accept()?;
        info!(%peer, "Connection from referee");
        match play_session(policy, name, BufReader::new(&stream), &stream, display) {
            Ok(outcome) => info!(%peer, ?outcome, "Game over"),
            Err(err) => warn!(%peer, "Game ended with an error: {:#}", err),
        }
        policy.reset();
        games_played += 1;
    }
    Ok(())
}

/// Logs to stderr, since stdout may be in use by the policy.
pub fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

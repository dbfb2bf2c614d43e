use std::path::PathBuf;

use clap::Parser;
use referee::{play_game, AgentConnection, GameOptions, RefereeConfig};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Agent addresses as host:port, in turn order
    agents: Vec<String>,

    /// Path to a JSON config file. Flags override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Boot agents that take longer than this to reply
    #[arg(long)]
    move_timeout_ms: Option<u64>,

    /// Pause after every turn
    #[arg(long)]
    turn_delay_ms: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

impl Args {
    fn into_config(self) -> anyhow::Result<RefereeConfig> {
        let mut config = match &self.config {
            Some(path) => RefereeConfig::load(path)?,
            None => RefereeConfig::default(),
        };
        if !self.agents.is_empty() {
            config.agents = self.agents;
        }
        if self.move_timeout_ms.is_some() {
            config.move_timeout_ms = self.move_timeout_ms;
        }
        if self.turn_delay_ms.is_some() {
            config.turn_delay_ms = self.turn_delay_ms;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let config = args.into_config()?;

    let agents = config
        .agents
        .iter()
        .map(|address| {
            let agent = AgentConnection::connect(address, config.move_timeout())?;
            info!(%address, name = %agent.name, "Connected to agent");
            Ok(agent)
        })
        .collect::<Result<Vec<AgentConnection>, anyhow::Error>>()?;

    let options = GameOptions {
        turn_delay: config.turn_delay(),
    };
    let result = play_game(agents, &options)?;

    for (name, reason) in &result.boots {
        eprintln!("{} was booted: {}", name, reason);
    }
    println!("{} won after {} turns", result.winner, result.turns);

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}

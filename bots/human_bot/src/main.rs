use std::io::BufRead;

use clap::Parser;
use quoridor::{legal_pawn_moves, visualize_board, Board, Player};
use quoridor_agent_utils::{initialize_logging, AgentArgs, Policy};
use tracing::warn;

/// Lets a person at the terminal play. The board and prompt go to stderr,
/// moves are read from stdin.
#[derive(Parser)]
struct Args {
    #[command(flatten)]
    agent: AgentArgs,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.agent.log_level);

    HumanBot.run(&args.agent)
}

struct HumanBot;

impl Policy for HumanBot {
    fn choose_move(&mut self, board: &Board, player: &Player) -> String {
        eprintln!("{}", visualize_board(board));
        let pawn_moves: Vec<String> = legal_pawn_moves(board, player.number())
            .iter()
            .map(ToString::to_string)
            .collect();
        eprintln!("You can move to: {}", pawn_moves.join(" "));
        if player.walls_remaining() > 0 {
            eprintln!("Or place a wall, e.g. (IV-E, V-E)");
        }
        eprint!("{}> ", player.name());

        let mut line = String::new();
        if let Err(err) = std::io::stdin().lock().read_line(&mut line) {
            warn!("Could not read from stdin: {}", err);
        }
        String::from(line.trim())
    }
}

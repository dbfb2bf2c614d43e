use clap::Parser;
use quoridor::{legal_pawn_moves, legal_wall_placements, Board, Move, Player};
use quoridor_agent_utils::{initialize_logging, AgentArgs, Policy};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use tracing::info;

#[derive(Parser)]
struct Args {
    #[command(flatten)]
    agent: AgentArgs,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// How often to place a wall instead of moving, between 0 and 1
    #[arg(long, default_value_t = 0.2)]
    wall_probability: f64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.agent.log_level);
    if !(0.0..=1.0).contains(&args.wall_probability) {
        anyhow::bail!(
            "The wall probability must be between 0 and 1, got {}",
            args.wall_probability
        );
    }
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let rng = StdRng::seed_from_u64(seed);

    RandomBot {
        rng,
        wall_probability: args.wall_probability,
    }
    .run(&args.agent)
}

struct RandomBot {
    rng: StdRng,
    wall_probability: f64,
}

impl Policy for RandomBot {
    fn choose_move(&mut self, board: &Board, player: &Player) -> String {
        let wants_wall =
            player.walls_remaining() > 0 && self.rng.gen_bool(self.wall_probability);
        if wants_wall {
            if let Some(wall) = legal_wall_placements(board, player.number()).choose(&mut self.rng)
            {
                return wall.to_string();
            }
        }
        let pawn_moves = legal_pawn_moves(board, player.number());
        match pawn_moves.choose(&mut self.rng) {
            Some(&destination) => Move::Pawn(destination).to_string(),
            // Boxed in by other pawns; any wall will do
            None => legal_wall_placements(board, player.number())
                .choose(&mut self.rng)
                .map(Move::to_string)
                // Standing still is never legal, so this forfeits
                .unwrap_or_else(|| player.position().to_string()),
        }
    }
}

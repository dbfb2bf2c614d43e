use clap::Parser;
use quoridor::{apply_move, legal_pawn_moves, legal_wall_placements, Board, Move, Player};
use quoridor_agent_utils::{
    best_pawn_moves, distance_to_goal, initialize_logging, AgentArgs, Policy,
};
use rand::rngs::StdRng;
use rand::{seq::SliceRandom, SeedableRng};
use tracing::debug;

#[derive(Parser)]
struct Args {
    #[command(flatten)]
    agent: AgentArgs,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.agent.log_level);
    let seed = args.seed.unwrap_or_else(rand::random);
    let rng = StdRng::seed_from_u64(seed);

    GreedyBot { rng }.run(&args.agent)
}

/// Runs along the shortest path, and places walls when an opponent is
/// closer to its goal.
struct GreedyBot {
    rng: StdRng,
}

impl GreedyBot {
    /// The opponent that is closest to winning, with its distance.
    fn leading_opponent(board: &Board, me: u8) -> Option<(u8, usize)> {
        board
            .players()
            .filter(|p| p.number() != me)
            .filter_map(|p| distance_to_goal(board, p.number()).map(|d| (p.number(), d)))
            .min_by_key(|&(_, d)| d)
    }

    /// The wall that delays `opponent` the most, without walling anyone off
    /// completely. Only returns walls that delay the opponent at all.
    fn best_wall(&mut self, board: &Board, me: u8, opponent: u8, current: usize) -> Option<Move> {
        let mut top_choices: Vec<Move> = Vec::new();
        let mut top_score = current;
        for wall in legal_wall_placements(board, me) {
            let mut after = board.clone();
            if apply_move(&mut after, me, wall).is_err() {
                continue;
            }
            let everyone_can_finish = after
                .players()
                .all(|p| distance_to_goal(&after, p.number()).is_some());
            if !everyone_can_finish {
                continue;
            }
            let Some(score) = distance_to_goal(&after, opponent) else {
                continue;
            };
            match score.cmp(&top_score) {
                std::cmp::Ordering::Less => {}
                std::cmp::Ordering::Equal => {
                    if score > current {
                        top_choices.push(wall);
                    }
                }
                std::cmp::Ordering::Greater => {
                    top_choices = vec![wall];
                    top_score = score;
                }
            }
        }
        top_choices.choose(&mut self.rng).copied()
    }
}

impl Policy for GreedyBot {
    fn choose_move(&mut self, board: &Board, player: &Player) -> String {
        let me = player.number();
        let my_distance = distance_to_goal(board, me);

        if player.walls_remaining() > 0 {
            if let Some((opponent, distance)) = Self::leading_opponent(board, me) {
                if my_distance.map_or(true, |mine| distance < mine) {
                    if let Some(wall) = self.best_wall(board, me, opponent, distance) {
                        debug!(%wall, opponent, "Blocking");
                        return wall.to_string();
                    }
                }
            }
        }

        let candidates = match best_pawn_moves(board, me) {
            moves if !moves.is_empty() => moves,
            _ => legal_pawn_moves(board, me),
        };
        match candidates.choose(&mut self.rng) {
            Some(&destination) => Move::Pawn(destination).to_string(),
            None => legal_wall_placements(board, me)
                .choose(&mut self.rng)
                .map(Move::to_string)
                // Standing still is never legal, so this forfeits
                .unwrap_or_else(|| player.position().to_string()),
        }
    }
}

use std::time::Duration;

use anyhow::anyhow;
use quoridor::{deduplicate_names, play_move, winner, Board, Message};
use tracing::{debug, info};

use crate::player::AgentConnection;
use crate::BootReason;

#[derive(Clone, Debug, Default)]
pub struct GameOptions {
    /// Sleep this long after every turn.
    pub turn_delay: Option<Duration>,
}

#[derive(Debug)]
pub struct GameResult {
    pub winner: String,
    /// Booted players in the order they were removed.
    pub boots: Vec<(String, BootReason)>,
    /// Number of moves that were applied.
    pub turns: usize,
}

/// Runs one game between already connected agents, in the given turn order.
///
/// Returns an error only if the game cannot be set up, not when an agent
/// misbehaves. Misbehaving agents are booted.
pub fn play_game(
    mut agents: Vec<AgentConnection>,
    options: &GameOptions,
) -> anyhow::Result<GameResult> {
    let raw_names: Vec<String> = agents.iter().map(|agent| agent.name.clone()).collect();
    let names = deduplicate_names(&raw_names);
    for (agent, name) in agents.iter_mut().zip(&names) {
        agent.name = name.clone();
    }
    let mut board = Board::new(&names)?;
    info!(players = ?names, "Starting game");

    // Indexed by player number; booted agents are taken out
    let mut connections: Vec<Option<AgentConnection>> = agents.into_iter().map(Some).collect();
    broadcast(&mut connections, &Message::Players { names });

    let mut boots = Vec::new();
    let mut turns = 0;
    let winner_name = loop {
        if let Some(player) = winner(&board) {
            break String::from(player.name());
        }
        let (number, name) = board
            .current_player()
            .map(|p| (p.number(), String::from(p.name())))
            .ok_or_else(|| anyhow!("No players left in the game"))?;
        let connection = connections[usize::from(number)]
            .as_mut()
            .ok_or_else(|| anyhow!("{} has no connection", name))?;

        let outcome = connection
            .request_move()
            .and_then(|reply| play_move(&mut board, &reply).map_err(BootReason::from));
        match outcome {
            Ok(mv) => {
                turns += 1;
                debug!(player = %name, mv = %mv, "Applied move");
                broadcast(&mut connections, &Message::Went { name, mv });
                board.rotate();
            }
            Err(reason) => {
                log_boot(&name, &reason);
                board.remove_player(number);
                broadcast(&mut connections, &Message::Boot { name: name.clone() });
                if let Some(connection) = connections[usize::from(number)].take() {
                    connection.close();
                }
                boots.push((name, reason));
            }
        }
        if let Some(delay) = options.turn_delay {
            std::thread::sleep(delay);
        }
    };

    info!(winner = %winner_name, turns, "Game over");
    broadcast(
        &mut connections,
        &Message::Victor {
            name: winner_name.clone(),
        },
    );
    for connection in connections.into_iter().flatten() {
        connection.close();
    }
    Ok(GameResult {
        winner: winner_name,
        boots,
        turns,
    })
}

fn broadcast(connections: &mut [Option<AgentConnection>], message: &Message) {
    for connection in connections.iter_mut().flatten() {
        connection.send(message);
    }
}

fn log_boot(name: &str, reason: &BootReason) {
    info!(player = %name, "Booting player: {}", reason);
    let mut err_dyn = reason as &dyn std::error::Error;
    while let Some(src_err) = err_dyn.source() {
        info!("{}", src_err);
        err_dyn = src_err;
    }
}

use std::io::{BufRead, Write};

use anyhow::{anyhow, bail, Context};
use quoridor::{
    apply_move, sanitize_name, visualize_board, Board, Message, Player, ProtocolError,
};
use tracing::{debug, info, trace, warn};

use crate::Policy;

/// How a game ended from the agent's point of view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The referee announced a winner.
    Victor(String),
    /// The referee closed the connection without announcing a winner,
    /// e.g. after booting this agent.
    Disconnected,
}

fn send(writer: &mut impl Write, line: &str) -> anyhow::Result<()> {
    trace!(name: "Sending", line = %line);
    writeln!(writer, "{}", line)?;
    writer.flush()?;
    Ok(())
}

/// Plays one game over a single connection.
///
/// Announces `name`, waits for the roster, then keeps a shadow board that is
/// only ever changed by what the referee broadcasts. When asked to move, the
/// policy gets the shadow board and its current player.
///
/// Returns an error if the roster is missing or malformed, or if a
/// broadcast move does not fit the shadow board.
pub fn play_session<P: Policy + ?Sized>(
    policy: &mut P,
    name: &str,
    reader: impl BufRead,
    mut writer: impl Write,
    display: bool,
) -> anyhow::Result<SessionOutcome> {
    send(
        &mut writer,
        &Message::Hello {
            name: sanitize_name(name),
        }
        .to_string(),
    )?;
    let mut lines = reader.lines();

    let roster_line = lines
        .next()
        .ok_or_else(|| anyhow!("Connection closed before the roster arrived"))??;
    trace!(name: "Received", line = %roster_line);
    let names = match roster_line.parse::<Message>()? {
        Message::Players { names } => names,
        other => bail!("Expected PLAYERS, got '{}'", other),
    };
    let mut board = Board::new(&names)?;
    info!(players = ?names, "New game");
    if display {
        eprintln!("{}", visualize_board(&board));
    }

    for line in lines {
        let line = line?;
        trace!(name: "Received", line = %line);
        let message = match line.parse::<Message>() {
            Ok(message) => message,
            Err(
                err @ (ProtocolError::MalformedMove(_)
                | ProtocolError::MissingArgument { keyword: "WENT" }),
            ) => {
                // A broadcast move that can't be read leaves the shadow board behind
                return Err(err).with_context(|| format!("Unreadable broadcast '{}'", line));
            }
            Err(err) => {
                warn!(%line, "Ignoring line: {}", err);
                continue;
            }
        };
        match message {
            Message::Go => {
                let player = board
                    .current_player()
                    .ok_or_else(|| anyhow!("Asked for a move, but no players are left"))?;
                let mv = policy.choose_move(&board, player);
                debug!(player = player.name(), mv = %mv, "Chose move");
                send(&mut writer, &mv)?;
                // The board changes once the referee broadcasts the move back
                continue;
            }
            Message::Went { name, mv } => {
                let current = board
                    .current_player()
                    .filter(|p| p.name() == name)
                    .map(Player::number)
                    .ok_or_else(|| anyhow!("{} moved out of turn", name))?;
                apply_move(&mut board, current, mv)
                    .with_context(|| format!("Broadcast move {} by {} is illegal", mv, name))?;
                board.rotate();
                debug!(%name, %mv, "Applied move");
            }
            Message::Boot { name } => {
                match board.player_by_name(&name).map(Player::number) {
                    Some(number) => {
                        board.remove_player(number);
                        info!(%name, "Player booted");
                    }
                    None => warn!(%name, "Booted player is not in the game"),
                }
            }
            Message::Victor { name } => {
                info!(winner = %name, "Game over");
                return Ok(SessionOutcome::Victor(name));
            }
            Message::Hello { .. } | Message::Players { .. } => {
                warn!(%line, "Ignoring message that is only valid at the start");
                continue;
            }
        }
        if display {
            eprintln!("{}", visualize_board(&board));
        }
    }
    Ok(SessionOutcome::Disconnected)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use quoridor::{position, Position};

    use super::*;

    /// Replays fixed moves and records what it saw.
    #[derive(Default)]
    struct Scripted {
        moves: Vec<&'static str>,
        seen: Vec<(String, Position)>,
    }

    impl Policy for Scripted {
        fn choose_move(&mut self, _board: &Board, player: &Player) -> String {
            self.seen
                .push((String::from(player.name()), player.position()));
            String::from(self.moves.remove(0))
        }
    }

    fn run(input: &str, policy: &mut Scripted) -> (anyhow::Result<SessionOutcome>, String) {
        let mut output = Vec::new();
        let result = play_session(policy, "tester", Cursor::new(input), &mut output, false);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn follows_broadcasts_and_answers_requests() {
        let mut policy = Scripted {
            moves: vec!["V-H", "(I-A, II-A)"],
            ..Default::default()
        };
        let input = "PLAYERS Alice Bob\n\
                     WENT Alice V-B\n\
                     GO?\n\
                     WENT Bob V-H\n\
                     WENT Alice V-C\n\
                     GO?\n\
                     WENT Bob (I-A, II-A)\n\
                     VICTOR Bob\n";
        let (result, output) = run(input, &mut policy);
        assert_eq!(result.unwrap(), SessionOutcome::Victor(String::from("Bob")));
        assert_eq!(output, "HELLO tester\nV-H\n(I-A, II-A)\n");
        assert_eq!(
            policy.seen,
            [
                (String::from("Bob"), position!("V-I")),
                (String::from("Bob"), position!("V-H")),
            ]
        );
    }

    #[test]
    fn boot_removes_player_from_turn_order() {
        let mut policy = Scripted {
            moves: vec!["III-E"],
            ..Default::default()
        };
        let input = "PLAYERS a b c\n\
                     WENT a V-B\n\
                     BOOT b\n\
                     GO?\n";
        let (result, output) = run(input, &mut policy);
        assert_eq!(result.unwrap(), SessionOutcome::Disconnected);
        assert_eq!(output, "HELLO tester\nIII-E\n");
        assert_eq!(policy.seen, [(String::from("c"), position!("I-E"))]);
    }

    #[test]
    fn unknown_lines_are_ignored() {
        let mut policy = Scripted::default();
        let input = "PLAYERS a b\nWHAT?\nPLAYERS c d\nVICTOR a\n";
        let (result, _) = run(input, &mut policy);
        assert_eq!(result.unwrap(), SessionOutcome::Victor(String::from("a")));
    }

    #[test]
    fn missing_roster_ends_the_session() {
        let mut policy = Scripted::default();
        let (result, output) = run("GO?\n", &mut policy);
        assert!(result.is_err());
        assert_eq!(output, "HELLO tester\n");
        assert!(policy.seen.is_empty());

        let (result, _) = run("", &mut policy);
        assert!(result.is_err());

        let (result, _) = run("PLAYERS lonely\n", &mut policy);
        assert!(result.is_err());
    }

    #[test]
    fn move_out_of_turn_is_a_desync() {
        let mut policy = Scripted::default();
        let (result, _) = run("PLAYERS a b\nWENT b V-H\n", &mut policy);
        assert!(result.is_err());
    }

    #[test]
    fn unreadable_broadcast_move_is_a_desync() {
        let mut policy = Scripted {
            moves: vec!["V-H"],
            ..Default::default()
        };
        let (result, output) = run("PLAYERS a b\nWENT a V-Z\nGO?\n", &mut policy);
        assert!(result.is_err());
        assert_eq!(output, "HELLO tester\n");
        assert!(policy.seen.is_empty());

        let (result, _) = run("PLAYERS a b\nWENT a\nVICTOR a\n", &mut policy);
        assert!(result.is_err());
    }

    #[test]
    fn illegal_broadcast_move_is_a_desync() {
        let mut policy = Scripted::default();
        let (result, _) = run("PLAYERS a b\nWENT a V-D\n", &mut policy);
        assert!(result.is_err());
    }
}

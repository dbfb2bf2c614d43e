use std::str::FromStr;

use crate::{Move, ProtocolError};

/// A line exchanged between the referee and an agent.
///
/// The agent's reply to [`Message::Go`] is a bare move string, not a
/// `Message`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    /// Sent by an agent right after its connection is accepted.
    Hello { name: String },
    /// The players of the new game, in turn order.
    Players { names: Vec<String> },
    /// Asks the agent for a move for the current player.
    Go,
    /// A move was validated and applied.
    Went { name: String, mv: Move },
    /// A player was removed from the game.
    Boot { name: String },
    /// The game is over.
    Victor { name: String },
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Message::Hello { name } => write!(f, "HELLO {}", name),
            Message::Players { names } => write!(f, "PLAYERS {}", names.join(" ")),
            Message::Go => write!(f, "GO?"),
            Message::Went { name, mv } => write!(f, "WENT {} {}", name, mv),
            Message::Boot { name } => write!(f, "BOOT {}", name),
            Message::Victor { name } => write!(f, "VICTOR {}", name),
        }
    }
}

fn single_name(keyword: &'static str, args: &str) -> Result<String, ProtocolError> {
    let mut words = args.split_whitespace();
    let name = words
        .next()
        .ok_or(ProtocolError::MissingArgument { keyword })?;
    if words.next().is_some() {
        return Err(ProtocolError::UnexpectedArgument { keyword });
    }
    Ok(String::from(name))
}

impl FromStr for Message {
    type Err = ProtocolError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (keyword, args) = line
            .split_once(char::is_whitespace)
            .map(|(keyword, args)| (keyword, args.trim()))
            .unwrap_or((line, ""));
        match keyword {
            // Names are free text here; the referee sanitizes them
            "HELLO" if args.is_empty() => {
                Err(ProtocolError::MissingArgument { keyword: "HELLO" })
            }
            "HELLO" => Ok(Message::Hello {
                name: String::from(args),
            }),
            "PLAYERS" => {
                let names: Vec<String> = args.split_whitespace().map(String::from).collect();
                if names.is_empty() {
                    return Err(ProtocolError::MissingArgument { keyword: "PLAYERS" });
                }
                Ok(Message::Players { names })
            }
            "GO?" if args.is_empty() => Ok(Message::Go),
            "GO?" => Err(ProtocolError::UnexpectedArgument { keyword: "GO?" }),
            "WENT" => {
                let (name, mv) = args
                    .split_once(char::is_whitespace)
                    .ok_or(ProtocolError::MissingArgument { keyword: "WENT" })?;
                let mv = mv.parse().map_err(ProtocolError::MalformedMove)?;
                Ok(Message::Went {
                    name: String::from(name),
                    mv,
                })
            }
            "BOOT" => Ok(Message::Boot {
                name: single_name("BOOT", args)?,
            }),
            "VICTOR" => Ok(Message::Victor {
                name: single_name("VICTOR", args)?,
            }),
            _ => Err(ProtocolError::UnknownMessage(String::from(line))),
        }
    }
}

/// Turns an agent-chosen name into one that fits in a single protocol word.
pub fn sanitize_name(name: &str) -> String {
    let name: String = name
        .trim()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    if name.is_empty() {
        String::from("player")
    } else {
        name
    }
}

/// Makes names unique by appending `-2`, `-3`, ... to repeated ones.
pub fn deduplicate_names(names: &[String]) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        let mut candidate = name.clone();
        let mut suffix = 2;
        while unique.contains(&candidate) {
            candidate = format!("{}-{}", name, suffix);
            suffix += 1;
        }
        unique.push(candidate);
    }
    unique
}

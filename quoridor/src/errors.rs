use crate::Position;

/// The error type for parsing a move string, see [`crate::Move`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MalformedMove {
    Empty,
    NotACoordinate(String),
    UnknownNumeral(String),
    UnknownLetter(String),
    MissingParentheses,
    WrongSquareCount(usize),
    SquaresNotAdjacent { first: Position, second: Position },
}

impl std::error::Error for MalformedMove {}

impl std::fmt::Display for MalformedMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedMove::Empty => write!(f, "The move string is empty"),
            MalformedMove::NotACoordinate(token) => {
                write!(f, "'{}' is not of the form <numeral>-<letter>", token)
            }
            MalformedMove::UnknownNumeral(token) => {
                write!(f, "'{}' is not a column numeral between I and IX", token)
            }
            MalformedMove::UnknownLetter(token) => {
                write!(f, "'{}' is not a row letter between A and I", token)
            }
            MalformedMove::MissingParentheses => {
                write!(f, "A wall placement must be enclosed in parentheses")
            }
            MalformedMove::WrongSquareCount(count) => write!(
                f,
                "A wall placement must name exactly two squares, but named {}",
                count
            ),
            MalformedMove::SquaresNotAdjacent { first, second } => write!(
                f,
                "{} must be directly left of or above {} for a wall to cover both",
                first, second
            ),
        }
    }
}

/// The error type for a move that cannot be played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    Malformed(MalformedMove),
    NoSuchPlayer(u8),
    NoCurrentPlayer,
    Unreachable { from: Position, to: Position },
    NoWallsRemaining,
    WallOverlaps { first: Position, second: Position },
    WallCrosses { first: Position, second: Position },
}

impl From<MalformedMove> for IllegalMove {
    fn from(err: MalformedMove) -> Self {
        IllegalMove::Malformed(err)
    }
}

impl std::error::Error for IllegalMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalMove::Malformed(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::Malformed(_) => write!(f, "Could not parse the move"),
            IllegalMove::NoSuchPlayer(number) => {
                write!(f, "There is no player number {} in the game", number)
            }
            IllegalMove::NoCurrentPlayer => write!(f, "No players are left to move"),
            IllegalMove::Unreachable { from, to } => {
                write!(f, "Cannot move a pawn from {} to {}", from, to)
            }
            IllegalMove::NoWallsRemaining => {
                write!(f, "Tried to place a wall without any walls left")
            }
            IllegalMove::WallOverlaps { first, second } => write!(
                f,
                "A wall at ({}, {}) would overlap an existing wall",
                first, second
            ),
            IllegalMove::WallCrosses { first, second } => write!(
                f,
                "A wall at ({}, {}) would cross an existing wall",
                first, second
            ),
        }
    }
}

/// The error type for setting up a game from a list of player names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RosterError {
    WrongPlayerCount(usize),
    DuplicateName(String),
}

impl std::error::Error for RosterError {}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::WrongPlayerCount(count) => write!(
                f,
                "A game needs between {} and {} players, got {}",
                crate::MIN_PLAYERS,
                crate::MAX_PLAYERS,
                count
            ),
            RosterError::DuplicateName(name) => {
                write!(f, "The name '{}' appears more than once", name)
            }
        }
    }
}

/// The error type for parsing a protocol line, see [`crate::Message`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProtocolError {
    UnknownMessage(String),
    MissingArgument { keyword: &'static str },
    UnexpectedArgument { keyword: &'static str },
    MalformedMove(MalformedMove),
}

impl std::error::Error for ProtocolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProtocolError::MalformedMove(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProtocolError::UnknownMessage(line) => write!(f, "Unknown message '{}'", line),
            ProtocolError::MissingArgument { keyword } => {
                write!(f, "{} is missing an argument", keyword)
            }
            ProtocolError::UnexpectedArgument { keyword } => {
                write!(f, "{} was given too many arguments", keyword)
            }
            ProtocolError::MalformedMove(_) => write!(f, "WENT carried a malformed move"),
        }
    }
}

use quoridor::IllegalMove;

#[derive(Debug)]
/// Why a player was removed from the game.
pub enum BootReason {
    IllegalMove(IllegalMove),
    /// Reading the reply failed, including running into the move timeout.
    Transport(std::io::Error),
    /// The agent closed the connection, or it broke earlier in the game.
    Disconnected,
}

impl From<IllegalMove> for BootReason {
    fn from(err: IllegalMove) -> Self {
        BootReason::IllegalMove(err)
    }
}

impl std::error::Error for BootReason {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BootReason::IllegalMove(err) => Some(err),
            BootReason::Transport(err) => Some(err),
            BootReason::Disconnected => None,
        }
    }
}

impl std::fmt::Display for BootReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BootReason::IllegalMove(_) => write!(f, "Made an illegal move"),
            BootReason::Transport(_) => write!(f, "Did not reply with a move"),
            BootReason::Disconnected => write!(f, "Is no longer connected"),
        }
    }
}

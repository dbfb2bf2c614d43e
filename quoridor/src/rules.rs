use crate::{Board, IllegalMove, MalformedMove, Move, Orientation, Player, Position, Square};

/// A chain of jumps over other pawns is at most this long.
pub const MAX_JUMP_DEPTH: u8 = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Down,
    Right,
    Up,
    Left,
}

/// The order in which neighbours are explored, with the offset to each.
pub const DIRECTIONS: [(Direction, i8, i8); 4] = [
    (Direction::Down, 0, 1),
    (Direction::Right, 1, 0),
    (Direction::Up, 0, -1),
    (Direction::Left, -1, 0),
];

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Down => Direction::Up,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Left => Direction::Right,
        }
    }

    /// Whether a wall sits on the edge between `from` and its neighbour `to`
    /// in this direction.
    fn is_blocked(self, from: &Square, to: &Square) -> bool {
        match self {
            Direction::Down => from.wall_bottom().is_some(),
            Direction::Right => from.wall_right().is_some(),
            Direction::Up => to.wall_bottom().is_some(),
            Direction::Left => to.wall_right().is_some(),
        }
    }
}

/// The neighbours of `pos` that can be stepped to without crossing a wall,
/// regardless of whether they are occupied.
pub fn open_neighbours(
    board: &Board,
    pos: Position,
) -> impl Iterator<Item = (Direction, Position)> + '_ {
    DIRECTIONS.into_iter().filter_map(move |(direction, dx, dy)| {
        let neighbour = pos.offset(dx, dy)?;
        let blocked = direction.is_blocked(board.square_at(pos), board.square_at(neighbour));
        (!blocked).then_some((direction, neighbour))
    })
}

/// Can a pawn standing at `origin` reach `destination` in one move?
///
/// A vacant, unwalled neighbour is reachable directly. An occupied neighbour
/// is jumped over by asking the same question from the neighbour's square,
/// never going back the way we came (`excluded`) and giving up after
/// [`MAX_JUMP_DEPTH`] jumps. This covers straight jumps, diagonal steps past
/// an opponent, and chains of adjacent pawns.
pub fn is_legal_pawn_move(
    board: &Board,
    origin: Position,
    destination: Position,
    excluded: Option<Direction>,
    jump_depth: u8,
) -> bool {
    for (direction, neighbour) in open_neighbours(board, origin) {
        if board.square_at(neighbour).is_vacant() {
            if neighbour == destination {
                return true;
            }
        } else if jump_depth != MAX_JUMP_DEPTH
            && Some(direction) != excluded
            && is_legal_pawn_move(
                board,
                neighbour,
                destination,
                Some(direction.opposite()),
                jump_depth + 1,
            )
        {
            return true;
        }
    }
    false
}

/// All squares player `number` could move its pawn to.
pub fn legal_pawn_moves(board: &Board, number: u8) -> Vec<Position> {
    let Some(origin) = board.player_location(number) else {
        return Vec::new();
    };
    Position::all()
        .filter(|&dest| is_legal_pawn_move(board, origin, dest, None, 0))
        .collect()
}

/// All wall placements player `number` could make.
pub fn legal_wall_placements(board: &Board, number: u8) -> Vec<Move> {
    let mut moves = Vec::new();
    for first in Position::all() {
        for (dx, dy) in [(1, 0), (0, 1)] {
            if let Some(second) = first.offset(dx, dy) {
                let mv = Move::Wall(first, second);
                if validate(board, number, &mv).is_ok() {
                    moves.push(mv);
                }
            }
        }
    }
    moves
}

fn validate_wall(board: &Board, first: Position, second: Position) -> Result<(), IllegalMove> {
    let orientation = Orientation::between(first, second)
        .ok_or(MalformedMove::SquaresNotAdjacent { first, second })?;
    let (a, b) = (board.square_at(first), board.square_at(second));
    // A wall running the same way on either square overlaps. A wall running
    // the other way crosses only if it starts on the first square; if it
    // merely ends there, the two walls just touch.
    let (overlaps, crossing) = match orientation {
        Orientation::Horizontal => (
            a.wall_bottom().is_some() || b.wall_bottom().is_some(),
            a.wall_right(),
        ),
        Orientation::Vertical => (
            a.wall_right().is_some() || b.wall_right().is_some(),
            a.wall_bottom(),
        ),
    };
    if overlaps {
        Err(IllegalMove::WallOverlaps { first, second })
    } else if crossing.is_some_and(|edge| edge.anchor) {
        Err(IllegalMove::WallCrosses { first, second })
    } else {
        Ok(())
    }
}

/// Checks whether player `number` may make this move.
///
/// Walls are only checked locally for overlaps and crossings; a wall that
/// cuts off every path to some player's goal is allowed.
pub fn validate(board: &Board, number: u8, mv: &Move) -> Result<(), IllegalMove> {
    let player = board
        .player(number)
        .ok_or(IllegalMove::NoSuchPlayer(number))?;
    match *mv {
        Move::Pawn(destination) => {
            let origin = player.position();
            if is_legal_pawn_move(board, origin, destination, None, 0) {
                Ok(())
            } else {
                Err(IllegalMove::Unreachable {
                    from: origin,
                    to: destination,
                })
            }
        }
        Move::Wall(first, second) => {
            if player.walls_remaining() == 0 {
                return Err(IllegalMove::NoWallsRemaining);
            }
            validate_wall(board, first, second)
        }
    }
}

/// Validates the move and, if it is legal, carries it out. Does not pass
/// the turn on.
pub fn apply_move(board: &mut Board, number: u8, mv: Move) -> Result<(), IllegalMove> {
    validate(board, number, &mv)?;
    match mv {
        Move::Pawn(destination) => board.move_player(number, destination),
        Move::Wall(first, second) => {
            if let Some(orientation) = mv.wall_orientation() {
                board.place_wall(number, first, second, orientation);
            }
        }
    }
    Ok(())
}

/// Parses a move string and plays it for the current player.
pub fn play_move(board: &mut Board, move_str: &str) -> Result<Move, IllegalMove> {
    let mv: Move = move_str.parse()?;
    let number = board
        .current_player()
        .map(Player::number)
        .ok_or(IllegalMove::NoCurrentPlayer)?;
    apply_move(board, number, mv)?;
    Ok(mv)
}

/// The winner of the game, if there is one.
///
/// A lone remaining player wins outright. Otherwise the first player in turn
/// order standing on its goal edge wins.
pub fn winner(board: &Board) -> Option<&Player> {
    if board.num_players() == 1 {
        return board.current_player();
    }
    board.players().find(|p| p.has_reached_goal())
}

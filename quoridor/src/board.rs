use crate::{Player, RosterError, TurnOrder};

/// Number of squares along each side of the board.
pub const BOARD_SIZE: i8 = 9;
/// Walls shared out among all players at the start of a game.
pub const WALL_POOL: u8 = 20;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

/// A square on the board. `x` is the column, `y` is the row.
///
/// Can only be constructed for coordinates inside the board, so indexing the
/// board with a `Position` never fails.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    x: i8,
    y: i8,
}

impl Position {
    pub fn new(x: i8, y: i8) -> Option<Self> {
        let in_range = |c: i8| (0..BOARD_SIZE).contains(&c);
        (in_range(x) && in_range(y)).then_some(Position { x, y })
    }

    pub fn x(self) -> i8 {
        self.x
    }

    pub fn y(self) -> i8 {
        self.y
    }

    /// The position `(dx, dy)` away from this one, if it is on the board.
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        Position::new(self.x + dx, self.y + dy)
    }

    /// All positions on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Position { x, y }))
    }
}

/// The square a player starts on, centered on the edge opposite its goal.
pub(crate) fn starting_position(number: u8) -> Position {
    let last = BOARD_SIZE - 1;
    let center = BOARD_SIZE / 2;
    let (x, y) = match number {
        0 => (center, 0),
        1 => (center, last),
        2 => (0, center),
        _ => (last, center),
    };
    Position { x, y }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Lies along the bottom edges of two horizontally adjacent squares.
    Horizontal,
    /// Lies along the right edges of two vertically adjacent squares.
    Vertical,
}

impl Orientation {
    /// The orientation of a wall covering `first` and `second`, or `None` if
    /// no wall can cover exactly these two squares.
    ///
    /// The second square must be right of or below the first. Walls never
    /// start on the last row (horizontal) or the last column (vertical),
    /// since there is no edge beyond them to block.
    pub fn between(first: Position, second: Position) -> Option<Self> {
        let last = BOARD_SIZE - 1;
        if first.x + 1 == second.x && first.y == second.y && first.y != last {
            Some(Orientation::Horizontal)
        } else if first.y + 1 == second.y && first.x == second.x && first.x != last {
            Some(Orientation::Vertical)
        } else {
            None
        }
    }
}

/// One of the two references a wall leaves on the squares it touches.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WallEdge {
    /// Set on the square named first when the wall was placed.
    pub anchor: bool,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Square {
    occupant: Option<u8>,
    wall_bottom: Option<WallEdge>,
    wall_right: Option<WallEdge>,
}

impl Square {
    /// The number of the player standing here.
    pub fn occupant(&self) -> Option<u8> {
        self.occupant
    }

    pub fn is_vacant(&self) -> bool {
        self.occupant.is_none()
    }

    /// The wall below this square, if any.
    pub fn wall_bottom(&self) -> Option<WallEdge> {
        self.wall_bottom
    }

    /// The wall to the right of this square, if any.
    pub fn wall_right(&self) -> Option<WallEdge> {
        self.wall_right
    }
}

/// The 9x9 grid together with the players still in the game.
///
/// Squares and players are kept in sync: a square has an occupant exactly
/// when that player's position is the square.
#[derive(Clone, Debug)]
pub struct Board {
    /// Indexed by `[y][x]`.
    squares: [[Square; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    players: TurnOrder,
}

impl Board {
    /// Sets up a new game. Turn order follows the order of `names`, and the
    /// player at index `i` gets player number `i`.
    pub fn new<S: AsRef<str>>(names: &[S]) -> Result<Self, RosterError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&names.len()) {
            return Err(RosterError::WrongPlayerCount(names.len()));
        }
        let walls_each = WALL_POOL / names.len() as u8;
        let mut board = Board {
            squares: Default::default(),
            players: TurnOrder::default(),
        };
        for (number, name) in names.iter().enumerate() {
            let name = name.as_ref();
            if board.player_by_name(name).is_some() {
                return Err(RosterError::DuplicateName(String::from(name)));
            }
            let number = number as u8;
            let position = starting_position(number);
            board.square_mut(position).occupant = Some(number);
            board
                .players
                .push(Player::new(number, name, walls_each, position));
        }
        Ok(board)
    }

    /// Returns `None` for coordinates off the board.
    pub fn square(&self, x: i8, y: i8) -> Option<&Square> {
        Position::new(x, y).map(|pos| self.square_at(pos))
    }

    pub fn square_at(&self, pos: Position) -> &Square {
        &self.squares[pos.y as usize][pos.x as usize]
    }

    fn square_mut(&mut self, pos: Position) -> &mut Square {
        &mut self.squares[pos.y as usize][pos.x as usize]
    }

    /// The rows of the board, top (row `A`) first.
    pub fn rows(&self) -> impl Iterator<Item = &[Square; BOARD_SIZE as usize]> {
        self.squares.iter()
    }

    /// The live players, in turn order starting with the current player.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Option<&Player> {
        self.players.current()
    }

    pub fn player(&self, number: u8) -> Option<&Player> {
        self.players.get(number)
    }

    pub fn player_by_name(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    pub fn player_location(&self, number: u8) -> Option<Position> {
        self.player(number).map(Player::position)
    }

    pub fn walls_remaining(&self, number: u8) -> Option<u8> {
        self.player(number).map(Player::walls_remaining)
    }

    /// Passes the turn to the next player.
    pub fn rotate(&mut self) {
        self.players.rotate();
    }

    /// Takes a player out of the game and frees its square. If it was the
    /// current player, the turn passes to the next one.
    pub fn remove_player(&mut self, number: u8) -> Option<Player> {
        let player = self.players.remove(number)?;
        self.square_mut(player.position()).occupant = None;
        Some(player)
    }

    /// Does not check legality, see [`crate::apply_move()`].
    pub(crate) fn move_player(&mut self, number: u8, destination: Position) {
        let Some(player) = self.players.get_mut(number) else {
            return;
        };
        let origin = player.position();
        player.set_position(destination);
        self.square_mut(origin).occupant = None;
        self.square_mut(destination).occupant = Some(number);
    }

    /// Does not check legality, see [`crate::apply_move()`].
    pub(crate) fn place_wall(
        &mut self,
        number: u8,
        first: Position,
        second: Position,
        orientation: Orientation,
    ) {
        let Some(player) = self.players.get_mut(number) else {
            return;
        };
        player.take_wall();
        let edges = [
            (first, WallEdge { anchor: true }),
            (second, WallEdge { anchor: false }),
        ];
        for (pos, edge) in edges {
            let square = self.square_mut(pos);
            match orientation {
                Orientation::Horizontal => square.wall_bottom = Some(edge),
                Orientation::Vertical => square.wall_right = Some(edge),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position;

    #[test]
    fn players_start_opposite_their_goal() {
        let board = Board::new(&["a", "b", "c", "d"]).unwrap();
        let locations: Vec<_> = (0..4).map(|n| board.player_location(n).unwrap()).collect();
        assert_eq!(
            locations,
            [
                position!("V-A"),
                position!("V-I"),
                position!("I-E"),
                position!("IX-E")
            ]
        );
        for (n, loc) in locations.into_iter().enumerate() {
            assert_eq!(board.square_at(loc).occupant(), Some(n as u8));
        }
    }

    #[test]
    fn wall_pool_is_split_evenly() {
        let two = Board::new(&["a", "b"]).unwrap();
        assert_eq!(two.walls_remaining(0), Some(10));
        let three = Board::new(&["a", "b", "c"]).unwrap();
        assert_eq!(three.walls_remaining(2), Some(6));
        let four = Board::new(&["a", "b", "c", "d"]).unwrap();
        assert_eq!(four.walls_remaining(3), Some(5));
    }

    #[test]
    fn rejects_bad_rosters() {
        assert_eq!(
            Board::new(&["solo"]).unwrap_err(),
            RosterError::WrongPlayerCount(1)
        );
        assert_eq!(
            Board::new(&["a", "b", "c", "d", "e"]).unwrap_err(),
            RosterError::WrongPlayerCount(5)
        );
        assert_eq!(
            Board::new(&["a", "a"]).unwrap_err(),
            RosterError::DuplicateName(String::from("a"))
        );
    }

    #[test]
    fn square_outside_grid_is_none() {
        let board = Board::new(&["a", "b"]).unwrap();
        assert!(board.square(-1, 0).is_none());
        assert!(board.square(0, 9).is_none());
        assert!(board.square(8, 8).is_some());
    }

    #[test]
    fn move_keeps_squares_and_players_in_sync() {
        let mut board = Board::new(&["a", "b"]).unwrap();
        board.move_player(0, position!("V-B"));
        assert!(board.square_at(position!("V-A")).is_vacant());
        assert_eq!(board.square_at(position!("V-B")).occupant(), Some(0));
        assert_eq!(board.player_location(0), Some(position!("V-B")));
    }

    #[test]
    fn removing_a_player_vacates_its_square() {
        let mut board = Board::new(&["a", "b", "c"]).unwrap();
        let removed = board.remove_player(0).unwrap();
        assert_eq!(removed.name(), "a");
        assert!(board.square_at(position!("V-A")).is_vacant());
        assert_eq!(board.current_player().map(Player::name), Some("b"));
        assert_eq!(board.num_players(), 2);
        assert!(board.remove_player(0).is_none());
    }

    #[test]
    fn placed_wall_marks_anchor_on_first_square() {
        let mut board = Board::new(&["a", "b"]).unwrap();
        board.place_wall(
            0,
            position!("V-E"),
            position!("V-F"),
            Orientation::Vertical,
        );
        let first = board.square_at(position!("V-E"));
        let second = board.square_at(position!("V-F"));
        assert_eq!(first.wall_right(), Some(WallEdge { anchor: true }));
        assert_eq!(second.wall_right(), Some(WallEdge { anchor: false }));
        assert_eq!(first.wall_bottom(), None);
        assert_eq!(board.walls_remaining(0), Some(9));
    }

    #[test]
    fn orientation_excludes_outer_row_and_column() {
        let p = |x, y| Position::new(x, y).unwrap();
        assert_eq!(
            Orientation::between(p(3, 2), p(4, 2)),
            Some(Orientation::Horizontal)
        );
        assert_eq!(
            Orientation::between(p(3, 2), p(3, 3)),
            Some(Orientation::Vertical)
        );
        assert_eq!(Orientation::between(p(3, 8), p(4, 8)), None);
        assert_eq!(Orientation::between(p(8, 3), p(8, 4)), None);
        assert_eq!(Orientation::between(p(4, 2), p(3, 2)), None);
        assert_eq!(Orientation::between(p(3, 2), p(4, 3)), None);
    }
}

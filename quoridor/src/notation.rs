use std::str::FromStr;

use crate::{MalformedMove, Orientation, Position};

static NUMERALS: [&str; 9] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];

/// Returned by [`to_numeral()`] for columns off the board.
pub const NUMERAL_SENTINEL: &str = "@@@@@@@@@@@@@@";
/// Returned by [`to_letter()`] for rows off the board.
pub const LETTER_SENTINEL: char = 'Z';

/// The Roman numeral naming column `x`.
pub fn to_numeral(x: i8) -> &'static str {
    usize::try_from(x)
        .ok()
        .and_then(|idx| NUMERALS.get(idx))
        .copied()
        .unwrap_or(NUMERAL_SENTINEL)
}

pub fn from_numeral(s: &str) -> Option<i8> {
    NUMERALS.iter().position(|&n| n == s).map(|idx| idx as i8)
}

/// The letter naming row `y`.
pub fn to_letter(y: i8) -> char {
    match u8::try_from(y) {
        Ok(y @ 0..=8) => char::from(b'A' + y),
        _ => LETTER_SENTINEL,
    }
}

pub fn from_letter(c: char) -> Option<i8> {
    ('A'..='I')
        .contains(&c)
        .then(|| (c as u8 - b'A') as i8)
}

/// What a player does on its turn.
///
/// The textual forms are `V-E` for moving the pawn to column V, row E, and
/// `(V-E, VI-E)` for placing a wall along the bottom of V-E and VI-E.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Move {
    Pawn(Position),
    Wall(Position, Position),
}

impl Move {
    /// The orientation of the wall, if this is a (well-formed) wall placement.
    pub fn wall_orientation(&self) -> Option<Orientation> {
        match *self {
            Move::Pawn(_) => None,
            Move::Wall(first, second) => Orientation::between(first, second),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", to_numeral(self.x()), to_letter(self.y()))
    }
}

impl FromStr for Position {
    type Err = MalformedMove;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split('-').collect();
        let [numeral, letter] = tokens[..] else {
            return Err(MalformedMove::NotACoordinate(String::from(s)));
        };
        let x = from_numeral(numeral)
            .ok_or_else(|| MalformedMove::UnknownNumeral(String::from(numeral)))?;
        let mut chars = letter.chars();
        let y = match (chars.next(), chars.next()) {
            (Some(c), None) => from_letter(c),
            _ => None,
        }
        .ok_or_else(|| MalformedMove::UnknownLetter(String::from(letter)))?;
        Position::new(x, y).ok_or_else(|| MalformedMove::NotACoordinate(String::from(s)))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Pawn(pos) => write!(f, "{}", pos),
            Move::Wall(first, second) => write!(f, "({}, {})", first, second),
        }
    }
}

impl FromStr for Move {
    type Err = MalformedMove;

    /// Surrounding whitespace is ignored. Anything starting with `(` is
    /// treated as a wall placement.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            Err(MalformedMove::Empty)
        } else if s.starts_with('(') {
            parse_wall(s)
        } else {
            s.parse().map(Move::Pawn)
        }
    }
}

fn parse_wall(s: &str) -> Result<Move, MalformedMove> {
    let inner = s
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(MalformedMove::MissingParentheses)?;
    let halves: Vec<&str> = inner.split(',').collect();
    let [first, second] = halves[..] else {
        return Err(MalformedMove::WrongSquareCount(halves.len()));
    };
    let first: Position = first.trim().parse()?;
    let second: Position = second.trim().parse()?;
    match Orientation::between(first, second) {
        Some(_) => Ok(Move::Wall(first, second)),
        None => Err(MalformedMove::SquaresNotAdjacent { first, second }),
    }
}

/// Shorthand for creating a [`Position`] from its textual form.
///
/// ```
/// # use quoridor::{position, Position};
/// assert_eq!(position!("V-E"), Position::new(4, 4).unwrap());
/// ```
#[macro_export]
macro_rules! position {
    ($s:literal) => {
        <$crate::Position as std::str::FromStr>::from_str($s)
            .expect("Invalid position given to position! macro")
    };
}
#[allow(unused_imports)]
pub(crate) use position;

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    quickcheck! {
        fn numeral_round_trip(x: i8) -> bool {
            if (0..9).contains(&x) {
                from_numeral(to_numeral(x)) == Some(x)
            } else {
                to_numeral(x) == NUMERAL_SENTINEL
            }
        }

        fn letter_round_trip(y: i8) -> bool {
            if (0..9).contains(&y) {
                from_letter(to_letter(y)) == Some(y)
            } else {
                to_letter(y) == LETTER_SENTINEL
            }
        }

        fn unknown_numerals_do_not_decode(s: String) -> bool {
            NUMERALS.contains(&s.as_str()) || from_numeral(&s).is_none()
        }

        fn pawn_move_reparses(pos: Position) -> bool {
            let text = Move::Pawn(pos).to_string();
            text.parse::<Move>() == Ok(Move::Pawn(pos))
        }
    }

    #[test]
    fn sentinels_never_decode() {
        assert_eq!(from_numeral(NUMERAL_SENTINEL), None);
        assert_eq!(from_letter(LETTER_SENTINEL), None);
        assert_eq!(to_numeral(9), NUMERAL_SENTINEL);
        assert_eq!(to_letter(-1), LETTER_SENTINEL);
    }

    #[test]
    fn parse_pawn_move() {
        assert_eq!(
            "V-E".parse::<Move>(),
            Ok(Move::Pawn(Position::new(4, 4).unwrap()))
        );
        assert_eq!(
            "  IX-A \n".parse::<Move>(),
            Ok(Move::Pawn(Position::new(8, 0).unwrap()))
        );
    }

    #[test]
    fn reject_malformed_pawn_moves() {
        assert_eq!("".parse::<Move>(), Err(MalformedMove::Empty));
        assert_eq!(
            "V-E-F".parse::<Move>(),
            Err(MalformedMove::NotACoordinate(String::from("V-E-F")))
        );
        assert_eq!(
            "VE".parse::<Move>(),
            Err(MalformedMove::NotACoordinate(String::from("VE")))
        );
        assert_eq!(
            "X-E".parse::<Move>(),
            Err(MalformedMove::UnknownNumeral(String::from("X")))
        );
        assert_eq!(
            "V-J".parse::<Move>(),
            Err(MalformedMove::UnknownLetter(String::from("J")))
        );
        assert_eq!(
            "V-EE".parse::<Move>(),
            Err(MalformedMove::UnknownLetter(String::from("EE")))
        );
        assert_eq!(
            "v-e".parse::<Move>(),
            Err(MalformedMove::UnknownNumeral(String::from("v")))
        );
    }

    #[test]
    fn parse_walls() {
        assert_eq!(
            "(V-E, VI-E)".parse::<Move>(),
            Ok(Move::Wall(position!("V-E"), position!("VI-E")))
        );
        assert_eq!(
            "(V-E,V-F)".parse::<Move>(),
            Ok(Move::Wall(position!("V-E"), position!("V-F")))
        );
        assert_eq!(
            "(V-E, VI-E)".parse::<Move>().unwrap().wall_orientation(),
            Some(Orientation::Horizontal)
        );
        assert_eq!(
            "(V-E, V-F)".parse::<Move>().unwrap().wall_orientation(),
            Some(Orientation::Vertical)
        );
    }

    #[test]
    fn reject_malformed_walls() {
        assert_eq!(
            "(V-E, VI-E".parse::<Move>(),
            Err(MalformedMove::MissingParentheses)
        );
        assert_eq!(
            "(V-E)".parse::<Move>(),
            Err(MalformedMove::WrongSquareCount(1))
        );
        assert_eq!(
            "(V-E, VI-E, VII-E)".parse::<Move>(),
            Err(MalformedMove::WrongSquareCount(3))
        );
        // Reversed order
        assert_eq!(
            "(VI-E, V-E)".parse::<Move>(),
            Err(MalformedMove::SquaresNotAdjacent {
                first: position!("VI-E"),
                second: position!("V-E")
            })
        );
        // Diagonal
        assert!("(V-E, VI-F)".parse::<Move>().is_err());
        // Horizontal wall along the bottom row
        assert!("(V-I, VI-I)".parse::<Move>().is_err());
        // Vertical wall along the rightmost column
        assert!("(IX-A, IX-B)".parse::<Move>().is_err());
        assert_eq!(
            "(V-E, VI-Q)".parse::<Move>(),
            Err(MalformedMove::UnknownLetter(String::from("Q")))
        );
    }

    #[test]
    fn canonical_wall_form() {
        let mv: Move = "( V-E ,VI-E )".parse().unwrap();
        assert_eq!(mv.to_string(), "(V-E, VI-E)");
    }
}

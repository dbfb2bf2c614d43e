use crate::{to_letter, to_numeral, Board, BOARD_SIZE};

/// Renders the board as text, for terminals and logs.
///
/// Pawns are shown by player number, walls as heavy lines between squares.
pub fn visualize_board(board: &Board) -> String {
    let mut result = String::from("   ");
    for x in 0..BOARD_SIZE {
        result += &format!("{:^4} ", to_numeral(x));
    }
    result.push('\n');

    for (y, row) in (0..BOARD_SIZE).zip(board.rows()) {
        result += &format!(" {} ", to_letter(y));
        let mut below = String::from("   ");
        for square in row {
            let pawn = match square.occupant() {
                Some(number) => char::from(b'0' + number),
                None => '·',
            };
            result += &format!("{:^4}", pawn);
            result.push(if square.wall_right().is_some() {
                '┃'
            } else {
                ' '
            });
            below += if square.wall_bottom().is_some() {
                "━━━━ "
            } else {
                "     "
            };
        }
        result.push('\n');
        if y + 1 < BOARD_SIZE {
            result += below.trim_end();
            result.push('\n');
        }
    }

    for player in board.players() {
        result += &format!(
            "\n{} {} at {}, {} walls left",
            player.number(),
            player.name(),
            player.position(),
            player.walls_remaining()
        );
    }
    result
}

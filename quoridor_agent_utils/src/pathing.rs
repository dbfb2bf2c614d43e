use std::collections::VecDeque;

use quoridor::{is_goal, legal_pawn_moves, open_neighbours, Board, Position, BOARD_SIZE};

const SIDE: usize = BOARD_SIZE as usize;

/// For every square, the number of steps it takes player `number` to get
/// from there to its goal edge.
///
/// Only walls are taken into account, not other pawns. Squares that are
/// walled off from the goal are `None`.
pub fn distances_to_goal(board: &Board, number: u8) -> [[Option<usize>; SIDE]; SIDE] {
    let mut distances = [[None; SIDE]; SIDE];
    let mut queue = VecDeque::new();
    for pos in Position::all().filter(|&pos| is_goal(number, pos)) {
        distances[pos.y() as usize][pos.x() as usize] = Some(0);
        queue.push_back((pos, 0));
    }
    // Walls block both ways, so searching outward from the goal gives the
    // distance towards it.
    while let Some((pos, dist)) = queue.pop_front() {
        for (_, neighbour) in open_neighbours(board, pos) {
            let entry = &mut distances[neighbour.y() as usize][neighbour.x() as usize];
            if entry.is_none() {
                *entry = Some(dist + 1);
                queue.push_back((neighbour, dist + 1));
            }
        }
    }
    distances
}

/// Steps player `number` needs to reach its goal, ignoring other pawns.
pub fn distance_to_goal(board: &Board, number: u8) -> Option<usize> {
    let pos = board.player_location(number)?;
    distances_to_goal(board, number)[pos.y() as usize][pos.x() as usize]
}

/// The legal pawn moves of player `number` that bring it closest to its goal.
pub fn best_pawn_moves(board: &Board, number: u8) -> Vec<Position> {
    let distances = distances_to_goal(board, number);
    let scored: Vec<(usize, Position)> = legal_pawn_moves(board, number)
        .into_iter()
        .filter_map(|pos| distances[pos.y() as usize][pos.x() as usize].map(|d| (d, pos)))
        .collect();
    let Some(best) = scored.iter().map(|&(d, _)| d).min() else {
        return Vec::new();
    };
    scored
        .into_iter()
        .filter(|&(d, _)| d == best)
        .map(|(_, pos)| pos)
        .collect()
}

#[cfg(test)]
mod tests {
    use quoridor::{apply_move, position, Move};

    use super::*;

    #[test]
    fn open_board_distances() {
        let board = Board::new(&["a", "b", "c", "d"]).unwrap();
        assert_eq!(distance_to_goal(&board, 0), Some(8));
        assert_eq!(distance_to_goal(&board, 1), Some(8));
        assert_eq!(distance_to_goal(&board, 2), Some(8));
        assert_eq!(distance_to_goal(&board, 3), Some(8));
        assert_eq!(best_pawn_moves(&board, 0), [position!("V-B")]);
        assert_eq!(best_pawn_moves(&board, 3), [position!("VIII-E")]);
    }

    #[test]
    fn walls_lengthen_the_path() {
        let mut board = Board::new(&["a", "b"]).unwrap();
        let wall: Move = "(IV-A, V-A)".parse().unwrap();
        apply_move(&mut board, 1, wall).unwrap();
        // Must step sideways to VI-A first
        assert_eq!(distance_to_goal(&board, 0), Some(9));
        assert_eq!(best_pawn_moves(&board, 0), [position!("VI-A")]);
    }

    #[test]
    fn enclosed_player_has_no_distance() {
        let mut board = Board::new(&["a", "b"]).unwrap();
        for wall in ["(IV-A, V-A)", "(III-A, III-B)", "(V-A, V-B)"] {
            apply_move(&mut board, 1, wall.parse().unwrap()).unwrap();
        }
        // IV-A and V-A are boxed in, but a can still step between them
        assert_eq!(distance_to_goal(&board, 0), None);
        assert!(best_pawn_moves(&board, 0).is_empty());
    }
}

use std::collections::VecDeque;

use crate::{Position, BOARD_SIZE};

/// A player taking part in a game.
///
/// The player number fixes both the starting square and the goal edge:
///
/// | number | starts at | wins on reaching |
/// |--------|-----------|------------------|
/// | 0      | `V-A`     | row `I`          |
/// | 1      | `V-I`     | row `A`          |
/// | 2      | `I-E`     | column `IX`      |
/// | 3      | `IX-E`    | column `I`       |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    number: u8,
    name: String,
    walls_remaining: u8,
    position: Position,
}

impl Player {
    pub(crate) fn new(number: u8, name: &str, walls: u8, position: Position) -> Self {
        Self {
            number,
            name: String::from(name),
            walls_remaining: walls,
            position,
        }
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn walls_remaining(&self) -> u8 {
        self.walls_remaining
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn has_reached_goal(&self) -> bool {
        is_goal(self.number, self.position)
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub(crate) fn take_wall(&mut self) {
        self.walls_remaining = self.walls_remaining.saturating_sub(1);
    }
}

/// Whether `pos` lies on the goal edge of player `number`.
pub fn is_goal(number: u8, pos: Position) -> bool {
    let last = BOARD_SIZE - 1;
    match number {
        0 => pos.y() == last,
        1 => pos.y() == 0,
        2 => pos.x() == last,
        _ => pos.x() == 0,
    }
}

/// The order in which players take turns.
///
/// The player at the front acts, then moves to the back.
#[derive(Clone, Debug, Default)]
pub struct TurnOrder {
    queue: VecDeque<Player>,
}

impl TurnOrder {
    pub(crate) fn push(&mut self, player: Player) {
        self.queue.push_back(player);
    }

    pub fn current(&self) -> Option<&Player> {
        self.queue.front()
    }

    pub fn rotate(&mut self) {
        self.queue.rotate_left(1.min(self.queue.len()));
    }

    /// Removes a player wherever it is in the queue. The relative order of
    /// the remaining players is unchanged.
    pub fn remove(&mut self, number: u8) -> Option<Player> {
        let idx = self.queue.iter().position(|p| p.number == number)?;
        self.queue.remove(idx)
    }

    pub fn get(&self, number: u8) -> Option<&Player> {
        self.queue.iter().find(|p| p.number == number)
    }

    pub(crate) fn get_mut(&mut self, number: u8) -> Option<&mut Player> {
        self.queue.iter_mut().find(|p| p.number == number)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

use crate::{Position, BOARD_SIZE};

impl quickcheck::Arbitrary for Position {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let x = (u8::arbitrary(g) % BOARD_SIZE as u8) as i8;
        let y = (u8::arbitrary(g) % BOARD_SIZE as u8) as i8;
        Position::new(x, y).expect("Coordinates are reduced to the board size")
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let (x, y) = (self.x(), self.y());
        Box::new(
            (0..x)
                .filter_map(move |x| Position::new(x, y))
                .chain((0..y).filter_map(move |y| Position::new(x, y))),
        )
    }
}

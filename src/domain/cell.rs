/// Direction a tile travels in. Every tile moves exactly one cell per step.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Right,
    Up,
    Left,
    Down,
}

impl Direction {
    /// All four directions in marker order
    pub const ALL: [Direction; 4] = [Direction::Right, Direction::Up, Direction::Left, Direction::Down];

    /// Unit displacement `(dx, dy)` for one step along this direction
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::Up => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Down => (0, -1),
        }
    }

    /// The direction pointing the other way
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Left => Direction::Right,
            Direction::Down => Direction::Up,
        }
    }

    /// Single-character glyph used by the board dump
    pub const fn glyph(self) -> char {
        match self {
            Direction::Right => '>',
            Direction::Up => 'A',
            Direction::Left => '<',
            Direction::Down => 'V',
        }
    }
}

/// Cell code stored at every board position.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    /// Sentinel outside the playable diamond. Never becomes playable.
    Outside,
    Empty,
    Occupied(Direction),
}

impl Cell {
    pub const fn is_outside(self) -> bool {
        matches!(self, Cell::Outside)
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Direction of the tile marker in this cell, if any
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Cell::Occupied(dir) => Some(dir),
            _ => None,
        }
    }

    /// Shape-only view: occupancy is dropped, sentinels are kept
    pub const fn shape(self) -> Self {
        match self {
            Cell::Outside => Cell::Outside,
            _ => Cell::Empty,
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            Cell::Outside => ' ',
            Cell::Empty => 'O',
            Cell::Occupied(dir) => dir.glyph(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
    }

    #[test]
    fn test_opposite_cancels_delta() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            let (ox, oy) = dir.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    #[test]
    fn test_shape_keeps_sentinels() {
        assert_eq!(Cell::Outside.shape(), Cell::Outside);
        assert_eq!(Cell::Empty.shape(), Cell::Empty);
        assert_eq!(Cell::Occupied(Direction::Up).shape(), Cell::Empty);
    }

    #[test]
    fn test_glyphs() {
        let glyphs: String = [
            Cell::Outside,
            Cell::Empty,
            Cell::Occupied(Direction::Right),
            Cell::Occupied(Direction::Up),
            Cell::Occupied(Direction::Left),
            Cell::Occupied(Direction::Down),
        ]
        .iter()
        .map(|c| c.glyph())
        .collect();
        assert_eq!(glyphs, " O>A<V");
    }
}

use crate::maze::Direction;

/// A single maze cell, described by the four walls around it.
///
/// A wall flag is `false` exactly when that side is a passage. Keeping the wall
/// shared by two neighbouring cells consistent is the job of [`Grid::carve`],
/// a `Cell` knows nothing about its neighbours.
///
/// [`Grid::carve`]: crate::maze::Grid::carve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub has_top_wall: bool,
    pub has_bottom_wall: bool,
    pub has_left_wall: bool,
    pub has_right_wall: bool,
}

impl Cell {
    /// A cell with all four walls standing.
    pub const CLOSED: Cell = Cell {
        has_top_wall: true,
        has_bottom_wall: true,
        has_left_wall: true,
        has_right_wall: true,
    };

    /// Checks if the wall on the given side is standing.
    pub fn has_wall(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.has_left_wall,
            Direction::Right => self.has_right_wall,
            Direction::Up => self.has_top_wall,
            Direction::Down => self.has_bottom_wall,
        }
    }

    pub fn remove_wall(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.has_left_wall = false,
            Direction::Right => self.has_right_wall = false,
            Direction::Up => self.has_top_wall = false,
            Direction::Down => self.has_bottom_wall = false,
        }
    }

    /// Number of walls still standing around this cell.
    pub fn wall_count(&self) -> usize {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.has_wall(d))
            .count()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::CLOSED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_closed() {
        let cell = Cell::default();
        assert_eq!(cell, Cell::CLOSED);
        assert_eq!(cell.wall_count(), 4);
    }

    #[test]
    fn test_remove_wall() {
        let mut cell = Cell::CLOSED;
        cell.remove_wall(Direction::Right);
        assert!(!cell.has_wall(Direction::Right));
        assert!(!cell.has_right_wall);
        assert!(cell.has_wall(Direction::Left));
        assert_eq!(cell.wall_count(), 3);
        // Removing twice is harmless
        cell.remove_wall(Direction::Right);
        assert_eq!(cell.wall_count(), 3);
    }
}

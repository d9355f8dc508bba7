use super::cell::Cell;
use super::{Coord, Direction};

/// A fixed-size rectangular array addressed by `(column, row)`.
///
/// The maze keeps its walls in a `Grid<Cell>`. Generators and solvers use
/// throwaway grids of the same shape (`Grid<bool>`, `Grid<Option<Coord>>`, ...)
/// for their per-run bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T = Cell> {
    data: Box<[T]>,
    width: u16,
    height: u16,
}

impl<T: Clone> Grid<T> {
    pub fn new(width: u16, height: u16, value: T) -> Self {
        let data = vec![value; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    /// Creates a grid of the same shape as `other`, filled with `value`.
    pub fn like<U>(other: &Grid<U>, value: T) -> Self {
        Grid::new(other.width, other.height, value)
    }
}

impl<T> Grid<T> {
    /// Number of columns.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        y as usize * self.width as usize + x as usize
    }

    pub fn get(&self, coord: Coord) -> Option<&T> {
        if self.is_in_bounds(coord) {
            Some(&self.data[self.ravel_index(coord.0, coord.1)])
        } else {
            None
        }
    }

    /// The cell one step away from `coord` in `direction`, if it lies inside the grid.
    pub fn step(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        if !self.is_in_bounds(coord) {
            return None;
        }
        let (x, y) = coord;
        // Underflow wraps to u16::MAX and overflow saturates to u16::MAX; neither can
        // be a valid index because the largest possible dimension is u16::MAX itself.
        let next = match direction {
            Direction::Left => (x.wrapping_sub(1), y),
            Direction::Right => (x.saturating_add(1), y),
            Direction::Up => (x, y.wrapping_sub(1)),
            Direction::Down => (x, y.saturating_add(1)),
        };
        self.is_in_bounds(next).then_some(next)
    }

    /// Geometric neighbours of `coord`, regardless of walls, in the fixed
    /// left, right, up, down order.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = (Direction, Coord)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.step(coord, d).map(|next| (d, next)))
    }

    /// Iterates over all cells in row-major order together with their coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, &T)> + '_ {
        let width = self.width.max(1) as usize;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, cell)| (((i % width) as u16, (i / width) as u16), cell))
    }
}

impl Grid<Cell> {
    /// The entrance cell, top-left.
    pub fn entrance(&self) -> Coord {
        (0, 0)
    }

    /// The exit cell, bottom-right.
    pub fn exit(&self) -> Coord {
        (self.width.saturating_sub(1), self.height.saturating_sub(1))
    }

    /// Cells reachable from `coord` in one step without crossing a wall.
    ///
    /// The order is always left, right, up, down. Solvers rely on it for their
    /// tie-breaking, so changing it changes which path DFS reports.
    pub fn neighbors_open(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.neighbors(coord)
            .filter(move |&(d, _)| !self[coord].has_wall(d))
            .map(|(_, next)| next)
    }

    /// Geometric neighbours of `coord` not yet marked in `visited`. Walls are
    /// ignored since this is only meaningful while carving.
    pub fn neighbors_unvisited_for_generation(
        &self,
        coord: Coord,
        visited: &Grid<bool>,
    ) -> Vec<(Direction, Coord)> {
        self.neighbors(coord)
            .filter(|&(_, next)| !visited[next])
            .collect()
    }

    /// Removes the wall between `coord` and its neighbour in `direction` on both
    /// cells, returning the neighbour.
    ///
    /// Returns `None` and leaves the grid untouched if the neighbour would lie
    /// outside the grid; outer walls are only opened by [`Grid::open_entrance_and_exit`].
    pub fn carve(&mut self, coord: Coord, direction: Direction) -> Option<Coord> {
        let next = self.step(coord, direction)?;
        self[coord].remove_wall(direction);
        self[next].remove_wall(direction.opposite());
        Some(next)
    }

    /// Opens the top wall of the entrance and the bottom wall of the exit.
    pub fn open_entrance_and_exit(&mut self) {
        if self.is_empty() {
            return;
        }
        let entrance = self.entrance();
        let exit = self.exit();
        self[entrance].remove_wall(Direction::Up);
        self[exit].remove_wall(Direction::Down);
    }

    /// Counts the open walls shared by two cells. Each passage is counted once.
    pub fn passages(&self) -> usize {
        self.cells()
            .map(|(coord, cell)| {
                [Direction::Right, Direction::Down]
                    .into_iter()
                    .filter(|&d| self.step(coord, d).is_some() && !cell.has_wall(d))
                    .count()
            })
            .sum()
    }

    /// Checks that every wall shared by two cells agrees on both sides.
    pub fn is_symmetric(&self) -> bool {
        self.cells().all(|(coord, cell)| {
            self.neighbors(coord)
                .all(|(d, next)| cell.has_wall(d) == self[next].has_wall(d.opposite()))
        })
    }
}

impl<T> std::ops::Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl<T> std::ops::IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        let idx = self.ravel_index(index.0, index.1);
        &mut self.data[idx]
    }
}

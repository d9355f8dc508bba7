pub mod cell;
pub mod grid;
mod view;

pub use cell::Cell;
pub use grid::Grid;
pub use view::MazeView;

use crate::error::MazeError;
use crate::generators::{generate_maze, resolve_seed};
use crate::render::{NullRenderer, Renderer};
use crate::solvers::{SolveOutcome, Solver, solve_maze};

/// `(column, row)` of a cell, with `(0, 0)` in the top-left corner.
pub type Coord = (u16, u16);

/// A side of a cell, and the direction of the step across it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// The fixed enumeration order used for every neighbour lookup.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// Parameters for [`Maze::regenerate`]. Fields left as `None` keep their
/// current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegenerateOptions {
    pub seed: Option<u64>,
    pub num_rows: Option<u16>,
    pub num_cols: Option<u16>,
    pub cell_size_x: Option<u32>,
    pub cell_size_y: Option<u32>,
}

pub struct Maze {
    grid: Grid,
    /// Top-left pixel position, only used to lay out cells for a renderer.
    origin: (i32, i32),
    num_rows: u16,
    num_cols: u16,
    cell_size_x: u32,
    cell_size_y: u32,
    seed: u64,
    /// Path found by the last solve, empty if there was none.
    path: Vec<Coord>,
    renderer: Box<dyn Renderer>,
}

impl Maze {
    /// Creates and generates a new maze.
    ///
    /// Without a seed, one is drawn from the OS and can be read back with
    /// [`Maze::seed`] to reproduce the layout later.
    ///
    /// # Errors
    /// [`MazeError::InvalidDimensions`] if `num_rows` or `num_cols` is zero.
    pub fn new(
        origin: (i32, i32),
        num_rows: u16,
        num_cols: u16,
        cell_size_x: u32,
        cell_size_y: u32,
        seed: Option<u64>,
    ) -> Result<Self, MazeError> {
        Maze::with_renderer(
            origin,
            num_rows,
            num_cols,
            (cell_size_x, cell_size_y),
            seed,
            Box::new(NullRenderer),
        )
    }

    /// Same as [`Maze::new`], with a renderer that also observes the initial generation.
    pub fn with_renderer(
        origin: (i32, i32),
        num_rows: u16,
        num_cols: u16,
        cell_size: (u32, u32),
        seed: Option<u64>,
        mut renderer: Box<dyn Renderer>,
    ) -> Result<Self, MazeError> {
        check_dimensions(num_rows, num_cols)?;
        let seed = resolve_seed(seed);
        let grid = generate_maze(num_cols, num_rows, seed, renderer.as_mut());
        Ok(Maze {
            grid,
            origin,
            num_rows,
            num_cols,
            cell_size_x: cell_size.0,
            cell_size_y: cell_size.1,
            seed,
            path: Vec::new(),
            renderer,
        })
    }

    /// Throws the current layout away and carves a new one.
    ///
    /// On error the maze is left untouched.
    pub fn regenerate(&mut self, options: RegenerateOptions) -> Result<(), MazeError> {
        let num_rows = options.num_rows.unwrap_or(self.num_rows);
        let num_cols = options.num_cols.unwrap_or(self.num_cols);
        check_dimensions(num_rows, num_cols)?;

        self.num_rows = num_rows;
        self.num_cols = num_cols;
        self.cell_size_x = options.cell_size_x.unwrap_or(self.cell_size_x);
        self.cell_size_y = options.cell_size_y.unwrap_or(self.cell_size_y);
        self.seed = options.seed.unwrap_or(self.seed);
        self.path.clear();
        self.grid = generate_maze(num_cols, num_rows, self.seed, self.renderer.as_mut());
        Ok(())
    }

    /// Searches a path from the entrance to the exit and remembers it.
    /// Returns whether the exit was reached.
    pub fn solve(&mut self, solver: Solver) -> bool {
        let SolveOutcome { path, expanded } =
            solve_maze(&self.grid, solver, self.renderer.as_mut());
        let solved = path.is_some();
        self.path = path.unwrap_or_default();
        tracing::debug!(
            "{} on {}x{} maze (seed {}): solved={} path_len={} expanded={}",
            solver,
            self.num_cols,
            self.num_rows,
            self.seed,
            solved,
            self.path.len(),
            expanded
        );
        solved
    }

    /// Like [`Maze::solve`], picking the solver by its short name (`"dfs"`, `"bfs"` or `"astar"`).
    pub fn solve_by_name(&mut self, name: &str) -> Result<bool, MazeError> {
        let solver = name.parse::<Solver>()?;
        Ok(self.solve(solver))
    }

    /// The path found by the last call to [`Maze::solve`], empty if the maze
    /// has not been solved since it was generated or the exit was unreachable.
    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn num_rows(&self) -> u16 {
        self.num_rows
    }

    pub fn num_cols(&self) -> u16 {
        self.num_cols
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn origin(&self) -> (i32, i32) {
        self.origin
    }

    pub fn cell_size(&self) -> (u32, u32) {
        (self.cell_size_x, self.cell_size_y)
    }

    /// Pixel rectangle `(x1, y1, x2, y2)` covered by a cell, for renderers.
    pub fn cell_bounds(&self, coord: Coord) -> (i64, i64, i64, i64) {
        let x1 = self.origin.0 as i64 + coord.0 as i64 * self.cell_size_x as i64;
        let y1 = self.origin.1 as i64 + coord.1 as i64 * self.cell_size_y as i64;
        (
            x1,
            y1,
            x1 + self.cell_size_x as i64,
            y1 + self.cell_size_y as i64,
        )
    }

    /// A printable view of the maze with the last found path marked.
    pub fn view(&self) -> MazeView<'_> {
        MazeView::new(&self.grid, &self.path)
    }
}

fn check_dimensions(num_rows: u16, num_cols: u16) -> Result<(), MazeError> {
    if num_rows == 0 || num_cols == 0 {
        return Err(MazeError::InvalidDimensions { num_rows, num_cols });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::MazeEvent;

    fn maze(rows: u16, cols: u16, seed: u64) -> Maze {
        Maze::new((50, 50), rows, cols, 30, 30, Some(seed)).expect("valid dimensions")
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            Maze::new((0, 0), 0, 5, 10, 10, None).err(),
            Some(MazeError::InvalidDimensions {
                num_rows: 0,
                num_cols: 5
            })
        );
        assert!(Maze::new((0, 0), 5, 0, 10, 10, Some(1)).is_err());
    }

    #[test]
    fn test_spanning_tree_for_many_seeds() {
        for seed in 0..30 {
            let maze = maze(7, 11, seed);
            assert_eq!(maze.grid().passages(), 7 * 11 - 1);
            assert_eq!(maze.grid().width(), 11);
            assert_eq!(maze.grid().height(), 7);
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = maze(2, 2, 42);
        let b = maze(2, 2, 42);
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_unseeded_maze_records_its_seed() {
        let a = Maze::new((0, 0), 9, 9, 10, 10, None).expect("valid dimensions");
        let b = maze(9, 9, a.seed());
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_single_cell_maze() {
        let mut maze = maze(1, 1, 5);
        for solver in Solver::ALL {
            assert!(maze.solve(solver));
            assert_eq!(maze.path(), &[(0, 0)]);
        }
    }

    #[test]
    fn test_solvers_agree() {
        for seed in 0..10 {
            let mut maze = maze(12, 16, seed);
            assert!(maze.solve(Solver::Dfs));
            let dfs = maze.path().len();
            assert!(maze.solve(Solver::Bfs));
            let bfs = maze.path().len();
            assert!(maze.solve(Solver::AStar));
            let astar = maze.path().len();
            assert_eq!(bfs, astar);
            assert!(bfs <= dfs);
        }
    }

    #[test]
    fn test_solve_twice_same_path() {
        let mut maze = maze(10, 10, 3);
        for solver in Solver::ALL {
            maze.solve(solver);
            let first = maze.path().to_vec();
            maze.solve(solver);
            assert_eq!(maze.path(), first.as_slice());
        }
    }

    #[test]
    fn test_solve_by_name() {
        let mut maze = maze(4, 4, 8);
        assert_eq!(maze.solve_by_name("astar"), Ok(true));
        assert_eq!(
            maze.solve_by_name("greedy"),
            Err(MazeError::UnknownStrategy("greedy".to_string()))
        );
        // A rejected name leaves the previous path alone
        assert!(!maze.path().is_empty());
    }

    #[test]
    fn test_regenerate_keeps_omitted_parameters() {
        let mut maze = maze(5, 6, 1);
        maze.solve(Solver::Bfs);
        maze.regenerate(RegenerateOptions {
            num_rows: Some(8),
            cell_size_x: Some(12),
            ..Default::default()
        })
        .expect("valid dimensions");
        assert_eq!(maze.num_rows(), 8);
        assert_eq!(maze.num_cols(), 6);
        assert_eq!(maze.cell_size(), (12, 30));
        assert_eq!(maze.seed(), 1);
        assert!(maze.path().is_empty());
        assert_eq!(maze.grid(), self::maze(8, 6, 1).grid());
    }

    #[test]
    fn test_regenerate_with_new_seed() {
        let mut maze = maze(20, 20, 1);
        maze.regenerate(RegenerateOptions {
            seed: Some(2),
            ..Default::default()
        })
        .expect("valid dimensions");
        assert_eq!(maze.seed(), 2);
        assert_eq!(maze.grid(), self::maze(20, 20, 2).grid());
    }

    #[test]
    fn test_regenerate_rejects_invalid_dimensions() {
        let mut maze = maze(3, 3, 4);
        let before = maze.grid().clone();
        assert!(
            maze.regenerate(RegenerateOptions {
                num_cols: Some(0),
                ..Default::default()
            })
            .is_err()
        );
        assert_eq!(maze.num_cols(), 3);
        assert_eq!(maze.grid(), &before);
    }

    #[test]
    fn test_renderer_is_only_an_observer() {
        let (tx, rx) = std::sync::mpsc::channel::<MazeEvent>();
        let mut observed =
            Maze::with_renderer((0, 0), 9, 13, (20, 20), Some(77), Box::new(tx))
                .expect("valid dimensions");
        let mut plain = maze(9, 13, 77);
        assert_eq!(observed.grid(), plain.grid());

        for solver in Solver::ALL {
            assert_eq!(observed.solve(solver), plain.solve(solver));
            assert_eq!(observed.path(), plain.path());
        }

        let events = rx.try_iter().collect::<Vec<_>>();
        assert!(
            events
                .iter()
                .any(|e| matches!(e, MazeEvent::CellUpdated { .. }))
        );
        assert!(events.iter().any(|e| matches!(e, MazeEvent::Moved { .. })));
    }

    #[test]
    fn test_cell_bounds() {
        let maze = Maze::new((50, 40), 3, 3, 30, 20, Some(0)).expect("valid dimensions");
        assert_eq!(maze.cell_bounds((0, 0)), (50, 40, 80, 60));
        assert_eq!(maze.cell_bounds((2, 1)), (110, 60, 140, 80));
    }
}

mod astar;
mod bfs;
mod dfs;

pub use astar::solve_astar;
pub use bfs::solve_bfs;
pub use dfs::solve_dfs;

use crate::error::MazeError;
use crate::maze::{Coord, Grid};
use crate::render::Renderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Solver {
    Dfs,
    Bfs,
    AStar,
}

impl Solver {
    pub const ALL: [Solver; 3] = [Solver::Dfs, Solver::Bfs, Solver::AStar];

    /// Short name accepted by [`str::parse`].
    pub fn name(&self) -> &'static str {
        match self {
            Solver::Dfs => "dfs",
            Solver::Bfs => "bfs",
            Solver::AStar => "astar",
        }
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::AStar => write!(f, "A* Search"),
        }
    }
}

impl std::str::FromStr for Solver {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Solver::ALL
            .into_iter()
            .find(|solver| solver.name() == s)
            .ok_or_else(|| MazeError::UnknownStrategy(s.to_string()))
    }
}

/// What a solver found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveOutcome {
    /// Cells from the entrance to the exit, both included. `None` if the exit
    /// cannot be reached.
    pub path: Option<Vec<Coord>>,
    /// Number of cells the solver expanded before stopping.
    pub expanded: usize,
}

impl SolveOutcome {
    pub fn is_solved(&self) -> bool {
        self.path.is_some()
    }
}

/// Searches a path from the entrance `(0, 0)` to the exit in the bottom-right corner.
pub fn solve_maze(grid: &Grid, solver: Solver, renderer: &mut dyn Renderer) -> SolveOutcome {
    match solver {
        Solver::Dfs => solve_dfs(grid, renderer),
        Solver::Bfs => solve_bfs(grid, renderer),
        Solver::AStar => solve_astar(grid, renderer),
    }
}

/// Walks parent links back from `goal` and returns the path in start-to-goal order.
/// The start is the cell without a parent.
fn reconstruct_path(parents: &Grid<Option<Coord>>, goal: Coord) -> Vec<Coord> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(parent) = parents[current] {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}

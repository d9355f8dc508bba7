use std::collections::VecDeque;

use super::{SolveOutcome, reconstruct_path};
use crate::maze::{Coord, Grid};
use crate::render::Renderer;

/// Breadth-first search. Cells are marked visited as soon as they are
/// enqueued, so no cell enters the queue twice and the first time the goal is
/// dequeued its path is a shortest one.
pub fn solve_bfs(grid: &Grid, renderer: &mut dyn Renderer) -> SolveOutcome {
    if grid.is_empty() {
        return SolveOutcome::default();
    }

    let (start, goal) = (grid.entrance(), grid.exit());
    let mut visited = Grid::like(grid, false);
    let mut parents: Grid<Option<Coord>> = Grid::like(grid, None);
    let mut queue = VecDeque::from([start]);
    visited[start] = true;
    let mut expanded = 0;

    while let Some(coord) = queue.pop_front() {
        expanded += 1;
        if let Some(parent) = parents[coord] {
            renderer.on_move(parent, coord, false);
        }

        if coord == goal {
            return SolveOutcome {
                path: Some(reconstruct_path(&parents, goal)),
                expanded,
            };
        }

        for next in grid.neighbors_open(coord) {
            if !visited[next] {
                visited[next] = true;
                parents[next] = Some(coord);
                queue.push_back(next);
            }
        }
    }

    SolveOutcome {
        path: None,
        expanded,
    }
}

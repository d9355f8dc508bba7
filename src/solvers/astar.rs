use std::{cmp::Reverse, collections::BinaryHeap};

use super::{SolveOutcome, reconstruct_path};
use crate::maze::{Coord, Grid};
use crate::render::Renderer;

/// Cost for cells not reached yet.
const UNREACHED: u32 = u32::MAX;

/// Heap entry. Field order matters: the derived ordering compares the
/// estimated total first, then prefers cells closer to the goal, then falls
/// back to coordinates so ties resolve the same way every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Frontier {
    /// Estimated total cost, `traveling_cost + heuristic_cost`
    estimated_cost: u32,
    /// Manhattan distance to the goal
    heuristic_cost: u32,
    coord: Coord,
    /// Cost to reach this cell from the start when the entry was pushed
    traveling_cost: u32,
}

fn manhattan(a: Coord, b: Coord) -> u32 {
    a.0.abs_diff(b.0) as u32 + a.1.abs_diff(b.1) as u32
}

/// A* search with a Manhattan distance heuristic, which never overestimates on
/// a 4-connected grid with unit steps.
///
/// There is no decrease-key: a cell whose cost improves is pushed again and
/// the outdated entries are skipped when they surface.
pub fn solve_astar(grid: &Grid, renderer: &mut dyn Renderer) -> SolveOutcome {
    if grid.is_empty() {
        return SolveOutcome::default();
    }

    let (start, goal) = (grid.entrance(), grid.exit());
    let mut costs = Grid::like(grid, UNREACHED);
    let mut parents: Grid<Option<Coord>> = Grid::like(grid, None);
    let mut closed = Grid::like(grid, false);
    let mut expanded = 0;

    // Using Reverse to turn the max-heap into a min-heap
    let mut open = BinaryHeap::new();
    costs[start] = 0;
    let heuristic_cost = manhattan(start, goal);
    open.push(Reverse(Frontier {
        estimated_cost: heuristic_cost,
        heuristic_cost,
        coord: start,
        traveling_cost: 0,
    }));

    while let Some(Reverse(current)) = open.pop() {
        let coord = current.coord;
        // Stale entry, a cheaper one for the same cell was pushed later
        if closed[coord] || current.traveling_cost != costs[coord] {
            continue;
        }
        closed[coord] = true;
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

        // Uniform cost for each step
        let new_cost = current.traveling_cost + 1;
        for next in grid.neighbors_open(coord) {
            if new_cost < costs[next] {
                costs[next] = new_cost;
                parents[next] = Some(coord);
                let heuristic_cost = manhattan(next, goal);
                open.push(Reverse(Frontier {
                    estimated_cost: new_cost + heuristic_cost,
                    heuristic_cost,
                    coord: next,
                    traveling_cost: new_cost,
                }));
            }
        }
    }

    SolveOutcome {
        path: None,
        expanded,
    }
}

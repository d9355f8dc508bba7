use super::SolveOutcome;
use crate::maze::{Coord, Grid};
use crate::render::Renderer;

/// A cell discovered by DFS, pointing back at the node it was reached from.
#[derive(Debug, Clone, Copy)]
struct Node {
    coord: Coord,
    parent: Option<usize>,
}

/// Depth-first search with an explicit stack.
///
/// Discovered cells live in an arena and the stack holds indices into it, so a
/// path is only materialized once the goal is reached. Cells are marked visited
/// when popped; a cell can be pushed by several parents but is expanded once.
pub fn solve_dfs(grid: &Grid, renderer: &mut dyn Renderer) -> SolveOutcome {
    if grid.is_empty() {
        return SolveOutcome::default();
    }

    let (start, goal) = (grid.entrance(), grid.exit());
    let mut arena = vec![Node {
        coord: start,
        parent: None,
    }];
    let mut stack = vec![0];
    let mut visited = Grid::like(grid, false);
    let mut expanded = 0;

    while let Some(idx) = stack.pop() {
        let Node { coord, parent } = arena[idx];
        if visited[coord] {
            continue;
        }
        visited[coord] = true;
        expanded += 1;

        let from = parent.map(|p| arena[p].coord);
        if let Some(from) = from {
            renderer.on_move(from, coord, false);
        }

        if coord == goal {
            return SolveOutcome {
                path: Some(trace_back(&arena, idx)),
                expanded,
            };
        }

        let unvisited = grid
            .neighbors_open(coord)
            .filter(|&next| !visited[next])
            .collect::<Vec<_>>();

        if unvisited.is_empty() {
            // Dead end, walk back out of this cell
            if let Some(from) = from {
                renderer.on_move(from, coord, true);
            }
            continue;
        }

        // Reversed so the first neighbour in grid order ends up on top of the stack
        for next in unvisited.into_iter().rev() {
            arena.push(Node {
                coord: next,
                parent: Some(idx),
            });
            stack.push(arena.len() - 1);
        }
    }

    SolveOutcome {
        path: None,
        expanded,
    }
}

fn trace_back(arena: &[Node], idx: usize) -> Vec<Coord> {
    let mut path = vec![arena[idx].coord];
    let mut current = arena[idx].parent;
    while let Some(p) = current {
        path.push(arena[p].coord);
        current = arena[p].parent;
    }
    path.reverse();
    path
}

use rand::Rng;

use crate::maze::{Cell, Grid};
use crate::render::Renderer;

/// Carves a perfect maze into `grid` with a randomized depth-first backtracker.
///
/// Expects every wall to be standing. Uses an explicit stack so the size of the
/// grid is not limited by the call stack. Each carve picks uniformly among the
/// unvisited neighbours of the cell on top of the stack, so the layout depends
/// only on `grid`'s dimensions and the state of `rng`.
pub fn recursive_backtrack<R: Rng>(
    grid: &mut Grid<Cell>,
    rng: &mut R,
    renderer: &mut dyn Renderer,
) {
    if grid.is_empty() {
        return;
    }

    let start = grid.entrance();
    let mut visited = Grid::like(grid, false);
    visited[start] = true;

    // The stack only ever holds visited cells
    let mut stack = vec![start];

    while let Some(&cell) = stack.last() {
        let neighbors = grid.neighbors_unvisited_for_generation(cell, &visited);

        if neighbors.is_empty() {
            // Dead end, backtrack
            stack.pop();
            renderer.on_cell_updated(cell, grid[cell]);
            continue;
        }

        let (direction, neighbor) = neighbors[rng.random_range(0..neighbors.len())];
        grid.carve(cell, direction);
        renderer.on_cell_updated(cell, grid[cell]);
        renderer.on_cell_updated(neighbor, grid[neighbor]);

        visited[neighbor] = true;
        stack.push(neighbor);
    }

    grid.open_entrance_and_exit();
    let (entrance, exit) = (grid.entrance(), grid.exit());
    renderer.on_cell_updated(entrance, grid[entrance]);
    if exit != entrance {
        renderer.on_cell_updated(exit, grid[exit]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;
    use crate::maze::Coord;
    use crate::render::{MazeEvent, NullRenderer};

    fn carve(width: u16, height: u16, seed: u64) -> Grid<Cell> {
        let mut grid = Grid::new(width, height, Cell::CLOSED);
        recursive_backtrack(&mut grid, &mut get_rng(seed), &mut NullRenderer);
        grid
    }

    fn reachable_from_entrance(grid: &Grid<Cell>) -> usize {
        let mut seen = Grid::like(grid, false);
        let mut stack: Vec<Coord> = vec![grid.entrance()];
        seen[grid.entrance()] = true;
        let mut count = 0;
        while let Some(coord) = stack.pop() {
            count += 1;
            for next in grid.neighbors_open(coord) {
                if !seen[next] {
                    seen[next] = true;
                    stack.push(next);
                }
            }
        }
        count
    }

    #[test]
    fn test_carves_spanning_tree() {
        for seed in 0..20 {
            for &(w, h) in &[(1, 1), (1, 7), (7, 1), (2, 2), (5, 3), (16, 12)] {
                let grid = carve(w, h, seed);
                let cells = w as usize * h as usize;
                assert_eq!(grid.passages(), cells - 1, "seed {seed}, {w}x{h}");
                assert_eq!(reachable_from_entrance(&grid), cells, "seed {seed}, {w}x{h}");
                assert!(grid.is_symmetric());
            }
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        assert_eq!(carve(12, 9, 42), carve(12, 9, 42));
        assert_eq!(carve(2, 2, 42), carve(2, 2, 42));
    }

    #[test]
    fn test_different_seeds_differ() {
        // Two seeds agreeing on a 20x20 layout is astronomically unlikely
        assert_ne!(carve(20, 20, 1), carve(20, 20, 2));
    }

    #[test]
    fn test_entrance_and_exit_only_outer_openings() {
        let grid = carve(6, 4, 7);
        let (last_x, last_y) = grid.exit();
        for ((x, y), cell) in grid.cells() {
            if y == 0 {
                assert_eq!(cell.has_top_wall, (x, y) != (0, 0));
            }
            if y == last_y {
                assert_eq!(cell.has_bottom_wall, (x, y) != (last_x, last_y));
            }
            if x == 0 {
                assert!(cell.has_left_wall);
            }
            if x == last_x {
                assert!(cell.has_right_wall);
            }
        }
    }

    #[test]
    fn test_single_cell() {
        let grid = carve(1, 1, 3);
        let cell = grid[(0, 0)];
        assert!(!cell.has_top_wall);
        assert!(!cell.has_bottom_wall);
        assert!(cell.has_left_wall);
        assert!(cell.has_right_wall);
        assert_eq!(grid.passages(), 0);
    }

    #[test]
    fn test_renderer_does_not_change_layout() {
        let (tx, rx) = std::sync::mpsc::channel::<MazeEvent>();
        let mut renderer = tx;
        let mut observed = Grid::new(8, 5, Cell::CLOSED);
        recursive_backtrack(&mut observed, &mut get_rng(11), &mut renderer);
        assert_eq!(observed, carve(8, 5, 11));

        let events = rx.try_iter().collect::<Vec<_>>();
        // Two updates per carve, one per backtrack, plus entrance and exit
        assert_eq!(events.len(), 2 * 39 + 40 + 2);
        assert!(
            events
                .iter()
                .all(|e| matches!(e, MazeEvent::CellUpdated { .. }))
        );
    }
}

use rand::{Rng, SeedableRng, rngs::StdRng};

mod recur_backtrack;

pub use recur_backtrack::recursive_backtrack;

use crate::maze::{Cell, Grid};
use crate::render::Renderer;

/// Get a random number generator seeded for reproducibility.
///
/// The generator is rand's `StdRng`, so a seed reproduces the same maze for a
/// given version of rand, not across versions or other implementations.
pub fn get_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Picks the seed to generate with, drawing a fresh one from the OS when none is given.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    match seed {
        Some(s) => s,
        None => StdRng::from_os_rng().random(),
    }
}

/// Builds a fresh `width` x `height` grid and carves a perfect maze into it.
pub fn generate_maze(width: u16, height: u16, seed: u64, renderer: &mut dyn Renderer) -> Grid {
    let mut grid = Grid::new(width, height, Cell::CLOSED);
    let mut rng = get_rng(seed);
    recursive_backtrack(&mut grid, &mut rng, renderer);
    tracing::debug!(
        "Generated {}x{} maze with seed {} ({} passages)",
        width,
        height,
        seed,
        grid.passages()
    );
    grid
}

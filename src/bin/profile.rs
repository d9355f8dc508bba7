use std::time::Instant;

use maze_carver::{Maze, RegenerateOptions, Solver};

fn main() -> Result<(), maze_carver::MazeError> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<u64>().ok()).unwrap_or(1);

    let size = u8::MAX as u16;
    let mut maze = Maze::new((0, 0), size, size, 1, 1, Some(0))?;
    for iteration in 0..num_iters {
        let start = Instant::now();
        maze.regenerate(RegenerateOptions {
            seed: Some(iteration),
            ..Default::default()
        })?;
        println!(
            "[{}] generate {}x{}: {:?}",
            iteration,
            size,
            size,
            start.elapsed()
        );

        for solver in Solver::ALL {
            let start = Instant::now();
            let solved = maze.solve(solver);
            println!(
                "[{}] {}: solved={} path_len={} in {:?}",
                iteration,
                solver.name(),
                solved,
                maze.path().len(),
                start.elapsed()
            );
        }
    }
    Ok(())
}

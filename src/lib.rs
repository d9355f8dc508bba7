//! Perfect maze generation and solving.
//!
//! A [`Maze`] carves its layout with a seeded randomized backtracker as soon as
//! it is built, and can then be solved with depth-first search, breadth-first
//! search or A*. An optional [`Renderer`] observes every carving and solving
//! step without influencing the result.

mod error;
pub mod generators;
pub mod maze;
pub mod render;
pub mod solvers;

pub use error::MazeError;
pub use maze::{Cell, Coord, Direction, Grid, Maze, MazeView, RegenerateOptions};
pub use render::{MazeEvent, NullRenderer, Renderer, TracingRenderer};
pub use solvers::{SolveOutcome, Solver};

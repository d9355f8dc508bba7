use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("Invalid maze dimensions {num_cols}x{num_rows}: rows and columns must be at least 1")]
    InvalidDimensions { num_rows: u16, num_cols: u16 },
    #[error("Unknown solve strategy {0:?}, expected one of \"dfs\", \"bfs\" or \"astar\"")]
    UnknownStrategy(String),
}

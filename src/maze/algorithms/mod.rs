mod backtracking;
mod depth_first_search;

use thiserror::Error;

use crate::core::Dims;

pub use backtracking::{find_path, solve, Solver};
pub use depth_first_search::{break_entrance_and_exit, generate, reset_visited, DepthFirstSearch};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze has no cells")]
    EmptyGrid,
    #[error("position {0:?} is outside of the maze")]
    OutOfBounds(Dims),
}

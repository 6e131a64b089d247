pub mod algorithms;
pub mod cell;
pub mod grid;
#[allow(clippy::module_inception)]
pub mod maze;
pub mod random;

pub use algorithms::MazeError;
pub use cell::{Bounds, Cell, CellWall};
pub use grid::Grid;
pub use maze::{Maze, MazeBuilder};
pub use random::{Random, RandomSource};

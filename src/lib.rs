//! Perfect maze generation and solving on rectangular grids.
//!
//! A [`Maze`](maze::Maze) is carved with randomized depth-first search and
//! solved with depth-first search with backtracking. Progress of both can be
//! observed through a [`Renderer`](renderer::Renderer).

pub mod array;
pub mod core;
pub mod logging;
pub mod maze;
pub mod renderer;
pub mod settings;

use smallvec::SmallVec;

use super::MazeError;
use crate::core::Dims;
use crate::maze::{CellWall, Grid, RandomSource};
use crate::renderer::Renderer;

/// Randomized depth-first carving.
///
/// Works on an explicit stack. Candidates are collected in the
/// [`CellWall::get_in_order`] order and exactly one index is drawn per carved
/// passage, so a seed always maps to the same maze.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirstSearch {
    pub start: Dims,
}

impl DepthFirstSearch {
    pub fn new(start: Dims) -> Self {
        Self { start }
    }

    /// Carves passages into `grid` in place.
    ///
    /// Empty grid is left untouched. Every cell is reported to the renderer once,
    /// when it runs out of unvisited neighbors. Cells stay visited afterwards,
    /// see [`reset_visited`].
    pub fn generate(
        &self,
        grid: &mut Grid,
        rng: &mut RandomSource,
        renderer: &mut dyn Renderer,
    ) -> Result<(), MazeError> {
        if grid.is_empty() {
            log::debug!("nothing to carve, grid is empty");
            return Ok(());
        }

        if !grid.is_in_bounds(self.start) {
            return Err(MazeError::OutOfBounds(self.start));
        }

        log::debug!(
            "carving {}x{} grid from {:?}, seed {}",
            grid.num_columns(),
            grid.num_rows(),
            self.start,
            rng.seed()
        );

        let mut stack = Vec::with_capacity(grid.cell_count());
        grid.set_visited(self.start);
        stack.push(self.start);

        while let Some(&current) = stack.last() {
            let unvisited_neighbors = CellWall::get_in_order()
                .into_iter()
                .filter_map(|wall| grid.neighbor(current, wall).map(|pos| (wall, pos)))
                .filter(|&(_, pos)| !grid[pos].is_visited())
                .collect::<SmallVec<[_; 4]>>();

            if unvisited_neighbors.is_empty() {
                renderer.on_cell_updated(&grid[current]);
                stack.pop();
                continue;
            }

            let (wall, next) = unvisited_neighbors[rng.index(unvisited_neighbors.len())];
            grid.remove_wall(current, wall);
            grid.set_visited(next);
            stack.push(next);
        }

        debug_assert!(grid.is_perfect());

        Ok(())
    }
}

pub fn generate(
    grid: &mut Grid,
    rng: &mut RandomSource,
    start: Dims,
    renderer: &mut dyn Renderer,
) -> Result<(), MazeError> {
    DepthFirstSearch::new(start).generate(grid, rng, renderer)
}

/// Opens the top wall of the first cell and the bottom wall of the last one.
pub fn break_entrance_and_exit(grid: &mut Grid, renderer: &mut dyn Renderer) {
    let Some(exit) = grid.last() else {
        return;
    };

    grid.remove_wall(Dims::ZERO, CellWall::Top);
    renderer.on_cell_updated(&grid[Dims::ZERO]);

    grid.remove_wall(exit, CellWall::Bottom);
    renderer.on_cell_updated(&grid[exit]);
}

pub fn reset_visited(grid: &mut Grid) {
    grid.reset_visited();
}

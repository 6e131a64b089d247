use std::fmt;

use crate::core::Dims;
use crate::maze::algorithms::{self, DepthFirstSearch, MazeError, Solver};
use crate::maze::{Cell, Grid, RandomSource};
use crate::renderer::{NoRenderer, Renderer};

/// Generated maze together with its layout and renderer.
///
/// Construction creates the grid, carves it from the top-left cell, optionally
/// opens the entrance and exit, and clears the visited flags so the maze is
/// ready to be solved.
pub struct Maze {
    grid: Grid,
    origin: (f64, f64),
    cell_size: (f64, f64),
    seed: u64,
    renderer: Box<dyn Renderer>,
}

impl Maze {
    pub fn new(
        origin: (f64, f64),
        num_rows: i32,
        num_columns: i32,
        cell_size: (f64, f64),
        seed: Option<u64>,
        renderer: Option<Box<dyn Renderer>>,
    ) -> Self {
        let mut builder = MazeBuilder::new(num_columns, num_rows)
            .origin(origin)
            .cell_size(cell_size);
        builder.seed = seed;
        builder.renderer = renderer;
        builder.build()
    }

    pub fn builder(num_columns: i32, num_rows: i32) -> MazeBuilder {
        MazeBuilder::new(num_columns, num_rows)
    }

    pub fn num_columns(&self) -> i32 {
        self.grid.num_columns()
    }

    pub fn num_rows(&self) -> i32 {
        self.grid.num_rows()
    }

    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    pub fn cell_at(&self, column: i32, row: i32) -> &Cell {
        self.grid.cell_at(column, row)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Seed the maze was carved with, also when none was given.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn origin(&self) -> (f64, f64) {
        self.origin
    }

    pub fn cell_size(&self) -> (f64, f64) {
        self.cell_size
    }

    /// Solves from the top-left to the bottom-right cell.
    ///
    /// Visited flags are cleared first, so repeated calls give the same answer.
    pub fn solve(&mut self) -> Result<bool, MazeError> {
        self.find_path().map(|path| path.is_some())
    }

    pub fn find_path(&mut self) -> Result<Option<Vec<Dims>>, MazeError> {
        self.grid.reset_visited();
        Solver::new().find_path(&mut self.grid, self.renderer.as_mut())
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Maze")
            .field("grid", &self.grid)
            .field("origin", &self.origin)
            .field("cell_size", &self.cell_size)
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

pub struct MazeBuilder {
    pub num_columns: i32,
    pub num_rows: i32,
    pub origin: (f64, f64),
    pub cell_size: (f64, f64),
    pub seed: Option<u64>,
    pub break_entrance_and_exit: bool,
    pub renderer: Option<Box<dyn Renderer>>,
}

impl MazeBuilder {
    pub fn new(num_columns: i32, num_rows: i32) -> Self {
        Self {
            num_columns,
            num_rows,
            origin: (0.0, 0.0),
            cell_size: (1.0, 1.0),
            seed: None,
            break_entrance_and_exit: true,
            renderer: None,
        }
    }

    pub fn origin(mut self, origin: (f64, f64)) -> Self {
        self.origin = origin;
        self
    }

    pub fn cell_size(mut self, cell_size: (f64, f64)) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn break_entrance_and_exit(mut self, value: bool) -> Self {
        self.break_entrance_and_exit = value;
        self
    }

    pub fn renderer(mut self, renderer: Box<dyn Renderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn build(self) -> Maze {
        let mut renderer = self.renderer.unwrap_or_else(|| Box::new(NoRenderer));
        let mut rng = RandomSource::from_option(self.seed);
        if self.seed.is_none() {
            log::info!("Seed: {}", rng.seed());
        }

        let mut grid = Grid::new(self.num_columns, self.num_rows);
        grid.layout(self.origin, self.cell_size);
        for cell in grid.iter() {
            renderer.on_cell_updated(cell);
        }

        // (0, 0) is inside every non-empty grid and empty grids aren't carved
        let carved = DepthFirstSearch::default().generate(&mut grid, &mut rng, renderer.as_mut());
        debug_assert!(carved.is_ok());

        if self.break_entrance_and_exit {
            algorithms::break_entrance_and_exit(&mut grid, renderer.as_mut());
        }
        algorithms::reset_visited(&mut grid);

        Maze {
            grid,
            origin: self.origin,
            cell_size: self.cell_size,
            seed: rng.seed(),
            renderer,
        }
    }
}

use std::iter;

use super::MazeError;
use crate::core::Dims;
use crate::maze::{CellWall, Grid};
use crate::renderer::Renderer;

struct Frame {
    pos: Dims,
    // index into `CellWall::get_in_order()` of the next direction to try
    next: usize,
}

/// Depth-first search with backtracking.
///
/// `start` defaults to the top-left cell and `goal` to the bottom-right one.
/// Visited flags are set and never cleared during a search, so every cell is
/// entered at most once. Walls are never touched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    pub start: Option<Dims>,
    pub goal: Option<Dims>,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(mut self, start: Dims) -> Self {
        self.start = Some(start);
        self
    }

    pub fn goal(mut self, goal: Dims) -> Self {
        self.goal = Some(goal);
        self
    }

    pub fn solve(&self, grid: &mut Grid, renderer: &mut dyn Renderer) -> Result<bool, MazeError> {
        self.find_path(grid, renderer).map(|path| path.is_some())
    }

    /// Returns the path from start to goal, both included, or `None` if the goal
    /// is unreachable.
    pub fn find_path(
        &self,
        grid: &mut Grid,
        renderer: &mut dyn Renderer,
    ) -> Result<Option<Vec<Dims>>, MazeError> {
        let last = grid.last().ok_or(MazeError::EmptyGrid)?;
        let start = self.start.unwrap_or(Dims::ZERO);
        let goal = self.goal.unwrap_or(last);

        for pos in [start, goal] {
            if !grid.is_in_bounds(pos) {
                return Err(MazeError::OutOfBounds(pos));
            }
        }

        log::debug!("solving from {:?} to {:?}", start, goal);

        renderer.animate();
        grid.set_visited(start);
        if start == goal {
            return Ok(Some(vec![start]));
        }

        let directions = CellWall::get_in_order();
        let mut stack = vec![Frame {
            pos: start,
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            if frame.next == directions.len() {
                stack.pop();
                if let Some(parent) = stack.last() {
                    let dead_end = parent.pos + directions[parent.next - 1].to_coord();
                    renderer.on_move_undone(&grid[parent.pos], &grid[dead_end]);
                }
                continue;
            }

            let wall = directions[frame.next];
            frame.next += 1;
            let from = frame.pos;

            if !grid.has_passage(from, wall) {
                continue;
            }

            let to = from + wall.to_coord();
            if grid[to].is_visited() {
                continue;
            }

            renderer.on_move_attempt(&grid[from], &grid[to]);
            renderer.animate();
            grid.set_visited(to);

            if to == goal {
                let path: Vec<_> = stack.iter().map(|f| f.pos).chain(iter::once(to)).collect();
                log::debug!("found path of {} cells", path.len());
                return Ok(Some(path));
            }

            stack.push(Frame { pos: to, next: 0 });
        }

        log::debug!("goal {:?} is unreachable", goal);
        Ok(None)
    }
}

/// Solves from the top-left to the bottom-right cell.
pub fn solve(grid: &mut Grid, renderer: &mut dyn Renderer) -> Result<bool, MazeError> {
    Solver::new().solve(grid, renderer)
}

pub fn find_path(
    grid: &mut Grid,
    renderer: &mut dyn Renderer,
) -> Result<Option<Vec<Dims>>, MazeError> {
    Solver::new().find_path(grid, renderer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::algorithms::{generate, reset_visited};
    use crate::maze::RandomSource;
    use crate::renderer::{LogRenderer, NoRenderer};

    fn carved(columns: i32, rows: i32, seed: u64) -> Grid {
        let mut grid = Grid::new(columns, rows);
        let mut rng = RandomSource::with_seed(seed);
        generate(&mut grid, &mut rng, Dims::ZERO, &mut NoRenderer).unwrap();
        reset_visited(&mut grid);
        grid
    }

    fn is_walkable(grid: &Grid, path: &[Dims]) -> bool {
        path.windows(2).all(|pair| {
            Grid::which_wall_between(pair[0], pair[1])
                .is_some_and(|wall| grid.has_passage(pair[0], wall))
        })
    }

    #[test]
    fn solves_generated_mazes() {
        for (w, h) in [(1, 1), (2, 2), (5, 5), (12, 10), (1, 20), (20, 1)] {
            for seed in 0..5 {
                let mut grid = carved(w, h, seed);
                let path = find_path(&mut grid, &mut NoRenderer).unwrap().unwrap();

                assert_eq!(path.first(), Some(&Dims::ZERO));
                assert_eq!(path.last(), Some(&Dims(w - 1, h - 1)));
                assert!(is_walkable(&grid, &path));
                assert!(path.iter().all(|&p| grid[p].is_visited()));
            }
        }
    }

    #[test]
    fn two_by_two_always_solvable() {
        for seed in 0..20 {
            let mut grid = carved(2, 2, seed);
            assert_eq!(solve(&mut grid, &mut NoRenderer), Ok(true));
        }
    }

    #[test]
    fn visited_cells_are_connected() {
        let mut grid = carved(9, 7, 21);
        assert_eq!(solve(&mut grid, &mut NoRenderer), Ok(true));

        // Every visited cell except the start was entered from a visited neighbor
        // through an open passage.
        for cell in grid.iter().filter(|c| c.is_visited()) {
            let pos = cell.get_coord();
            if pos == Dims::ZERO {
                continue;
            }
            assert!(CellWall::get_in_order().into_iter().any(|wall| {
                grid.has_passage(pos, wall) && grid[pos + wall.to_coord()].is_visited()
            }));
        }
        assert!(grid.cell_at(8, 6).is_visited());
    }

    #[test]
    fn walls_untouched() {
        let mut grid = carved(8, 8, 4);
        let before = grid.clone();
        solve(&mut grid, &mut NoRenderer).unwrap();
        for (a, b) in before.iter().zip(grid.iter()) {
            for wall in CellWall::get_in_order() {
                assert_eq!(a.get_wall(wall), b.get_wall(wall));
            }
        }
    }

    #[test]
    fn unsolvable_keeps_visited() {
        // 3x1 with only the first passage open
        let mut grid = Grid::new(3, 1);
        grid.remove_wall(Dims(0, 0), CellWall::Right);

        let mut renderer = LogRenderer::new();
        assert_eq!(solve(&mut grid, &mut renderer), Ok(false));
        assert!(grid.cell_at(0, 0).is_visited());
        assert!(grid.cell_at(1, 0).is_visited());
        assert!(!grid.cell_at(2, 0).is_visited());

        let counts = renderer.counts();
        assert_eq!(counts.move_attempts, 1);
        assert_eq!(counts.move_undos, 1);
        assert_eq!(counts.frames, 2);
    }

    #[test]
    fn attempts_and_undos_balance() {
        let mut grid = carved(15, 15, 8);
        let mut renderer = LogRenderer::new();
        let path = find_path(&mut grid, &mut renderer).unwrap().unwrap();

        let counts = renderer.counts();
        // every move which isn't on the final path was undone
        assert_eq!(counts.move_attempts - counts.move_undos, path.len() - 1);
        assert_eq!(counts.move_attempts + 1, grid.visited_count());
        assert_eq!(counts.frames, grid.visited_count());
    }

    #[test]
    fn tries_west_east_north_south() {
        // Start in the middle of a plus shape, goal at the bottom arm.
        let mut grid = Grid::new(3, 3);
        let center = Dims(1, 1);
        for wall in CellWall::get_in_order() {
            grid.remove_wall(center, wall);
        }

        #[derive(Default)]
        struct Moves(Vec<Dims>);
        impl Renderer for Moves {
            fn on_move_attempt(&mut self, _from: &crate::maze::Cell, to: &crate::maze::Cell) {
                self.0.push(to.get_coord());
            }
        }

        let mut moves = Moves::default();
        let solved = Solver::new()
            .start(center)
            .goal(Dims(1, 2))
            .solve(&mut grid, &mut moves);
        assert_eq!(solved, Ok(true));
        assert_eq!(moves.0, vec![Dims(0, 1), Dims(2, 1), Dims(1, 0), Dims(1, 2)]);
    }

    #[test]
    fn empty_grid_is_an_error() {
        let mut grid = Grid::new(0, 0);
        assert_eq!(solve(&mut grid, &mut NoRenderer), Err(MazeError::EmptyGrid));
    }

    #[test]
    fn goal_out_of_bounds() {
        let mut grid = carved(3, 3, 0);
        let result = Solver::new().goal(Dims(3, 3)).solve(&mut grid, &mut NoRenderer);
        assert_eq!(result, Err(MazeError::OutOfBounds(Dims(3, 3))));
    }

    #[test]
    fn start_is_goal() {
        let mut grid = Grid::new(1, 1);
        assert_eq!(find_path(&mut grid, &mut NoRenderer), Ok(Some(vec![Dims::ZERO])));
    }
}

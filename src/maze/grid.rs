use std::{collections::VecDeque, ops};

use smallvec::SmallVec;

use crate::array::Array2D;
use crate::core::*;
use crate::maze::cell::{Bounds, Cell, CellWall};

/// Rectangular collection of cells, addressed by `Dims(column, row)`.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Array2D<Cell>,
}

impl Grid {
    /// Creates grid with every wall present and every cell unvisited.
    ///
    /// If any of the dimensions isn't positive, the grid is empty (`0 × 0`).
    pub fn new(num_columns: i32, num_rows: i32) -> Self {
        let (w, h) = if Dims(num_columns, num_rows).all_positive() {
            (num_columns as usize, num_rows as usize)
        } else {
            (0, 0)
        };

        Grid {
            cells: Array2D::from_fn(w, h, Cell::new),
        }
    }

    pub fn num_columns(&self) -> i32 {
        self.cells.size().0
    }

    pub fn num_rows(&self) -> i32 {
        self.cells.size().1
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Bottom-right cell, `None` for empty grid.
    pub fn last(&self) -> Option<Dims> {
        (!self.is_empty()).then(|| self.size() - Dims::ONE)
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        let Dims(w, h) = self.size();
        0 <= pos.0 && pos.0 < w && 0 <= pos.1 && pos.1 < h
    }

    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    pub fn cell_at(&self, column: i32, row: i32) -> &Cell {
        &self[Dims(column, row)]
    }

    pub fn get(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub fn get_mut(&mut self, pos: Dims) -> Option<&mut Cell> {
        self.cells.get_mut(pos)
    }

    pub fn column(&self, column: usize) -> Option<&[Cell]> {
        self.cells.column(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &[Cell]> {
        (0..self.num_columns() as usize).filter_map(move |c| self.cells.column(c))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn neighbor(&self, pos: Dims, wall: CellWall) -> Option<Dims> {
        let next = pos + wall.to_coord();
        (self.is_in_bounds(pos) && self.is_in_bounds(next)).then_some(next)
    }

    /// In-bounds neighbors in west, east, north, south order.
    pub fn get_neighbors_pos(&self, pos: Dims) -> SmallVec<[Dims; 4]> {
        CellWall::get_in_order()
            .into_iter()
            .filter_map(|wall| self.neighbor(pos, wall))
            .collect()
    }

    /// Returns the wall of `cell` facing `cell2`, if they are adjacent.
    pub fn which_wall_between(cell: Dims, cell2: Dims) -> Option<CellWall> {
        match (cell.0 - cell2.0, cell.1 - cell2.1) {
            (-1, 0) => Some(CellWall::Right),
            (1, 0) => Some(CellWall::Left),
            (0, -1) => Some(CellWall::Bottom),
            (0, 1) => Some(CellWall::Top),
            _ => None,
        }
    }

    /// Removes the wall on both sides. Boundary walls only touch `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds.
    pub fn remove_wall(&mut self, cell: Dims, wall: CellWall) {
        self[cell].remove_wall(wall);
        if let Some(next) = self.neighbor(cell, wall) {
            self[next].remove_wall(wall.reverse_wall());
        }
    }

    /// Whether one can step from `pos` through `wall` into another cell.
    pub fn has_passage(&self, pos: Dims, wall: CellWall) -> bool {
        self.neighbor(pos, wall).is_some() && !self[pos].get_wall(wall)
    }

    pub fn reset_visited(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.visited = false;
        }
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|c| c.visited).count()
    }

    /// Assigns screen bounds to every cell, column `c` starts at `origin.0 + c * cell_size.0`.
    pub fn layout(&mut self, origin: (f64, f64), cell_size: (f64, f64)) {
        for cell in self.cells.iter_mut() {
            let Dims(c, r) = cell.get_coord();
            let x1 = origin.0 + c as f64 * cell_size.0;
            let y1 = origin.1 + r as f64 * cell_size.1;
            cell.bounds = Some(Bounds {
                x1,
                y1,
                x2: x1 + cell_size.0,
                y2: y1 + cell_size.1,
            });
        }
    }

    pub fn walls_mirrored(&self) -> bool {
        self.cells.iter_pos().all(|pos| {
            [CellWall::Right, CellWall::Bottom]
                .into_iter()
                .all(|wall| match self.neighbor(pos, wall) {
                    Some(next) => {
                        self[pos].get_wall(wall) == self[next].get_wall(wall.reverse_wall())
                    }
                    None => true,
                })
        })
    }

    /// Number of open passages between adjacent cells.
    pub fn passage_count(&self) -> usize {
        self.cells
            .iter_pos()
            .map(|pos| {
                [CellWall::Right, CellWall::Bottom]
                    .into_iter()
                    .filter(|&wall| self.has_passage(pos, wall))
                    .count()
            })
            .sum()
    }

    /// Breadth-first walk over open passages from `(0, 0)`, returns number of reached cells.
    pub fn reachable_count(&self) -> usize {
        if self.is_empty() {
            return 0;
        }

        let mut seen = Array2D::new(false, self.num_columns() as usize, self.num_rows() as usize);
        let mut queue = VecDeque::from([Dims::ZERO]);
        seen[Dims::ZERO] = true;
        let mut count = 0;

        while let Some(pos) = queue.pop_front() {
            count += 1;
            for wall in CellWall::get_in_order() {
                if !self.has_passage(pos, wall) {
                    continue;
                }
                let next = pos + wall.to_coord();
                if !seen[next] {
                    seen[next] = true;
                    queue.push_back(next);
                }
            }
        }

        count
    }

    pub fn is_connected(&self) -> bool {
        self.reachable_count() == self.cell_count()
    }

    /// Connected and acyclic, i.e. a spanning tree over the cells.
    pub fn is_perfect(&self) -> bool {
        if self.is_empty() {
            return true;
        }

        self.walls_mirrored()
            && self.is_connected()
            && self.passage_count() == self.cell_count() - 1
    }

    pub(crate) fn set_visited(&mut self, pos: Dims) {
        self[pos].visited = true;
    }
}

impl ops::Index<Dims> for Grid {
    type Output = Cell;

    fn index(&self, index: Dims) -> &Self::Output {
        &self.cells[index]
    }
}

impl ops::IndexMut<Dims> for Grid {
    fn index_mut(&mut self, index: Dims) -> &mut Self::Output {
        &mut self.cells[index]
    }
}

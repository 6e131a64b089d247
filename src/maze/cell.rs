use crate::core::*;
use crate::maze::cell::CellWall::*;

/// Screen-space rectangle of a cell. Only renderers look at it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Bounds {
    pub fn center(&self) -> (f64, f64) {
        ((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }
}

#[derive(Debug, Clone)]
pub struct Cell {
    left: bool,
    top: bool,
    right: bool,
    bottom: bool,
    pub(crate) visited: bool,
    pub(crate) bounds: Option<Bounds>,
    coord: Dims,
}

impl Cell {
    pub fn new(pos: Dims) -> Cell {
        Cell {
            left: true,
            top: true,
            right: true,
            bottom: true,
            visited: false,
            bounds: None,
            coord: pos,
        }
    }

    pub(crate) fn remove_wall(&mut self, wall: CellWall) {
        match wall {
            Left => self.left = false,
            Top => self.top = false,
            Right => self.right = false,
            Bottom => self.bottom = false,
        }
    }

    pub fn get_wall(&self, wall: CellWall) -> bool {
        match wall {
            Left => self.left,
            Top => self.top,
            Right => self.right,
            Bottom => self.bottom,
        }
    }

    pub fn has_left_wall(&self) -> bool {
        self.left
    }

    pub fn has_top_wall(&self) -> bool {
        self.top
    }

    pub fn has_right_wall(&self) -> bool {
        self.right
    }

    pub fn has_bottom_wall(&self) -> bool {
        self.bottom
    }

    pub fn wall_count(&self) -> usize {
        CellWall::get_in_order()
            .into_iter()
            .filter(|&w| self.get_wall(w))
            .count()
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn get_coord(&self) -> Dims {
        self.coord
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Cell {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellWall {
    Left,
    Right,
    Top,
    Bottom,
}

impl CellWall {
    /// West, east, north, south. Both algorithms depend on this exact order.
    pub const fn get_in_order() -> [CellWall; 4] {
        [Left, Right, Top, Bottom]
    }

    pub fn to_coord(&self) -> Dims {
        match self {
            Left => Dims(-1, 0),
            Right => Dims(1, 0),
            Top => Dims(0, -1),
            Bottom => Dims(0, 1),
        }
    }

    pub fn reverse_wall(&self) -> CellWall {
        match self {
            Left => Right,
            Right => Left,
            Top => Bottom,
            Bottom => Top,
        }
    }
}

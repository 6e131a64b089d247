use std::fmt::Write as _;

use crate::array::Array2D;
use crate::core::Dims;
use crate::maze::Grid;

const PATH: char = 'o';
const EXPLORED: char = '.';

/// Draws the grid as text, 3 characters per cell.
///
/// Cells on `path` are marked with `o`, other visited cells with `.`.
pub fn draw(grid: &Grid, path: Option<&[Dims]>) -> String {
    if grid.is_empty() {
        return String::new();
    }

    let Dims(w, h) = grid.size();
    let mut on_path = Array2D::new(false, w as usize, h as usize);
    for &pos in path.unwrap_or_default() {
        if let Some(mark) = on_path.get_mut(pos) {
            *mark = true;
        }
    }

    let mut out = String::with_capacity(((w * 4 + 2) * (h * 2 + 1)) as usize);
    for row in 0..h {
        for col in 0..w {
            let cell = grid.cell_at(col, row);
            out.push('+');
            out.push_str(if cell.has_top_wall() { "---" } else { "   " });
        }
        out.push_str("+\n");

        for col in 0..w {
            let cell = grid.cell_at(col, row);
            let mark = if on_path[cell.get_coord()] {
                PATH
            } else if cell.is_visited() {
                EXPLORED
            } else {
                ' '
            };
            out.push(if cell.has_left_wall() { '|' } else { ' ' });
            let _ = write!(out, " {mark} ");
        }
        out.push(if grid.cell_at(w - 1, row).has_right_wall() { '|' } else { ' ' });
        out.push('\n');
    }

    for col in 0..w {
        out.push('+');
        out.push_str(if grid.cell_at(col, h - 1).has_bottom_wall() { "---" } else { "   " });
    }
    out.push_str("+\n");

    out
}

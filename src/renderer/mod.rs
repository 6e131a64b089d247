pub mod ascii;

use crate::maze::Cell;

/// Observer of the maze algorithms.
///
/// Every method has an empty default, the algorithms never depend on what
/// a renderer does. Calls are synchronous and happen right after the
/// corresponding mutation.
pub trait Renderer {
    /// Cell's walls reached their final state (or were just created).
    fn on_cell_updated(&mut self, _cell: &Cell) {}

    /// Solver steps from `from` into `to`.
    fn on_move_attempt(&mut self, _from: &Cell, _to: &Cell) {}

    /// Solver gave up on the branch through `to` and is back at `from`.
    fn on_move_undone(&mut self, _from: &Cell, _to: &Cell) {}

    /// Frame hook, called before the solver visits a cell.
    fn animate(&mut self) {}
}

/// Headless renderer.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRenderer;

impl Renderer for NoRenderer {}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EventCounts {
    pub cell_updates: usize,
    pub move_attempts: usize,
    pub move_undos: usize,
    pub frames: usize,
}

/// Traces every event through `log` and counts them.
#[derive(Debug, Default)]
pub struct LogRenderer {
    counts: EventCounts,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counts(&self) -> EventCounts {
        self.counts
    }
}

impl Renderer for LogRenderer {
    fn on_cell_updated(&mut self, cell: &Cell) {
        self.counts.cell_updates += 1;
        log::trace!(
            "cell {:?}: left={} top={} right={} bottom={}",
            cell.get_coord(),
            cell.has_left_wall(),
            cell.has_top_wall(),
            cell.has_right_wall(),
            cell.has_bottom_wall()
        );
    }

    fn on_move_attempt(&mut self, from: &Cell, to: &Cell) {
        self.counts.move_attempts += 1;
        log::trace!("move {:?} -> {:?}", from.get_coord(), to.get_coord());
    }

    fn on_move_undone(&mut self, from: &Cell, to: &Cell) {
        self.counts.move_undos += 1;
        log::trace!("undo {:?} <- {:?}", from.get_coord(), to.get_coord());
    }

    fn animate(&mut self) {
        self.counts.frames += 1;
    }
}

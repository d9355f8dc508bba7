use std::sync::mpsc::Sender;

use crate::maze::{Cell, Coord};

/// Observer notified after every discrete step of generation or solving.
///
/// Implementations only watch: nothing they do can change the carved layout
/// or the path a solver returns.
pub trait Renderer {
    /// Called when the walls of `coord` changed or the cell was revisited.
    fn on_cell_updated(&mut self, coord: Coord, cell: Cell);

    /// Called when a solver steps from `from` to `to`. `is_backtrack` is set when
    /// DFS abandons `to` as a dead end.
    fn on_move(&mut self, from: Coord, to: Coord, is_backtrack: bool);
}

/// Renderer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn on_cell_updated(&mut self, _coord: Coord, _cell: Cell) {}

    fn on_move(&mut self, _from: Coord, _to: Coord, _is_backtrack: bool) {}
}

/// A single observed step, as sent over a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeEvent {
    CellUpdated { coord: Coord, cell: Cell },
    Moved {
        from: Coord,
        to: Coord,
        is_backtrack: bool,
    },
}

/// Forwards every event to a receiver, typically a render thread.
impl Renderer for Sender<MazeEvent> {
    fn on_cell_updated(&mut self, coord: Coord, cell: Cell) {
        // Error when the receiving end is gone, ignore
        self.send(MazeEvent::CellUpdated { coord, cell }).ok();
    }

    fn on_move(&mut self, from: Coord, to: Coord, is_backtrack: bool) {
        self.send(MazeEvent::Moved {
            from,
            to,
            is_backtrack,
        })
        .ok();
    }
}

/// Logs every event at TRACE level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRenderer;

impl Renderer for TracingRenderer {
    fn on_cell_updated(&mut self, coord: Coord, cell: Cell) {
        tracing::trace!(
            "[cell] {:?} walls top={} bottom={} left={} right={}",
            coord,
            cell.has_top_wall,
            cell.has_bottom_wall,
            cell.has_left_wall,
            cell.has_right_wall
        );
    }

    fn on_move(&mut self, from: Coord, to: Coord, is_backtrack: bool) {
        if is_backtrack {
            tracing::trace!("[move] backtrack {:?} -> {:?}", from, to);
        } else {
            tracing::trace!("[move] {:?} -> {:?}", from, to);
        }
    }
}

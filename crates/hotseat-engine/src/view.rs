//! Read-only snapshot handed to renderers.

use crate::MoveRecord;
use hotseat_core::{Cell, Color, PieceKind};
use serde::Serialize;

/// A live piece as a renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PieceView {
    /// Roster slot, stable for the whole game.
    pub index: usize,
    pub kind: PieceKind,
    pub color: Color,
    pub cell: Cell,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub side_to_move: Color,
    /// Roster slot of the selected piece.
    pub selected: Option<usize>,
    /// Live pieces in roster order.
    pub pieces: Vec<PieceView>,
    /// Cells to draw destination markers on.
    pub destinations: Vec<Cell>,
    /// The most recent move.
    pub last_move: Option<MoveRecord>,
    /// Set once a king has been captured.
    pub winner: Option<Color>,
}

impl BoardView {
    /// Returns the piece standing on `cell`.
    pub fn piece_at(&self, cell: Cell) -> Option<&PieceView> {
        self.pieces.iter().find(|p| p.cell == cell)
    }

    /// Returns true if a destination marker belongs on `cell`.
    pub fn is_destination(&self, cell: Cell) -> bool {
        self.destinations.contains(&cell)
    }

    /// Returns true if `cell` holds the selected piece.
    pub fn is_selected(&self, cell: Cell) -> bool {
        self.selected
            .is_some_and(|index| self.piece_at(cell).is_some_and(|p| p.index == index))
    }
}

//! The fixed 32-slot piece roster.
//!
//! Every piece keeps the slot it was given at setup for the whole game.
//! Slots `0..16` belong to White and `16..32` to Black, each side laid out
//! as eight pawns, two rooks, two knights, two bishops, the queen and the
//! king. A captured piece stays in its slot as an off-board placeholder.

use hotseat_core::{Cell, Color, PieceKind};
use serde::Serialize;
use std::fmt::Write as _;
use thiserror::Error;

/// Number of slots in a roster.
pub const ROSTER_SIZE: usize = 32;

/// Slot of White's king.
pub const WHITE_KING: usize = 15;

/// Slot of Black's king.
pub const BLACK_KING: usize = 31;

/// Kinds of the sixteen slots of one side, in slot order.
const SIDE_KINDS: [PieceKind; 16] = [
    PieceKind::Pawn,
    PieceKind::Pawn,
    PieceKind::Pawn,
    PieceKind::Pawn,
    PieceKind::Pawn,
    PieceKind::Pawn,
    PieceKind::Pawn,
    PieceKind::Pawn,
    PieceKind::Rook,
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
];

/// Starting files of the sixteen slots of one side, in slot order.
const SIDE_FILES: [i8; 16] = [0, 1, 2, 3, 4, 5, 6, 7, 0, 7, 1, 6, 2, 5, 3, 4];

/// Errors that can occur when building a custom roster.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("roster slot {0} out of range (expected 0-31)")]
    SlotOutOfRange(usize),

    #[error("roster slot {0} listed more than once")]
    DuplicateSlot(usize),

    #[error("roster slot {0} placed off the board")]
    OffBoard(usize),

    #[error("cell {cell} given to both slot {first} and slot {second}")]
    CellTaken {
        cell: Cell,
        first: usize,
        second: usize,
    },
}

/// One roster slot: a piece and where it stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub cell: Cell,
    pub alive: bool,
}

impl Piece {
    /// Creates a live piece on the given cell.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color, cell: Cell) -> Self {
        Piece {
            kind,
            color,
            cell,
            alive: true,
        }
    }

    /// Creates the inert placeholder left behind by a captured piece.
    #[inline]
    pub const fn placeholder(kind: PieceKind, color: Color) -> Self {
        Piece {
            kind,
            color,
            cell: Cell::OFF_BOARD,
            alive: false,
        }
    }

    /// Returns true if the piece is alive and standing on the board.
    #[inline]
    pub const fn is_on_board(&self) -> bool {
        self.alive && self.cell.is_on_board()
    }
}

/// Returns the kind, color and starting cell the standard layout gives a slot.
fn standard_slot(index: usize) -> Option<(PieceKind, Color, Cell)> {
    let color = Color::owner_of_slot(index)?;
    let local = index - color.roster_range().start;
    let kind = SIDE_KINDS[local];
    let rank = if kind == PieceKind::Pawn {
        color.pawn_start_rank()
    } else {
        color.back_rank()
    };
    let cell = Cell::new(SIDE_FILES[local], rank)?;
    Some((kind, color, cell))
}

/// The ordered collection of all 32 pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    slots: [Piece; ROSTER_SIZE],
}

impl Default for Roster {
    fn default() -> Self {
        Self::standard()
    }
}

impl Roster {
    /// Creates the roster for the standard starting position.
    pub fn standard() -> Self {
        let mut slots = [Piece::placeholder(PieceKind::Pawn, Color::White); ROSTER_SIZE];
        for (index, slot) in slots.iter_mut().enumerate() {
            if let Some((kind, color, cell)) = standard_slot(index) {
                *slot = Piece::new(kind, color, cell);
            }
        }
        Roster { slots }
    }

    /// Creates a roster holding only the listed slots, each on its given cell.
    ///
    /// Listed slots keep the kind and color the standard layout assigns to
    /// their index; every other slot is a placeholder. Each slot may be
    /// listed at most once.
    pub fn sparse(placements: &[(usize, Cell)]) -> Result<Self, RosterError> {
        let mut roster = Self::standard();
        for index in 0..ROSTER_SIZE {
            roster.capture(index);
        }

        for &(index, cell) in placements {
            let (kind, color, _) =
                standard_slot(index).ok_or(RosterError::SlotOutOfRange(index))?;
            if roster.slots[index].alive {
                return Err(RosterError::DuplicateSlot(index));
            }
            if !cell.is_on_board() {
                return Err(RosterError::OffBoard(index));
            }
            if let Some(first) = roster.index_at(cell) {
                return Err(RosterError::CellTaken {
                    cell,
                    first,
                    second: index,
                });
            }
            roster.slots[index] = Piece::new(kind, color, cell);
        }

        Ok(roster)
    }

    /// Returns the piece in the given slot.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Piece> {
        self.slots.get(index)
    }

    /// Iterates over the pieces still on the board with their slot indices.
    pub fn live(&self) -> impl Iterator<Item = (usize, &Piece)> {
        self.slots.iter().enumerate().filter(|(_, p)| p.is_on_board())
    }

    /// Returns the slot of the piece standing on `cell`.
    ///
    /// Placeholders are never returned, so off-board cells always yield `None`.
    pub fn index_at(&self, cell: Cell) -> Option<usize> {
        if !cell.is_on_board() {
            return None;
        }
        self.slots
            .iter()
            .position(|p| p.is_on_board() && p.cell == cell)
    }

    /// Returns the slot of the piece standing on `cell` if it belongs to `color`.
    pub fn index_at_with_color(&self, cell: Cell, color: Color) -> Option<usize> {
        self.index_at(cell)
            .filter(|&index| self.slots[index].color == color)
    }

    /// Returns true if any live piece stands on `cell`.
    #[inline]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.index_at(cell).is_some()
    }

    /// Moves the piece in `index` to `cell`.
    pub(crate) fn relocate(&mut self, index: usize, cell: Cell) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.cell = cell;
        }
    }

    /// Replaces the piece in `index` with its off-board placeholder.
    pub(crate) fn capture(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Piece::placeholder(slot.kind, slot.color);
        }
    }

    /// Returns the piece placement in FEN style, top row first.
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(64);
        for rank in 0..8 {
            let mut empty = 0;
            for file in 0..8 {
                let piece = Cell::new(file, rank)
                    .and_then(|cell| self.index_at(cell))
                    .map(|index| &self.slots[index]);
                match piece {
                    Some(p) => {
                        if empty > 0 {
                            let _ = write!(out, "{}", empty);
                            empty = 0;
                        }
                        out.push(p.kind.to_fen_char(p.color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                let _ = write!(out, "{}", empty);
            }
            if rank < 7 {
                out.push('/');
            }
        }
        out
    }
}

impl std::ops::Index<usize> for Roster {
    type Output = Piece;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.slots[index]
    }
}

//! Core types for hot-seat chess.
//!
//! This crate provides the value types shared by the rule engine and the
//! front-ends that drive it:
//! - [`Color`] for the two sides
//! - [`PieceKind`] for the six kinds of piece
//! - [`Cell`] for board coordinates, with algebraic notation

mod cell;
mod color;
mod piece;

pub use cell::{Cell, CellParseError, BOARD_SIZE};
pub use color::Color;
pub use piece::PieceKind;

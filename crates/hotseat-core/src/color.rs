//! Player color representation.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Represents the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns the rank step of a pawn push for this color.
    ///
    /// Rank 0 is Black's back rank, so White pawns move toward decreasing
    /// ranks (-1) and Black pawns toward increasing ranks (+1).
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Returns the rank this color's pawns start on (6 for White, 1 for Black).
    #[inline]
    pub const fn pawn_start_rank(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Returns the back rank for this color (7 for White, 0 for Black).
    #[inline]
    pub const fn back_rank(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Returns the roster slots owned by this color.
    ///
    /// White owns slots `0..16`, Black owns `16..32`.
    #[inline]
    pub const fn roster_range(self) -> Range<usize> {
        match self {
            Color::White => 0..16,
            Color::Black => 16..32,
        }
    }

    /// Returns the color owning the given roster slot, or `None` past the roster.
    #[inline]
    pub const fn owner_of_slot(index: usize) -> Option<Self> {
        match index {
            0..=15 => Some(Color::White),
            16..=31 => Some(Color::Black),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

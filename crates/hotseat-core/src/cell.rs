//! Board cell representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of files and of ranks on the board.
pub const BOARD_SIZE: i8 = 8;

/// Errors that can occur when parsing a cell from algebraic notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CellParseError {
    #[error("invalid cell: expected 2 characters, got {0}")]
    InvalidLength(usize),

    #[error("invalid file '{0}': expected a-h")]
    InvalidFile(char),

    #[error("invalid rank '{0}': expected 1-8")]
    InvalidRank(char),
}

/// A cell on the board, addressed by `(file, rank)`.
///
/// Files run from 0 (the a-file) to 7 (the h-file). Ranks follow screen
/// rows: rank 0 is the top row, Black's back rank, and rank 7 is the bottom
/// row, White's back rank. In algebraic notation rank `r` is written as
/// `8 - r`, so `(0, 0)` is a8 and `(4, 6)` is e2.
///
/// A cell may also hold [`Cell::OFF_BOARD`], the coordinate given to
/// captured pieces. Every constructor except the constant returns only
/// on-board cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    file: i8,
    rank: i8,
}

impl Cell {
    /// The coordinate of a piece that has been taken off the board.
    pub const OFF_BOARD: Cell = Cell { file: -1, rank: -1 };

    /// Creates a cell, returning `None` unless both coordinates are in `0..8`.
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Option<Self> {
        if file >= 0 && file < BOARD_SIZE && rank >= 0 && rank < BOARD_SIZE {
            Some(Cell { file, rank })
        } else {
            None
        }
    }

    /// Returns the file (0-7, or -1 off the board).
    #[inline]
    pub const fn file(self) -> i8 {
        self.file
    }

    /// Returns the rank (0-7, or -1 off the board).
    #[inline]
    pub const fn rank(self) -> i8 {
        self.rank
    }

    /// Returns true if the cell lies on the 8x8 board.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.file >= 0 && self.file < BOARD_SIZE && self.rank >= 0 && self.rank < BOARD_SIZE
    }

    /// Returns the cell displaced by `(df, dr)`, or `None` if it leaves the board.
    #[inline]
    pub const fn offset(self, df: i8, dr: i8) -> Option<Self> {
        if !self.is_on_board() {
            return None;
        }
        let file = self.file as i16 + df as i16;
        let rank = self.rank as i16 + dr as i16;
        if file < 0 || file >= BOARD_SIZE as i16 || rank < 0 || rank >= BOARD_SIZE as i16 {
            return None;
        }
        Some(Cell {
            file: file as i8,
            rank: rank as i8,
        })
    }

    /// Iterates over all 64 cells, rank by rank from the top row.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_SIZE).flat_map(|rank| (0..BOARD_SIZE).map(move |file| Cell { file, rank }))
    }

    /// Parses a cell from algebraic notation (e.g., "e2").
    pub fn from_algebraic(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    /// Returns the algebraic notation for this cell, or "-" off the board.
    pub fn to_algebraic(self) -> String {
        if !self.is_on_board() {
            return "-".to_string();
        }
        let file = (b'a' + self.file as u8) as char;
        let rank = (b'8' - self.rank as u8) as char;
        format!("{}{}", file, rank)
    }
}

impl FromStr for Cell {
    type Err = CellParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(CellParseError::InvalidLength(chars.len()));
        }
        let file = match chars[0].to_ascii_lowercase() {
            c @ 'a'..='h' => (c as u8 - b'a') as i8,
            other => return Err(CellParseError::InvalidFile(other)),
        };
        let rank = match chars[1] {
            c @ '1'..='8' => (b'8' - c as u8) as i8,
            other => return Err(CellParseError::InvalidRank(other)),
        };
        Ok(Cell { file, rank })
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({}, {})", self.file, self.rank)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn cell_new_bounds() {
        assert!(Cell::new(0, 0).is_some());
        assert!(Cell::new(7, 7).is_some());
        assert!(Cell::new(8, 0).is_none());
        assert!(Cell::new(0, -1).is_none());
    }

    #[test]
    fn off_board_sentinel() {
        assert!(!Cell::OFF_BOARD.is_on_board());
        assert_eq!(Cell::OFF_BOARD.offset(1, 1), None);
        assert_eq!(Cell::OFF_BOARD.to_algebraic(), "-");
    }

    #[test]
    fn cell_from_algebraic() {
        assert_eq!(Cell::from_algebraic("a8"), Cell::new(0, 0));
        assert_eq!(Cell::from_algebraic("e2"), Cell::new(4, 6));
        assert_eq!(Cell::from_algebraic("H1"), Cell::new(7, 7));
        assert_eq!("i1".parse::<Cell>(), Err(CellParseError::InvalidFile('i')));
        assert_eq!("a9".parse::<Cell>(), Err(CellParseError::InvalidRank('9')));
        assert_eq!("".parse::<Cell>(), Err(CellParseError::InvalidLength(0)));
    }

    #[test]
    fn cell_to_algebraic() {
        assert_eq!(Cell::new(0, 0).unwrap().to_algebraic(), "a8");
        assert_eq!(Cell::new(4, 6).unwrap().to_algebraic(), "e2");
        assert_eq!(Cell::new(7, 7).unwrap().to_string(), "h1");
    }

    #[test]
    fn offset_stops_at_the_edge() {
        let h1 = Cell::new(7, 7).unwrap();
        assert_eq!(h1.offset(1, 0), None);
        assert_eq!(h1.offset(0, 1), None);
        assert_eq!(h1.offset(-1, -1), Cell::new(6, 6));
    }

    #[test]
    fn all_cells() {
        let cells: Vec<Cell> = Cell::all().collect();
        assert_eq!(cells.len(), 64);
        assert_eq!(cells[0], Cell::new(0, 0).unwrap());
        assert_eq!(cells[63], Cell::new(7, 7).unwrap());
        assert!(cells.iter().all(|c| c.is_on_board()));
    }

    proptest! {
        #[test]
        fn offset_never_leaves_the_board(
            file in 0i8..8,
            rank in 0i8..8,
            df in -8i8..=8,
            dr in -8i8..=8,
        ) {
            let cell = Cell::new(file, rank).unwrap();
            if let Some(target) = cell.offset(df, dr) {
                prop_assert!(target.is_on_board());
                prop_assert_eq!(target.file(), file + df);
                prop_assert_eq!(target.rank(), rank + dr);
            }
        }
    }
}

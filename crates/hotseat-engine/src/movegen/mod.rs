//! Destination generation.
//!
//! [`destinations`] is the single dispatch point over [`PieceKind`]: it
//! looks the piece up in the roster and hands it to the pawn, slider or
//! leaper generator. Generation is pure; it never mutates the roster.
//!
//! The rules are boundary and occupancy only. A destination is any on-board
//! cell the piece can reach that is not held by a piece of its own color.
//! There is no check, castling, en passant or promotion.

mod leapers;
mod pawn;
mod sliders;

use crate::Roster;
use hotseat_core::{Cell, PieceKind};

pub use leapers::{KING_OFFSETS, KNIGHT_OFFSETS};
pub use sliders::{BISHOP_RAYS, QUEEN_RAYS, ROOK_RAYS};

/// A set of destination cells with a fixed maximum capacity.
///
/// A queen in the middle of an empty board reaches 27 cells, the most any
/// piece can, so a fixed-size array avoids heap allocations.
#[derive(Clone, Copy)]
pub struct Destinations {
    cells: [Cell; Self::MAX_CELLS],
    len: usize,
}

impl Destinations {
    /// Capacity of the set.
    pub const MAX_CELLS: usize = 32;

    /// Creates an empty set.
    #[inline]
    pub const fn new() -> Self {
        Destinations {
            cells: [Cell::OFF_BOARD; Self::MAX_CELLS],
            len: 0,
        }
    }

    /// Adds a cell, ignoring cells already present or past capacity.
    #[inline]
    pub fn push(&mut self, cell: Cell) {
        if self.len < Self::MAX_CELLS && !self.contains(cell) {
            self.cells[self.len] = cell;
            self.len += 1;
        }
    }

    /// Returns the number of cells.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the set is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if `cell` is in the set.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.as_slice().contains(&cell)
    }

    /// Returns the cells in generation order.
    #[inline]
    pub fn as_slice(&self) -> &[Cell] {
        &self.cells[..self.len]
    }

    /// Clears the set.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl Default for Destinations {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Destinations {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Destinations {}

impl<'a> IntoIterator for &'a Destinations {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for Destinations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.as_slice()).finish()
    }
}

/// Generates the destination cells of the piece in slot `index`.
///
/// Returns an empty set for an out-of-range slot or a captured piece.
pub fn destinations(roster: &Roster, index: usize) -> Destinations {
    let mut out = Destinations::new();
    let Some(piece) = roster.get(index).filter(|p| p.is_on_board()) else {
        return out;
    };

    match piece.kind {
        PieceKind::Pawn => pawn::generate(roster, index, &mut out),
        PieceKind::Rook => sliders::generate(roster, index, &ROOK_RAYS, &mut out),
        PieceKind::Bishop => sliders::generate(roster, index, &BISHOP_RAYS, &mut out),
        PieceKind::Queen => sliders::generate(roster, index, &QUEEN_RAYS, &mut out),
        PieceKind::Knight => leapers::generate(roster, index, &KNIGHT_OFFSETS, &mut out),
        PieceKind::King => leapers::generate(roster, index, &KING_OFFSETS, &mut out),
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{BLACK_KING, ROSTER_SIZE, WHITE_KING};
    use hotseat_core::Color;
    use proptest::prelude::*;

    fn cell(s: &str) -> Cell {
        Cell::from_algebraic(s).unwrap()
    }

    #[test]
    fn destinations_push_and_iterate() {
        let mut set = Destinations::new();
        assert!(set.is_empty());

        set.push(cell("e3"));
        set.push(cell("e4"));
        set.push(cell("e3"));

        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice(), &[cell("e3"), cell("e4")]);
        assert!(set.contains(cell("e4")));
        assert!(!set.contains(cell("e5")));

        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn destinations_stop_at_capacity() {
        let mut set = Destinations::new();
        for c in Cell::all() {
            set.push(c);
        }
        assert_eq!(set.len(), Destinations::MAX_CELLS);
        assert_eq!(set.as_slice().last(), Cell::new(7, 3).as_ref());
        assert!(!set.contains(cell("a1")));
    }

    #[test]
    fn standard_position_destination_counts() {
        let roster = Roster::standard();
        let counts: Vec<usize> = (0..16).map(|i| destinations(&roster, i).len()).collect();
        // 8 pawns with two pushes, rooks, knights with two jumps, bishops, queen, king.
        assert_eq!(counts, vec![2, 2, 2, 2, 2, 2, 2, 2, 0, 0, 2, 2, 0, 0, 0, 0]);
    }

    #[test]
    fn captured_piece_has_no_destinations() {
        let mut roster = Roster::standard();
        roster.capture(10);
        assert!(destinations(&roster, 10).is_empty());
        assert!(destinations(&roster, ROSTER_SIZE).is_empty());
    }

    #[test]
    fn generation_is_pure() {
        let roster = Roster::standard();
        let before = roster.clone();
        let first = destinations(&roster, 10);
        let second = destinations(&roster, 10);
        assert_eq!(first, second);
        assert_eq!(roster, before);
    }

    /// Strategy producing a roster with a random subset of slots scattered
    /// over distinct cells. Both kings are always present.
    fn scattered_roster() -> impl Strategy<Value = Roster> {
        (
            proptest::sample::subsequence((0..64u8).collect::<Vec<_>>(), 2..=32),
            proptest::collection::vec(any::<bool>(), ROSTER_SIZE),
        )
            .prop_map(|(cells, keep)| {
                let mut slots = vec![WHITE_KING, BLACK_KING];
                slots.extend(
                    (0..ROSTER_SIZE).filter(|&i| keep[i] && i != WHITE_KING && i != BLACK_KING),
                );
                slots.truncate(cells.len());
                let placements: Vec<(usize, Cell)> = slots
                    .into_iter()
                    .zip(cells)
                    .map(|(i, c)| (i, Cell::new((c % 8) as i8, (c / 8) as i8).unwrap()))
                    .collect();
                Roster::sparse(&placements).unwrap()
            })
    }

    proptest! {
        #[test]
        fn destinations_stay_on_board_and_off_own_pieces(roster in scattered_roster()) {
            for (index, piece) in roster.live() {
                for &to in &destinations(&roster, index) {
                    prop_assert!(to.is_on_board());
                    prop_assert_ne!(to, piece.cell);
                    if let Some(occupant) = roster.index_at(to) {
                        prop_assert_ne!(roster[occupant].color, piece.color);
                    }
                }
            }
        }

        #[test]
        fn pawn_captures_only_land_on_opponents(roster in scattered_roster()) {
            for (index, piece) in roster.live().filter(|(_, p)| p.kind == PieceKind::Pawn) {
                for &to in &destinations(&roster, index) {
                    if to.file() != piece.cell.file() {
                        let occupant = roster.index_at(to);
                        prop_assert!(occupant.is_some());
                        prop_assert!(piece.color.opposite().roster_range().contains(&occupant.unwrap()));
                    }
                }
            }
        }

        #[test]
        fn leaper_count_matches_reachable_offsets(roster in scattered_roster()) {
            for (index, piece) in roster.live() {
                let offsets: &[(i8, i8)] = match piece.kind {
                    PieceKind::Knight => &KNIGHT_OFFSETS,
                    PieceKind::King => &KING_OFFSETS,
                    _ => continue,
                };
                let expected = offsets
                    .iter()
                    .filter_map(|&(df, dr)| piece.cell.offset(df, dr))
                    .filter(|&to| roster.index_at_with_color(to, piece.color).is_none())
                    .count();
                prop_assert_eq!(destinations(&roster, index).len(), expected);
            }
        }
    }

    #[test]
    fn kings_are_generated_like_any_other_piece() {
        let roster = Roster::sparse(&[(WHITE_KING, cell("e4")), (BLACK_KING, cell("e5"))]).unwrap();
        let moves = destinations(&roster, WHITE_KING);
        // No check rules: the king may capture the adjacent enemy king.
        assert!(moves.contains(cell("e5")));
        assert_eq!(moves.len(), 8);
        assert_eq!(roster[WHITE_KING].color, Color::White);
    }
}

//! Fixed-offset generation for knights and kings.

use super::Destinations;
use crate::Roster;

/// Knight jumps `(file, rank)`.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, -2),
    (1, 2),
    (-1, -2),
    (-1, 2),
    (2, -1),
    (2, 1),
    (-2, -1),
    (-2, 1),
];

/// King steps `(file, rank)`.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
];

pub(super) fn generate(
    roster: &Roster,
    index: usize,
    offsets: &[(i8, i8)],
    out: &mut Destinations,
) {
    let piece = roster[index];

    for &(df, dr) in offsets {
        let Some(target) = piece.cell.offset(df, dr) else {
            continue;
        };
        if roster.index_at_with_color(target, piece.color).is_none() {
            out.push(target);
        }
    }
}

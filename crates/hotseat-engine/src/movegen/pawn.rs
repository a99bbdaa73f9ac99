//! Pawn generation.
//!
//! A pawn steps one cell forward onto an empty cell, two from its starting
//! rank when both cells are empty, and captures one cell diagonally forward.
//! A diagonal cell counts as a capture only when it is held by a piece whose
//! roster slot lies in the opponent's range.

use super::Destinations;
use crate::Roster;

pub(super) fn generate(roster: &Roster, index: usize, out: &mut Destinations) {
    let piece = roster[index];
    let forward = piece.color.pawn_direction();

    if let Some(single) = piece.cell.offset(0, forward) {
        if !roster.is_occupied(single) {
            out.push(single);

            if piece.cell.rank() == piece.color.pawn_start_rank() {
                if let Some(double) = piece.cell.offset(0, 2 * forward) {
                    if !roster.is_occupied(double) {
                        out.push(double);
                    }
                }
            }
        }
    }

    let opponents = piece.color.opposite().roster_range();
    for side in [1, -1] {
        let Some(diagonal) = piece.cell.offset(side, forward) else {
            continue;
        };
        if roster
            .index_at(diagonal)
            .is_some_and(|occupant| opponents.contains(&occupant))
        {
            out.push(diagonal);
        }
    }
}

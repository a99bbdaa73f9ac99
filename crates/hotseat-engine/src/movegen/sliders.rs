//! Ray generation for rooks, bishops and queens.

use super::Destinations;
use crate::Roster;

/// Orthogonal ray steps `(file, rank)`.
pub const ROOK_RAYS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Diagonal ray steps `(file, rank)`.
pub const BISHOP_RAYS: [(i8, i8); 4] = [(1, 1), (-1, -1), (1, -1), (-1, 1)];

/// Diagonal then orthogonal ray steps `(file, rank)`.
pub const QUEEN_RAYS: [(i8, i8); 8] = [
    (1, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
];

/// Walks each ray from the piece in `index` until it leaves the board or
/// meets a piece. An opposing piece ends the ray as a capture; an own piece
/// ends it without one.
pub(super) fn generate(roster: &Roster, index: usize, rays: &[(i8, i8)], out: &mut Destinations) {
    let piece = roster[index];

    for &(df, dr) in rays {
        let mut current = piece.cell;
        while let Some(next) = current.offset(df, dr) {
            match roster.index_at(next).filter(|&other| other != index) {
                None => out.push(next),
                Some(other) => {
                    if roster[other].color != piece.color {
                        out.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::movegen::destinations;
    use crate::Roster;
    use hotseat_core::Cell;

    fn cell(s: &str) -> Cell {
        Cell::from_algebraic(s).unwrap()
    }

    fn sorted(cells: &[Cell]) -> Vec<String> {
        let mut names: Vec<String> = cells.iter().map(|c| c.to_algebraic()).collect();
        names.sort();
        names
    }

    #[test]
    fn rook_on_empty_board() {
        let roster = Roster::sparse(&[(8, cell("d4"))]).unwrap();
        assert_eq!(destinations(&roster, 8).len(), 14);
    }

    #[test]
    fn rook_ray_stops_on_opponent_inclusive() {
        // White rook d4, black pawn d7 three cells up the file.
        let roster = Roster::sparse(&[(8, cell("d4")), (16, cell("d7"))]).unwrap();
        let moves = destinations(&roster, 8);
        let up: Vec<Cell> = moves
            .as_slice()
            .iter()
            .copied()
            .filter(|c| c.file() == 3 && c.rank() < 4)
            .collect();
        assert_eq!(sorted(&up), vec!["d5", "d6", "d7"]);
    }

    #[test]
    fn rook_ray_stops_before_own_piece() {
        // White rook d4, white pawn d7 three cells up the file.
        let roster = Roster::sparse(&[(8, cell("d4")), (0, cell("d7"))]).unwrap();
        let moves = destinations(&roster, 8);
        let up: Vec<Cell> = moves
            .as_slice()
            .iter()
            .copied()
            .filter(|c| c.file() == 3 && c.rank() < 4)
            .collect();
        assert_eq!(sorted(&up), vec!["d5", "d6"]);
    }

    #[test]
    fn bishop_rays() {
        // White bishop c1 with a black pawn on e3 and a white pawn on b2.
        let roster =
            Roster::sparse(&[(12, cell("c1")), (16, cell("e3")), (1, cell("b2"))]).unwrap();
        assert_eq!(sorted(destinations(&roster, 12).as_slice()), vec!["d2", "e3"]);
    }

    #[test]
    fn bishop_blocked_in_starting_position() {
        let roster = Roster::standard();
        assert!(destinations(&roster, 12).is_empty());
        assert!(destinations(&roster, 29).is_empty());
    }

    #[test]
    fn queen_is_union_of_rook_and_bishop() {
        // Black queen (slot 30) on d4 next to a few pieces.
        let roster = Roster::sparse(&[
            (30, cell("d4")),
            (0, cell("f6")),
            (20, cell("d2")),
            (3, cell("a4")),
        ])
        .unwrap();
        let queen = sorted(destinations(&roster, 30).as_slice());

        let rook = Roster::sparse(&[
            (25, cell("d4")),
            (0, cell("f6")),
            (20, cell("d2")),
            (3, cell("a4")),
        ])
        .unwrap();
        let bishop = Roster::sparse(&[
            (28, cell("d4")),
            (0, cell("f6")),
            (20, cell("d2")),
            (3, cell("a4")),
        ])
        .unwrap();
        let mut union = sorted(destinations(&rook, 25).as_slice());
        union.extend(sorted(destinations(&bishop, 28).as_slice()));
        union.sort();

        assert_eq!(queen, union);
        assert!(queen.contains(&"f6".to_string()));
        assert!(queen.contains(&"a4".to_string()));
        assert!(!queen.contains(&"d2".to_string()));
        assert!(queen.contains(&"d3".to_string()));
    }

    #[test]
    fn ray_order_is_deterministic() {
        let roster = Roster::sparse(&[(8, cell("a1"))]).unwrap();
        let moves = destinations(&roster, 8);
        // Rank-increasing first: nothing below a1, then up the file, then right.
        assert_eq!(moves.as_slice()[0], cell("a2"));
        assert_eq!(moves.as_slice()[7], cell("b1"));
    }
}

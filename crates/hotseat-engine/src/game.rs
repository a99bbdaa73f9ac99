//! The selection and move state machine.
//!
//! A [`Game`] consumes one click at a time. Clicking a piece of the side to
//! move selects it and computes its destinations; clicking one of those
//! destinations plays the move; clicking anywhere else drops the selection.
//! The game ends the moment a king is captured.

use crate::movegen::{destinations, Destinations};
use crate::roster::{BLACK_KING, WHITE_KING};
use crate::view::{BoardView, PieceView};
use crate::Roster;
use hotseat_core::{Cell, CellParseError, Color, PieceKind};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, trace};

/// Error type for programmatic moves.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// The game has already ended.
    #[error("game has already ended")]
    GameAlreadyOver,
    /// No piece of the side to move stands on the origin cell.
    #[error("no {color} piece on {cell}")]
    NoPieceToMove { cell: Cell, color: Color },
    /// The target cell is not a destination of the selected piece.
    #[error("{from} cannot move to {to}")]
    IllegalDestination { from: Cell, to: Cell },
    /// The move string is not two algebraic cells.
    #[error("invalid move notation '{0}': expected e.g. e2e4")]
    InvalidNotation(String),
    /// One of the cells in the move string failed to parse.
    #[error(transparent)]
    InvalidCell(#[from] CellParseError),
}

/// A move that has been played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    /// Roster slot of the moving piece.
    pub index: usize,
    pub kind: PieceKind,
    pub color: Color,
    pub from: Cell,
    pub to: Cell,
    /// Roster slot of the captured piece, if any.
    pub captured: Option<usize>,
}

/// Selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing selected.
    #[default]
    Idle,
    /// A piece is selected along with its destinations.
    Selected {
        index: usize,
        destinations: Destinations,
    },
}

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing changed.
    Ignored,
    /// A piece of the side to move was selected.
    Selected { index: usize, destinations: usize },
    /// The previous selection was dropped without moving.
    Deselected,
    /// A move was played; `winner` is set when it captured a king.
    Moved {
        record: MoveRecord,
        winner: Option<Color>,
    },
    /// The game is over and accepts no more input.
    GameOver,
}

/// A two-player game on one device.
#[derive(Debug, Clone)]
pub struct Game {
    roster: Roster,
    side_to_move: Color,
    selection: Selection,
    winner: Option<Color>,
    history: Vec<MoveRecord>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position, White to move.
    pub fn new() -> Self {
        Self::from_roster(Roster::standard(), Color::White)
    }

    /// Creates a game from a custom roster.
    pub fn from_roster(roster: Roster, side_to_move: Color) -> Self {
        Game {
            roster,
            side_to_move,
            selection: Selection::Idle,
            winner: None,
            history: Vec::new(),
        }
    }

    /// Returns the roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the side whose pieces may be selected.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the selection state.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns the slot of the selected piece.
    pub fn selected(&self) -> Option<usize> {
        match self.selection {
            Selection::Idle => None,
            Selection::Selected { index, .. } => Some(index),
        }
    }

    /// Returns the destinations of the selected piece, empty when idle.
    pub fn destinations(&self) -> &[Cell] {
        match &self.selection {
            Selection::Idle => &[],
            Selection::Selected { destinations, .. } => destinations.as_slice(),
        }
    }

    /// Returns the winner once a king has been captured.
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Returns true once a king has been captured.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Returns every move played so far.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Handles a left click on `cell`, or outside the board for `None`.
    pub fn handle_click(&mut self, cell: Option<Cell>) -> ClickOutcome {
        if self.winner.is_some() {
            return ClickOutcome::GameOver;
        }

        let Some(cell) = cell else {
            trace!("click outside the board ignored");
            return ClickOutcome::Ignored;
        };

        if let Some(index) = self.roster.index_at_with_color(cell, self.side_to_move) {
            return self.select(index);
        }

        match std::mem::take(&mut self.selection) {
            Selection::Idle => {
                trace!(%cell, "click on empty or opposing cell ignored");
                ClickOutcome::Ignored
            }
            Selection::Selected {
                index,
                destinations,
            } if destinations.contains(cell) => {
                let record = self.execute(index, cell);
                ClickOutcome::Moved {
                    record,
                    winner: self.winner,
                }
            }
            Selection::Selected { index, .. } => {
                debug!(index, %cell, "selection dropped");
                ClickOutcome::Deselected
            }
        }
    }

    /// Plays a move from `from` to `to` as a pair of clicks would.
    ///
    /// On error the game is left with nothing selected.
    pub fn play(&mut self, from: Cell, to: Cell) -> Result<MoveRecord, GameError> {
        if self.winner.is_some() {
            return Err(GameError::GameAlreadyOver);
        }

        let index = self
            .roster
            .index_at_with_color(from, self.side_to_move)
            .ok_or(GameError::NoPieceToMove {
                cell: from,
                color: self.side_to_move,
            })?;

        self.select(index);
        let legal = self.destinations().contains(&to);
        self.selection = Selection::Idle;
        if !legal {
            return Err(GameError::IllegalDestination { from, to });
        }

        Ok(self.execute(index, to))
    }

    /// Plays a move written as two algebraic cells, e.g. "e2e4".
    pub fn play_algebraic(&mut self, notation: &str) -> Result<MoveRecord, GameError> {
        let notation = notation.trim();
        if notation.len() != 4 || !notation.is_ascii() {
            return Err(GameError::InvalidNotation(notation.to_string()));
        }
        let from: Cell = notation[..2].parse()?;
        let to: Cell = notation[2..].parse()?;
        self.play(from, to)
    }

    /// Returns a read-only snapshot for drawing.
    pub fn view(&self) -> BoardView {
        BoardView {
            side_to_move: self.side_to_move,
            selected: self.selected(),
            pieces: self
                .roster
                .live()
                .map(|(index, piece)| PieceView {
                    index,
                    kind: piece.kind,
                    color: piece.color,
                    cell: piece.cell,
                })
                .collect(),
            destinations: self.destinations().to_vec(),
            last_move: self.history.last().copied(),
            winner: self.winner,
        }
    }

    fn select(&mut self, index: usize) -> ClickOutcome {
        let destinations = destinations(&self.roster, index);
        debug!(
            index,
            kind = %self.roster[index].kind,
            cell = %self.roster[index].cell,
            count = destinations.len(),
            "piece selected"
        );
        self.selection = Selection::Selected {
            index,
            destinations,
        };
        ClickOutcome::Selected {
            index,
            destinations: destinations.len(),
        }
    }

    fn execute(&mut self, index: usize, to: Cell) -> MoveRecord {
        let piece = self.roster[index];
        let captured = self.roster.index_at(to);

        if let Some(victim) = captured {
            self.roster.capture(victim);
        }
        self.roster.relocate(index, to);
        self.side_to_move = self.side_to_move.opposite();
        self.selection = Selection::Idle;

        let record = MoveRecord {
            index,
            kind: piece.kind,
            color: piece.color,
            from: piece.cell,
            to,
            captured,
        };
        self.history.push(record);
        debug!(
            index,
            from = %record.from,
            to = %record.to,
            captured = ?record.captured,
            "move played"
        );

        self.winner = match captured {
            Some(BLACK_KING) => Some(Color::White),
            Some(WHITE_KING) => Some(Color::Black),
            _ => None,
        };
        if let Some(winner) = self.winner {
            info!(%winner, moves = self.history.len(), "king captured, game over");
        }

        record
    }
}

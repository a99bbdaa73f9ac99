//! Rule engine for two-player chess on one device.
//!
//! This crate provides:
//! - [`Roster`] - the 32 pieces in fixed slots, captured pieces included
//! - [`movegen`] - per-kind destination generation
//! - [`Game`] - the click-driven selection and move state machine
//! - [`BoardGeometry`] - the pixel mapping used at the window boundary
//! - [`Session`] - the frame loop, with [`InputSource`] and [`Renderer`]
//!   seams for the window that drives it
//!
//! The rules are deliberately small: pieces move by boundary and occupancy
//! alone, there is no check, castling, en passant or promotion, and the game
//! ends when a king is captured.
//!
//! # Example
//!
//! ```
//! use hotseat_engine::{ClickOutcome, Game};
//! use hotseat_core::{Cell, Color};
//!
//! let mut game = Game::new();
//! let e2 = Cell::from_algebraic("e2").unwrap();
//! let e4 = Cell::from_algebraic("e4").unwrap();
//!
//! game.handle_click(Some(e2));
//! assert_eq!(game.destinations().len(), 2);
//!
//! assert!(matches!(game.handle_click(Some(e4)), ClickOutcome::Moved { .. }));
//! assert_eq!(game.side_to_move(), Color::Black);
//! ```

mod game;
mod geometry;
pub mod movegen;
pub mod roster;
mod session;
mod view;

pub use game::{ClickOutcome, Game, GameError, MoveRecord, Selection};
pub use geometry::{BoardGeometry, GeometryError};
pub use movegen::{destinations, Destinations};
pub use roster::{Piece, Roster, RosterError};
pub use session::{InputEvent, InputSource, Renderer, Session, SessionEnd};
pub use view::{BoardView, PieceView};

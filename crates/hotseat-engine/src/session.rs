//! Event loop connecting the engine to a window.
//!
//! Drawing and input belong to the front-end. It plugs in through the
//! [`InputSource`] and [`Renderer`] traits, and [`Session`] keeps their
//! order fixed: every frame first applies all pending input, then draws
//! once, so destination markers always match the selected piece.

use crate::{BoardGeometry, BoardView, ClickOutcome, Game};
use hotseat_core::Color;
use tracing::debug;

/// A discrete input event from the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Left mouse button pressed at a window pixel.
    LeftClick { x: i32, y: i32 },
    /// The window asked to close.
    CloseRequested,
}

/// Source of input events, polled once per frame.
pub trait InputSource {
    /// Returns the events received since the last poll.
    ///
    /// An empty batch is an idle frame.
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

/// Draws the board.
pub trait Renderer {
    fn draw(&mut self, view: &BoardView, geometry: &BoardGeometry);
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The window was closed before the game finished.
    Closed,
    /// A king was captured.
    Won(Color),
}

/// A game bound to a window geometry.
#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    geometry: BoardGeometry,
    closed: bool,
}

impl Session {
    /// Starts a new game in the standard position.
    pub fn new(geometry: BoardGeometry) -> Self {
        Self::with_game(Game::new(), geometry)
    }

    /// Wraps an existing game.
    pub fn with_game(game: Game, geometry: BoardGeometry) -> Self {
        Session {
            game,
            geometry,
            closed: false,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    /// Returns true while input is still accepted.
    pub fn is_running(&self) -> bool {
        !self.closed && !self.game.is_over()
    }

    /// Returns how the session ended, or `None` while it is running.
    pub fn end(&self) -> Option<SessionEnd> {
        if let Some(winner) = self.game.winner() {
            Some(SessionEnd::Won(winner))
        } else if self.closed {
            Some(SessionEnd::Closed)
        } else {
            None
        }
    }

    /// Applies one event. Returns `None` if the event closed the session.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<ClickOutcome> {
        match event {
            InputEvent::CloseRequested => {
                debug!("close requested");
                self.closed = true;
                None
            }
            InputEvent::LeftClick { x, y } => {
                let cell = self.geometry.cell_at(x, y);
                Some(self.game.handle_click(cell))
            }
        }
    }

    /// Runs one frame: drains pending input, then draws unless closed.
    ///
    /// Events after a close request or a winning move are dropped.
    pub fn frame<I, R>(&mut self, input: &mut I, renderer: &mut R) -> Option<SessionEnd>
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
    {
        for event in input.poll_events() {
            if !self.is_running() {
                break;
            }
            self.handle_event(event);
        }

        if !self.closed {
            renderer.draw(&self.game.view(), &self.geometry);
        }
        self.end()
    }

    /// Runs frames until the window closes or a king is captured.
    pub fn run<I, R>(&mut self, input: &mut I, renderer: &mut R) -> SessionEnd
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
    {
        loop {
            if let Some(end) = self.frame(input, renderer) {
                return end;
            }
        }
    }
}

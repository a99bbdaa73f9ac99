//! Terminal renderers.

use hotseat_core::{Cell, BOARD_SIZE};
use hotseat_engine::{BoardGeometry, BoardView, Renderer};
use std::fmt::Write as _;
use std::io::Write;
use tracing::warn;

/// Draws the board as text.
///
/// Pieces are shown by FEN letter. Destination cells are bracketed and the
/// selected piece is wrapped in angle brackets.
pub struct AsciiRenderer<W> {
    out: W,
    coordinates: bool,
}

impl<W: Write> AsciiRenderer<W> {
    pub fn new(out: W, coordinates: bool) -> Self {
        AsciiRenderer { out, coordinates }
    }
}

/// Formats one frame.
pub fn format_board(view: &BoardView, coordinates: bool) -> String {
    let mut text = String::new();
    let files = "    a  b  c  d  e  f  g  h\n";

    if coordinates {
        text.push_str(files);
    }
    for rank in 0..BOARD_SIZE {
        let label = 8 - rank;
        if coordinates {
            let _ = write!(text, " {} ", label);
        }
        for file in 0..BOARD_SIZE {
            let Some(cell) = Cell::new(file, rank) else {
                continue;
            };
            let letter = view
                .piece_at(cell)
                .map_or('.', |p| p.kind.to_fen_char(p.color));
            let (open, close) = if view.is_selected(cell) {
                ('<', '>')
            } else if view.is_destination(cell) {
                ('[', ']')
            } else {
                (' ', ' ')
            };
            text.push(open);
            text.push(letter);
            text.push(close);
        }
        if coordinates {
            let _ = write!(text, " {}", label);
        }
        text.push('\n');
    }
    if coordinates {
        text.push_str(files);
    }
    text.push_str(&status_line(view));
    text.push('\n');
    text
}

/// Describes whose turn it is, the last move, or the winner.
pub fn status_line(view: &BoardView) -> String {
    if let Some(winner) = view.winner {
        return format!("{} wins", winner);
    }

    let mut status = format!("{} to move", view.side_to_move);
    if let Some(last) = view.last_move {
        let capture = if last.captured.is_some() { "x" } else { "-" };
        let _ = write!(
            status,
            " (last: {} {} {}{}{})",
            last.color, last.kind, last.from, capture, last.to
        );
    }
    status
}

impl<W: Write> Renderer for AsciiRenderer<W> {
    fn draw(&mut self, view: &BoardView, _geometry: &BoardGeometry) {
        let frame = format_board(view, self.coordinates);
        if let Err(e) = self.out.write_all(frame.as_bytes()).and_then(|_| self.out.flush()) {
            warn!("failed to draw board: {}", e);
        }
    }
}

/// Writes each frame as one line of JSON.
pub struct JsonRenderer<W> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        JsonRenderer { out }
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn draw(&mut self, view: &BoardView, _geometry: &BoardGeometry) {
        let result = serde_json::to_writer(&mut self.out, view)
            .map_err(std::io::Error::from)
            .and_then(|_| writeln!(self.out))
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!("failed to write snapshot: {}", e);
        }
    }
}

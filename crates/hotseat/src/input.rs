//! Line-based input source.
//!
//! Each line read from the terminal becomes one frame's worth of events:
//!
//! - `click X Y` - a left click at window pixel `(X, Y)`
//! - `e2` - a left click on the center of a cell
//! - `e2e4` - two clicks, selecting then moving
//! - `quit` or end of input - close the window

use hotseat_core::{Cell, CellParseError};
use hotseat_engine::{BoardGeometry, InputEvent, InputSource};
use std::io::BufRead;
use thiserror::Error;
use tracing::warn;

/// Errors in a line of input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("expected 'click X Y' with integer pixels, got '{0}'")]
    BadClick(String),

    #[error(transparent)]
    BadCell(#[from] CellParseError),

    #[error("unrecognized input '{0}'")]
    Unrecognized(String),
}

/// Parses one line into the events it stands for.
pub fn parse_line(line: &str, geometry: &BoardGeometry) -> Result<Vec<InputEvent>, InputError> {
    let line = line.trim();
    let words: Vec<&str> = line.split_whitespace().collect();

    match words.as_slice() {
        [] => Ok(Vec::new()),
        ["quit"] | ["exit"] => Ok(vec![InputEvent::CloseRequested]),
        ["click", coords @ ..] => {
            let coords: Vec<i32> = coords
                .iter()
                .map(|w| w.parse::<i32>())
                .collect::<Result<_, _>>()
                .map_err(|_| InputError::BadClick(line.to_string()))?;
            match coords.as_slice() {
                &[x, y] => Ok(vec![InputEvent::LeftClick { x, y }]),
                _ => Err(InputError::BadClick(line.to_string())),
            }
        }
        &[word] if word.is_ascii() => match word.len() {
            2 => Ok(vec![click_on(geometry, word.parse()?)]),
            4 => Ok(vec![
                click_on(geometry, word[..2].parse()?),
                click_on(geometry, word[2..].parse()?),
            ]),
            _ => Err(InputError::Unrecognized(line.to_string())),
        },
        _ => Err(InputError::Unrecognized(line.to_string())),
    }
}

fn click_on(geometry: &BoardGeometry, cell: Cell) -> InputEvent {
    let (x, y) = geometry.cell_center(cell);
    InputEvent::LeftClick { x, y }
}

/// Reads events from a line-oriented reader, one line per frame.
pub struct LineInput<R> {
    reader: R,
    geometry: BoardGeometry,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R, geometry: BoardGeometry) -> Self {
        LineInput { reader, geometry }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => vec![InputEvent::CloseRequested],
            Ok(_) => parse_line(&line, &self.geometry).unwrap_or_else(|e| {
                eprintln!("{}", e);
                Vec::new()
            }),
            Err(e) => {
                warn!("failed to read input: {}", e);
                vec![InputEvent::CloseRequested]
            }
        }
    }
}

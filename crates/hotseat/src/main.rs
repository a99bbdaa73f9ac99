//! Two-player chess in the terminal.
//!
//! Reads clicks, cells or moves from stdin, one line per frame, and draws
//! the board to stdout after each line. Logs go to stderr.

mod config;
mod input;
mod render;

use clap::Parser;
use config::{HotseatConfig, OutputFormat};
use hotseat_engine::{Renderer, Session, SessionEnd};
use input::LineInput;
use render::{AsciiRenderer, JsonRenderer};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hotseat")]
#[command(about = "Two-player chess on one device, in the terminal")]
struct Cli {
    /// Configuration file (defaults to ./hotseat.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Output format, overriding the configuration file
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
    /// Hide file letters and rank digits
    #[arg(long)]
    no_coordinates: bool,
    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let mut config = match HotseatConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(format) = cli.format {
        config.display.format = format;
    }
    if cli.no_coordinates {
        config.display.coordinates = false;
    }

    let geometry = config.board;
    let mut renderer: Box<dyn Renderer> = match config.display.format {
        OutputFormat::Ascii => Box::new(AsciiRenderer::new(
            io::stdout(),
            config.display.coordinates,
        )),
        OutputFormat::Json => Box::new(JsonRenderer::new(io::stdout())),
    };
    let mut input = LineInput::new(io::stdin().lock(), geometry);

    let mut session = Session::new(geometry);
    renderer.draw(&session.game().view(), session.geometry());

    match session.run(&mut input, renderer.as_mut()) {
        SessionEnd::Won(winner) => {
            tracing::info!(%winner, moves = session.game().history().len(), "game finished");
        }
        SessionEnd::Closed => {
            tracing::info!("window closed before the game ended");
        }
    }

    ExitCode::SUCCESS
}

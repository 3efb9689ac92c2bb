//! Command-line interface for tui-snake.

use std::path::PathBuf;

use clap::Parser;

use tui_snake::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, MIN_BOARD_HEIGHT, MIN_BOARD_WIDTH};

/// Largest accepted board dimension.
pub const MAX_BOARD_SIZE: u16 = 1000;

/// Snake in the terminal, drawn with half-block characters.
#[derive(Parser, Debug)]
#[command(name = "tui-snake")]
#[command(about = "Terminal snake game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board width in cells
    #[arg(
        long,
        default_value_t = DEFAULT_BOARD_WIDTH,
        value_parser = clap::value_parser!(u16).range(MIN_BOARD_WIDTH as i64..=MAX_BOARD_SIZE as i64)
    )]
    pub width: u16,

    /// Board height in cells (two cells per terminal row)
    #[arg(
        long,
        default_value_t = DEFAULT_BOARD_HEIGHT,
        value_parser = clap::value_parser!(u16).range(MIN_BOARD_HEIGHT as i64..=MAX_BOARD_SIZE as i64)
    )]
    pub height: u16,

    /// Seed for fruit placement; drawn at random when omitted
    #[arg(long)]
    pub seed: Option<u32>,

    /// Write logs to this file (level filtered by RUST_LOG, default "info")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// The configured seed, or a fresh one from the OS generator.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(rand::random)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_twenty_by_twenty() {
        let cli = Cli::try_parse_from(["tui-snake"]).unwrap();
        assert_eq!((cli.width, cli.height), (20, 20));
        assert_eq!(cli.seed, None);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn accepts_explicit_values() {
        let cli = Cli::try_parse_from([
            "tui-snake",
            "--width",
            "1",
            "--height",
            "5",
            "--seed",
            "42",
            "--log-file",
            "snake.log",
        ])
        .unwrap();
        assert_eq!((cli.width, cli.height), (1, 5));
        assert_eq!(cli.resolve_seed(), 42);
        assert_eq!(cli.log_file, Some(PathBuf::from("snake.log")));
    }

    #[test]
    fn rejects_boards_the_snake_cannot_fit() {
        assert!(Cli::try_parse_from(["tui-snake", "--height", "4"]).is_err());
        assert!(Cli::try_parse_from(["tui-snake", "--width", "0"]).is_err());
        assert!(Cli::try_parse_from(["tui-snake", "--width", "1001"]).is_err());
    }
}

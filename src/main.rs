//! Terminal snake runner (default binary).
//!
//! Owns the outer loop: render, wait out the tick interval while buffering
//! keys, then advance the game by exactly one tick.

mod cli;
mod logging;

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use tui_snake::core::{GameState, SimpleRng, TickOutcome};
use tui_snake::input::{handle_key_event, should_quit, InputQueue};
use tui_snake::term::{ColorPairTable, FrameBuffer, GameView, TerminalRenderer, Viewport};

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let seed = cli.resolve_seed();
    info!(width = cli.width, height = cli.height, seed, "starting tui-snake");

    let mut term = TerminalRenderer::new();
    let pairs = ColorPairTable::register(term.available_colors())
        .context("terminal cannot display the game palette")?;

    term.enter()?;
    let result = run(&mut term, &pairs, &cli, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, pairs: &ColorPairTable, cli: &Cli, seed: u32) -> Result<()> {
    let mut rng = SimpleRng::new(seed);
    let mut game = GameState::new(cli.width, cli.height, &mut rng);

    let mut view = GameView::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut inputs = InputQueue::new();

    loop {
        // Render.
        let fallback = GameView::required_size(game.board_size());
        let (w, h) = crossterm::terminal::size().unwrap_or(fallback);
        view.render_into(&game, pairs, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Collect input until the tick is due.
        let deadline = Instant::now() + Duration::from_millis(game.tick_interval_ms() as u64);
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if timeout.is_zero() || !event::poll(timeout)? {
                break;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(score = game.score(), "quit requested");
                        return Ok(());
                    }
                    if let Some(input) = handle_key_event(key) {
                        if !inputs.push(input) {
                            debug!(?input, "input queue full, key dropped");
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        match game.tick(inputs.pop(), &mut rng) {
            TickOutcome::Reset => inputs.clear(),
            TickOutcome::Died | TickOutcome::Won => {
                inputs.clear();
                info!(score = game.score(), "round over");
            }
            _ => {}
        }
    }
}

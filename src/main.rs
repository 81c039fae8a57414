//! Terminal blockfall runner.
//!
//! Fixed-cadence loop: render, poll input until the next tick, advance
//! the game clock. Held movement keys repeat through the terminal's
//! native auto-repeat.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{Game, GameConfig};
use blockfall::input::{action_for_key, is_acknowledge, should_quit};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::{Phase, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = Game::new(GameConfig::default(), time_seed())?;
    let view = GameView::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game, Viewport::new(w, h));
        term.draw(&fb)?;

        // Wait for input until the next tick is due.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key)
                    if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match game.phase() {
                        Phase::Running => {
                            if let Some(action) = action_for_key(key) {
                                game.apply_action(action);
                            }
                        }
                        Phase::GameOver => {
                            if is_acknowledge(key) {
                                game.acknowledge_game_over();
                            }
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(TICK_MS);
        }
    }
}

/// Seed the piece sequence from the wall clock so runs differ.
fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos().wrapping_add(d.as_secs() as u32))
        .unwrap_or(1)
}

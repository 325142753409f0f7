//! Terminal game runner.
//!
//! Wires the pieces together: one mpsc channel merges the gravity clock and
//! the blocking input listener into a single ordered event stream, and the
//! game loop is its only consumer. Game state never crosses a thread.
//!
//! Controls: h/l or arrows to move, j to soft drop, r or up to rotate,
//! space to hard drop, k to nudge up (debug), q / Esc / Ctrl-C to quit.

use std::sync::mpsc;
use std::time::Duration;

use anyhow::Result;

use blockfall::core::{Game, UniformShapes};
use blockfall::engine::{self, GravityClock, Outcome};
use blockfall::input::spawn_listener;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::GRAVITY_INTERVAL_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Ok(Outcome::GameOver) = result {
        println!("game over");
    }
    result.map(|_| ())
}

fn run(term: &mut TerminalRenderer) -> Result<Outcome> {
    let mut game = Game::new(UniformShapes::from_time());

    let (tx, rx) = mpsc::channel();
    GravityClock::new(Duration::from_millis(GRAVITY_INTERVAL_MS)).spawn(tx.clone());
    spawn_listener(tx);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    engine::run(&mut game, &rx, |snap| {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)
    })
}

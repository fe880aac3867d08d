//! Terminal maze chase runner.
//!
//! Fixed-rate loop: render, wait for input until the next tick deadline,
//! then advance the simulation once with everything queued since the last
//! tick. Rendering goes through a custom framebuffer with diff flushing.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};

use maze_chase::config::RunConfig;
use maze_chase::core::{GameSnapshot, GameState};
use maze_chase::input::{action_for_key, InputQueue};
use maze_chase::logging::init_tracing;
use maze_chase::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    init_tracing(config.log_path.as_deref())?;

    // Layout problems abort before the terminal is touched.
    let layout = config.load_layout().context("loading maze layout")?;
    let mut game = GameState::new(layout);
    info!(
        cols = game.maze().cols(),
        rows = game.maze().rows(),
        pursuers = game.pursuers().len(),
        pellets = game.pellets().len(),
        tick_ms = config.tick_ms,
        "starting game"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &config);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Err(e) = &result {
        warn!(error = %e, "game loop aborted");
    } else {
        info!(score = game.score(), lives = game.lives(), ticks = game.tick_count(), "game finished");
    }
    result
}

struct Frame {
    view: GameView,
    snap: GameSnapshot,
    fb: FrameBuffer,
}

impl Frame {
    fn draw(&mut self, term: &mut TerminalRenderer, game: &GameState) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut self.snap);
        self.view
            .render_into(&self.snap, Viewport::new(w, h), &mut self.fb);
        term.draw_swap(&mut self.fb)
    }
}

fn run(term: &mut TerminalRenderer, game: &mut GameState, config: &RunConfig) -> Result<()> {
    let mut frame = Frame {
        view: GameView::default(),
        snap: GameSnapshot::default(),
        fb: FrameBuffer::new(0, 0),
    };
    let mut queue = InputQueue::new();

    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();

    while !game.game_over() {
        frame.draw(term, game)?;

        // Input until the next tick is due.
        loop {
            let timeout = tick_duration.saturating_sub(last_tick.elapsed());
            if timeout.is_zero() || !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = action_for_key(key) {
                        queue.push(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        last_tick = Instant::now();
        game.advance(queue.drain())?;
    }

    if queue.dropped() > 0 {
        warn!(dropped = queue.dropped(), "input actions dropped on full queue");
    }

    // Final frame with the game-over overlay; any key skips the wait.
    frame.draw(term, game)?;
    let hold = Duration::from_millis(config.game_over_hold_ms as u64);
    let shown_at = Instant::now();
    loop {
        let remaining = hold.saturating_sub(shown_at.elapsed());
        if remaining.is_zero() || !event::poll(remaining)? {
            break;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                break;
            }
        }
    }
    Ok(())
}

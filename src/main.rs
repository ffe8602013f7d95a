//! Terminal falling-block game runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer for output. All game
//! commands, whether from keys or the drop timer, go through one
//! [`Session`] on this thread.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use log::info;

use tui_blocks::core::{GameController, GameEvent, Session, Snapshot};
use tui_blocks::input::{command_for_key, is_press};
use tui_blocks::term::{GameView, TerminalRenderer, Viewport};
use tui_blocks::Config;

/// Input poll timeout while no drop is scheduled.
const IDLE_POLL_MS: u64 = 250;

fn main() -> Result<()> {
    let config = Config::from_env();
    config.init_logging()?;
    info!("starting with {:?}", config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut session = Session::new(GameController::new(config.seed), config.drop_interval_ms);
    let view = GameView::default();
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let mut viewport = terminal_viewport();
    let mut shown = session.controller().snapshot();
    let mut fb = view.render(&shown, viewport);
    term.present(&fb)?;

    loop {
        let mut resized = false;
        let timeout = session
            .time_until_drop(now_ms())
            .unwrap_or(IDLE_POLL_MS);

        if event::poll(Duration::from_millis(timeout))? {
            match event::read()? {
                Event::Key(key) if is_press(&key) => {
                    if let Some(command) = command_for_key(key) {
                        session.push(command);
                    }
                }
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                    resized = true;
                }
                _ => {}
            }
        }

        session.run_pending(now_ms());
        if session.quit_requested() {
            info!("quit requested");
            return Ok(());
        }

        let events = session.controller_mut().drain_events();
        if events.contains(&GameEvent::GameOver) {
            info!("game {} ended", session.controller().game_id());
        }
        if events.is_empty() && !resized {
            continue;
        }

        let next: Snapshot = session.controller().snapshot();
        if resized {
            view.render_into(&next, viewport, &mut fb);
        } else {
            view.paint_changes(&shown, &next, viewport, &mut fb);
        }
        shown = next;
        term.present(&fb)?;
    }
}

fn terminal_viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

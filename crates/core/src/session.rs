//! Session module - single-threaded command queue with a drop timer
//!
//! Key input and the drop timer both feed one FIFO queue that is drained on
//! the caller's thread, so a user-triggered down move and a timer-triggered
//! one can never run at the same time. Every down move restarts the timer,
//! which keeps the two from double-stepping the block.

use std::collections::VecDeque;

use log::debug;

use crate::controller::GameController;
use crate::timer::DropTimer;
use crate::types::{Command, DROP_INTERVAL_MS};

/// A game plus its command queue and drop timer
#[derive(Debug)]
pub struct Session {
    controller: GameController,
    timer: DropTimer,
    queue: VecDeque<Command>,
    quit: bool,
}

impl Session {
    pub fn new(controller: GameController, drop_interval_ms: u64) -> Self {
        Self {
            controller,
            timer: DropTimer::new(drop_interval_ms),
            queue: VecDeque::new(),
            quit: false,
        }
    }

    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut GameController {
        &mut self.controller
    }

    pub fn timer(&self) -> &DropTimer {
        &self.timer
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Queue a command for the next [`Session::run_pending`]
    pub fn push(&mut self, command: Command) {
        self.queue.push_back(command);
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Milliseconds until the drop timer fires, `None` while no game is running
    pub fn time_until_drop(&self, now_ms: u64) -> Option<u64> {
        self.timer.time_until(now_ms)
    }

    /// Drain queued commands in order, then fire the drop timer if it is due.
    ///
    /// Returns the number of commands applied (a timer tick counts as one).
    pub fn run_pending(&mut self, now_ms: u64) -> usize {
        let mut applied = 0;
        while let Some(command) = self.queue.pop_front() {
            self.dispatch(command, now_ms);
            applied += 1;
        }

        // A queued MoveDown has already restarted the timer, so it is only
        // still due if no down move happened since it was armed.
        if self.timer.is_due(now_ms) {
            debug!("drop timer fired at {}ms", now_ms);
            self.dispatch(Command::MoveDown, now_ms);
            applied += 1;
        }

        applied
    }

    fn dispatch(&mut self, command: Command, now_ms: u64) {
        match command {
            Command::Quit => {
                self.quit = true;
                self.timer.cancel();
            }
            Command::Start => {
                self.controller.start();
                self.sync_timer(now_ms);
            }
            Command::MoveDown => {
                if !self.controller.is_running() {
                    return;
                }
                self.controller.handle(command);
                self.sync_timer(now_ms);
            }
            Command::MoveLeft | Command::MoveRight | Command::Rotate => {
                // Movement keys are only bound while a game is running.
                if self.controller.is_running() {
                    self.controller.handle(command);
                }
            }
        }
    }

    /// Restart the timer while running, cancel it otherwise
    fn sync_timer(&mut self, now_ms: u64) {
        if self.controller.is_running() {
            self.timer.restart(now_ms);
        } else {
            self.timer.cancel();
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameController::default(), DROP_INTERVAL_MS)
    }
}

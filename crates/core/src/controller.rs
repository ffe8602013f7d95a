//! Game controller module - owns the field and the active block
//!
//! The controller is the only place that mutates game state. Every command
//! is a synchronous state transition; observers learn about changes by
//! draining [`GameEvent`]s after each command, and may register an end
//! handler that runs once per game over.

use std::fmt;

use log::{debug, info};

use crate::block::Block;
use crate::field::Field;
use crate::rng::ShapeRandomizer;
use crate::snapshot::Snapshot;
use crate::types::{Command, Direction, ShapeKind};

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    /// No active block (before the first start)
    #[default]
    Idle,
    /// A block is falling
    Running,
    /// A freshly spawned block overlapped the pile; waits for the next start
    GameOver,
}

/// State-change notification for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The field was reset
    Started,
    /// A new block entered the field
    Spawned(ShapeKind),
    /// The active block moved one cell
    Moved(Direction),
    /// The active block turned
    Rotated,
    /// The active block was committed to the field
    Fixed { rows_cleared: usize },
    /// A spawned block overlapped settled squares
    GameOver,
}

type EndHandler = Box<dyn FnMut()>;

/// Orchestrates the field and the active block
pub struct GameController {
    field: Field,
    block: Option<Block>,
    shapes: ShapeRandomizer,
    status: GameStatus,
    /// Monotonic game counter (increments on every start)
    game_id: u32,
    events: Vec<GameEvent>,
    on_end: Option<EndHandler>,
}

impl GameController {
    /// Create a controller over a default-sized field with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_field(Field::default(), seed)
    }

    /// Create a controller over a specific field.
    ///
    /// The field is kept as-is until the next [`GameController::start`].
    pub fn with_field(field: Field, seed: u32) -> Self {
        Self {
            field,
            block: None,
            shapes: ShapeRandomizer::new(seed),
            status: GameStatus::Idle,
            game_id: 0,
            events: Vec::new(),
            on_end: None,
        }
    }

    /// Register the handler invoked on every transition to game over
    pub fn on_end(&mut self, handler: impl FnMut() + 'static) {
        self.on_end = Some(Box::new(handler));
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    pub fn seed(&self) -> u32 {
        self.shapes.seed()
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Mutable field access, for arranging positions before or between commands
    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    pub fn block(&self) -> Option<&Block> {
        self.block.as_ref()
    }

    /// Take all notifications emitted since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Compose a display snapshot of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::compose(&self.field, self.block.as_ref(), self.status)
    }

    /// Reset the field and spawn the first block
    pub fn start(&mut self) {
        self.field.clear();
        self.block = None;
        self.status = GameStatus::Idle;
        self.game_id = self.game_id.wrapping_add(1);
        self.events.push(GameEvent::Started);
        info!("game {} started (seed {})", self.game_id, self.shapes.seed());

        self.spawn();
    }

    /// Spawn a random block
    pub fn spawn(&mut self) {
        let kind = self.shapes.draw();
        self.spawn_kind(kind);
    }

    /// Spawn a block of the given kind, ending the game if it overlaps the pile
    pub fn spawn_kind(&mut self, kind: ShapeKind) {
        let block = Block::new(kind, self.field.width());
        let blocked = self.field.judge_game_over(&block);

        // The overlapping block stays visible on the game-over screen.
        self.block = Some(block);

        if blocked {
            self.status = GameStatus::GameOver;
            info!("game {} over: {:?} spawned onto the pile", self.game_id, kind);
            self.events.push(GameEvent::GameOver);
            if let Some(handler) = self.on_end.as_mut() {
                handler();
            }
        } else {
            self.status = GameStatus::Running;
            debug!("spawned {:?}", kind);
            self.events.push(GameEvent::Spawned(kind));
        }
    }

    /// Move the active block one cell.
    ///
    /// A blocked downward move fixes the block, clears full rows and spawns
    /// the next block. Blocked sideways moves are ignored. Returns true if
    /// the state changed.
    pub fn move_block(&mut self, direction: Direction) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(block) = self.block.as_mut() else {
            return false;
        };

        if self.field.judge_can_move(block, direction) {
            block.move_by(direction);
            self.events.push(GameEvent::Moved(direction));
            return true;
        }

        if direction != Direction::Down {
            return false;
        }

        self.fix_and_spawn();
        true
    }

    /// Turn the active block clockwise if the turned cells are free.
    ///
    /// There are no wall kicks: a blocked rotation is ignored.
    pub fn rotate_block(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(block) = self.block.as_mut() else {
            return false;
        };

        if !self.field.judge_can_rotate(block) {
            return false;
        }

        block.rotate();
        self.events.push(GameEvent::Rotated);
        true
    }

    /// Apply a command; returns true if the state changed
    pub fn handle(&mut self, command: Command) -> bool {
        if let Some(direction) = command.direction() {
            return self.move_block(direction);
        }
        match command {
            Command::Start => {
                self.start();
                true
            }
            Command::Rotate => self.rotate_block(),
            Command::MoveLeft | Command::MoveRight | Command::MoveDown | Command::Quit => false,
        }
    }

    fn fix_and_spawn(&mut self) {
        let Some(block) = self.block.take() else {
            return;
        };

        self.field.fix_block(&block);
        let rows_cleared = self.field.delete_line();
        debug!(
            "fixed {:?} at {:?}, {} row(s) cleared",
            block.kind(),
            block.origin(),
            rows_cleared
        );
        self.events.push(GameEvent::Fixed { rows_cleared });

        self.spawn();
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(1)
    }
}

impl fmt::Debug for GameController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameController")
            .field("field", &self.field)
            .field("block", &self.block)
            .field("shapes", &self.shapes)
            .field("status", &self.status)
            .field("game_id", &self.game_id)
            .field("events", &self.events)
            .field("on_end", &self.on_end.is_some())
            .finish()
    }
}

//! Game state and core simulation types

use glam::Vec2;

use super::rect::Rect;
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Page loaded, waiting for the start button
    Idle,
    /// Active gameplay
    Running,
    /// Every block destroyed
    Won,
    /// Ball reached the floor
    Lost,
}

impl GamePhase {
    /// Won or Lost - the simulation never resumes from these
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// A destructible block
#[derive(Debug, Clone)]
pub struct Block {
    pub id: u32,
    /// Bottom-left corner, fixed for the block's lifetime
    pub origin: Vec2,
}

impl Block {
    pub fn rect(&self) -> Rect {
        Rect::new(self.origin, Vec2::new(BLOCK_WIDTH, BLOCK_HEIGHT))
    }
}

/// The player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Bottom-left corner; only the x coordinate ever changes
    pub origin: Vec2,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            origin: PADDLE_START,
        }
    }
}

impl Paddle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.origin, Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT))
    }

    /// Track a pointer position given relative to the playfield's left edge.
    ///
    /// The candidate position centers the paddle under the pointer. A
    /// candidate that would push any part of the paddle outside the field
    /// is ignored outright, not clamped - the paddle stops following until
    /// the pointer comes back in range. Returns whether the position
    /// changed.
    pub fn track_pointer(&mut self, pointer_x: f32) -> bool {
        let candidate = pointer_x - PADDLE_WIDTH / 2.0;
        if (0.0..=FIELD_WIDTH - PADDLE_WIDTH).contains(&candidate) {
            self.origin.x = candidate;
            true
        } else {
            false
        }
    }
}

/// The ball - a point-with-diameter treated as a square bounding box
#[derive(Debug, Clone)]
pub struct Ball {
    /// Bottom-left corner of the bounding box
    pub pos: Vec2,
    /// Components are always +/- BALL_SPEED; collisions only flip signs
    pub vel: Vec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: BALL_START,
            vel: BALL_START_VEL,
        }
    }
}

impl Ball {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::splat(BALL_DIAMETER))
    }
}

/// What happened during a tick, in resolution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A block left the alive list
    BlockDestroyed { id: u32 },
    ScoreChanged(u32),
    WallBounce,
    PaddleBounce,
    Won,
    Lost,
}

/// Complete state of one session
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    /// Destroyed-block count; only ever grows
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Alive blocks in creation order (row-major grid order)
    pub blocks: Vec<Block>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Idle,
            score: 0,
            time_ticks: 0,
            paddle: Paddle::default(),
            ball: Ball::default(),
            blocks: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

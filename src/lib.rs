//! Block Breaker - a classic paddle-and-ball arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `ui`: Narrow rendering contract and its DOM implementation
//! - `session`: Game controller wiring one playthrough to a view

pub mod session;
pub mod sim;
pub mod ui;

pub use session::GameSession;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Playfield dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 560.0;
    pub const FIELD_HEIGHT: f32 = 300.0;

    /// Simulation tick period (milliseconds)
    pub const TICK_MS: i32 = 20;

    /// Block dimensions - every block shares them
    pub const BLOCK_WIDTH: f32 = 100.0;
    pub const BLOCK_HEIGHT: f32 = 20.0;

    /// Block grid shape
    pub const BLOCK_ROWS: usize = 5;
    pub const BLOCKS_PER_ROW: usize = 5;
    /// Bottom-left corner of the first block
    pub const GRID_ORIGIN: Vec2 = Vec2::new(10.0, 270.0);
    /// Horizontal distance between block origins within a row
    pub const GRID_COL_STEP: f32 = 110.0;
    /// Vertical distance between rows (negative: rows fill downward)
    pub const GRID_ROW_STEP: f32 = -30.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_START: Vec2 = Vec2::new(230.0, 10.0);

    /// Ball defaults
    pub const BALL_DIAMETER: f32 = 20.0;
    pub const BALL_START: Vec2 = Vec2::new(270.0, 40.0);
    pub const BALL_START_VEL: Vec2 = Vec2::new(-2.0, 2.0);
    /// Per-axis speed; velocity components are always +/- this value
    pub const BALL_SPEED: f32 = 2.0;
}

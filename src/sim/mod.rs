//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed timestep only
//! - Stable list order (creation order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod layout;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{deflect, hits_block, hits_floor, hits_paddle, hits_wall};
pub use layout::{grid_origins, place_blocks};
pub use rect::Rect;
pub use state::{Ball, Block, GameEvent, GamePhase, GameState, Paddle};
pub use tick::tick;

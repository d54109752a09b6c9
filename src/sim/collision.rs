//! Collision detection and response
//!
//! All geometry is axis-aligned boxes. There is no true reflection: every
//! bounce goes through a fixed four-branch sign-flip table, and the table
//! does not know which surface was hit.

use glam::Vec2;

use super::state::{Ball, Block, Paddle};
use crate::consts::*;

/// Change direction after a collision.
///
/// Exactly one velocity component flips, picked by the current sign pair:
/// (+,+) sends dy negative, (+,-) sends dx negative, (-,-) sends dy
/// positive, (-,+) sends dx positive. Every observable bounce angle in the
/// game comes out of this cycle.
pub fn deflect(vel: Vec2) -> Vec2 {
    if vel.x > 0.0 && vel.y > 0.0 {
        Vec2::new(vel.x, -BALL_SPEED)
    } else if vel.x > 0.0 && vel.y < 0.0 {
        Vec2::new(-BALL_SPEED, vel.y)
    } else if vel.x < 0.0 && vel.y < 0.0 {
        Vec2::new(vel.x, BALL_SPEED)
    } else {
        Vec2::new(BALL_SPEED, vel.y)
    }
}

/// Bounding-box contact between the ball and a block
pub fn hits_block(ball: &Ball, block: &Block) -> bool {
    ball.rect().overlaps(&block.rect())
}

/// True once the ball reaches the left, right, or top boundary.
///
/// The position is never corrected afterwards, so a ball that kept its
/// inward axis keeps triggering this until the table flips it.
pub fn hits_wall(ball: &Ball) -> bool {
    ball.pos.x >= FIELD_WIDTH - BALL_DIAMETER
        || ball.pos.x <= 0.0
        || ball.pos.y >= FIELD_HEIGHT - BALL_DIAMETER
}

/// True once the ball's bottom edge reaches the floor
pub fn hits_floor(ball: &Ball) -> bool {
    ball.pos.y <= 0.0
}

/// Paddle contact: x spans overlap and the ball's bottom sits in the band
/// from the paddle's bottom up one block height (the band is measured with
/// the block constant; it equals the paddle height).
pub fn hits_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let p = paddle.origin;
    ball.pos.x + BALL_DIAMETER >= p.x
        && ball.pos.x <= p.x + PADDLE_WIDTH
        && ball.pos.y <= p.y + BLOCK_HEIGHT
        && ball.pos.y >= p.y
}

//! Block grid construction
//!
//! Pure and deterministic: no randomness, no failure modes.

use glam::Vec2;

use super::state::{Block, GameState};
use crate::consts::*;

/// Compute block origins for a `rows` x `per_row` grid.
///
/// Blocks go left to right within a row, wrapping to a new row every
/// `per_row` entries; each row is offset from the last by `row_step`
/// (negative steps fill downward from the origin). The returned order is
/// creation order: row-major.
pub fn grid_origins(
    rows: usize,
    per_row: usize,
    origin: Vec2,
    col_step: f32,
    row_step: f32,
) -> Vec<Vec2> {
    let mut origins = Vec::with_capacity(rows * per_row);
    for row in 0..rows {
        let y = origin.y + row as f32 * row_step;
        for col in 0..per_row {
            origins.push(Vec2::new(origin.x + col as f32 * col_step, y));
        }
    }
    origins
}

/// Fill the alive list with the standard grid
pub fn place_blocks(state: &mut GameState) {
    for origin in grid_origins(
        BLOCK_ROWS,
        BLOCKS_PER_ROW,
        GRID_ORIGIN,
        GRID_COL_STEP,
        GRID_ROW_STEP,
    ) {
        let id = state.next_entity_id();
        state.blocks.push(Block { id, origin });
    }
}

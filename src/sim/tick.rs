//! Fixed timestep simulation tick
//!
//! Core game loop that advances the ball deterministically and resolves
//! collisions in a fixed order: blocks, walls, floor, paddle.

use super::collision::{deflect, hits_block, hits_floor, hits_paddle, hits_wall};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Advance the game state by one fixed timestep.
///
/// Returns what happened, in resolution order, for the caller to apply to
/// its view. A terminal transition ends the tick immediately; ticks outside
/// the Running phase are no-ops.
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase != GamePhase::Running {
        return events;
    }

    state.time_ticks += 1;
    state.ball.pos += state.ball.vel;

    // Blocks: the first hit in list order wins this tick, even when the
    // ball's box overlaps two blocks at once.
    if let Some(i) = state
        .blocks
        .iter()
        .position(|block| hits_block(&state.ball, block))
    {
        let block = state.blocks.remove(i);
        state.ball.vel = deflect(state.ball.vel);
        state.score += 1;
        events.push(GameEvent::BlockDestroyed { id: block.id });
        events.push(GameEvent::ScoreChanged(state.score));

        if state.blocks.is_empty() {
            state.phase = GamePhase::Won;
            events.push(GameEvent::Won);
            return events;
        }
    }

    // Walls: no positional correction; if the table flips the other axis
    // the check simply fires again next tick.
    if hits_wall(&state.ball) {
        state.ball.vel = deflect(state.ball.vel);
        events.push(GameEvent::WallBounce);
    }

    if hits_floor(&state.ball) {
        state.phase = GamePhase::Lost;
        events.push(GameEvent::Lost);
        return events;
    }

    if hits_paddle(&state.ball, &state.paddle) {
        // Rest the ball on the paddle's top so it cannot sink in, then flip
        // horizontally and run the direction table twice. The two
        // applications land in different table branches, so the pair is not
        // a no-op; the paddle's characteristic bounce depends on it.
        state.ball.pos.y = state.paddle.origin.y + BLOCK_HEIGHT;
        state.ball.vel.x = -state.ball.vel.x;
        state.ball.vel = deflect(deflect(state.ball.vel));
        events.push(GameEvent::PaddleBounce);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::layout::place_blocks;
    use crate::sim::state::Block;
    use glam::Vec2;

    fn running_state() -> GameState {
        let mut state = GameState::new();
        place_blocks(&mut state);
        state.phase = GamePhase::Running;
        state
    }

    #[test]
    fn test_free_flight_integrates_velocity() {
        let mut state = running_state();
        state.ball.pos = Vec2::new(100.0, 50.0);
        state.ball.vel = Vec2::new(-2.0, 2.0);

        let events = tick(&mut state);

        assert_eq!(state.ball.pos, Vec2::new(98.0, 52.0));
        assert_eq!(state.ball.vel, Vec2::new(-2.0, 2.0));
        assert_eq!(state.phase, GamePhase::Running);
        assert!(events.is_empty());
    }

    #[test]
    fn test_ticks_outside_running_are_noops() {
        for phase in [GamePhase::Idle, GamePhase::Won, GamePhase::Lost] {
            let mut state = running_state();
            state.phase = phase;
            let pos = state.ball.pos;

            assert!(tick(&mut state).is_empty());
            assert_eq!(state.ball.pos, pos);
            assert_eq!(state.time_ticks, 0);
            assert_eq!(state.phase, phase);
        }
    }

    #[test]
    fn test_block_hit_removes_scores_and_deflects_once() {
        let mut state = running_state();
        // Heading into the first block (rect 10..110 x 270..290)
        state.ball.pos = Vec2::new(50.0, 260.0);
        state.ball.vel = Vec2::new(-2.0, 2.0);

        let events = tick(&mut state);

        assert_eq!(state.blocks.len(), 24);
        assert!(state.blocks.iter().all(|b| b.id != 1));
        assert_eq!(state.score, 1);
        // (-,+) deflects to (+,+): one application only
        assert_eq!(state.ball.vel, Vec2::new(2.0, 2.0));
        assert_eq!(
            events,
            vec![
                GameEvent::BlockDestroyed { id: 1 },
                GameEvent::ScoreChanged(1)
            ]
        );
    }

    #[test]
    fn test_at_most_one_block_per_tick() {
        // Two stacked blocks both overlapping the ball; list order decides
        let mut state = GameState::new();
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        state.blocks.push(Block {
            id: a,
            origin: Vec2::new(100.0, 150.0),
        });
        state.blocks.push(Block {
            id: b,
            origin: Vec2::new(100.0, 160.0),
        });
        state.phase = GamePhase::Running;
        state.ball.pos = Vec2::new(120.0, 153.0);
        state.ball.vel = Vec2::new(2.0, 2.0);

        let events = tick(&mut state);

        assert_eq!(state.blocks.len(), 1);
        assert_eq!(state.blocks[0].id, b);
        assert_eq!(state.score, 1);
        assert!(events.contains(&GameEvent::BlockDestroyed { id: a }));
        assert!(!events.contains(&GameEvent::BlockDestroyed { id: b }));
    }

    #[test]
    fn test_last_block_wins_even_on_the_floor() {
        // Hand-placed low block: the hit and the floor condition land in
        // the same tick, and the block check goes first.
        let mut state = GameState::new();
        let id = state.next_entity_id();
        state.blocks.push(Block {
            id,
            origin: Vec2::new(40.0, -10.0),
        });
        state.phase = GamePhase::Running;
        state.ball.pos = Vec2::new(50.0, -5.0);
        state.ball.vel = Vec2::new(2.0, -2.0);

        let events = tick(&mut state);

        assert_eq!(state.phase, GamePhase::Won);
        assert!(events.contains(&GameEvent::Won));
        assert!(!events.contains(&GameEvent::Lost));
        assert!(state.blocks.is_empty());
    }

    #[test]
    fn test_floor_transitions_to_lost() {
        let mut state = running_state();
        state.ball.pos = Vec2::new(100.0, 1.0);
        state.ball.vel = Vec2::new(-2.0, -2.0);

        let events = tick(&mut state);

        assert_eq!(state.phase, GamePhase::Lost);
        assert_eq!(events, vec![GameEvent::Lost]);

        // Terminal: nothing moves afterwards
        let pos = state.ball.pos;
        assert!(tick(&mut state).is_empty());
        assert_eq!(state.ball.pos, pos);
    }

    #[test]
    fn test_floor_wins_regardless_of_remaining_blocks() {
        let mut state = running_state();
        assert_eq!(state.blocks.len(), 25);
        state.ball.pos = Vec2::new(100.0, 1.0);
        state.ball.vel = Vec2::new(2.0, -2.0);

        tick(&mut state);

        assert_eq!(state.phase, GamePhase::Lost);
        assert_eq!(state.blocks.len(), 25);
    }

    #[test]
    fn test_wall_bounce_may_take_two_ticks_to_turn_around() {
        let mut state = GameState::new();
        // One far-away block keeps the alive list non-empty
        let id = state.next_entity_id();
        state.blocks.push(Block {
            id,
            origin: Vec2::new(10.0, 270.0),
        });
        state.phase = GamePhase::Running;
        state.ball.pos = Vec2::new(FIELD_WIDTH - BALL_DIAMETER - 1.0, 150.0);
        state.ball.vel = Vec2::new(2.0, 2.0);

        // First contact flips dy, not dx - the ball keeps drifting right
        let events = tick(&mut state);
        assert!(events.contains(&GameEvent::WallBounce));
        assert_eq!(state.ball.vel, Vec2::new(2.0, -2.0));

        // Second contact flips dx
        let events = tick(&mut state);
        assert!(events.contains(&GameEvent::WallBounce));
        assert_eq!(state.ball.vel, Vec2::new(-2.0, -2.0));
    }

    #[test]
    fn test_paddle_bounce_snaps_and_double_deflects() {
        let mut state = running_state();
        state.ball.pos = Vec2::new(240.0, 30.0);
        state.ball.vel = Vec2::new(2.0, -2.0);

        let events = tick(&mut state);

        // Snapped onto the paddle top
        assert_eq!(state.ball.pos.y, state.paddle.origin.y + BLOCK_HEIGHT);
        // dx flip then two table passes: (2,-2) -> (-2,-2) -> (-2,2) -> (2,2)
        assert_eq!(state.ball.vel, Vec2::new(2.0, 2.0));
        assert_eq!(events, vec![GameEvent::PaddleBounce]);
    }

    #[test]
    fn test_paddle_bounce_from_the_left() {
        let mut state = running_state();
        state.ball.pos = Vec2::new(240.0, 30.0);
        state.ball.vel = Vec2::new(-2.0, -2.0);

        tick(&mut state);

        // (-2,-2) -> (2,-2) -> (-2,-2) -> (-2,2)
        assert_eq!(state.ball.vel, Vec2::new(-2.0, 2.0));
        assert_eq!(state.ball.pos.y, state.paddle.origin.y + BLOCK_HEIGHT);
    }

    #[test]
    fn test_score_only_grows_and_blocks_only_shrink() {
        let mut state = running_state();
        let mut last_score = state.score;
        let mut last_blocks = state.blocks.len();

        // Drive the paddle under the ball so the round runs a while
        for _ in 0..5_000 {
            if state.phase != GamePhase::Running {
                break;
            }
            let target = state.ball.pos.x + BALL_DIAMETER / 2.0;
            state.paddle.track_pointer(target);
            tick(&mut state);

            assert!(state.score >= last_score);
            assert!(state.blocks.len() <= last_blocks);
            assert_eq!(
                state.score as usize + state.blocks.len(),
                25,
                "every score point accounts for one removed block"
            );
            last_score = state.score;
            last_blocks = state.blocks.len();
        }
    }

    #[test]
    fn test_won_fires_exactly_once_when_list_empties() {
        let mut state = GameState::new();
        let id = state.next_entity_id();
        state.blocks.push(Block {
            id,
            origin: Vec2::new(100.0, 150.0),
        });
        state.phase = GamePhase::Running;
        state.ball.pos = Vec2::new(120.0, 140.0);
        state.ball.vel = Vec2::new(2.0, 2.0);

        let events = tick(&mut state);

        assert_eq!(state.phase, GamePhase::Won);
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, GameEvent::Won))
                .count(),
            1
        );
        // No further transitions once terminal
        assert!(tick(&mut state).is_empty());
        assert_eq!(state.phase, GamePhase::Won);
    }
}

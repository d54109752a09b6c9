//! Game controller for one playthrough
//!
//! Owns the simulation state plus the visual handles for everything on
//! screen. The embedding shell drives it: `start` from the start button,
//! `advance` from the periodic timer, `pointer_moved` from the pointer
//! listener. The shell reads the returned phase to know when to cancel the
//! timer and unsubscribe input; a restart is a full reload and never goes
//! through the session.

use log::info;

use crate::sim::state::{GameEvent, GamePhase, GameState};
use crate::sim::{place_blocks, tick};
use crate::ui::{Section, View, VisualKind};

pub struct GameSession<V: View> {
    state: GameState,
    view: V,
    ball_visual: Option<V::Handle>,
    paddle_visual: Option<V::Handle>,
    /// Block id to visual, in creation order
    block_visuals: Vec<(u32, V::Handle)>,
}

impl<V: View> GameSession<V> {
    /// A fresh Idle session showing only the start overlay
    pub fn new(mut view: V) -> Self {
        view.set_section_visible(Section::Playfield, false);
        view.set_section_visible(Section::Score, false);
        view.set_section_visible(Section::StartOverlay, true);
        Self {
            state: GameState::new(),
            view,
            ball_visual: None,
            paddle_visual: None,
            block_visuals: Vec::new(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Idle to Running: place the blocks, create the visuals, reset the
    /// score display, reveal the playfield. The shell starts the timer and
    /// the pointer listener after this returns.
    pub fn start(&mut self) {
        if self.state.phase != GamePhase::Idle {
            return;
        }

        place_blocks(&mut self.state);
        for block in &self.state.blocks {
            let handle = self.view.create_visual(VisualKind::Block, block.rect());
            self.block_visuals.push((block.id, handle));
        }
        self.ball_visual = Some(
            self.view
                .create_visual(VisualKind::Ball, self.state.ball.rect()),
        );
        self.paddle_visual = Some(
            self.view
                .create_visual(VisualKind::Paddle, self.state.paddle.rect()),
        );

        self.view.set_score(0);
        self.view.set_section_visible(Section::StartOverlay, false);
        self.view.set_section_visible(Section::Playfield, true);
        self.view.set_section_visible(Section::Score, true);

        self.state.phase = GamePhase::Running;
        info!("session started with {} blocks", self.state.blocks.len());
    }

    /// One timer tick: run the simulation and apply the results to the
    /// view. Returns the phase afterwards so the caller can tear down the
    /// timer and listener once it turns terminal.
    pub fn advance(&mut self) -> GamePhase {
        for event in tick(&mut self.state) {
            match event {
                GameEvent::BlockDestroyed { id } => self.remove_block_visual(id),
                GameEvent::ScoreChanged(score) => self.view.set_score(score),
                GameEvent::Won => {
                    info!("won with score {}", self.state.score);
                    self.finish(Section::WinOverlay);
                }
                GameEvent::Lost => {
                    info!("game over at score {}", self.state.score);
                    self.finish(Section::GameOverOverlay);
                }
                GameEvent::WallBounce | GameEvent::PaddleBounce => {}
            }
        }

        if self.state.phase == GamePhase::Running {
            if let Some(handle) = &self.ball_visual {
                self.view.update_position(handle, self.state.ball.rect());
            }
        }
        self.state.phase
    }

    /// Pointer input, x relative to the playfield's left edge. Only the
    /// Running phase tracks the paddle; accepted updates move the visual,
    /// rejected ones leave it alone.
    pub fn pointer_moved(&mut self, pointer_x: f32) {
        if self.state.phase != GamePhase::Running {
            return;
        }
        if self.state.paddle.track_pointer(pointer_x) {
            if let Some(handle) = &self.paddle_visual {
                self.view.update_position(handle, self.state.paddle.rect());
            }
        }
    }

    /// Hide every panel and show the farewell screen. There is no way back
    /// short of a restart (full reload).
    pub fn cancel(&mut self) {
        for section in [
            Section::StartOverlay,
            Section::WinOverlay,
            Section::GameOverOverlay,
            Section::Playfield,
            Section::Score,
        ] {
            self.view.set_section_visible(section, false);
        }
        self.view.set_section_visible(Section::Farewell, true);
        info!("session dismissed");
    }

    fn finish(&mut self, overlay: Section) {
        self.view.set_section_visible(Section::Playfield, false);
        self.view.set_section_visible(Section::Score, false);
        self.view.set_section_visible(overlay, true);
    }

    fn remove_block_visual(&mut self, id: u32) {
        if let Some(i) = self.block_visuals.iter().position(|(bid, _)| *bid == id) {
            let (_, handle) = self.block_visuals.remove(i);
            self.view.remove_visual(handle);
        }
    }
}

//! Rendering collaborator contract
//!
//! The simulation never touches the screen; a session drives everything on
//! it through this narrow surface. The browser build renders with plain DOM
//! elements (`dom` module); tests substitute a recording double.

#[cfg(target_arch = "wasm32")]
pub mod dom;

use crate::sim::Rect;

/// What a visual represents, for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualKind {
    Block,
    Ball,
    Paddle,
}

/// Screen panels a session shows and hides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Playfield,
    Score,
    StartOverlay,
    WinOverlay,
    GameOverOverlay,
    /// Static dismissal screen; once shown, only a restart leaves it
    Farewell,
}

/// One-way surface from the session to whatever draws the game
pub trait View {
    /// Opaque reference to a placed visual
    type Handle;

    /// Place a visual element at the given coordinates
    fn create_visual(&mut self, kind: VisualKind, rect: Rect) -> Self::Handle;

    /// Remove a previously created visual (a destroyed block)
    fn remove_visual(&mut self, handle: Self::Handle);

    /// Reposition an existing visual (ball, paddle)
    fn update_position(&mut self, handle: &Self::Handle, rect: Rect);

    /// Live score display
    fn set_score(&mut self, score: u32);

    fn set_section_visible(&mut self, section: Section, visible: bool);
}

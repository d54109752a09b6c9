//! DOM-backed view
//!
//! Visuals are absolutely positioned `div`s inside the `.grid` element,
//! placed with `left`/`bottom` pixel styles; panels toggle their `display`
//! style. The host page ships with the crate under `www/`.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::{Section, View, VisualKind};
use crate::sim::Rect;

pub struct DomView {
    document: Document,
    grid: HtmlElement,
}

impl DomView {
    /// Look up the page structure. The grid must exist; the page is part of
    /// the program.
    pub fn new(document: Document) -> Self {
        let grid = document
            .query_selector(".grid")
            .expect("selector")
            .expect("no .grid element")
            .dyn_into::<HtmlElement>()
            .expect(".grid is not an HTML element");
        Self { document, grid }
    }

    fn panel(&self, section: Section) -> Option<HtmlElement> {
        let selector = match section {
            Section::Playfield => ".container-grid",
            Section::Score => ".score",
            Section::StartOverlay => ".start-game-window",
            Section::WinOverlay => ".win-window",
            Section::GameOverOverlay => ".game-over-window",
            // Built on demand, never toggled back
            Section::Farewell => return None,
        };
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn apply_position(element: &HtmlElement, rect: Rect) {
        let style = element.style();
        let _ = style.set_property("left", &format!("{}px", rect.min.x));
        let _ = style.set_property("bottom", &format!("{}px", rect.min.y));
        let _ = style.set_property("width", &format!("{}px", rect.size.x));
        let _ = style.set_property("height", &format!("{}px", rect.size.y));
    }

    /// Replace the page content with the farewell screen. The button
    /// reloads directly, which is all a restart does anyway.
    fn show_farewell(&self) {
        if let Some(container) = self.document.query_selector(".container").ok().flatten() {
            container.set_inner_html(
                "<h2>Changed your mind?</h2>\
                 <button class=\"farewell-restart\" onclick=\"location.reload()\">\
                 Play again</button>",
            );
        }
    }
}

impl View for DomView {
    type Handle = HtmlElement;

    fn create_visual(&mut self, kind: VisualKind, rect: Rect) -> HtmlElement {
        let class = match kind {
            VisualKind::Block => "block",
            VisualKind::Ball => "ball",
            VisualKind::Paddle => "paddle",
        };
        let element: HtmlElement = self
            .document
            .create_element("div")
            .expect("create div")
            .dyn_into()
            .expect("div is an HTML element");
        element.set_class_name(class);
        Self::apply_position(&element, rect);
        let _ = self.grid.append_child(&element);
        element
    }

    fn remove_visual(&mut self, handle: HtmlElement) {
        handle.remove();
    }

    fn update_position(&mut self, handle: &HtmlElement, rect: Rect) {
        Self::apply_position(handle, rect);
    }

    fn set_score(&mut self, score: u32) {
        if let Some(el) = self.document.query_selector(".score").ok().flatten() {
            el.set_text_content(Some(&score.to_string()));
        }
    }

    fn set_section_visible(&mut self, section: Section, visible: bool) {
        if section == Section::Farewell {
            if visible {
                self.show_farewell();
            }
            return;
        }
        if let Some(panel) = self.panel(section) {
            let display = if visible { "flex" } else { "none" };
            let _ = panel.style().set_property("display", display);
        }
    }
}

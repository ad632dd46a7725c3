//! The core state machine bridging portfolio content and the viewport.
//!
//! A TUI needs a single source of truth that can be interrogated and mutated
//! as the user scrolls and navigates. Everything funnels through here: the
//! rendered document and its layout, the viewport offset, the scroll-spy that
//! tracks the active section, and the navigator that glides to a requested
//! one. Every offset change, whether from a keystroke or a glide tick, is
//! treated as a scroll event and fed straight back into the spy.

use crate::content::Portfolio;
use crate::geometry::DocumentLayout;
use crate::navigator::ScrollNavigator;
use crate::render;
use crate::scroll_spy::ScrollSpy;
use crate::section::SectionRegistry;
use ratatui::text::Line;

/// Bridges content, geometry, scroll-spy and navigator for the UI.
pub struct AppState {
    /// Ordered section descriptors driving the navigation header.
    pub registry: SectionRegistry,
    /// Loaded portfolio content; immutable for the session.
    pub portfolio: Portfolio,
    /// Pre-wrapped document rows at the current width.
    pub document: Vec<Line<'static>>,
    /// Row bands of the rendered sections.
    pub layout: DocumentLayout,
    /// Tracks which section is active for the header highlight.
    pub spy: ScrollSpy,
    /// Advances smooth scrolls issued from the navigation header.
    pub navigator: ScrollNavigator,
    /// Topmost visible document row.
    pub scroll_offset: usize,
    /// Rows the body area can show; set on resize.
    pub viewport_height: usize,
    /// Keyboard cursor in the navigation header.
    pub selected_nav: usize,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    /// Configured maximum wrap width.
    pub wrap_width: usize,
    /// Width the document was last rendered at.
    rendered_width: usize,
}

impl AppState {
    #[must_use]
    /// Initialises application state and renders the document once.
    ///
    /// `probe_offset` is the sticky-header compensation handed to the
    /// scroll-spy; the active section starts as the landing section.
    pub fn new(
        portfolio: Portfolio,
        registry: SectionRegistry,
        probe_offset: usize,
        wrap_width: usize,
    ) -> Self {
        let rendered = render::render(&portfolio, &registry, wrap_width);
        let mut spy = ScrollSpy::new(&registry, probe_offset);
        spy.subscribe(|id| tracing::debug!(id, "active section changed"));
        Self {
            registry,
            portfolio,
            document: rendered.lines,
            layout: rendered.layout,
            spy,
            navigator: ScrollNavigator::new(),
            scroll_offset: 0,
            viewport_height: 0,
            selected_nav: 0,
            message: None,
            wrap_width,
            rendered_width: wrap_width,
        }
    }

    /// Adapts to a new terminal size, re-rendering when the width changed.
    ///
    /// The header and help bar take three rows each; the rest is viewport.
    /// Geometry always comes from the freshly rendered layout, so the spy
    /// never sees stale bands after a reflow.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.viewport_height = height.saturating_sub(6);
        let effective = self.wrap_width.min(width.saturating_sub(2)).max(24);
        if effective != self.rendered_width {
            let rendered = render::render(&self.portfolio, &self.registry, effective);
            self.document = rendered.lines;
            self.layout = rendered.layout;
            self.rendered_width = effective;
        }
        self.apply_offset(self.scroll_offset);
    }

    #[must_use]
    /// Furthest row the viewport can scroll to.
    pub fn max_offset(&self) -> usize {
        self.document.len().saturating_sub(self.viewport_height)
    }

    #[must_use]
    /// Currently active section id.
    pub fn active(&self) -> &str {
        self.spy.active()
    }

    /// Scrolls up by `rows`, cancelling any glide in progress.
    pub fn scroll_up(&mut self, rows: usize) {
        self.navigator.cancel();
        self.message = None;
        self.apply_offset(self.scroll_offset.saturating_sub(rows));
    }

    /// Scrolls down by `rows`, cancelling any glide in progress.
    pub fn scroll_down(&mut self, rows: usize) {
        self.navigator.cancel();
        self.message = None;
        self.apply_offset(self.scroll_offset.saturating_add(rows));
    }

    /// Scrolls up one viewport height.
    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport_height.max(1));
    }

    /// Scrolls down one viewport height.
    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport_height.max(1));
    }

    /// Jumps to the top of the document.
    pub fn home(&mut self) {
        self.navigator.cancel();
        self.message = None;
        self.apply_offset(0);
    }

    /// Jumps to the bottom of the document.
    pub fn end(&mut self) {
        self.navigator.cancel();
        self.message = None;
        self.apply_offset(self.max_offset());
    }

    /// Moves the navigation cursor left, wrapping around.
    pub fn select_prev_nav(&mut self) {
        if self.selected_nav == 0 {
            self.selected_nav = self.registry.len().saturating_sub(1);
        } else {
            self.selected_nav -= 1;
        }
    }

    /// Moves the navigation cursor right, wrapping around.
    pub fn select_next_nav(&mut self) {
        self.selected_nav = (self.selected_nav + 1) % self.registry.len().max(1);
    }

    /// Starts a glide to the section under the navigation cursor and
    /// reports the destination in the help bar.
    pub fn activate_selected(&mut self) {
        if let Some(descriptor) = self.registry.get(self.selected_nav) {
            let id = descriptor.id.clone();
            self.message = Some(format!("Aller à {}", descriptor.label));
            self.activate(&id);
        }
    }

    /// Starts a glide to the section at `index` in document order.
    ///
    /// Out-of-range indices are ignored and leave the help bar alone.
    pub fn activate_index(&mut self, index: usize) {
        if self.registry.get(index).is_some() {
            self.selected_nav = index;
            self.activate_selected();
        }
    }

    /// Starts a glide to the section with the given id.
    ///
    /// Unknown ids and sections without geometry are silent no-ops.
    pub fn activate(&mut self, id: &str) {
        self.navigator.activate(id, &self.layout, self.max_offset());
    }

    /// Advances a running glide by one tick.
    ///
    /// Each applied offset is a scroll event, so the active section may pass
    /// through intermediate values before settling. Returns whether the
    /// viewport moved (and therefore needs a redraw).
    pub fn on_tick(&mut self) -> bool {
        if let Some(next) = self.navigator.step(self.scroll_offset) {
            self.apply_offset(next);
            true
        } else {
            false
        }
    }

    /// Clamps and applies a new offset, then recomputes the active section.
    fn apply_offset(&mut self, offset: usize) {
        self.scroll_offset = offset.min(self.max_offset());
        self.spy.recompute(self.scroll_offset, &self.layout);
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;

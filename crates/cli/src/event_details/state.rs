//! Screen state for the event details view

use whatson_cms::EventDetails;

pub struct EventDetailsState {
    pub details: EventDetails,
    /// First content line shown in the viewport.
    pub scroll: usize,
    /// Total built content lines, updated on every render.
    pub content_height: usize,
    /// Visible content rows, updated on every render.
    pub viewport_height: usize,
    pub should_quit: bool,
}

impl EventDetailsState {
    pub fn new(details: EventDetails) -> Self {
        Self {
            details,
            scroll: 0,
            content_height: 0,
            viewport_height: 0,
            should_quit: false,
        }
    }

    pub fn max_scroll(&self) -> usize {
        self.content_height
            .saturating_sub(self.viewport_height.max(1))
    }

    pub fn page_size(&self) -> usize {
        self.viewport_height.saturating_sub(1).max(1)
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = (self.scroll + lines).min(self.max_scroll());
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    /// Called from render once the layout is known, so stale offsets from a
    /// resize never point past the content.
    pub fn clamp_scroll(&mut self, content_height: usize, viewport_height: usize) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.scroll = self.scroll.min(self.max_scroll());
    }
}

//! Scroll state for the content pane.

/// Scroll offset from the top of the rendered content, clamped to `max`.
///
/// `max` is owned by the renderer, which knows the content height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    offset: u16,
    max: u16,
}

impl ScrollState {
    #[must_use]
    pub fn offset(&self) -> u16 {
        self.offset
    }

    #[must_use]
    pub fn max(&self) -> u16 {
        self.max
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.offset) + delta).clamp(0, i32::from(self.max));
        self.offset = next as u16;
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    pub fn to_bottom(&mut self) {
        self.offset = self.max;
    }

    pub fn set_offset(&mut self, offset: u16) {
        self.offset = offset.min(self.max);
    }

    pub fn set_max(&mut self, max: u16) {
        self.max = max;
        self.offset = self.offset.min(max);
    }
}

/// Scroll adjustment the renderer resolves on the next frame, once line
/// positions are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollRequest {
    #[default]
    None,
    /// Bring the header of the section at this index to the top.
    Reveal(usize),
    /// Scroll just enough to keep the section header at this index visible.
    Follow(usize),
}

/// Outcome of a boundary-aware scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scroll {
    Moved,
    AtBoundary,
}

/// A window of `height` lines over the wrapped chapter text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    lines: Vec<String>,
    cursor: usize,
    height: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Viewport {
    pub fn new(height: usize) -> Self {
        Self {
            lines: Vec::new(),
            cursor: 0,
            height: height.max(1),
        }
    }

    /// Replace the content and move to `cursor`, clamped to the new content.
    pub fn set_lines(&mut self, lines: Vec<String>, cursor: usize) {
        self.lines = lines;
        self.cursor = cursor.min(self.max_cursor());
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn visible(&self) -> &[String] {
        let end = self.cursor.saturating_add(self.height).min(self.lines.len());
        &self.lines[self.cursor.min(end)..end]
    }

    fn max_cursor(&self) -> usize {
        self.lines.len().saturating_sub(self.height)
    }

    pub fn scroll_down(&mut self) -> Scroll {
        let max = self.max_cursor();
        if self.cursor < max {
            self.cursor = self.cursor.saturating_add(self.height).min(max);
            Scroll::Moved
        } else {
            Scroll::AtBoundary
        }
    }

    pub fn scroll_up(&mut self) -> Scroll {
        if self.cursor > 0 {
            self.cursor = self.cursor.saturating_sub(self.height);
            Scroll::Moved
        } else {
            Scroll::AtBoundary
        }
    }

    pub fn page_down(&mut self) {
        self.cursor = self.cursor.saturating_add(self.height).min(self.max_cursor());
    }

    pub fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.height);
    }

    pub fn jump_top(&mut self) {
        self.cursor = 0;
    }

    pub fn jump_bottom(&mut self) {
        self.cursor = self.max_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::{Scroll, Viewport};

    fn lines(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("line {i}")).collect()
    }

    #[test]
    fn scroll_down_clamps_then_reports_boundary() {
        let mut vp = Viewport::new(3);
        vp.set_lines(lines(7), 0);
        assert_eq!(vp.scroll_down(), Scroll::Moved);
        assert_eq!(vp.cursor(), 3);
        assert_eq!(vp.scroll_down(), Scroll::Moved);
        assert_eq!(vp.cursor(), 4);
        assert_eq!(vp.scroll_down(), Scroll::AtBoundary);
        assert_eq!(vp.visible(), &lines(7)[4..7]);
    }

    #[test]
    fn scroll_up_saturates_then_reports_boundary() {
        let mut vp = Viewport::new(3);
        vp.set_lines(lines(7), 4);
        assert_eq!(vp.scroll_up(), Scroll::Moved);
        assert_eq!(vp.cursor(), 1);
        assert_eq!(vp.scroll_up(), Scroll::Moved);
        assert_eq!(vp.cursor(), 0);
        assert_eq!(vp.scroll_up(), Scroll::AtBoundary);
    }

    #[test]
    fn short_content_is_always_at_both_boundaries() {
        let mut vp = Viewport::new(5);
        vp.set_lines(lines(2), 9);
        assert_eq!(vp.cursor(), 0);
        assert_eq!(vp.scroll_down(), Scroll::AtBoundary);
        assert_eq!(vp.scroll_up(), Scroll::AtBoundary);
        assert_eq!(vp.visible().len(), 2);
    }

    #[test]
    fn paging_and_jumps_stay_in_range() {
        let mut vp = Viewport::new(2);
        vp.set_lines(lines(5), 0);
        vp.page_down();
        vp.page_down();
        vp.page_down();
        assert_eq!(vp.cursor(), 3);
        vp.page_up();
        assert_eq!(vp.cursor(), 1);
        vp.jump_bottom();
        assert_eq!(vp.cursor(), 3);
        vp.jump_top();
        assert_eq!(vp.cursor(), 0);
    }

    #[test]
    fn huge_height_does_not_overflow() {
        let mut vp = Viewport::new(usize::MAX);
        vp.set_lines(lines(3), 2);
        assert_eq!(vp.cursor(), 0);
        assert_eq!(vp.visible(), &lines(3)[..]);
        vp.page_down();
        assert_eq!(vp.cursor(), 0);
        assert_eq!(vp.scroll_down(), Scroll::AtBoundary);
        assert_eq!(vp.scroll_up(), Scroll::AtBoundary);
    }

    #[test]
    fn zero_height_is_treated_as_one_line() {
        let vp = Viewport::new(0);
        assert_eq!(vp.height(), 1);
    }
}

use crate::{resolve_link, wrap, Chapter, Effect, HistoryRecord, ReaderView, Viewport};

pub type LoadId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Layout of the reading window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Wrap width in code points.
    pub width: usize,
    /// Lines shown per page.
    pub height: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingLoad {
    load_id: LoadId,
    url: String,
    cursor: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Next,
    Prev,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReaderState {
    config: ReaderConfig,
    origin_url: String,
    current_url: String,
    chapter: Option<Chapter>,
    phase: Phase,
    pending: Option<PendingLoad>,
    next_load_id: LoadId,
    status: Option<String>,
    viewport: Viewport,
    /// Cursor to persist while no chapter has arrived yet.
    restore_cursor: usize,
    dirty: bool,
}

impl ReaderState {
    pub fn new(config: ReaderConfig) -> Self {
        Self {
            config,
            viewport: Viewport::new(config.height),
            ..Self::default()
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Chapter title, or the current URL when no title is known.
    pub fn current_title(&self) -> &str {
        match &self.chapter {
            Some(chapter) if !chapter.title.trim().is_empty() => &chapter.title,
            _ => &self.current_url,
        }
    }

    pub fn chapter(&self) -> Option<&Chapter> {
        self.chapter.as_ref()
    }

    pub fn has_next(&self) -> bool {
        self.link(Direction::Next).is_some()
    }

    pub fn has_prev(&self) -> bool {
        self.link(Direction::Prev).is_some()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Position to persist for the next session.
    ///
    /// Until the first chapter arrives the requested cursor is kept, so an
    /// interrupted or failed resume does not reset the saved position.
    pub fn history_record(&self) -> HistoryRecord {
        let cursor = match self.chapter {
            Some(_) => self.viewport.cursor(),
            None => self.restore_cursor,
        };
        HistoryRecord {
            origin_url: self.origin_url.clone(),
            last_url: self.current_url.clone(),
            cursor,
        }
    }

    pub fn view(&self) -> ReaderView {
        let total = self.viewport.len();
        let cursor = self.viewport.cursor();
        let progress = if self.viewport.is_empty() {
            100.0
        } else {
            (cursor + 1) as f64 / total as f64 * 100.0
        };
        ReaderView {
            lines: self.viewport.visible().to_vec(),
            height: self.viewport.height(),
            cursor,
            total,
            progress,
            title: self.current_title().to_string(),
            status: self.status.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether the view changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Record where the session started. Until a chapter has loaded, `url`
    /// also becomes the current location so that `Reload` can retry it.
    pub(crate) fn set_location(&mut self, origin: &str, url: &str) {
        self.origin_url = origin.to_string();
        if self.chapter.is_none() {
            self.current_url = url.to_string();
        }
    }

    fn link(&self, direction: Direction) -> Option<&str> {
        let chapter = self.chapter.as_ref()?;
        let link = match direction {
            Direction::Next => &chapter.next_link,
            Direction::Prev => &chapter.prev_link,
        };
        Some(link.as_str()).filter(|l| !l.trim().is_empty())
    }

    /// Absolute target of the link in `direction`, if the chapter has one.
    pub(crate) fn link_target(&self, direction: Direction) -> Option<String> {
        self.link(direction)
            .map(|link| resolve_link(&self.current_url, link))
    }

    /// Enter `Loading` for `url` and return the effect that performs it.
    pub(crate) fn begin_load(&mut self, url: String, cursor: usize) -> Effect {
        self.next_load_id += 1;
        let load_id = self.next_load_id;
        if self.chapter.is_none() {
            self.restore_cursor = cursor;
        }
        self.pending = Some(PendingLoad {
            load_id,
            url: url.clone(),
            cursor,
        });
        self.phase = Phase::Loading;
        self.status = Some(format!("loading {url}"));
        self.dirty = true;
        Effect::Load { load_id, url }
    }

    pub(crate) fn is_pending(&self, load_id: LoadId) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| pending.load_id == load_id)
    }

    pub(crate) fn set_status(&mut self, status: String) {
        self.status = Some(status);
        self.dirty = true;
    }

    pub(crate) fn complete_load(&mut self, url: String, chapter: Chapter) {
        let cursor = self
            .pending
            .take()
            .map(|pending| pending.cursor)
            .unwrap_or_default();
        let lines = wrap(&chapter.body_text, self.config.width);
        self.viewport.set_lines(lines, cursor);
        self.restore_cursor = 0;
        self.current_url = url;
        self.chapter = Some(chapter);
        self.phase = Phase::Ready;
        self.status = None;
        self.dirty = true;
    }

    /// Drop a stale error so the position line shows again.
    pub(crate) fn clear_error(&mut self) {
        if self.phase == Phase::Failed && self.status.is_some() {
            self.status = None;
            self.dirty = true;
        }
    }

    pub(crate) fn fail_load(&mut self, message: &str) {
        let target = self.pending.take().map(|pending| pending.url);
        self.phase = Phase::Failed;
        self.status = Some(match target {
            Some(url) => format!("error loading {url}: {message}"),
            None => format!("error: {message}"),
        });
        self.dirty = true;
    }
}

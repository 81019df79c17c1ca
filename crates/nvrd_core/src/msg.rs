use crate::{Chapter, HistoryRecord, LoadId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStage {
    Downloading,
    Decoding,
    Extracting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Load an explicit URL or path and restore `cursor` once it arrives.
    Open { url: String, cursor: usize },
    /// Continue a previous session from its saved position.
    Resume(HistoryRecord),
    /// Load the current URL again.
    Reload,
    /// Follow the current chapter's next link.
    NextChapter,
    /// Follow the current chapter's previous link.
    PrevChapter,
    /// Engine progress for the pending load.
    LoadProgress {
        load_id: LoadId,
        stage: LoadStage,
        bytes: Option<u64>,
    },
    /// Engine finished a load.
    ChapterLoaded {
        load_id: LoadId,
        url: String,
        chapter: Chapter,
    },
    /// Engine failed a load.
    LoadFailed { load_id: LoadId, message: String },
    /// Move one page down, continuing into the next chapter at the end.
    ScrollDown,
    /// Move one page up, continuing into the previous chapter at the top.
    ScrollUp,
    PageDown,
    PageUp,
    JumpTop,
    JumpBottom,
    /// User asked to leave; history is saved before quitting.
    Quit,
    /// Fallback for placeholder wiring.
    NoOp,
}

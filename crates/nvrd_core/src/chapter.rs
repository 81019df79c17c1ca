/// One extracted page as the reader sees it.
///
/// Links are the raw `href` values found on the page. They may be relative
/// and are empty when the page has no link in that direction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Chapter {
    pub title: String,
    pub body_text: String,
    pub next_link: String,
    pub prev_link: String,
}

/// Last reading position, persisted between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryRecord {
    pub origin_url: String,
    pub last_url: String,
    pub cursor: usize,
}

use scraper::{Html, Selector};

/// Anchor labels that point to the following page.
pub const NEXT_LABELS: [&str; 2] = ["下一章", "下一页"];
/// Anchor labels that point to the preceding page.
pub const PREV_LABELS: [&str; 2] = ["上一章", "上一页"];

/// Raw `href` values of the chapter navigation anchors, empty when absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChapterLinks {
    pub next: String,
    pub prev: String,
}

pub fn extract_links(html: &str) -> ChapterLinks {
    links_of(&Html::parse_document(html))
}

pub fn extract_title(html: &str) -> String {
    title_of(&Html::parse_document(html))
}

/// Scan body anchors in document order; the last match of each kind wins.
pub(crate) fn links_of(doc: &Html) -> ChapterLinks {
    let mut links = ChapterLinks::default();
    let Ok(anchors) = Selector::parse("body a") else {
        return links;
    };
    for anchor in doc.select(&anchors) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let label = anchor.text().collect::<String>();
        let label = label.trim();
        if NEXT_LABELS.contains(&label) {
            links.next = href.to_string();
        } else if PREV_LABELS.contains(&label) {
            links.prev = href.to_string();
        }
    }
    links
}

pub(crate) fn title_of(doc: &Html) -> String {
    Selector::parse("title")
        .ok()
        .and_then(|selector| doc.select(&selector).next())
        .map(|title| title.text().collect())
        .unwrap_or_default()
}

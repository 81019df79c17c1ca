//! Locating the narrative text of a page without site-specific rules.
//!
//! Starting at `<body>`, the descent repeatedly picks the child holding the
//! largest share of its parent's text. Menus, ad slots and footers make the
//! sizes of sibling blocks very uneven, while a run of paragraphs makes them
//! similar. Once the standard deviation of the sibling sizes drops to
//! [`VARIANCE_THRESHOLD`] or below, the current node is taken as the content
//! container and its paragraphs are collected.

use ego_tree::NodeId;
use nvrd_logging::nvrd_trace;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

use crate::links::{links_of, title_of, ChapterLinks};

/// Prefix of every paragraph line in the extracted text.
pub const PARAGRAPH_INDENT: &str = "    ";

/// Sibling size spread (in chars) above which the descent continues.
pub const VARIANCE_THRESHOLD: f64 = 100.0;

const NOISE_TAGS: [&str; 2] = ["script", "style"];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractedContent {
    /// `<title>` text, verbatim.
    pub title: String,
    /// Indented paragraphs separated by `\n`; empty when nothing was found.
    pub body_text: String,
    pub links: ChapterLinks,
}

pub trait Extractor: Send + Sync {
    fn extract(&self, html: &str) -> ExtractedContent;
}

/// Structural extractor for serialized fiction pages.
#[derive(Debug, Default, Clone, Copy)]
pub struct NovelExtractor;

impl Extractor for NovelExtractor {
    fn extract(&self, html: &str) -> ExtractedContent {
        parse_page(html)
    }
}

/// Parse `html` once and extract title, chapter links and body text from it.
pub fn parse_page(html: &str) -> ExtractedContent {
    let mut doc = Html::parse_document(html);
    let title = title_of(&doc);
    let links = links_of(&doc);
    strip_noise(&mut doc);
    let body_text = content_of(&doc);
    ExtractedContent {
        title,
        body_text,
        links,
    }
}

/// Body text of `html` as indented paragraphs, or an empty string.
pub fn extract_content(html: &str) -> String {
    let mut doc = Html::parse_document(html);
    strip_noise(&mut doc);
    content_of(&doc)
}

fn strip_noise(doc: &mut Html) {
    let noise: Vec<NodeId> = doc
        .tree
        .nodes()
        .filter(|node| {
            matches!(node.value(), Node::Element(element) if NOISE_TAGS.contains(&element.name()))
        })
        .map(|node| node.id())
        .collect();
    for id in noise {
        if let Some(mut node) = doc.tree.get_mut(id) {
            node.detach();
        }
    }
}

fn content_of(doc: &Html) -> String {
    let Some(body) = Selector::parse("body")
        .ok()
        .and_then(|selector| doc.select(&selector).next())
    else {
        return String::new();
    };
    settle(body, text_len(body))
        .map(collect_paragraphs)
        .unwrap_or_default()
}

/// Measurements of one level of the descent.
#[derive(Debug)]
struct LevelSurvey<'a> {
    /// Child with the smallest slope, with its text length.
    candidate: Option<(ElementRef<'a>, usize)>,
    min_slope: f64,
    sizes: Vec<usize>,
}

impl LevelSurvey<'_> {
    /// Population standard deviation of the child sizes.
    fn spread(&self) -> f64 {
        if self.sizes.is_empty() {
            return 0.0;
        }
        let count = self.sizes.len() as f64;
        let mean = self.sizes.iter().sum::<usize>() as f64 / count;
        let squares: f64 = self
            .sizes
            .iter()
            .map(|&size| (size as f64 - mean).powi(2))
            .sum();
        (squares / count).sqrt()
    }
}

/// Slope of a child: the share of the parent's `size` that it does not hold.
fn slope(size: usize, child_len: usize) -> f64 {
    if size == 0 {
        return 1.0;
    }
    (size as f64 - child_len as f64) / size as f64
}

fn survey<'a>(children: &[ElementRef<'a>], size: usize) -> LevelSurvey<'a> {
    let measured: Vec<(ElementRef<'a>, usize, f64)> = children
        .iter()
        .map(|&child| {
            let len = text_len(child);
            (child, len, slope(size, len))
        })
        .collect();
    // Strict comparison keeps the first of equally good children.
    let best = measured.iter().fold(None, |best: Option<&(ElementRef<'a>, usize, f64)>, entry| {
        match best {
            Some(current) if current.2 <= entry.2 => Some(current),
            _ => Some(entry),
        }
    });
    LevelSurvey {
        candidate: best.map(|&(element, len, _)| (element, len)),
        min_slope: best.map_or(1.0, |&(_, _, slope)| slope),
        sizes: measured.iter().map(|&(_, len, _)| len).collect(),
    }
}

/// Walk down from `body` to the node whose children look like paragraphs.
///
/// Returns `None` when a level without child elements is reached first.
fn settle(body: ElementRef<'_>, body_size: usize) -> Option<ElementRef<'_>> {
    let mut node = body;
    let mut size = body_size;
    loop {
        let children: Vec<ElementRef<'_>> = node.children().filter_map(ElementRef::wrap).collect();
        if let [only] = children.as_slice() {
            node = *only;
            continue;
        }

        let level = survey(&children, size);
        let (candidate, candidate_size) = level.candidate?;
        let spread = level.spread();
        nvrd_trace!(
            "<{}> children={} min_slope={:.3} spread={:.1}",
            node.value().name(),
            children.len(),
            level.min_slope,
            spread
        );

        if spread > VARIANCE_THRESHOLD {
            node = candidate;
            size = candidate_size;
        } else {
            return Some(node);
        }
    }
}

/// Direct text nodes and `<p>` children of `container`, one indented line each.
fn collect_paragraphs(container: ElementRef<'_>) -> String {
    container
        .children()
        .filter_map(|child| match child.value() {
            Node::Text(text) => Some(text.trim().to_string()),
            Node::Element(element) if element.name() == "p" => {
                ElementRef::wrap(child).map(|p| p.text().collect::<String>().trim().to_string())
            }
            _ => None,
        })
        .filter(|line| !line.is_empty())
        .map(|line| format!("{PARAGRAPH_INDENT}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn text_len(element: ElementRef<'_>) -> usize {
    element.text().map(|text| text.chars().count()).sum()
}

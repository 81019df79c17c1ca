use std::sync::Once;

use nvrd_core::{update, Chapter, Effect, HistoryRecord, LoadId, Msg, Phase, ReaderConfig, ReaderState};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(nvrd_logging::initialize_for_tests);
}

fn load_id_of(effects: &[Effect]) -> LoadId {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::Load { load_id, .. } => Some(*load_id),
            _ => None,
        })
        .expect("load effect")
}

fn loaded_at(url: &str, chapter: Chapter) -> ReaderState {
    let state = ReaderState::new(ReaderConfig { width: 40, height: 2 });
    let (state, effects) = update(
        state,
        Msg::Open {
            url: url.to_string(),
            cursor: 0,
        },
    );
    let load_id = load_id_of(&effects);
    let (mut state, _) = update(
        state,
        Msg::ChapterLoaded {
            load_id,
            url: url.to_string(),
            chapter,
        },
    );
    state.consume_dirty();
    state
}

fn chapter(body: &str, next: &str, prev: &str) -> Chapter {
    Chapter {
        title: "第一章".to_string(),
        body_text: body.to_string(),
        next_link: next.to_string(),
        prev_link: prev.to_string(),
    }
}

#[test]
fn next_chapter_loads_resolved_link() {
    init_logging();
    let state = loaded_at(
        "https://site.com/book/1.html",
        chapter("    正文", "/book/2.html", ""),
    );
    assert_eq!(state.chapter().unwrap().next_link, "/book/2.html");
    assert!(state.has_next());
    assert!(!state.has_prev());

    let (state, effects) = update(state, Msg::NextChapter);
    assert!(state.is_loading());
    assert_eq!(
        effects,
        vec![Effect::Load {
            load_id: 2,
            url: "https://site.com/book/2.html".to_string(),
        }]
    );
}

#[test]
fn prev_chapter_joins_relative_link_to_directory() {
    init_logging();
    let state = loaded_at(
        "https://site.com/book/vol1/2.html",
        chapter("    正文", "", "1.html"),
    );
    let (_, effects) = update(state, Msg::PrevChapter);
    assert_eq!(
        effects,
        vec![Effect::Load {
            load_id: 2,
            url: "https://site.com/book/vol1/1.html".to_string(),
        }]
    );
}

#[test]
fn missing_links_make_navigation_a_noop() {
    init_logging();
    let state = loaded_at("https://site.com/book/1.html", chapter("    正文", "", ""));
    assert!(!state.has_next());
    assert!(!state.has_prev());

    let (next, effects) = update(state.clone(), Msg::NextChapter);
    assert!(effects.is_empty());
    assert_eq!(next, state);

    let (next, effects) = update(state.clone(), Msg::PrevChapter);
    assert!(effects.is_empty());
    assert_eq!(next, state);
    assert_eq!(next.chapter(), state.chapter());
}

#[test]
fn has_next_only_looks_at_next_link() {
    init_logging();
    let state = loaded_at("https://site.com/1.html", chapter("    a", "", "/0.html"));
    assert!(!state.has_next());
    assert!(state.has_prev());
}

#[test]
fn scrolling_past_the_end_falls_through_to_next_chapter() {
    init_logging();
    let state = loaded_at(
        "https://site.com/book/1.html",
        chapter("    one\n    two\n    three", "2.html", ""),
    );
    assert_eq!(state.viewport().len(), 3);

    let (state, effects) = update(state, Msg::ScrollDown);
    assert!(effects.is_empty());
    assert_eq!(state.viewport().cursor(), 1);

    let (state, effects) = update(state, Msg::ScrollDown);
    assert_eq!(
        effects,
        vec![Effect::Load {
            load_id: 2,
            url: "https://site.com/book/2.html".to_string(),
        }]
    );

    // The old chapter stays visible while the next one is loading.
    assert_eq!(state.view().lines, vec!["    two", "    three"]);
}

#[test]
fn paging_never_falls_through() {
    init_logging();
    let state = loaded_at("https://site.com/1.html", chapter("    one", "2.html", "0.html"));
    let (state, effects) = update(state, Msg::PageDown);
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::PageUp);
    assert!(effects.is_empty());
    let (_, effects) = update(state, Msg::ScrollUp);
    assert_eq!(
        effects,
        vec![Effect::Load {
            load_id: 2,
            url: "https://site.com/0.html".to_string(),
        }]
    );
}

#[test]
fn loaded_chapter_commits_url_and_saves_history() {
    init_logging();
    let state = loaded_at("https://site.com/book/1.html", chapter("    a", "2.html", ""));
    let (state, effects) = update(state, Msg::NextChapter);
    let load_id = load_id_of(&effects);
    assert_eq!(state.current_url(), "https://site.com/book/1.html");

    let (state, effects) = update(
        state,
        Msg::ChapterLoaded {
            load_id,
            url: "https://site.com/book/2.html".to_string(),
            chapter: chapter("    b", "3.html", "1.html"),
        },
    );
    assert_eq!(state.phase(), Phase::Ready);
    assert_eq!(state.current_url(), "https://site.com/book/2.html");
    assert_eq!(state.history_record().origin_url, "https://site.com/book/1.html");
    assert_eq!(
        effects,
        vec![Effect::SaveHistory(HistoryRecord {
            origin_url: "https://site.com/book/1.html".to_string(),
            last_url: "https://site.com/book/2.html".to_string(),
            cursor: 0,
        })]
    );
}

#[test]
fn links_resolve_against_the_url_the_page_was_served_from() {
    init_logging();
    let state = ReaderState::new(ReaderConfig::default());
    let (state, effects) = update(
        state,
        Msg::Open {
            url: "https://site.com/old/1.html".to_string(),
            cursor: 0,
        },
    );
    let load_id = load_id_of(&effects);
    let (state, _) = update(
        state,
        Msg::ChapterLoaded {
            load_id,
            url: "https://site.com/book/vol1/1.html".to_string(),
            chapter: chapter("    a", "2.html", ""),
        },
    );
    assert_eq!(state.current_url(), "https://site.com/book/vol1/1.html");

    let (_, effects) = update(state, Msg::NextChapter);
    assert_eq!(
        effects,
        vec![Effect::Load {
            load_id: 2,
            url: "https://site.com/book/vol1/2.html".to_string(),
        }]
    );
}

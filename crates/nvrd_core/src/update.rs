use crate::state::Direction;
use crate::{Effect, LoadStage, Msg, ReaderState, Scroll};

/// Pure update function: applies a message to state and returns any effects.
///
/// Only one load may be in flight. Every message that would start another one
/// while `Loading` is dropped without touching the state.
pub fn update(mut state: ReaderState, msg: Msg) -> (ReaderState, Vec<Effect>) {
    let effects = match msg {
        Msg::Open { url, cursor } => {
            let url = url.trim().to_string();
            if state.is_loading() || url.is_empty() {
                return (state, Vec::new());
            }
            state.set_location(&url, &url);
            vec![state.begin_load(url, cursor)]
        }
        Msg::Resume(record) => {
            let target = if record.last_url.trim().is_empty() {
                record.origin_url.trim().to_string()
            } else {
                record.last_url.trim().to_string()
            };
            if state.is_loading() || target.is_empty() {
                return (state, Vec::new());
            }
            let origin = match record.origin_url.trim() {
                "" => target.clone(),
                origin => origin.to_string(),
            };
            state.set_location(&origin, &target);
            vec![state.begin_load(target, record.cursor)]
        }
        Msg::Reload => {
            if state.is_loading() || state.current_url().is_empty() {
                return (state, Vec::new());
            }
            let url = state.current_url().to_string();
            let cursor = state.history_record().cursor;
            vec![state.begin_load(url, cursor)]
        }
        Msg::NextChapter => follow(&mut state, Direction::Next),
        Msg::PrevChapter => follow(&mut state, Direction::Prev),
        Msg::LoadProgress {
            load_id,
            stage,
            bytes,
        } => {
            if state.is_pending(load_id) {
                state.set_status(describe_progress(stage, bytes));
            }
            Vec::new()
        }
        Msg::ChapterLoaded {
            load_id,
            url,
            chapter,
        } => {
            if !state.is_pending(load_id) {
                return (state, Vec::new());
            }
            state.complete_load(url, chapter);
            vec![Effect::SaveHistory(state.history_record())]
        }
        Msg::LoadFailed { load_id, message } => {
            if state.is_pending(load_id) {
                state.fail_load(&message);
            }
            Vec::new()
        }
        Msg::ScrollDown | Msg::ScrollUp | Msg::PageDown | Msg::PageUp | Msg::JumpTop
        | Msg::JumpBottom => {
            state.clear_error();
            scroll(&mut state, msg)
        }
        Msg::Quit => vec![Effect::SaveHistory(state.history_record()), Effect::Quit],
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn scroll(state: &mut ReaderState, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::ScrollDown => match state.viewport_mut().scroll_down() {
            Scroll::Moved => {
                state.mark_dirty();
                Vec::new()
            }
            Scroll::AtBoundary => follow(state, Direction::Next),
        },
        Msg::ScrollUp => match state.viewport_mut().scroll_up() {
            Scroll::Moved => {
                state.mark_dirty();
                Vec::new()
            }
            Scroll::AtBoundary => follow(state, Direction::Prev),
        },
        Msg::PageDown => {
            state.viewport_mut().page_down();
            state.mark_dirty();
            Vec::new()
        }
        Msg::PageUp => {
            state.viewport_mut().page_up();
            state.mark_dirty();
            Vec::new()
        }
        Msg::JumpTop => {
            state.viewport_mut().jump_top();
            state.mark_dirty();
            Vec::new()
        }
        Msg::JumpBottom => {
            state.viewport_mut().jump_bottom();
            state.mark_dirty();
            Vec::new()
        }
        _ => Vec::new(),
    }
}

fn follow(state: &mut ReaderState, direction: Direction) -> Vec<Effect> {
    if state.is_loading() {
        return Vec::new();
    }
    match state.link_target(direction) {
        Some(url) => vec![state.begin_load(url, 0)],
        None => Vec::new(),
    }
}

fn describe_progress(stage: LoadStage, bytes: Option<u64>) -> String {
    let label = match stage {
        LoadStage::Downloading => "downloading",
        LoadStage::Decoding => "decoding",
        LoadStage::Extracting => "extracting",
    };
    match bytes {
        Some(bytes) => format!("{label} {:.1} KiB", bytes as f64 / 1024.0),
        None => format!("{label}..."),
    }
}

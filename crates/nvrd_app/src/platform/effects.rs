use nvrd_core::{Chapter, Effect, LoadStage, Msg};
use nvrd_engine::{EngineEvent, EngineHandle, ExtractedContent, FetchSettings, Stage};
use nvrd_logging::{nvrd_error, nvrd_info, nvrd_warn};

use super::persistence::HistoryStore;

/// Carries out the effects returned by `update` and turns engine events
/// back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
    history: HistoryStore,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings, history: HistoryStore) -> Self {
        Self {
            engine: EngineHandle::new(settings),
            history,
        }
    }

    /// Run `effects` in order. Returns `true` once a quit was requested.
    pub fn run(&self, effects: Vec<Effect>) -> bool {
        let mut quit = false;
        for effect in effects {
            match effect {
                Effect::Load { load_id, url } => {
                    nvrd_info!("Load load_id={} url={}", load_id, url);
                    self.engine.load(load_id, url);
                }
                Effect::SaveHistory(record) => {
                    if let Err(err) = self.history.save(&record) {
                        nvrd_error!(
                            "Failed to write history to {:?}: {}",
                            self.history.path(),
                            err
                        );
                    }
                }
                Effect::Quit => quit = true,
            }
        }
        quit
    }

    /// Messages for every engine event received since the last call.
    pub fn pending_messages(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(event_to_msg)
            .collect()
    }
}

pub fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::Progress(progress) => Msg::LoadProgress {
            load_id: progress.load_id,
            stage: map_stage(progress.stage),
            bytes: progress.bytes,
        },
        EngineEvent::PageLoaded {
            load_id,
            source,
            result,
        } => match result {
            Ok(page) => {
                if page.url != source {
                    nvrd_info!("Load {} of {} settled at {}", load_id, source, page.url);
                }
                Msg::ChapterLoaded {
                    load_id,
                    url: page.url,
                    chapter: to_chapter(page.content),
                }
            }
            Err(err) => {
                nvrd_warn!("Load {} of {} failed: {}", load_id, source, err);
                Msg::LoadFailed {
                    load_id,
                    message: err.to_string(),
                }
            }
        },
    }
}

fn to_chapter(content: ExtractedContent) -> Chapter {
    Chapter {
        title: content.title,
        body_text: content.body_text,
        next_link: content.links.next,
        prev_link: content.links.prev,
    }
}

fn map_stage(stage: Stage) -> LoadStage {
    match stage {
        Stage::Downloading => LoadStage::Downloading,
        Stage::Decoding => LoadStage::Decoding,
        Stage::Extracting => LoadStage::Extracting,
    }
}

use std::sync::{mpsc, Arc};
use std::thread;

use nvrd_logging::{nvrd_error, nvrd_warn};

use crate::fetch::{ChannelProgressSink, FetchSettings, Fetcher, ReqwestFetcher};
use crate::{
    load_source, EngineEvent, FailureKind, FetchError, LoadId, NovelExtractor, PageError, Source,
};

enum EngineCommand {
    Load { load_id: LoadId, source: String },
}

/// Background loader: one thread owning a tokio runtime, driven over channels.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(ReqwestFetcher::new(settings));

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    nvrd_error!("Failed to start engine runtime: {}", err);
                    reject_all(&cmd_rx, &event_tx, &err.to_string());
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    /// Start loading `source` (URL or file path); the result arrives via [`Self::try_recv`].
    pub fn load(&self, load_id: LoadId, source: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Load {
            load_id,
            source: source.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Load { load_id, source } => {
            let sink = ChannelProgressSink::new(event_tx.clone());
            let result = load_source(
                fetcher,
                &NovelExtractor,
                load_id,
                &Source::detect(&source),
                &sink,
            )
            .await;
            if let Err(err) = &result {
                nvrd_warn!("Load {} of {} failed: {}", load_id, source, err);
            }
            let _ = event_tx.send(EngineEvent::PageLoaded {
                load_id,
                source,
                result,
            });
        }
    }
}

fn reject_all(
    cmd_rx: &mpsc::Receiver<EngineCommand>,
    event_tx: &mpsc::Sender<EngineEvent>,
    reason: &str,
) {
    while let Ok(EngineCommand::Load { load_id, source }) = cmd_rx.recv() {
        let error = FetchError::new(FailureKind::Network, format!("engine unavailable: {reason}"));
        let _ = event_tx.send(EngineEvent::PageLoaded {
            load_id,
            source,
            result: Err(PageError::Fetch(error)),
        });
    }
}

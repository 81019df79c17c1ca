use crate::{HistoryRecord, LoadId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch and extract `url`; the outcome comes back tagged with `load_id`.
    Load { load_id: LoadId, url: String },
    SaveHistory(HistoryRecord),
    Quit,
}

use std::fmt;

use crate::{ExtractedContent, PageError};

pub type LoadId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Downloading,
    Decoding,
    Extracting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadProgress {
    pub load_id: LoadId,
    pub stage: Stage,
    pub bytes: Option<u64>,
}

/// Extracted page together with the location it was actually read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedPage {
    /// Final URL after redirects, or the path of a local file.
    pub url: String,
    pub content: ExtractedContent,
}

#[derive(Debug)]
pub enum EngineEvent {
    Progress(LoadProgress),
    PageLoaded {
        load_id: LoadId,
        source: String,
        result: Result<LoadedPage, PageError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub bytes: Vec<u8>,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub original_url: String,
    pub final_url: String,
    pub content_type: Option<String>,
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

//! Reader engine: fetching, decoding, extraction and the background loader.
mod decode;
mod engine;
mod extract;
mod fetch;
mod links;
mod persist;
mod source;
mod types;

pub use decode::{decode_page, decode_text, legacy_encodings, DecodeError, DecodedText};
pub use engine::EngineHandle;
pub use extract::{
    extract_content, parse_page, ExtractedContent, Extractor, NovelExtractor, PARAGRAPH_INDENT,
    VARIANCE_THRESHOLD,
};
pub use fetch::{
    ChannelProgressSink, FetchSettings, Fetcher, ProgressSink, ReqwestFetcher, DEFAULT_USER_AGENT,
};
pub use links::{extract_links, extract_title, ChapterLinks, NEXT_LABELS, PREV_LABELS};
pub use persist::{ensure_dir, read_optional, AtomicFileWriter, PersistError};
pub use source::{load_source, read_local, PageError, Source};
pub use types::{
    EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput, LoadId, LoadProgress, LoadedPage,
    Stage,
};

use std::path::{Path, PathBuf};

use nvrd_logging::{nvrd_debug, nvrd_info};

use crate::{
    decode_page, decode_text, ChapterLinks, DecodeError, EngineEvent, ExtractedContent, Extractor,
    FetchError, Fetcher, LoadId, LoadProgress, LoadedPage, ProgressSink, Stage,
};

/// Where a page comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Remote(String),
    Local(PathBuf),
}

impl Source {
    /// `http://` and `https://` inputs are fetched, anything else is a file path.
    pub fn detect(input: &str) -> Self {
        let trimmed = input.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Source::Remote(trimmed.to_string())
        } else {
            Source::Local(PathBuf::from(trimmed))
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub async fn read_local(path: &Path) -> Result<Vec<u8>, PageError> {
    tokio::fs::read(path).await.map_err(|source| PageError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Fetch, decode and extract one page.
///
/// Remote pages report the URL after redirects, which is the base for their
/// relative links. Local files are plain text: the whole decoded file is the body, the file
/// name is the title and there are no chapter links.
pub async fn load_source(
    fetcher: &dyn Fetcher,
    extractor: &dyn Extractor,
    load_id: LoadId,
    source: &Source,
    sink: &dyn ProgressSink,
) -> Result<LoadedPage, PageError> {
    match source {
        Source::Remote(url) => {
            let output = fetcher.fetch(load_id, url, sink).await?;
            emit(sink, load_id, Stage::Decoding, Some(output.metadata.byte_len));
            let decoded = decode_page(&output.bytes, output.metadata.content_type.as_deref())?;
            let metadata = output.metadata;
            if metadata.final_url != metadata.original_url {
                nvrd_info!("{} redirected to {}", metadata.original_url, metadata.final_url);
            }
            nvrd_info!(
                "Fetched {} ({} bytes, {})",
                metadata.final_url,
                metadata.byte_len,
                decoded.encoding_label
            );
            emit(sink, load_id, Stage::Extracting, None);
            let content = extractor.extract(&decoded.text);
            nvrd_debug!(
                "Extracted {} chars, next={:?} prev={:?}",
                content.body_text.chars().count(),
                content.links.next,
                content.links.prev
            );
            Ok(LoadedPage {
                url: metadata.final_url,
                content,
            })
        }
        Source::Local(path) => {
            let bytes = read_local(path).await?;
            emit(sink, load_id, Stage::Decoding, Some(bytes.len() as u64));
            let decoded = decode_text(&bytes)?;
            nvrd_info!("Read {:?} as {}", path, decoded.encoding_label);
            let title = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            Ok(LoadedPage {
                url: path.display().to_string(),
                content: ExtractedContent {
                    title,
                    body_text: decoded.text,
                    links: ChapterLinks::default(),
                },
            })
        }
    }
}

fn emit(sink: &dyn ProgressSink, load_id: LoadId, stage: Stage, bytes: Option<u64>) {
    sink.emit(EngineEvent::Progress(LoadProgress {
        load_id,
        stage,
        bytes,
    }));
}

#[cfg(test)]
mod tests {
    use super::Source;
    use std::path::PathBuf;

    #[test]
    fn detects_remote_and_local_sources() {
        assert_eq!(
            Source::detect(" https://site.com/1.html "),
            Source::Remote("https://site.com/1.html".to_string())
        );
        assert_eq!(
            Source::detect("HTTP://site.com/"),
            Source::Remote("HTTP://site.com/".to_string())
        );
        assert_eq!(
            Source::detect("books/novel.txt"),
            Source::Local(PathBuf::from("books/novel.txt"))
        );
    }
}

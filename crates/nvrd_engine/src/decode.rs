use chardetng::EncodingDetector;
use encoding_rs::{Encoding, BIG5, EUC_JP, EUC_KR, GB18030, GBK, SHIFT_JIS, UTF_16BE, UTF_16LE, UTF_8};
use nvrd_logging::nvrd_debug;

/// Candidates tried, in order, for bytes that are not UTF-8.
pub fn legacy_encodings() -> [&'static Encoding; 8] {
    [GBK, GB18030, BIG5, EUC_JP, SHIFT_JIS, EUC_KR, UTF_16LE, UTF_16BE]
}

/// Markers that make a web page go through charset-aware decoding first.
const GB_MARKERS: [&[u8]; 2] = [b"gbk", b"gb2312"];

/// How far into the document a `<meta charset>` declaration is looked for.
const META_PRESCAN_BYTES: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding_label: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("no encoding produced valid text (tried {tried})")]
    NoCandidate { tried: String },
}

/// Decode a fetched web page.
///
/// Pages mentioning GBK or GB2312 are decoded with their declared charset
/// (Content-Type header, then `<meta>`, then a statistical guess) before the
/// generic [`decode_text`] steps run.
pub fn decode_page(bytes: &[u8], content_type: Option<&str>) -> Result<DecodedText, DecodeError> {
    if let Some(decoded) = decode_bom(bytes) {
        return Ok(decoded);
    }
    if has_gb_marker(bytes) {
        let encoding = declared_encoding(bytes, content_type).unwrap_or_else(|| guess_encoding(bytes));
        if let Some(decoded) = decode_strict(bytes, encoding) {
            return Ok(decoded);
        }
        nvrd_debug!("declared charset {} did not fit, probing", encoding.name());
    }
    decode_text(bytes)
}

/// Decode bytes of unknown origin: BOM, then UTF-8, then [`legacy_encodings`].
pub fn decode_text(bytes: &[u8]) -> Result<DecodedText, DecodeError> {
    if let Some(decoded) = decode_bom(bytes) {
        return Ok(decoded);
    }
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(DecodedText {
            text: text.to_string(),
            encoding_label: UTF_8.name().to_string(),
        });
    }
    let candidates = legacy_encodings();
    candidates
        .into_iter()
        .find_map(|encoding| decode_strict(bytes, encoding))
        .ok_or_else(|| DecodeError::NoCandidate {
            tried: candidates
                .iter()
                .map(|encoding| encoding.name())
                .collect::<Vec<_>>()
                .join(", "),
        })
}

fn decode_bom(bytes: &[u8]) -> Option<DecodedText> {
    let (encoding, bom_len) = Encoding::for_bom(bytes)?;
    decode_strict(&bytes[bom_len..], encoding)
}

fn decode_strict(bytes: &[u8], encoding: &'static Encoding) -> Option<DecodedText> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| DecodedText {
            text: text.into_owned(),
            encoding_label: encoding.name().to_string(),
        })
}

fn has_gb_marker(bytes: &[u8]) -> bool {
    GB_MARKERS.iter().any(|marker| {
        bytes
            .windows(marker.len())
            .any(|window| window.eq_ignore_ascii_case(marker))
    })
}

fn declared_encoding(bytes: &[u8], content_type: Option<&str>) -> Option<&'static Encoding> {
    content_type
        .and_then(charset_param)
        .or_else(|| meta_charset(bytes))
        .and_then(|label| Encoding::for_label(label.as_bytes()))
}

fn guess_encoding(bytes: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

fn charset_param(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .filter_map(|part| {
            let (key, value) = part.split_once('=')?;
            key.trim()
                .eq_ignore_ascii_case("charset")
                .then(|| value.trim().trim_matches(['"', '\'']).to_string())
        })
        .find(|value| !value.is_empty())
}

/// Find `charset=` inside the first [`META_PRESCAN_BYTES`] of the document.
///
/// Covers both `<meta charset="gbk">` and the `http-equiv` content form.
fn meta_charset(bytes: &[u8]) -> Option<String> {
    let head = &bytes[..bytes.len().min(META_PRESCAN_BYTES)];
    let lower = head.to_ascii_lowercase();
    let needle = b"charset=";
    let start = lower
        .windows(needle.len())
        .position(|window| window == needle)?
        + needle.len();
    let label: String = lower[start..]
        .iter()
        .skip_while(|&&b| matches!(b, b'"' | b'\'' | b' '))
        .take_while(|&&b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b':' | b'.'))
        .map(|&b| char::from(b))
        .collect();
    (!label.is_empty()).then_some(label)
}

use url::Url;

/// Resolve a chapter link found on the page at `current`.
///
/// Absolute links are returned unchanged. Relative links are joined against
/// `current`: `/x` lands on the host root, `x` next to the current page.
pub fn resolve_link(current: &str, link: &str) -> String {
    let trimmed = link.trim();
    if Url::parse(trimmed).is_ok() {
        return trimmed.to_string();
    }
    Url::parse(current)
        .and_then(|base| base.join(trimmed))
        .map(String::from)
        .unwrap_or_else(|_| trimmed.to_string())
}

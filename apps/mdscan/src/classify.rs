//! Link classification: direction (internal/external) and domain key.
//!
//! Pure string functions. URLs are never resolved or validated.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    External,
    Internal,
}

impl Direction {
    /// A link is external exactly when it carries an `http://` or `https://` scheme.
    pub fn of(url: &str) -> Self {
        if strip_scheme(url).is_some() {
            Direction::External
        } else {
            Direction::Internal
        }
    }
}

fn strip_scheme(url: &str) -> Option<&str> {
    url.strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
}

/// Domain of an external URL: scheme removed, cut at the first `/`, and a
/// leading `www.` dropped.
pub fn extract_domain(url: &str) -> String {
    let rest = strip_scheme(url).unwrap_or(url);
    let host = rest.split('/').find(|s| !s.is_empty()).unwrap_or("");
    host.strip_prefix("www.").unwrap_or(host).to_string()
}

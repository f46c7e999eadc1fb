use std::fmt;

/// Free-text search input, Amharic or otherwise.
///
/// The text is trimmed but never validated, spell-checked, or normalized;
/// that burden is on the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
}

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self {
            text: raw.trim().to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// URL-encoded form suitable for use as a path segment.
    pub fn encoded(&self) -> String {
        urlencoding::encode(&self.text).into_owned()
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

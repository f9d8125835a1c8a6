// file: src/models/search_result.rs
// description: outcome of a single search provider lookup
// reference: Used by the search resolver and line processor

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Canonical watch URL of the top result
    Found(String),

    /// The provider answered but had no video results
    NotFound,

    /// The lookup itself failed (transport, status, malformed page)
    Error(String),
}

impl SearchOutcome {
    pub fn into_url(self) -> Option<String> {
        match self {
            Self::Found(url) => Some(url),
            Self::NotFound | Self::Error(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_found_carries_url() {
        let found = SearchOutcome::Found("https://www.youtube.com/watch?v=abc".to_string());
        assert_eq!(
            found.into_url().as_deref(),
            Some("https://www.youtube.com/watch?v=abc")
        );
        assert_eq!(SearchOutcome::NotFound.into_url(), None);
        assert_eq!(SearchOutcome::Error("boom".to_string()).into_url(), None);
    }
}

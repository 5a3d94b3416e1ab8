//! Splitting URL strings into the pieces the resolver rewrites.

use url::{Position, Url};

/// A URL (or bare path reference) split into origin, path, query and fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct UrlParts {
    /// Scheme and authority (e.g. `http://host:8080`); empty for bare paths.
    pub origin: String,
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl UrlParts {
    /// Absolute hierarchical URLs go through `url::Url`; everything else
    /// (relative references, empty input) is split on `#` and `?`.
    pub fn parse(input: &str) -> Self {
        match Url::parse(input) {
            Ok(url) if !url.cannot_be_a_base() => Self::from_url(&url),
            _ => Self::split_reference(input),
        }
    }

    fn from_url(url: &Url) -> Self {
        Self {
            origin: url[..Position::BeforePath].to_string(),
            path: url.path().to_string(),
            query: url.query().map(str::to_owned),
            fragment: url.fragment().map(str::to_owned),
        }
    }

    fn split_reference(input: &str) -> Self {
        let (rest, fragment) = match input.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment.to_string())),
            None => (input, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (rest, None),
        };
        Self {
            origin: String::new(),
            path: path.to_string(),
            query,
            fragment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_url_without_path_gets_root() {
        let parts = UrlParts::parse("http://www.example.com?a=aa");
        assert_eq!(parts.origin, "http://www.example.com");
        assert_eq!(parts.path, "/");
        assert_eq!(parts.query.as_deref(), Some("a=aa"));
        assert!(parts.fragment.is_none());
    }

    #[test]
    fn absolute_url_keeps_port_and_fragment() {
        let parts = UrlParts::parse("http://127.0.0.1:8080/adp#top");
        assert_eq!(parts.origin, "http://127.0.0.1:8080");
        assert_eq!(parts.path, "/adp");
        assert!(parts.query.is_none());
        assert_eq!(parts.fragment.as_deref(), Some("top"));
    }

    #[test]
    fn relative_reference_is_split() {
        let parts = UrlParts::parse("/adp/?b=bb#frag");
        assert_eq!(parts.origin, "");
        assert_eq!(parts.path, "/adp/");
        assert_eq!(parts.query.as_deref(), Some("b=bb"));
        assert_eq!(parts.fragment.as_deref(), Some("frag"));
    }

    #[test]
    fn empty_input() {
        let parts = UrlParts::parse("");
        assert_eq!(parts.origin, "");
        assert_eq!(parts.path, "");
        assert!(parts.query.is_none());
    }
}

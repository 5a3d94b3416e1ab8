//! URL + path + query merging.
//!
//! Combines a base URL, a path that may carry its own query string, and an
//! explicit query map into a single URL. Query layers are merged key by key
//! with precedence base < path < explicit; the path is resolved against the
//! base path with relative-reference rules.

mod parts;
mod path;
mod query;

pub use path::resolve_path;
pub use query::{FormQueryParser, QueryMap, QueryParser};

use parts::UrlParts;

/// Merges URLs, paths and queries using a pluggable query parser.
#[derive(Debug, Clone, Default)]
pub struct UrlResolver<P = FormQueryParser> {
    parser: P,
}

impl UrlResolver<FormQueryParser> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: QueryParser> UrlResolver<P> {
    pub fn with_parser(parser: P) -> Self {
        Self { parser }
    }

    /// Resolve `path` against `base` and attach the merged query.
    ///
    /// Scheme, authority and fragment come from `base`. Empty inputs give an
    /// empty string. No validation of scheme or host is done.
    ///
    /// # Examples
    ///
    /// - `resolve("http://h/?a=1", "/x/?b=2", {c: 3})` → `"http://h/x/?a=1&b=2&c=3"`
    /// - `resolve("http://h", "", {b: 2})` → `"http://h/?b=2"`
    pub fn resolve(&self, base: &str, path: &str, query: Option<&QueryMap>) -> String {
        let base_parts = UrlParts::parse(base);
        let path_parts = UrlParts::parse(path);

        let mut merged = QueryMap::new();
        for raw in [base_parts.query.as_deref(), path_parts.query.as_deref()]
            .into_iter()
            .flatten()
        {
            match self.parser.parse(raw) {
                Some(layer) => merged.extend_from(&layer),
                None => tracing::debug!(query = raw, "query parser gave no result, layer skipped"),
            }
        }
        if let Some(explicit) = query {
            merged.extend_from(explicit);
        }

        let resolved_path = resolve_path(&base_parts.path, &path_parts.path);

        let mut out = base_parts.origin;
        if !out.is_empty() && !resolved_path.starts_with('/') {
            out.push('/');
        }
        out.push_str(&resolved_path);
        if !merged.is_empty() {
            out.push('?');
            out.push_str(&merged.to_query_string());
        }
        if let Some(fragment) = base_parts.fragment {
            out.push('#');
            out.push_str(&fragment);
        }
        out
    }
}

/// [`UrlResolver::resolve`] with the default form-urlencoded parser.
pub fn resolve_url(base: &str, path: &str, query: Option<&QueryMap>) -> String {
    UrlResolver::new().resolve(base, path, query)
}

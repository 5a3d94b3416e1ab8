//! Query maps: parsing, layering and serialization of query-string pairs.
//!
//! Decoding accepts form encoding (`+` is a space). Encoding follows
//! `encodeURIComponent`: a space becomes `%20` and `-_.!~*'()` stay literal,
//! so an already-encoded query string serializes back unchanged.

use indexmap::IndexMap;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::form_urlencoded;

/// Everything except alphanumerics and `-_.!~*'()` is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Key/value pairs of a query string. Keys are unique; inserting an existing
/// key replaces its value but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMap(IndexMap<String, String>);

impl QueryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string (without the leading `?`). Later duplicates win.
    pub fn parse(raw: &str) -> Self {
        form_urlencoded::parse(raw.trim_start_matches('?').as_bytes())
            .into_owned()
            .collect()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overlay `other` on top of `self` key by key. Keys absent from `other`
    /// keep their current value.
    pub fn extend_from(&mut self, other: &QueryMap) {
        for (key, value) in other.iter() {
            self.insert(key, value);
        }
    }

    /// Encode as `k=v&k2=v2` (no leading `?`). Empty map gives an empty string.
    pub fn to_query_string(&self) -> String {
        self.iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(key, COMPONENT),
                    utf8_percent_encode(value, COMPONENT)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = QueryMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for QueryMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Turns a raw query string into a [`QueryMap`]. Returning `None` means the
/// layer is dropped from the merge instead of failing it.
pub trait QueryParser {
    fn parse(&self, raw: &str) -> Option<QueryMap>;
}

/// Default parser: standard form-urlencoded decoding (`+` is a space).
#[derive(Debug, Clone, Copy, Default)]
pub struct FormQueryParser;

impl QueryParser for FormQueryParser {
    fn parse(&self, raw: &str) -> Option<QueryMap> {
        Some(QueryMap::parse(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_decodes_and_later_duplicate_wins() {
        let map = QueryMap::parse("a=1&b=hello+world&a=2&c=%2F");
        assert_eq!(map.len(), 3);
        assert_eq!(map.get("a"), Some("2"));
        assert_eq!(map.get("b"), Some("hello world"));
        assert_eq!(map.get("c"), Some("/"));
        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn parse_empty_and_leading_question_mark() {
        assert!(QueryMap::parse("").is_empty());
        assert_eq!(QueryMap::parse("?x=1").get("x"), Some("1"));
    }

    #[test]
    fn extend_from_overwrites_key_by_key() {
        let mut base: QueryMap = [("a", "1"), ("b", "2")].into_iter().collect();
        let top: QueryMap = [("b", "20"), ("c", "30")].into_iter().collect();
        base.extend_from(&top);
        assert_eq!(base.to_query_string(), "a=1&b=20&c=30");
    }

    #[test]
    fn to_query_string_encodes_reserved_characters() {
        let map: QueryMap = [("q", "a b&c"), ("k", "x=y")].into_iter().collect();
        assert_eq!(map.to_query_string(), "q=a%20b%26c&k=x%3Dy");
        assert_eq!(QueryMap::new().to_query_string(), "");
    }

    #[test]
    fn to_query_string_keeps_unreserved_marks() {
        let map: QueryMap = [("t", "x~y"), ("f", "it's(1)!*"), ("n", "a-b_c.d")]
            .into_iter()
            .collect();
        assert_eq!(map.to_query_string(), "t=x~y&f=it's(1)!*&n=a-b_c.d");
    }

    #[test]
    fn encoded_query_survives_parse_and_serialize() {
        for raw in ["q=a%20b", "q=%E4%BD%A0%E5%A5%BD", "path=%2Fa%2Fb&k=v%3D1"] {
            assert_eq!(QueryMap::parse(raw).to_query_string(), raw);
        }
        assert_eq!(QueryMap::parse("q=a+b").to_query_string(), "q=a%20b");
    }
}

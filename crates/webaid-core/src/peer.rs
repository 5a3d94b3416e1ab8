//! Client address extraction from inbound request metadata.

use indexmap::IndexMap;
use serde::Deserialize;

/// Proxy header carrying the originating client address.
pub const FORWARDED_FOR: &str = "x-forwarded-for";

/// The parts of an inbound request needed to find the peer address.
///
/// Field names on the wire follow the conventional request object shape
/// (`headers`, `ip`, `_remoteAddress`, `connection.remoteAddress`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RequestMeta {
    /// Header names as provided by the caller, in arrival order.
    #[serde(default)]
    pub headers: IndexMap<String, String>,
    /// Address resolved by the web framework.
    #[serde(default)]
    pub ip: Option<String>,
    /// Legacy address field set by request loggers.
    #[serde(default, rename = "_remoteAddress")]
    pub remote_address: Option<String>,
    #[serde(default)]
    pub connection: Option<ConnectionInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConnectionInfo {
    #[serde(default, rename = "remoteAddress")]
    pub remote_address: Option<String>,
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

impl RequestMeta {
    /// Header value by name. An exact-case match wins; otherwise the first
    /// case-insensitive match in arrival order.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .or_else(|| {
                self.headers
                    .iter()
                    .find(|(k, _)| k.eq_ignore_ascii_case(name))
                    .map(|(_, v)| v)
            })
            .map(String::as_str)
    }

    /// Address of the directly connected peer: `ip`, then `_remoteAddress`,
    /// then `connection.remoteAddress`. Empty strings count as absent.
    pub fn peer_ip(&self) -> Option<&str> {
        non_empty(self.ip.as_ref())
            .or_else(|| non_empty(self.remote_address.as_ref()))
            .or_else(|| {
                self.connection
                    .as_ref()
                    .and_then(|c| non_empty(c.remote_address.as_ref()))
            })
    }

    /// Originating client address: the first non-empty hop of
    /// `X-Forwarded-For`, else [`peer_ip`](Self::peer_ip).
    pub fn client_ip(&self) -> Option<&str> {
        self.header(FORWARDED_FOR)
            .and_then(|v| v.split(',').map(str::trim).find(|hop| !hop.is_empty()))
            .or_else(|| self.peer_ip())
    }
}

pub fn peer_ip(req: &RequestMeta) -> Option<&str> {
    req.peer_ip()
}

pub fn client_ip(req: &RequestMeta) -> Option<&str> {
    req.client_ip()
}

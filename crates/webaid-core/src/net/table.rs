//! Snapshot of the host's interface table, grouped by interface name.

use indexmap::IndexMap;
use std::net::IpAddr;

/// Interface name to bound addresses, in the order the OS reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceTable(IndexMap<String, Vec<IpAddr>>);

impl InterfaceTable {
    /// Read the current interface table. Enumeration failure gives an empty
    /// table, which makes lookups fall back to loopback.
    pub fn from_system() -> Self {
        match if_addrs::get_if_addrs() {
            Ok(ifaces) => ifaces
                .into_iter()
                .map(|iface| {
                    let ip = iface.ip();
                    (iface.name, ip)
                })
                .collect(),
            Err(e) => {
                tracing::warn!("failed to enumerate network interfaces: {e}");
                Self::default()
            }
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, addr: IpAddr) {
        self.0.entry(name.into()).or_default().push(addr);
    }

    /// Addresses bound to `name`, together with the stored name.
    pub fn entry(&self, name: &str) -> Option<(&str, &[IpAddr])> {
        self.0
            .get_key_value(name)
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, IpAddr)> for InterfaceTable {
    fn from_iter<I: IntoIterator<Item = (N, IpAddr)>>(iter: I) -> Self {
        let mut table = InterfaceTable::default();
        for (name, addr) in iter {
            table.insert(name, addr);
        }
        table
    }
}

//! Local network address discovery.
//!
//! Picks an interface by explicit name, else the first present name from an
//! ordered candidate list, and returns its first address of the requested
//! family. With no matching interface at all the loopback address is used.

mod table;

pub use table::InterfaceTable;

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::config::{WebaidConfig, DEFAULT_INTERFACE_CANDIDATES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpFamily {
    V4,
    V6,
}

impl IpFamily {
    pub fn loopback(self) -> IpAddr {
        match self {
            IpFamily::V4 => IpAddr::V4(Ipv4Addr::LOCALHOST),
            IpFamily::V6 => IpAddr::V6(Ipv6Addr::LOCALHOST),
        }
    }

    pub fn matches(self, addr: &IpAddr) -> bool {
        match self {
            IpFamily::V4 => addr.is_ipv4(),
            IpFamily::V6 => addr.is_ipv6(),
        }
    }
}

/// Address lookup with a configurable list of fallback interface names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalAddrs {
    candidates: Vec<String>,
}

impl Default for LocalAddrs {
    fn default() -> Self {
        Self::new(DEFAULT_INTERFACE_CANDIDATES.iter().map(|s| s.to_string()))
    }
}

impl LocalAddrs {
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(cfg: &WebaidConfig) -> Self {
        Self::new(cfg.interface_candidates.iter().cloned())
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// The interface to use: `name` if present in `table`, otherwise the first
    /// candidate that is.
    pub fn select<'t>(
        &self,
        table: &'t InterfaceTable,
        name: Option<&str>,
    ) -> Option<(&'t str, &'t [IpAddr])> {
        name.into_iter()
            .chain(self.candidates.iter().map(String::as_str))
            .find_map(|candidate| table.entry(candidate))
    }

    /// First `family` address of the selected interface.
    ///
    /// No interface selected gives the family's loopback address; an
    /// interface without an address of that family gives `None`.
    pub fn lookup(
        &self,
        table: &InterfaceTable,
        family: IpFamily,
        name: Option<&str>,
    ) -> Option<IpAddr> {
        match self.select(table, name) {
            Some((iface, addrs)) => {
                let found = addrs.iter().copied().find(|a| family.matches(a));
                if found.is_none() {
                    tracing::debug!(iface, ?family, "interface has no address of this family");
                }
                found
            }
            None => {
                if table.is_empty() {
                    tracing::debug!(?family, "interface table is empty, using loopback");
                } else {
                    tracing::debug!(?name, ?family, "no matching interface, using loopback");
                }
                Some(family.loopback())
            }
        }
    }

    pub fn ipv4(&self, name: Option<&str>) -> Option<IpAddr> {
        self.lookup(&InterfaceTable::from_system(), IpFamily::V4, name)
    }

    pub fn ipv6(&self, name: Option<&str>) -> Option<IpAddr> {
        self.lookup(&InterfaceTable::from_system(), IpFamily::V6, name)
    }
}

/// IPv4 address of `name` (or a default interface) using the default candidates.
pub fn local_ipv4(name: Option<&str>) -> Option<IpAddr> {
    LocalAddrs::default().ipv4(name)
}

/// IPv6 counterpart of [`local_ipv4`].
pub fn local_ipv6(name: Option<&str>) -> Option<IpAddr> {
    LocalAddrs::default().ipv6(name)
}

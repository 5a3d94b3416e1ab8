//! `webaid local-ip [--name IFACE] [--v6]` – local interface address.

use anyhow::Result;
use webaid_core::config::WebaidConfig;
use webaid_core::net::{InterfaceTable, IpFamily, LocalAddrs};

/// Prints the address, or nothing when the chosen interface lacks that family.
pub fn run_local_ip(cfg: &WebaidConfig, name: Option<&str>, v6: bool) -> Result<()> {
    let family = if v6 { IpFamily::V6 } else { IpFamily::V4 };
    let table = InterfaceTable::from_system();
    tracing::debug!(interfaces = ?table.names().collect::<Vec<_>>(), "interface table");

    let addrs = LocalAddrs::from_config(cfg);
    if let Some(addr) = addrs.lookup(&table, family, name) {
        println!("{addr}");
    }
    Ok(())
}

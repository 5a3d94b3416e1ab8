//! `webaid client-ip <request.json>` – client address of a recorded request.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use webaid_core::peer::RequestMeta;

pub fn run_client_ip(request: &Path, direct: bool) -> Result<()> {
    let data = fs::read_to_string(request)
        .with_context(|| format!("failed to read {}", request.display()))?;
    let req: RequestMeta = serde_json::from_str(&data)
        .with_context(|| format!("invalid request JSON in {}", request.display()))?;

    let addr = if direct { req.peer_ip() } else { req.client_ip() };
    if let Some(addr) = addr {
        println!("{addr}");
    }
    Ok(())
}

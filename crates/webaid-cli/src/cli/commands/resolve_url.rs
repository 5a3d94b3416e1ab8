//! `webaid resolve-url [base] [path] -q k=v` – merge URL, path and query.

use anyhow::Result;
use webaid_core::url_resolve::{resolve_url, QueryMap};

pub fn run_resolve_url(base: &str, path: &str, query: Vec<(String, String)>) -> Result<()> {
    let query: QueryMap = query.into_iter().collect();
    println!("{}", resolve_url(base, path, Some(&query)));
    Ok(())
}

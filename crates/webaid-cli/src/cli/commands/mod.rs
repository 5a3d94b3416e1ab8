//! CLI command handlers, one per file.

mod client_ip;
mod json_prop;
mod local_ip;
mod mkdir;
mod resolve_url;

pub use client_ip::run_client_ip;
pub use json_prop::run_json_prop;
pub use local_ip::run_local_ip;
pub use mkdir::run_mkdir;
pub use resolve_url::run_resolve_url;

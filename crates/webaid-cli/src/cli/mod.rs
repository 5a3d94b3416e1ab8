//! CLI for the webaid helpers.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use webaid_core::{config, logging};

use commands::{run_client_ip, run_json_prop, run_local_ip, run_mkdir, run_resolve_url};

/// Top-level CLI for the webaid helpers.
#[derive(Debug, Parser)]
#[command(name = "webaid")]
#[command(about = "webaid: small web-application helpers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Merge a base URL, a relative path and extra query parameters.
    ResolveUrl {
        /// Base URL (may carry a query string).
        #[arg(default_value = "")]
        base: String,
        /// Path resolved against the base path (may carry a query string).
        #[arg(default_value = "")]
        path: String,
        /// Extra query parameter, highest precedence. Repeatable.
        #[arg(short, long = "query", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        query: Vec<(String, String)>,
    },

    /// Look up a dotted property path in a JSON file.
    JsonProp {
        /// JSON file, relative to the JSON root unless absolute.
        file: PathBuf,
        /// Dot-separated property path, e.g. `user.name`.
        property: String,
        /// Override the configured JSON root directory.
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,
    },

    /// Create a directory and its missing ancestors; prints true/false.
    Mkdir {
        /// Directory to create.
        path: PathBuf,
    },

    /// Print this host's address on an interface (or a default one).
    LocalIp {
        /// Interface name to prefer over the configured candidates.
        #[arg(long)]
        name: Option<String>,
        /// Look up an IPv6 address instead of IPv4.
        #[arg(long)]
        v6: bool,
    },

    /// Print the client address of a request described as JSON.
    ClientIp {
        /// JSON file with `headers`, `ip`, `_remoteAddress`, `connection.remoteAddress`.
        request: PathBuf,
        /// Ignore proxy headers and print the direct peer address.
        #[arg(long)]
        direct: bool,
    },
}

fn parse_key_value(s: &str) -> std::result::Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        logging::log_config(&cfg, &config::config_path()?);

        match cli.command {
            CliCommand::ResolveUrl { base, path, query } => run_resolve_url(&base, &path, query),
            CliCommand::JsonProp {
                file,
                property,
                root,
            } => run_json_prop(&cfg, &file, &property, root),
            CliCommand::Mkdir { path } => run_mkdir(&path),
            CliCommand::LocalIp { name, v6 } => run_local_ip(&cfg, name.as_deref(), v6),
            CliCommand::ClientIp { request, direct } => run_client_ip(&request, direct),
        }
    }
}

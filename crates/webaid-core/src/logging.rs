//! Logging init (file under the XDG state dir, stderr fallback) and the
//! startup record of which configuration the helpers run with.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::WebaidConfig;
use crate::fs_util::create_dir;

const DEFAULT_FILTER: &str = "info,webaid=debug,webaid_core=debug";
const LOG_FILE_NAME: &str = "webaid.log";

/// Either the log file or stderr (used when the file handle cannot be cloned).
enum LogSink {
    File(File),
    Stderr,
}

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(f) => f.write(buf),
            LogSink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(f) => f.flush(),
            LogSink::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct SharedLogFile(File);

impl<'a> MakeWriter<'a> for SharedLogFile {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(LogSink::File)
            .unwrap_or(LogSink::Stderr)
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `~/.local/state/webaid/webaid.log`.
pub fn default_log_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("webaid")?;
    Ok(xdg_dirs.get_state_home().join(LOG_FILE_NAME))
}

/// Open `path` for appending, creating its directory with [`create_dir`].
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if !create_dir(dir)? {
            anyhow::bail!("log directory {} could not be created", dir.display());
        }
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

/// Initialize structured logging to [`default_log_path`] and return the file used.
/// On failure (e.g. state dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<PathBuf> {
    let path = default_log_path()?;
    init_logging_at(&path)?;
    Ok(path)
}

/// Initialize structured logging, appending to `path`.
pub fn init_logging_at(path: &Path) -> Result<()> {
    let file = open_log_file(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(BoxMakeWriter::new(SharedLogFile(file)))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    tracing::info!("webaid logging initialized at {}", path.display());
    Ok(())
}

/// Initialize logging to stderr only. Use when `init_logging()` fails so the CLI doesn't crash.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}

/// Record where the configuration came from and what it selects.
pub fn log_config(cfg: &WebaidConfig, config_path: &Path) {
    match cfg.json_root.as_deref() {
        Some(root) => tracing::info!(
            config = %config_path.display(),
            json_root = %root.display(),
            create_missing = cfg.create_missing_json_root,
            "JSON lookups resolve relative paths under the configured root"
        ),
        None => tracing::info!(
            config = %config_path.display(),
            "no JSON root configured; only absolute JSON paths resolve"
        ),
    }
    tracing::debug!(
        candidates = ?cfg.interface_candidates,
        "interface fallback order"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn open_log_file_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("webaid").join(LOG_FILE_NAME);
        let mut file = open_log_file(&path).unwrap();
        file.write_all(b"first\n").unwrap();
        drop(file);

        let mut again = open_log_file(&path).unwrap();
        again.write_all(b"second\n").unwrap();
        drop(again);

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn open_log_file_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("state");
        fs::write(&blocker, b"x").unwrap();
        assert!(open_log_file(&blocker.join(LOG_FILE_NAME)).is_err());
    }

    #[test]
    fn shared_log_file_writes_through_clones() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        let shared = SharedLogFile(open_log_file(&path).unwrap());
        shared.make_writer().write_all(b"a").unwrap();
        shared.make_writer().write_all(b"b").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "ab");
    }
}

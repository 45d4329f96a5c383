//! Logging setup: tracing to a file under the XDG state dir, with stderr
//! as the fallback sink when that file cannot be opened.

use anyhow::Result;
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info,soq=debug";

/// Where log lines go after [`init`].
#[derive(Debug)]
pub enum LogSink {
    File(PathBuf),
    Stderr,
}

/// Path of the log file: `~/.local/state/soq/soq.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("soq")?;
    Ok(xdg_dirs.get_state_home().join("soq").join("soq.log"))
}

fn open_log_file() -> Result<(File, PathBuf)> {
    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::options().create(true).append(true).open(&path)?;
    Ok((file, path))
}

/// Per-event writer: a clone of the log file, or a stderr lock when there
/// is no file (or cloning it fails).
enum Sink {
    File(File),
    Stderr,
}

impl io::Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::File(f) => f.write(buf),
            Sink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::File(f) => f.flush(),
            Sink::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct SinkMaker {
    file: Option<File>,
}

impl<'a> MakeWriter<'a> for SinkMaker {
    type Writer = Sink;

    fn make_writer(&'a self) -> Sink {
        match self.file.as_ref().and_then(|f| f.try_clone().ok()) {
            Some(f) => Sink::File(f),
            None => Sink::Stderr,
        }
    }
}

/// Initialize structured logging and report where it landed.
///
/// Logs to [`log_file_path`] when the file can be opened, otherwise to
/// stderr, so the CLI still runs with an unwritable state dir.
pub fn init() -> LogSink {
    let (file, sink) = match open_log_file() {
        Ok((file, path)) => (Some(file), LogSink::File(path)),
        Err(_) => (None, LogSink::Stderr),
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(SinkMaker { file })
        .with_ansi(false)
        .init();

    if let LogSink::File(path) = &sink {
        tracing::debug!("logging to {}", path.display());
    }
    sink
}

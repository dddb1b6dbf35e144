//! Logging setup.
//!
//! The terminal is in raw alternate-screen mode while the game runs, so
//! records go to a file instead of stderr.  Filter with `RUST_LOG`.
//! A log file that cannot be opened never stops the game: records are
//! discarded instead.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use env_logger::{Env, Target};

use crate::error::GameError;

pub const LOG_FILE_NAME: &str = "hk97.log";

pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Open `path` for writing, or fall back to a sink that drops everything.
/// The path comes back only when the file was actually opened.
pub fn open_sink(path: &Path) -> (Box<dyn Write + Send>, Option<PathBuf>) {
    match File::create(path) {
        Ok(file) => (Box::new(file), Some(path.to_path_buf())),
        Err(_) => (Box::new(io::sink()), None),
    }
}

/// Install the global logger writing to the default log file.
pub fn init() -> Result<Option<PathBuf>, GameError> {
    init_at(&log_path())
}

/// Install the global logger writing to `path`.  Returns where the records
/// end up, `None` when they are discarded.
pub fn init_at(path: &Path) -> Result<Option<PathBuf>, GameError> {
    let (sink, opened) = open_sink(path);

    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Pipe(sink))
        .try_init()?;

    Ok(opened)
}

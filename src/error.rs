use thiserror::Error;

use crate::config::ConfigError;

/// Failures that end the program.  Losing a round is not one of them.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("logger setup failed: {0}")]
    Logger(#[from] log::SetLoggerError),
}

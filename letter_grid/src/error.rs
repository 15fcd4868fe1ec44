// error.rs - Startup errors; the grid and the animation itself have no failure paths

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LetterGridError {
    #[error("invalid animation timing: {0}")]
    InvalidTiming(String),

    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("failed to initialise logging: {0}")]
    Logging(String),

    #[error("window error: {0}")]
    Ui(#[from] eframe::Error),
}

pub type Result<T> = std::result::Result<T, LetterGridError>;

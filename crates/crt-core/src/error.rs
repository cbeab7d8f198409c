use thiserror::Error;

/// Failures the core can report. Everything else in the effect is best-effort.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CrtError {
    #[error("phrase queue must contain at least one phrase")]
    EmptyPhraseQueue,
    #[error("surface must be non-empty, got {width}x{height}")]
    EmptySurface { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, CrtError>;

use std::io;

/// Errors raised while driving the interactive shell.
///
/// The computation engines are infallible; everything here originates at the
/// input boundary.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Input stream closed")]
    EndOfInput,
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;

use thiserror::Error;

/// Errors raised while reading annotation input.
///
/// Malformed input is fatal: nothing downstream runs until the whole
/// document parses, so there is no partial-output path to worry about.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Failed to parse annotation document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

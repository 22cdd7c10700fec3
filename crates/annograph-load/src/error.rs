//! Error types for the annograph-load crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Input error: {0}")]
    Input(#[from] annograph_core::CoreError),

    #[error("Generation error: {0}")]
    Mutate(#[from] annograph_mutate::MutateError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Endpoint returned HTTP {status}")]
    EndpointStatus { status: u16 },

    #[error("Mutation rejected by endpoint: {0}")]
    Remote(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LoadError>;

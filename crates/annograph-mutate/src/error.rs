//! Error types for mutation generation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MutateError {
    #[error(
        "Entity {entity_id} ({category}) has text {text:?} that normalizes to an empty identifier"
    )]
    EmptyIdentifier {
        entity_id: String,
        category: &'static str,
        text: String,
    },
}

pub type Result<T> = std::result::Result<T, MutateError>;

//! annograph-mutate — mutation generation for the annotation knowledge graph.
//!
//! This crate is the pure core of the pipeline: annotation documents in,
//! GraphQL mutation batches out. No I/O, no async, no shared state; the
//! generator is a plain function of (mapping table, document, timestamp)
//! and is safe to call concurrently from any number of callers.

pub mod batch;
pub mod builders;
pub mod error;
pub mod escape;
pub mod ident;
pub mod mapping;

pub use batch::{generate_batch, BatchSummary, MutationBatch};
pub use builders::{GeneratedMutation, MutationShape};
pub use error::MutateError;
pub use mapping::{CategoryMapping, MappingTable};

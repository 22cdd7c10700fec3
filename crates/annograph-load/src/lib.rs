//! annograph-load: Executes generated mutation batches against a
//! GraphQL graph endpoint.
//!
//! The loader is deliberately thin plumbing around the pure generator in
//! `annograph-mutate`: it reads a file, generates the batch, and sends
//! each mutation sequentially in three ordered phases (entry nodes, typed
//! nodes, relationships). One failed mutation never aborts its siblings.

pub mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod runner;

pub use client::GraphClient;
pub use config::GraphConfig;
pub use error::LoadError;
pub use input::batch_from_file;
pub use runner::{run_batch, LoadReport, PhaseReport};

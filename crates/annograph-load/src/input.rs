//! Reading annotation files and generating their batches.

use std::path::Path;

use chrono::Utc;

use annograph_core::AnnotationDocument;
use annograph_mutate::{generate_batch, MappingTable, MutationBatch};

use crate::error::Result;

/// Read an annotation JSON file wholesale and generate its mutation batch.
///
/// Any failure here is fatal to the run: no mutation is built from a
/// document that did not parse completely.
pub fn batch_from_file(path: &Path) -> Result<MutationBatch> {
    let bytes = std::fs::read(path)?;
    let doc = AnnotationDocument::from_json(&bytes)?;
    let table = MappingTable::standard();
    Ok(generate_batch(&table, &doc, Utc::now())?)
}

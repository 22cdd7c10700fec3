//! Batch assembly: everything generated from one annotation document.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use annograph_core::{AnnotationDocument, EntityCategory};

use crate::builders::{build_entry_mutations, build_typed_mutations, GeneratedMutation};
use crate::error::Result;
use crate::mapping::MappingTable;

/// Per-document mutation and entity counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    /// Entity counts keyed by category; absent categories count zero.
    pub entity_counts: BTreeMap<EntityCategory, usize>,
    pub total_entities: usize,
    pub unique_entry_texts: usize,
    pub total_relationships: usize,
}

/// The full ordered set of mutations derived from one input document.
///
/// Immutable after construction; the loader consumes it phase by phase
/// (entry nodes, then typed nodes, then relationships) and discards it.
#[derive(Debug, Clone)]
pub struct MutationBatch {
    pub document_id: String,
    pub document_path: String,
    pub entry_mutations: Vec<GeneratedMutation>,
    pub typed_mutations: Vec<GeneratedMutation>,
    /// Relationship translation is not yet supported: always empty.
    /// Relationships are still counted in the summary.
    pub relationship_mutations: Vec<GeneratedMutation>,
    pub summary: BatchSummary,
}

/// Generate the mutation batch for a document.
///
/// Pure function of (table, document, timestamp). The creation timestamp
/// is injected rather than read from the clock, so two calls with the
/// same arguments produce byte-identical batches.
pub fn generate_batch(
    table: &MappingTable,
    doc: &AnnotationDocument,
    created_at: DateTime<Utc>,
) -> Result<MutationBatch> {
    let created_at = created_at.to_rfc3339();

    let entry_mutations = build_entry_mutations(&doc.entities);
    let typed_mutations = build_typed_mutations(table, &doc.entities, &created_at)?;

    let mut entity_counts: BTreeMap<EntityCategory, usize> = BTreeMap::new();
    for entity in &doc.entities {
        *entity_counts.entry(entity.category).or_insert(0) += 1;
    }

    let summary = BatchSummary {
        entity_counts,
        total_entities: doc.entities.len(),
        unique_entry_texts: entry_mutations.len(),
        total_relationships: doc.relationships.len(),
    };

    Ok(MutationBatch {
        document_id: doc.document.id.clone(),
        document_path: doc.document.path.clone(),
        entry_mutations,
        typed_mutations,
        relationship_mutations: Vec::new(),
        summary,
    })
}

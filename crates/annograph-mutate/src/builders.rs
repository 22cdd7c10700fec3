//! Entry-node and typed-node mutation builders.
//!
//! All mutations against identified types use upsert semantics so that
//! re-loading the same document is idempotent. Entry nodes are keyed by
//! exact trimmed text; identified typed nodes by their derived identifier.

use std::collections::HashSet;

use annograph_core::{AnnotationEntity, EntityCategory};

use crate::error::{MutateError, Result};
use crate::escape::escape_literal;
use crate::ident::derive_identifier;
use crate::mapping::{CategoryMapping, MappingTable};

/// A single generated write request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMutation {
    /// Human-readable summary, shown by the CLI alongside the mutation.
    pub description: String,
    /// GraphQL mutation document, sent to the endpoint as-is.
    pub mutation: String,
}

/// Shape family of a typed-node mutation.
///
/// One variant per family, so a new category is a compile-time
/// exhaustiveness concern rather than a missed `if` branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationShape {
    /// Bare scalar node carrying the trimmed text. No identifier, no
    /// upsert: repeated text creates duplicate nodes, by contract.
    ScalarValue,
    /// Inline entry creation plus creation timestamp. The target type has
    /// no identifier field, so no upsert either; duplicates are accepted.
    NestedEntry,
    /// Identifier-keyed upsert with an entry link but no creation
    /// timestamp (the target type lacks the field).
    Identified,
    /// Identifier-keyed upsert with an entry link and creation timestamp.
    IdentifiedTimestamped,
}

impl MutationShape {
    /// The shape family for a category.
    pub fn of(category: EntityCategory) -> Self {
        match category {
            EntityCategory::Value => MutationShape::ScalarValue,
            EntityCategory::Benefit => MutationShape::NestedEntry,
            EntityCategory::Document => MutationShape::Identified,
            EntityCategory::Scheme
            | EntityCategory::Organization
            | EntityCategory::Person
            | EntityCategory::Location
            | EntityCategory::Date
            | EntityCategory::Beneficiary
            | EntityCategory::Eligibility
            | EntityCategory::Process => MutationShape::IdentifiedTimestamped,
        }
    }
}

// ── Entry Nodes ───────────────────────────────────────────────────

/// Build one upsert mutation per unique trimmed entity text.
///
/// The dedup key is the exact trimmed text: case and internal-whitespace
/// variants are distinct keys, matching the downstream store's own
/// `name`-keyed upsert semantics. First occurrence wins; output preserves
/// first-seen order. Entities whose text trims to empty are skipped
/// (there is nothing to key an entry node on).
pub fn build_entry_mutations(entities: &[AnnotationEntity]) -> Vec<GeneratedMutation> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut mutations = Vec::new();

    for entity in entities {
        let text = entity.text.trim();
        if text.is_empty() || !seen.insert(text) {
            continue;
        }
        let escaped = escape_literal(text);
        mutations.push(GeneratedMutation {
            description: format!("Upsert entry node for {text:?} ({})", entity.category),
            mutation: format!(
                "mutation {{ addEntry(input: [{{name: \"{escaped}\"}}], upsert: true) \
                 {{ entry {{ name }} }} }}"
            ),
        });
    }

    mutations
}

// ── Typed Nodes ───────────────────────────────────────────────────

/// Build exactly one typed-node mutation per entity, in input order.
///
/// Never deduplicated: two entities sharing text each get their own
/// mutation (for identified shapes the upsert collapses them downstream;
/// for value and benefit shapes duplicates land as distinct nodes).
pub fn build_typed_mutations(
    table: &MappingTable,
    entities: &[AnnotationEntity],
    created_at: &str,
) -> Result<Vec<GeneratedMutation>> {
    entities
        .iter()
        .map(|entity| build_typed_mutation(table, entity, created_at))
        .collect()
}

fn build_typed_mutation(
    table: &MappingTable,
    entity: &AnnotationEntity,
    created_at: &str,
) -> Result<GeneratedMutation> {
    let mapping = table.get(entity.category);
    let text = entity.text.trim();
    let escaped = escape_literal(text);
    let type_name = mapping.type_name;
    let field = response_field(type_name);

    let mutation = match MutationShape::of(entity.category) {
        MutationShape::ScalarValue => format!(
            "mutation {{ add{type_name}(input: [{{value: \"{escaped}\"}}]) \
             {{ {field} {{ id }} }} }}"
        ),
        MutationShape::NestedEntry => format!(
            "mutation {{ add{type_name}(input: [{{entry: {{name: \"{escaped}\"}}, \
             createdAt: \"{created_at}\"}}]) {{ {field} {{ id }} }} }}"
        ),
        MutationShape::Identified => {
            let identifier = require_identifier(entity, mapping)?;
            format!(
                "mutation {{ add{type_name}(input: [{{identifier: \"{identifier}\", \
                 entry: {{name: \"{escaped}\"}}}}], upsert: true) \
                 {{ {field} {{ identifier }} }} }}"
            )
        }
        MutationShape::IdentifiedTimestamped => {
            let identifier = require_identifier(entity, mapping)?;
            format!(
                "mutation {{ add{type_name}(input: [{{identifier: \"{identifier}\", \
                 entry: {{name: \"{escaped}\"}}, createdAt: \"{created_at}\"}}], \
                 upsert: true) {{ {field} {{ identifier }} }} }}"
            )
        }
    };

    Ok(GeneratedMutation {
        description: format!("Create {type_name} node for {text:?}"),
        mutation,
    })
}

/// Derive the identifier, rejecting text that normalizes to nothing.
/// An identifier of just `<prefix>::` would collide every degenerate
/// entity of the category onto one node.
fn require_identifier(entity: &AnnotationEntity, mapping: &CategoryMapping) -> Result<String> {
    let identifier = derive_identifier(&entity.text, mapping);
    if identifier.ends_with("::") {
        return Err(MutateError::EmptyIdentifier {
            entity_id: entity.id.clone(),
            category: entity.category.as_str(),
            text: entity.text.clone(),
        });
    }
    Ok(identifier)
}

/// Response-selection field: the lowerCamel form of the type name.
fn response_field(type_name: &str) -> String {
    let mut chars = type_name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(id: &str, text: &str, category: EntityCategory) -> AnnotationEntity {
        AnnotationEntity {
            id: id.to_string(),
            text: text.to_string(),
            start: 0,
            end: text.chars().count(),
            category,
        }
    }

    #[test]
    fn entry_builder_dedups_exact_trimmed_text() {
        let entities = vec![
            entity("e1", "National Health Authority (NHA)", EntityCategory::Organization),
            entity("e2", "  National Health Authority (NHA) ", EntityCategory::Organization),
            entity("e3", "NITI Aayog", EntityCategory::Organization),
        ];
        let mutations = build_entry_mutations(&entities);
        assert_eq!(mutations.len(), 2);
        assert!(mutations[0].mutation.contains("National Health Authority (NHA)"));
        assert!(mutations[1].mutation.contains("NITI Aayog"));
    }

    #[test]
    fn entry_dedup_is_case_sensitive() {
        // Exact-text key: "NHA" and "nha" are distinct entry nodes.
        let entities = vec![
            entity("e1", "NHA", EntityCategory::Organization),
            entity("e2", "nha", EntityCategory::Organization),
        ];
        assert_eq!(build_entry_mutations(&entities).len(), 2);
    }

    #[test]
    fn entry_builder_preserves_first_seen_order() {
        let entities = vec![
            entity("e1", "beta", EntityCategory::Scheme),
            entity("e2", "alpha", EntityCategory::Scheme),
            entity("e3", "beta", EntityCategory::Scheme),
        ];
        let mutations = build_entry_mutations(&entities);
        assert_eq!(mutations.len(), 2);
        assert!(mutations[0].mutation.contains("\"beta\""));
        assert!(mutations[1].mutation.contains("\"alpha\""));
    }

    #[test]
    fn entry_builder_skips_blank_text() {
        let entities = vec![entity("e1", "   ", EntityCategory::Scheme)];
        assert!(build_entry_mutations(&entities).is_empty());
    }

    #[test]
    fn entry_mutation_is_a_name_keyed_upsert() {
        let entities = vec![entity("e1", "Ayushman Bharat", EntityCategory::Scheme)];
        let m = &build_entry_mutations(&entities)[0];
        assert_eq!(
            m.mutation,
            "mutation { addEntry(input: [{name: \"Ayushman Bharat\"}], upsert: true) \
             { entry { name } } }"
        );
    }

    #[test]
    fn typed_builder_emits_one_mutation_per_entity() {
        let table = MappingTable::standard();
        let entities = vec![
            entity("e1", "NHA", EntityCategory::Organization),
            entity("e2", "NHA", EntityCategory::Organization),
            entity("e3", "NHA", EntityCategory::Organization),
        ];
        let mutations =
            build_typed_mutations(&table, &entities, "2024-03-11T09:30:00+00:00").unwrap();
        assert_eq!(mutations.len(), entities.len());
    }

    #[test]
    fn default_shape_has_identifier_link_timestamp_and_upsert() {
        let table = MappingTable::standard();
        let entities = vec![entity(
            "e1",
            "National Health Authority (NHA)",
            EntityCategory::Organization,
        )];
        let m = &build_typed_mutations(&table, &entities, "2024-03-11T09:30:00+00:00").unwrap()[0];
        assert_eq!(
            m.mutation,
            "mutation { addOrganization(input: [{identifier: \
             \"org::national_health_authority_nha\", \
             entry: {name: \"National Health Authority (NHA)\"}, \
             createdAt: \"2024-03-11T09:30:00+00:00\"}], upsert: true) \
             { organization { identifier } } }"
        );
    }

    #[test]
    fn value_shape_has_no_identifier_and_no_upsert() {
        let table = MappingTable::standard();
        let entities = vec![entity("e1", "₹500 crore", EntityCategory::Value)];
        let m = &build_typed_mutations(&table, &entities, "2024-03-11T09:30:00+00:00").unwrap()[0];
        assert_eq!(
            m.mutation,
            "mutation { addValueNode(input: [{value: \"₹500 crore\"}]) \
             { valueNode { id } } }"
        );
        assert!(!m.mutation.contains("identifier"));
        assert!(!m.mutation.contains("upsert"));
    }

    #[test]
    fn benefit_shape_nests_entry_and_timestamp_without_upsert() {
        let table = MappingTable::standard();
        let entities = vec![entity(
            "e1",
            "free treatment up to ₹5 lakh",
            EntityCategory::Benefit,
        )];
        let m = &build_typed_mutations(&table, &entities, "2024-03-11T09:30:00+00:00").unwrap()[0];
        assert!(m.mutation.contains("addBenefit"));
        assert!(m.mutation.contains("entry: {name: \"free treatment up to ₹5 lakh\"}"));
        assert!(m.mutation.contains("createdAt: \"2024-03-11T09:30:00+00:00\""));
        assert!(!m.mutation.contains("identifier"));
        assert!(!m.mutation.contains("upsert"));
    }

    #[test]
    fn document_shape_upserts_without_timestamp() {
        let table = MappingTable::standard();
        let entities = vec![entity("e1", "PM-JAY Guidelines 2022", EntityCategory::Document)];
        let m = &build_typed_mutations(&table, &entities, "2024-03-11T09:30:00+00:00").unwrap()[0];
        assert!(m.mutation.contains("addDocument"));
        assert!(m.mutation.contains("identifier: \"doc::pm-jay_guidelines_2022\""));
        assert!(m.mutation.contains("upsert: true"));
        assert!(!m.mutation.contains("createdAt"));
    }

    #[test]
    fn special_characters_in_text_are_escaped() {
        let table = MappingTable::standard();
        let entities = vec![entity("e1", "said \"free\"\ncare", EntityCategory::Benefit)];
        let m = &build_typed_mutations(&table, &entities, "2024-03-11T09:30:00+00:00").unwrap()[0];
        assert!(m.mutation.contains("said \\\"free\\\"\\ncare"));
    }

    #[test]
    fn empty_slug_is_rejected_for_identified_shapes() {
        let table = MappingTable::standard();
        let entities = vec![entity("e7", "(!?)", EntityCategory::Organization)];
        let err = build_typed_mutations(&table, &entities, "2024-03-11T09:30:00+00:00")
            .unwrap_err();
        match err {
            MutateError::EmptyIdentifier { entity_id, category, .. } => {
                assert_eq!(entity_id, "e7");
                assert_eq!(category, "organization");
            }
        }
    }

    #[test]
    fn empty_slug_is_fine_for_value_shape() {
        // Value nodes never derive an identifier, so degenerate text passes.
        let table = MappingTable::standard();
        let entities = vec![entity("e1", "₹₹₹", EntityCategory::Value)];
        assert!(build_typed_mutations(&table, &entities, "2024-03-11T09:30:00+00:00").is_ok());
    }

    #[test]
    fn shape_dispatch_covers_every_category() {
        use EntityCategory::*;
        assert_eq!(MutationShape::of(Value), MutationShape::ScalarValue);
        assert_eq!(MutationShape::of(Benefit), MutationShape::NestedEntry);
        assert_eq!(MutationShape::of(Document), MutationShape::Identified);
        for category in [
            Scheme,
            Organization,
            Person,
            Location,
            Date,
            Beneficiary,
            Eligibility,
            Process,
        ] {
            assert_eq!(
                MutationShape::of(category),
                MutationShape::IdentifiedTimestamped
            );
        }
    }
}

//! Stable identifier derivation for typed nodes.
//!
//! Identifiers are the upsert keys that let the downstream store
//! deduplicate entities across documents and across runs, so derivation
//! must be deterministic: same text and category, same identifier, always.

use crate::mapping::CategoryMapping;

/// Normalize entity text into a slug.
///
/// Lowercase, trim, collapse internal whitespace runs to a single `_`,
/// strip every character outside `[a-z0-9_-]`. May produce an empty
/// string for text made entirely of stripped characters.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    for (i, run) in lowered.split_whitespace().enumerate() {
        if i > 0 {
            slug.push('_');
        }
        slug.extend(
            run.chars()
                .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '-'),
        );
    }
    slug
}

/// Derive the stable identifier for entity text under a category mapping.
pub fn derive_identifier(text: &str, mapping: &CategoryMapping) -> String {
    format!("{}::{}", mapping.id_prefix, slugify(text))
}

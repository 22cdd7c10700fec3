//! Domain types for manually produced entity-annotation documents.
//!
//! These mirror the JSON emitted by the annotation tool: a descriptor of
//! the source document, the ordered entity spans, and any relationship
//! annotations (accepted and counted, but not yet loaded as edges).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ── Categories ────────────────────────────────────────────────────

/// The closed set of annotation categories.
///
/// Parsing rejects anything outside this set, so every category that
/// reaches the generator has a mapping by construction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum EntityCategory {
    Scheme,
    Organization,
    Person,
    Location,
    Date,
    Value,
    Benefit,
    Beneficiary,
    Eligibility,
    Process,
    Document,
}

impl EntityCategory {
    /// All categories in declaration order, for summary reporting.
    pub const ALL: [EntityCategory; 11] = [
        EntityCategory::Scheme,
        EntityCategory::Organization,
        EntityCategory::Person,
        EntityCategory::Location,
        EntityCategory::Date,
        EntityCategory::Value,
        EntityCategory::Benefit,
        EntityCategory::Beneficiary,
        EntityCategory::Eligibility,
        EntityCategory::Process,
        EntityCategory::Document,
    ];

    /// The lowercase wire name of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityCategory::Scheme => "scheme",
            EntityCategory::Organization => "organization",
            EntityCategory::Person => "person",
            EntityCategory::Location => "location",
            EntityCategory::Date => "date",
            EntityCategory::Value => "value",
            EntityCategory::Benefit => "benefit",
            EntityCategory::Beneficiary => "beneficiary",
            EntityCategory::Eligibility => "eligibility",
            EntityCategory::Process => "process",
            EntityCategory::Document => "document",
        }
    }
}

impl std::fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Annotation Document ───────────────────────────────────────────

/// Descriptor of the source document the spans were annotated in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentDescriptor {
    pub id: String,
    pub path: String,
    pub subject: String,
}

/// A single annotated entity span.
///
/// `start`/`end` are character offsets into the source document. They are
/// informational only; mutation generation never reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationEntity {
    pub id: String,
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub category: EntityCategory,
}

/// A relationship between two annotated entities.
///
/// Relationship-to-edge translation is not yet supported: relationships
/// are counted in the batch summary and otherwise ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationRelationship {
    pub id: String,
    pub source_entity_id: String,
    pub target_entity_id: String,
    #[serde(rename = "type")]
    pub relation_type: String,
    pub label: String,
}

/// Root of an annotation JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationDocument {
    pub document: DocumentDescriptor,
    pub entities: Vec<AnnotationEntity>,
    #[serde(default)]
    pub relationships: Vec<AnnotationRelationship>,
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
}

impl AnnotationDocument {
    /// Parse an annotation document from JSON bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self, CoreError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

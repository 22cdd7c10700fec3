//! Static category-to-ontology mapping.
//!
//! Type and field names here are the fixed contract with the downstream
//! GraphQL schema. Changing one is a schema migration, not a refactor.

use annograph_core::EntityCategory;

/// Ontology coordinates for one annotation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMapping {
    /// GraphQL type name of the target node.
    pub type_name: &'static str,
    /// Prefix for derived identifiers (`<prefix>::<slug>`).
    pub id_prefix: &'static str,
    /// Field on the `Entry` type linking back to nodes of this type.
    pub inverse_field: &'static str,
}

/// Total lookup from category to ontology mapping.
///
/// Constructed once at startup and passed into the generator, so tests
/// can substitute their own table without touching global state.
#[derive(Debug, Clone)]
pub struct MappingTable {
    entries: [CategoryMapping; 11],
}

impl MappingTable {
    /// The production ontology table, one entry per category.
    pub fn standard() -> Self {
        Self {
            entries: EntityCategory::ALL.map(standard_mapping),
        }
    }

    /// Look up the mapping for a category. Total: every category has one.
    pub fn get(&self, category: EntityCategory) -> &CategoryMapping {
        // Entries are stored in EntityCategory::ALL order, which matches
        // the enum's discriminant order.
        &self.entries[category as usize]
    }
}

impl Default for MappingTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_mapping(category: EntityCategory) -> CategoryMapping {
    match category {
        EntityCategory::Scheme => CategoryMapping {
            type_name: "Scheme",
            id_prefix: "scheme",
            inverse_field: "schemes",
        },
        EntityCategory::Organization => CategoryMapping {
            type_name: "Organization",
            id_prefix: "org",
            inverse_field: "organizations",
        },
        EntityCategory::Person => CategoryMapping {
            type_name: "Person",
            id_prefix: "person",
            inverse_field: "persons",
        },
        EntityCategory::Location => CategoryMapping {
            type_name: "Location",
            id_prefix: "loc",
            inverse_field: "locations",
        },
        EntityCategory::Date => CategoryMapping {
            type_name: "DateRef",
            id_prefix: "date",
            inverse_field: "dates",
        },
        EntityCategory::Value => CategoryMapping {
            type_name: "ValueNode",
            id_prefix: "val",
            inverse_field: "values",
        },
        EntityCategory::Benefit => CategoryMapping {
            type_name: "Benefit",
            id_prefix: "benefit",
            inverse_field: "benefits",
        },
        EntityCategory::Beneficiary => CategoryMapping {
            type_name: "Beneficiary",
            id_prefix: "bnf",
            inverse_field: "beneficiaries",
        },
        EntityCategory::Eligibility => CategoryMapping {
            type_name: "Eligibility",
            id_prefix: "elig",
            inverse_field: "eligibilities",
        },
        EntityCategory::Process => CategoryMapping {
            type_name: "Process",
            id_prefix: "proc",
            inverse_field: "processes",
        },
        EntityCategory::Document => CategoryMapping {
            type_name: "Document",
            id_prefix: "doc",
            inverse_field: "documents",
        },
    }
}

//! annograph-core: Shared types and error handling for the annograph pipeline.
//!
//! This crate provides the foundational types used by the generator and loader:
//! - The annotation document model (`AnnotationDocument`, `AnnotationEntity`, ...)
//! - The closed `EntityCategory` enumeration
//! - Document parsing from JSON
//! - Common error types

pub mod error;
pub mod types;

pub use error::CoreError;
pub use types::{
    AnnotationDocument, AnnotationEntity, AnnotationRelationship, DocumentDescriptor,
    EntityCategory,
};

//! Schema description and classification.
//!
//! This module provides the metadata side of SQL generation:
//! - Plain-data entity descriptions (`definition`)
//! - The dialect mapping tables for column types and generated-value
//!   strategies (`dialect`)
//! - Classification of an entity into ordered table metadata (`metadata`)

mod definition;
mod dialect;
mod metadata;

pub use definition::{EntityDef, FieldDef, FieldType, GeneratedValue};
pub use dialect::{SqlDialect, TypeHints, DEFAULT_TEXT_LENGTH};
pub use metadata::{classify, ColumnMeta, TableMetadata};

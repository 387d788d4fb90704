//! entity_sql - SQL generation from record metadata
//!
//! Derives a table schema (DDL) and basic row operations (DML) from a
//! caller-supplied description of a record type, without a SQL parser or a
//! live database connection:
//! - Schema description types and the dialect mapping tables (`schema`)
//! - Classification of fields into table metadata (`schema::metadata`)
//! - `create table` / `insert` / `select` / `delete` text builders (`query`)
//! - SQL literal values and record-instance access (`value`)
//!
//! # Architecture
//!
//! The caller describes an entity as plain data ([`schema::EntityDef`]):
//! field names, semantic types, and per-field markers (primary key,
//! generated value, transient, column override, length/nullable hints).
//! [`schema::classify`] resolves that description once, against a
//! [`schema::SqlDialect`], into an immutable [`schema::TableMetadata`].
//! The DDL and DML builders borrow the metadata and emit plain SQL strings;
//! executing those strings against a real engine is the caller's concern.
//!
//! # Type Decisions
//!
//! **Why an explicit `EntityDef` instead of derive macros or reflection?**
//! The metadata source is an injectable capability, not a hard dependency:
//! entities can be registered by hand, built programmatically, or
//! deserialized from JSON (`EntityDef` derives serde traits). Anything that
//! produces the same plain data satisfies the contract.
//!
//! **Why does `classify` return a value instead of caching on the builder?**
//! Builders borrow an immutable `TableMetadata`, so "build called before
//! classification" cannot be expressed - there is no entity-not-set state
//! to check for at runtime, and repeated builds are trivially idempotent.

pub mod query;
pub mod schema;
pub mod value;

pub use query::{DdlQueryBuilder, DmlQueryBuilder};
pub use schema::{
    classify, EntityDef, FieldDef, FieldType, GeneratedValue, SqlDialect, TableMetadata, TypeHints,
};
pub use value::{MissingField, Record, RecordValues, SqlValue};

use thiserror::Error;

/// SQL generation error types.
///
/// All variants are unrecoverable at this layer and propagate to the caller
/// unmodified; the crate performs no retries and never logs.
#[derive(Error, Debug)]
pub enum SqlGenError {
    /// The semantic field type has no SQL mapping in the active dialect.
    #[error("No SQL type mapping for field type '{field_type:?}'")]
    UnsupportedType { field_type: schema::FieldType },

    /// The generated-value strategy has no SQL fragment in the active dialect.
    #[error("No SQL fragment for generated-value strategy '{strategy:?}'")]
    UnsupportedStrategy { strategy: schema::GeneratedValue },

    /// A field value could not be read from a record instance.
    ///
    /// Wraps the underlying access failure; a column is never silently
    /// dropped from an insert.
    #[error("Failed to read field '{field}' from record instance")]
    FieldAccess {
        field: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

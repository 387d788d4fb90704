//! Entity classification into ordered table metadata.
//!
//! [`classify`] walks an entity's field declarations once and resolves each
//! non-transient field into a [`ColumnMeta`], producing the immutable
//! [`TableMetadata`] consumed by the DDL and DML builders.

use crate::schema::{EntityDef, SqlDialect, TypeHints};
use crate::SqlGenError;

/// Derived metadata for a single persisted column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMeta {
    /// Declared field name; used to read values from record instances
    pub field: String,

    /// Resolved column name (explicit override or lower-cased field name)
    pub name: String,

    /// SQL column type fragment, including any `not null` token and
    /// generated-value keyword
    pub sql_type: String,

    /// Whether the column is part of the primary key
    pub is_id: bool,

    /// Whether the column's value is database-assigned
    pub generated: bool,
}

/// Immutable classification result for one entity.
///
/// Columns are stored once, in field declaration order; the id-first DDL
/// ordering and the interleaved DML ordering are both views over that list,
/// so the ordering invariants hold by construction. The struct holds no
/// interior mutability and repeated builds from it are byte-identical.
#[derive(Debug, Clone, PartialEq)]
pub struct TableMetadata {
    table_name: String,
    columns: Vec<ColumnMeta>,
}

impl TableMetadata {
    /// Derived table name (entity simple name, lower-cased).
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// All persisted columns in field declaration order.
    pub fn columns(&self) -> &[ColumnMeta] {
        &self.columns
    }

    /// Primary-key columns in declaration order.
    pub fn id_columns(&self) -> impl Iterator<Item = &ColumnMeta> {
        self.columns.iter().filter(|c| c.is_id)
    }

    /// Non-key columns in declaration order.
    pub fn ordinary_columns(&self) -> impl Iterator<Item = &ColumnMeta> {
        self.columns.iter().filter(|c| !c.is_id)
    }

    /// Columns a caller supplies values for on insert: everything except
    /// database-generated key columns.
    pub fn insert_columns(&self) -> impl Iterator<Item = &ColumnMeta> {
        self.columns.iter().filter(|c| !(c.is_id && c.generated))
    }
}

/// Classify an entity definition into table metadata.
///
/// Per field, in declaration order:
/// 1. Transient fields are skipped entirely.
/// 2. The column name is the explicit non-blank override, else the declared
///    name lower-cased.
/// 3. The type fragment comes from the dialect, with the field's
///    length/nullable hints passed through.
/// 4. A generated-value strategy appends its fragment after a single space.
///
/// An entity with zero fields classifies to an empty column list (not an
/// error); multiple id-marked fields form a composite key in declaration
/// order.
///
/// # Errors
/// Propagates [`SqlGenError::UnsupportedType`] and
/// [`SqlGenError::UnsupportedStrategy`] from the dialect lookups.
pub fn classify(entity: &EntityDef, dialect: &SqlDialect) -> Result<TableMetadata, SqlGenError> {
    let mut columns = Vec::with_capacity(entity.fields.len());

    for field in &entity.fields {
        if field.transient {
            continue;
        }

        let mut sql_type = dialect.column_type(field.field_type, TypeHints::from_field(field))?;
        if let Some(strategy) = field.generated {
            sql_type.push(' ');
            sql_type.push_str(dialect.generated_fragment(strategy)?);
        }

        columns.push(ColumnMeta {
            field: field.name.clone(),
            name: field.column_name(),
            sql_type,
            is_id: field.id,
            generated: field.generated.is_some(),
        });
    }

    Ok(TableMetadata {
        table_name: entity.table_name(),
        columns,
    })
}

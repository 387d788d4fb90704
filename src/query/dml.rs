//! `insert` / `select` / `delete` statement builders.
//!
//! Unlike DDL, the DML column list keeps the original field declaration
//! order with key and ordinary columns interleaved; nothing is reordered.

use std::fmt::Display;

use crate::schema::TableMetadata;
use crate::value::{read_field, RecordValues};
use crate::SqlGenError;

/// Builder for row-level statements against one classified entity.
pub struct DmlQueryBuilder<'a> {
    meta: &'a TableMetadata,
}

impl<'a> DmlQueryBuilder<'a> {
    pub fn new(meta: &'a TableMetadata) -> Self {
        Self { meta }
    }

    /// Build an `insert` statement from a record instance.
    ///
    /// The column list excludes database-generated key columns (the caller
    /// supplies no value for those) and transient fields never classified
    /// in the first place; values are literal-encoded in the same filtered
    /// order.
    ///
    /// # Errors
    /// [`SqlGenError::FieldAccess`] when a field value cannot be read from
    /// the instance; the column is never silently dropped.
    pub fn insert(&self, record: &dyn RecordValues) -> Result<String, SqlGenError> {
        let mut columns = Vec::new();
        let mut values = Vec::new();
        for column in self.meta.insert_columns() {
            columns.push(column.name.as_str());
            values.push(read_field(record, &column.field)?.literal());
        }

        Ok(format!(
            "insert into {} ({}) values ({})",
            self.meta.table_name(),
            columns.join(","),
            values.join(",")
        ))
    }

    /// Build a `select` over all rows: no filtering, no pagination,
    /// no ordering.
    pub fn find_all(&self) -> String {
        format!("{} {}", self.select_clause(), self.from_clause())
    }

    /// Build a `select` filtered to one primary-key value.
    ///
    /// The key renders by plain `Display` interpolation, not through
    /// [`crate::value::SqlValue::literal`]: numeric keys appear bare and
    /// textual keys appear unquoted. This diverges from insert encoding;
    /// the divergence is part of the observable output and is kept as-is.
    pub fn find_by_id<K: Display>(&self, key: K) -> String {
        format!(
            "{} {} {}",
            self.select_clause(),
            self.from_clause(),
            self.where_clause(key)
        )
    }

    /// Build a `delete` keyed on the instance's primary-key value(s),
    /// using the same raw key rendering as [`Self::find_by_id`].
    ///
    /// # Errors
    /// [`SqlGenError::FieldAccess`] when a key value cannot be read from
    /// the instance.
    pub fn delete(&self, record: &dyn RecordValues) -> Result<String, SqlGenError> {
        let key = self
            .meta
            .id_columns()
            .map(|c| read_field(record, &c.field).map(|v| v.to_string()))
            .collect::<Result<Vec<_>, _>>()?
            .join(",");

        Ok(format!(
            "delete from {} {}",
            self.meta.table_name(),
            self.where_clause(key)
        ))
    }

    fn select_clause(&self) -> String {
        let columns = self
            .meta
            .columns()
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(",");
        format!("select {columns}")
    }

    fn from_clause(&self) -> String {
        format!("from {}", self.meta.table_name())
    }

    /// `where <id names>=<key>`. With a composite key this degenerates to a
    /// single equality against the comma-joined name list - malformed SQL,
    /// but the historical output shape, kept rather than rewritten into
    /// per-column predicates.
    fn where_clause<K: Display>(&self, key: K) -> String {
        let id_names = self
            .meta
            .id_columns()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(",");
        format!("where {id_names}={key}")
    }
}

//! `create table` statement builder.
//!
//! Generates deterministic DDL from classified table metadata: primary-key
//! columns first, then ordinary columns, then a named primary-key
//! constraint.

use crate::schema::TableMetadata;

/// Builder for `create table` statements.
pub struct DdlQueryBuilder<'a> {
    meta: &'a TableMetadata,
}

impl<'a> DdlQueryBuilder<'a> {
    pub fn new(meta: &'a TableMetadata) -> Self {
        Self { meta }
    }

    /// Build the `create table` statement.
    ///
    /// Produces output in the format:
    /// ```sql
    /// create table users (id bigint auto_increment,nick_name varchar(255), constraint pk_users primary key (id));
    /// ```
    /// Column clauses are `name type-fragment` joined by `,`, id columns
    /// before ordinary columns (each bucket in declaration order). The
    /// constraint clause and its leading `, ` are omitted entirely when the
    /// entity has no id columns, so the statement never ends with a dangling
    /// comma before `);`.
    pub fn build(&self) -> String {
        let columns = self
            .meta
            .id_columns()
            .chain(self.meta.ordinary_columns())
            .map(|c| format!("{} {}", c.name, c.sql_type))
            .collect::<Vec<_>>()
            .join(",");

        let mut body = columns;
        let id_names = self
            .meta
            .id_columns()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>();
        if !id_names.is_empty() {
            body.push_str(&format!(
                ", constraint pk_{} primary key ({})",
                self.meta.table_name(),
                id_names.join(", ")
            ));
        }

        format!("create table {} ({});", self.meta.table_name(), body)
    }
}

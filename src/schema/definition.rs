//! Core entity definition types.
//!
//! Provides a backend-agnostic description of a record type: field names,
//! semantic types, and the per-field markers that drive SQL generation.
//! These types are plain data - the mechanism that produces them (manual
//! registration, a builder, JSON deserialization) is the caller's choice.

use serde::{Deserialize, Serialize};

/// Semantic type of a record field.
///
/// Mapped to a SQL column type by [`super::SqlDialect::column_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Textual data
    Text,
    /// 32-bit integer data
    Integer,
    /// 64-bit integer data
    BigInt,
    /// Floating point data
    Float,
    /// Boolean data
    Boolean,
    /// Raw binary data
    Bytes,
    /// UUID data
    Uuid,
}

/// Strategy tag for database-assigned primary-key values.
///
/// Mapped to a SQL fragment by [`super::SqlDialect::generated_fragment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratedValue {
    /// The database assigns keys from an identity/auto-increment column
    Identity,
    /// The database assigns keys from a named sequence
    Sequence,
    /// The database assigns random UUID keys
    Uuid,
}

/// Describes a single field of an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Declared field name (e.g. "name", "email")
    pub name: String,

    /// Semantic field type
    pub field_type: FieldType,

    /// Explicit column name override. None or blank falls back to the
    /// declared name, lower-cased.
    #[serde(default)]
    pub column: Option<String>,

    /// Whether this field is part of the primary key
    #[serde(default)]
    pub id: bool,

    /// Generated-value strategy for database-assigned keys, if any
    #[serde(default)]
    pub generated: Option<GeneratedValue>,

    /// Whether this field is excluded from persistence entirely
    #[serde(default)]
    pub transient: bool,

    /// Maximum length hint; applies to textual types only
    #[serde(default)]
    pub length: Option<u32>,

    /// Nullability hint; `Some(false)` adds a `not null` constraint
    #[serde(default)]
    pub nullable: Option<bool>,
}

impl FieldDef {
    /// Create a field with the given declared name and semantic type.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            column: None,
            id: false,
            generated: None,
            transient: false,
            length: None,
            nullable: None,
        }
    }

    /// Set an explicit column name, case preserved.
    pub fn column(mut self, name: impl Into<String>) -> Self {
        self.column = Some(name.into());
        self
    }

    /// Mark this field as part of the primary key.
    pub fn id(mut self) -> Self {
        self.id = true;
        self
    }

    /// Mark this field's value as database-assigned via `strategy`.
    pub fn generated(mut self, strategy: GeneratedValue) -> Self {
        self.generated = Some(strategy);
        self
    }

    /// Exclude this field from persistence.
    pub fn transient(mut self) -> Self {
        self.transient = true;
        self
    }

    /// Set the maximum length hint.
    pub fn length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    /// Require a `not null` constraint on the column.
    pub fn not_null(mut self) -> Self {
        self.nullable = Some(false);
        self
    }

    /// Resolve the column name for this field.
    ///
    /// An explicit non-blank override wins, case preserved; otherwise the
    /// declared field name, lower-cased.
    pub fn column_name(&self) -> String {
        match &self.column {
            Some(column) if !column.trim().is_empty() => column.clone(),
            _ => self.name.to_lowercase(),
        }
    }
}

/// Describes a complete record type: a simple name plus its fields in
/// declaration order.
///
/// Immutable metadata once built; classification never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDef {
    /// Simple type name (e.g. "Users"); lower-cased for the table name
    pub name: String,

    /// Fields in declaration order
    pub fields: Vec<FieldDef>,
}

impl EntityDef {
    /// Create an entity with no fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field, preserving declaration order.
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Derived table name: the simple name lower-cased, no pluralization,
    /// no quoting.
    pub fn table_name(&self) -> String {
        self.name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_column_name_falls_back_to_lowercased_field_name() {
        let field = FieldDef::new("Email", FieldType::Text);
        assert_eq!(field.column_name(), "email");
    }

    #[test]
    fn test_column_name_uses_explicit_override_case_preserved() {
        let field = FieldDef::new("name", FieldType::Text).column("Nick_Name");
        assert_eq!(field.column_name(), "Nick_Name");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_blank_override_falls_back(#[case] blank: &str) {
        let field = FieldDef::new("Name", FieldType::Text).column(blank);
        assert_eq!(field.column_name(), "name");
    }

    #[test]
    fn test_table_name_is_lowercased_simple_name() {
        let entity = EntityDef::new("Users");
        assert_eq!(entity.table_name(), "users");
    }

    #[test]
    fn test_fields_preserve_declaration_order() {
        let entity = EntityDef::new("Users")
            .field(FieldDef::new("id", FieldType::BigInt).id())
            .field(FieldDef::new("name", FieldType::Text))
            .field(FieldDef::new("age", FieldType::Integer));

        let names: Vec<_> = entity.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "name", "age"]);
    }

    #[test]
    fn test_entity_def_loads_from_json() {
        let json = r#"{
            "name": "Users",
            "fields": [
                {"name": "id", "field_type": "bigint", "id": true, "generated": "identity"},
                {"name": "email", "field_type": "text", "nullable": false}
            ]
        }"#;

        let entity: EntityDef = serde_json::from_str(json).unwrap();
        assert_eq!(entity.table_name(), "users");
        assert_eq!(entity.fields.len(), 2);
        assert!(entity.fields[0].id);
        assert_eq!(entity.fields[0].generated, Some(GeneratedValue::Identity));
        assert_eq!(entity.fields[1].nullable, Some(false));
    }
}

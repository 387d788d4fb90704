//! Dialect mapping tables for column types and generated-value strategies.
//!
//! Both lookups are seeded data rather than hardcoded matches, so a dialect
//! with narrower type support stays expressible and unmapped entries fail
//! with a dedicated error instead of silently producing SQL.

use std::collections::HashMap;

use crate::schema::{FieldType, GeneratedValue};
use crate::SqlGenError;

/// Default length for textual columns when no length hint is given.
pub const DEFAULT_TEXT_LENGTH: u32 = 255;

/// Optional refinements for a single column type resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeHints {
    /// Maximum length; parameterizes textual types, ignored otherwise
    pub length: Option<u32>,
    /// `Some(false)` appends a `not null` constraint token
    pub nullable: Option<bool>,
}

impl TypeHints {
    /// Hints taken from a field definition's length/nullable markers.
    pub fn from_field(field: &crate::schema::FieldDef) -> Self {
        Self {
            length: field.length,
            nullable: field.nullable,
        }
    }
}

/// Mapping tables from semantic field types and generated-value strategies
/// to SQL fragments.
///
/// The default dialect follows the H2/MySQL convention: textual columns are
/// `varchar(n)` and identity keys use the `auto_increment` keyword.
#[derive(Debug, Clone)]
pub struct SqlDialect {
    types: HashMap<FieldType, &'static str>,
    strategies: HashMap<GeneratedValue, &'static str>,
}

impl SqlDialect {
    /// The H2 dialect used by the default setup.
    ///
    /// `Bytes` and `Uuid` columns and the `Sequence`/`Uuid` key strategies
    /// are deliberately unseeded until an engine needs them.
    pub fn h2() -> Self {
        let types = HashMap::from([
            (FieldType::Text, "varchar"),
            (FieldType::Integer, "integer"),
            (FieldType::BigInt, "bigint"),
            (FieldType::Float, "double"),
            (FieldType::Boolean, "boolean"),
        ]);
        let strategies = HashMap::from([(GeneratedValue::Identity, "auto_increment")]);
        Self { types, strategies }
    }

    /// Add or replace a type mapping. Extension point for custom dialects.
    pub fn with_type(mut self, field_type: FieldType, sql_type: &'static str) -> Self {
        self.types.insert(field_type, sql_type);
        self
    }

    /// Add or replace a generated-value strategy mapping.
    pub fn with_strategy(mut self, strategy: GeneratedValue, fragment: &'static str) -> Self {
        self.strategies.insert(strategy, fragment);
        self
    }

    /// Resolve a semantic type plus hints into a SQL column type fragment.
    ///
    /// Textual types are parameterized with the length hint (or
    /// [`DEFAULT_TEXT_LENGTH`]); `nullable == Some(false)` appends
    /// ` not null`.
    ///
    /// # Errors
    /// [`SqlGenError::UnsupportedType`] when the dialect has no mapping for
    /// `field_type`.
    pub fn column_type(
        &self,
        field_type: FieldType,
        hints: TypeHints,
    ) -> Result<String, SqlGenError> {
        let base = self
            .types
            .get(&field_type)
            .ok_or(SqlGenError::UnsupportedType { field_type })?;

        let mut fragment = if field_type == FieldType::Text {
            format!("{}({})", base, hints.length.unwrap_or(DEFAULT_TEXT_LENGTH))
        } else {
            (*base).to_string()
        };

        if hints.nullable == Some(false) {
            fragment.push_str(" not null");
        }

        Ok(fragment)
    }

    /// Resolve a generated-value strategy into the SQL fragment appended
    /// after a key column's type.
    ///
    /// # Errors
    /// [`SqlGenError::UnsupportedStrategy`] when the dialect has no fragment
    /// for `strategy`.
    pub fn generated_fragment(
        &self,
        strategy: GeneratedValue,
    ) -> Result<&'static str, SqlGenError> {
        self.strategies
            .get(&strategy)
            .copied()
            .ok_or(SqlGenError::UnsupportedStrategy { strategy })
    }
}

impl Default for SqlDialect {
    fn default() -> Self {
        Self::h2()
    }
}

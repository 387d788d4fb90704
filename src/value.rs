//! SQL values and record-instance access.
//!
//! This module defines the `RecordValues` trait that abstracts how field
//! values are read from a concrete record instance, the [`SqlValue`] type
//! those reads produce, and the literal encoding used by insert statements.

use std::error::Error;
use std::fmt;

use crate::SqlGenError;

/// A field value read from a record instance.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// Absent value; encodes to the unquoted literal `null`
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value (covers both 32- and 64-bit fields)
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Textual value
    Text(String),
}

impl SqlValue {
    /// Encode this value as a SQL literal for an insert value list.
    ///
    /// Text is wrapped in single quotes with no escaping of embedded
    /// quotes - a documented limitation of the literal-inlining design,
    /// kept rather than silently fixed. Everything else renders as its
    /// plain textual representation, unquoted.
    pub fn literal(&self) -> String {
        match self {
            SqlValue::Text(s) => format!("'{s}'"),
            other => other.to_string(),
        }
    }
}

/// Raw, unquoted rendering. Where-clause keys use this form directly,
/// which is deliberately weaker than [`SqlValue::literal`] (see
/// `DmlQueryBuilder::find_by_id`).
impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => f.write_str("null"),
            SqlValue::Bool(b) => write!(f, "{b}"),
            SqlValue::Int(i) => write!(f, "{i}"),
            SqlValue::Float(x) => write!(f, "{x}"),
            SqlValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Int(i64::from(value))
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Int(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Float(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(SqlValue::Null, Into::into)
    }
}

/// Trait for record instances whose field values can be read by name.
///
/// This is the injectable half of the instance boundary: anything that can
/// produce a [`SqlValue`] per declared field name satisfies it, whether the
/// values come from a hand-built [`Record`], generated code, or some other
/// binding layer. Instances are read-only to this crate.
pub trait RecordValues {
    /// Read the value of the field with the given declared name.
    ///
    /// # Errors
    /// Any failure to access the field; the DML builder wraps it in
    /// [`SqlGenError::FieldAccess`] rather than dropping the column.
    fn get(&self, field: &str) -> Result<SqlValue, Box<dyn Error + Send + Sync>>;
}

/// Access error for a field a record instance does not carry.
#[derive(Debug, thiserror::Error)]
#[error("record has no field '{0}'")]
pub struct MissingField(pub String);

/// An ordered field-name/value map; the provided [`RecordValues`]
/// implementation for hand-built record instances.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    values: Vec<(String, SqlValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value, replacing any earlier value for the same field.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        let field = field.into();
        let value = value.into();
        match self.values.iter().position(|(name, _)| *name == field) {
            Some(i) => self.values[i].1 = value,
            None => self.values.push((field, value)),
        }
        self
    }
}

impl RecordValues for Record {
    fn get(&self, field: &str) -> Result<SqlValue, Box<dyn Error + Send + Sync>> {
        self.values
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.clone())
            .ok_or_else(|| Box::new(MissingField(field.to_string())) as Box<dyn Error + Send + Sync>)
    }
}

/// Read `field` from `record`, wrapping any access failure.
pub(crate) fn read_field(
    record: &dyn RecordValues,
    field: &str,
) -> Result<SqlValue, SqlGenError> {
    record.get(field).map_err(|source| SqlGenError::FieldAccess {
        field: field.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(SqlValue::Null, "null")]
    #[case(SqlValue::Text("a@a.com".into()), "'a@a.com'")]
    #[case(SqlValue::Int(15), "15")]
    #[case(SqlValue::Bool(true), "true")]
    #[case(SqlValue::Float(1.5), "1.5")]
    fn test_literal_encoding(#[case] value: SqlValue, #[case] expected: &str) {
        assert_eq!(value.literal(), expected);
    }

    #[test]
    fn test_embedded_quote_is_not_escaped() {
        // Known limitation of literal inlining, pinned here on purpose.
        let value = SqlValue::Text("o'brien".into());
        assert_eq!(value.literal(), "'o'brien'");
    }

    #[test]
    fn test_raw_rendering_leaves_text_unquoted() {
        assert_eq!(SqlValue::Text("abc".into()).to_string(), "abc");
        assert_eq!(SqlValue::Int(1).to_string(), "1");
        assert_eq!(SqlValue::Null.to_string(), "null");
    }

    #[test]
    fn test_option_converts_to_null() {
        assert_eq!(SqlValue::from(None::<i64>), SqlValue::Null);
        assert_eq!(SqlValue::from(Some(7i64)), SqlValue::Int(7));
    }

    #[test]
    fn test_record_get_returns_set_value() {
        let record = Record::new().set("name", "정원").set("age", 15);
        assert_eq!(record.get("age").unwrap(), SqlValue::Int(15));
    }

    #[test]
    fn test_record_set_replaces_existing_value() {
        let record = Record::new().set("age", 15).set("age", 16);
        assert_eq!(record.get("age").unwrap(), SqlValue::Int(16));
    }

    #[test]
    fn test_record_missing_field_errors() {
        let record = Record::new().set("name", "정원");
        let err = record.get("email").unwrap_err();
        assert_eq!(err.to_string(), "record has no field 'email'");
    }

    #[test]
    fn test_read_field_wraps_access_failure() {
        let record = Record::new();
        let err = read_field(&record, "email").unwrap_err();
        assert!(matches!(err, SqlGenError::FieldAccess { ref field, .. } if field == "email"));
        assert!(std::error::Error::source(&err).is_some());
    }
}

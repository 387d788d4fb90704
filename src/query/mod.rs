//! SQL statement builders.
//!
//! Both builders borrow an immutable [`crate::schema::TableMetadata`] and
//! emit plain SQL strings; they hold no state of their own, so repeated
//! builds are byte-identical and nothing here needs synchronization.

mod ddl;
mod dml;

pub use ddl::DdlQueryBuilder;
pub use dml::DmlQueryBuilder;

//! # wt-query
//!
//! Naive helpers for `SELECT ... FROM ... WHERE ...` query strings.
//!
//! These locate keywords and slice around them; they do not parse SQL.
//! Nested queries, quoted identifiers, and joins are outside their reach.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Field, table, and schema helpers.
pub mod query;

pub use query::{add_schema_to_query, query_fields, table_name};

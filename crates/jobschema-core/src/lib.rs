//! Core contracts for jobschema.
//!
//! This crate defines the declarative table descriptors, the builder that
//! validates them into a [`SchemaGraph`], and the job-store table catalog the
//! scheduler needs.

pub mod builder;
pub mod catalog;
pub mod descriptor;
pub mod error;
pub mod redaction;
pub mod schema;
pub mod types;

pub use builder::build;
pub use catalog::{DEFAULT_TABLE_PREFIX, scheduler_tables};
pub use descriptor::{ColumnSpec, IndexSpec, TableSpec};
pub use error::{Error, Result};
pub use redaction::{RedactedConnection, redact_connection_string};
pub use schema::{Column, ForeignKey, Index, PrimaryKey, SchemaGraph, Table};
pub use types::{ColumnType, SqlType};

//! DDL rendering for jobschema graphs.
//!
//! Turns a validated [`jobschema_core::SchemaGraph`] into a `create table` /
//! `create index` script for one of the supported [`Dialect`]s and writes it
//! to disk.

pub mod dialect;
pub mod emitter;
pub mod errors;
pub mod output;

pub use dialect::Dialect;
pub use emitter::{DdlEmitter, EmitOptions, emit, render};
pub use errors::{EmitError, Result};
pub use output::write_script;

use thiserror::Error;

/// Errors raised while building a schema graph from table descriptors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Two descriptors resolve to the same prefixed table name.
    #[error("duplicate table name: {0}")]
    DuplicateTable(String),
    /// A table descriptor declares no primary-key columns.
    #[error("table {0} has an empty primary key")]
    EmptyPrimaryKey(String),
    /// A column descriptor is missing or has out-of-range type attributes.
    #[error("invalid column {table}.{column}: {reason}")]
    InvalidColumn {
        table: String,
        column: String,
        reason: String,
    },
    /// A column name appears twice on the same table.
    #[error("duplicate column name: {table}.{column}")]
    DuplicateColumn { table: String, column: String },
    /// The foreign key names a table that was not built before this one.
    #[error("table {table} references unknown table {target}")]
    UnresolvedReference { table: String, target: String },
    /// A referenced primary-key column has no counterpart on the referencing table.
    #[error("table {table} has no column {column} required by its foreign key to {target}")]
    UnresolvedForeignKeyColumn {
        table: String,
        target: String,
        column: String,
    },
    /// An index lists a column that does not exist on its table.
    #[error("index {index} on {table} names unknown column {column}")]
    UnresolvedColumn {
        table: String,
        index: String,
        column: String,
    },
    /// An index lists the same column more than once.
    #[error("index {index} on {table} lists column {column} more than once")]
    DuplicateIndexColumn {
        table: String,
        index: String,
        column: String,
    },
    /// Index names share one namespace across the whole graph.
    #[error("duplicate index name {index} on {table}")]
    DuplicateIndex { table: String, index: String },
    /// Resolved index columns do not match the requested column names.
    #[error("index {index} on {table} resolved {resolved} of {requested} columns")]
    IndexColumnCount {
        table: String,
        index: String,
        requested: usize,
        resolved: usize,
    },
}

/// Convenience alias for results returned by the schema builder.
pub type Result<T> = std::result::Result<T, Error>;

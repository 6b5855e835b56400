use serde::{Deserialize, Serialize};

/// Declared type of a column descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColumnType {
    BigInt,
    Blob,
    Boolean,
    Integer,
    SmallInt,
    /// Exact decimal; needs `precision` and `scale`.
    Decimal,
    /// Variable-length character data; needs `length`.
    String,
}

/// Physical representation of a built column, carrying the attributes its
/// type needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SqlType {
    Varchar { length: u32 },
    Blob,
    Boolean,
    Integer,
    BigInt,
    SmallInt,
    Decimal { precision: u32, scale: u32 },
}

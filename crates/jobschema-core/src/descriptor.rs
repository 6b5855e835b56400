//! Declarative table descriptors consumed by the schema builder.

use serde::{Deserialize, Serialize};

use crate::types::ColumnType;

/// Declared column: name, type, nullability and the attributes its type needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    pub nullable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
}

impl ColumnSpec {
    /// Non-null column without type attributes.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable: false,
            length: None,
            precision: None,
            scale: None,
        }
    }

    /// Non-null `STRING` column of the given length.
    pub fn string(name: impl Into<String>, length: u32) -> Self {
        Self {
            length: Some(length),
            ..Self::new(name, ColumnType::String)
        }
    }

    /// Non-null `DECIMAL` column.
    pub fn decimal(name: impl Into<String>, precision: u32, scale: u32) -> Self {
        Self {
            precision: Some(precision),
            scale: Some(scale),
            ..Self::new(name, ColumnType::Decimal)
        }
    }

    /// Marks the column as nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}

/// Declared index over named columns of its table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSpec {
    pub name: String,
    pub column_names: Vec<String>,
}

impl IndexSpec {
    pub fn new<I, S>(name: impl Into<String>, column_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            column_names: column_names.into_iter().map(Into::into).collect(),
        }
    }
}

/// Declared table.
///
/// Primary-key columns are always built as non-null string keys of their
/// declared `length`, whatever their declared type. `fk` holds the logical
/// (unprefixed) name of a table declared earlier in the same sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    pub name: String,
    pub pk: Vec<ColumnSpec>,
    #[serde(default)]
    pub columns: Vec<ColumnSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fk: Option<String>,
    #[serde(default)]
    pub indexes: Vec<IndexSpec>,
}

impl TableSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pk: Vec::new(),
            columns: Vec::new(),
            fk: None,
            indexes: Vec::new(),
        }
    }

    pub fn pk(mut self, columns: impl IntoIterator<Item = ColumnSpec>) -> Self {
        self.pk.extend(columns);
        self
    }

    pub fn columns(mut self, columns: impl IntoIterator<Item = ColumnSpec>) -> Self {
        self.columns.extend(columns);
        self
    }

    pub fn fk(mut self, table: impl Into<String>) -> Self {
        self.fk = Some(table.into());
        self
    }

    pub fn index(mut self, index: IndexSpec) -> Self {
        self.indexes.push(index);
        self
    }
}

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::SqlType;

/// Validated schema: tables in declaration order, addressable by final name.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SchemaGraph {
    tables: Vec<Table>,
    #[serde(skip)]
    by_name: BTreeMap<String, usize>,
}

impl SchemaGraph {
    /// Tables in declaration order.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Table> {
        self.tables.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Table> {
        self.by_name.get(name).map(|idx| &self.tables[*idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Registers a table under its name. Returns the table back when the
    /// name is already taken.
    pub(crate) fn insert(&mut self, table: Table) -> std::result::Result<(), Table> {
        if self.by_name.contains_key(&table.name) {
            return Err(table);
        }
        self.by_name.insert(table.name.clone(), self.tables.len());
        self.tables.push(table);
        Ok(())
    }
}

impl<'a> IntoIterator for &'a SchemaGraph {
    type Item = &'a Table;
    type IntoIter = std::slice::Iter<'a, Table>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.iter()
    }
}

/// A built table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub name: String,
    /// Primary-key columns first, then regular columns in declaration order.
    pub columns: Vec<Column>,
    pub primary_key: PrimaryKey,
    pub foreign_key: Option<ForeignKey>,
    pub indexes: Vec<Index>,
}

impl Table {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }
}

/// A built column with its resolved physical type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: String,
    pub sql_type: SqlType,
    pub nullable: bool,
}

/// Primary key definition preserving column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimaryKey {
    pub columns: Vec<String>,
}

/// Foreign key mirroring the referenced table's primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForeignKey {
    pub name: String,
    pub columns: Vec<String>,
    pub referenced_table: String,
    pub referenced_columns: Vec<String>,
}

/// Index definition preserving column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Index {
    pub name: String,
    pub columns: Vec<String>,
}

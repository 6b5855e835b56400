use std::collections::BTreeSet;

use tracing::debug;

use crate::descriptor::{ColumnSpec, IndexSpec, TableSpec};
use crate::error::{Error, Result};
use crate::schema::{Column, ForeignKey, Index, PrimaryKey, SchemaGraph, Table};
use crate::types::{ColumnType, SqlType};

/// Build a validated schema graph from table descriptors.
///
/// Tables are built in declaration order and registered as `prefix + name`.
/// A foreign key may only point at a table declared earlier in `specs`; its
/// local columns mirror the referenced table's primary key.
pub fn build(specs: &[TableSpec], prefix: &str) -> Result<SchemaGraph> {
    let mut graph = SchemaGraph::default();
    let mut index_names = BTreeSet::new();

    for spec in specs {
        let table = build_table(spec, prefix, &graph, &mut index_names)?;
        debug!(
            event = "table_built",
            table = %table.name,
            columns = table.columns.len(),
            indexes = table.indexes.len()
        );
        graph
            .insert(table)
            .map_err(|table| Error::DuplicateTable(table.name))?;
    }

    Ok(graph)
}

fn build_table(
    spec: &TableSpec,
    prefix: &str,
    graph: &SchemaGraph,
    index_names: &mut BTreeSet<String>,
) -> Result<Table> {
    let name = format!("{prefix}{}", spec.name);
    if graph.contains(&name) {
        return Err(Error::DuplicateTable(name));
    }
    if spec.pk.is_empty() {
        return Err(Error::EmptyPrimaryKey(name));
    }

    let mut columns: Vec<Column> = Vec::with_capacity(spec.pk.len() + spec.columns.len());
    let mut pk_columns = Vec::with_capacity(spec.pk.len());

    for column in &spec.pk {
        let column = key_column(&name, column)?;
        pk_columns.push(column.name.clone());
        push_column(&name, &mut columns, column)?;
    }

    for column in &spec.columns {
        let column = regular_column(&name, column)?;
        push_column(&name, &mut columns, column)?;
    }

    let mut table = Table {
        name,
        columns,
        primary_key: PrimaryKey {
            columns: pk_columns,
        },
        foreign_key: None,
        indexes: Vec::with_capacity(spec.indexes.len()),
    };

    if let Some(target) = &spec.fk {
        table.foreign_key = Some(foreign_key(&table, &format!("{prefix}{target}"), graph)?);
    }

    for index in &spec.indexes {
        let index = build_index(&table, index)?;
        if !index_names.insert(index.name.clone()) {
            return Err(Error::DuplicateIndex {
                table: table.name,
                index: index.name,
            });
        }
        table.indexes.push(index);
    }

    Ok(table)
}

fn push_column(table: &str, columns: &mut Vec<Column>, column: Column) -> Result<()> {
    if columns.iter().any(|existing| existing.name == column.name) {
        return Err(Error::DuplicateColumn {
            table: table.to_string(),
            column: column.name,
        });
    }
    columns.push(column);
    Ok(())
}

/// Primary-key columns are always non-null string keys of the declared length.
fn key_column(table: &str, spec: &ColumnSpec) -> Result<Column> {
    let length = positive_length(table, spec)?;
    Ok(Column {
        name: spec.name.clone(),
        sql_type: SqlType::Varchar { length },
        nullable: false,
    })
}

fn regular_column(table: &str, spec: &ColumnSpec) -> Result<Column> {
    let sql_type = match spec.column_type {
        ColumnType::BigInt => SqlType::BigInt,
        ColumnType::Blob => SqlType::Blob,
        ColumnType::Boolean => SqlType::Boolean,
        ColumnType::Integer => SqlType::Integer,
        ColumnType::SmallInt => SqlType::SmallInt,
        ColumnType::String => SqlType::Varchar {
            length: positive_length(table, spec)?,
        },
        ColumnType::Decimal => {
            let precision = spec.precision.unwrap_or(0);
            if precision == 0 {
                return Err(invalid_column(table, spec, "decimal precision must be positive"));
            }
            let Some(scale) = spec.scale else {
                return Err(invalid_column(table, spec, "decimal scale is required"));
            };
            if scale > precision {
                return Err(invalid_column(
                    table,
                    spec,
                    &format!("decimal scale {scale} exceeds precision {precision}"),
                ));
            }
            SqlType::Decimal { precision, scale }
        }
    };

    Ok(Column {
        name: spec.name.clone(),
        sql_type,
        nullable: spec.nullable,
    })
}

fn positive_length(table: &str, spec: &ColumnSpec) -> Result<u32> {
    match spec.length {
        Some(length) if length > 0 => Ok(length),
        _ => Err(invalid_column(table, spec, "string length must be positive")),
    }
}

fn invalid_column(table: &str, spec: &ColumnSpec, reason: &str) -> Error {
    Error::InvalidColumn {
        table: table.to_string(),
        column: spec.name.clone(),
        reason: reason.to_string(),
    }
}

fn foreign_key(table: &Table, target: &str, graph: &SchemaGraph) -> Result<ForeignKey> {
    let referenced = graph.get(target).ok_or_else(|| Error::UnresolvedReference {
        table: table.name.clone(),
        target: target.to_string(),
    })?;

    let columns = referenced.primary_key.columns.clone();
    if let Some(missing) = columns.iter().find(|column| table.column(column).is_none()) {
        return Err(Error::UnresolvedForeignKeyColumn {
            table: table.name.clone(),
            target: target.to_string(),
            column: missing.clone(),
        });
    }

    Ok(ForeignKey {
        name: format!("FK_{}", table.name),
        referenced_columns: columns.clone(),
        columns,
        referenced_table: referenced.name.clone(),
    })
}

fn build_index(table: &Table, spec: &IndexSpec) -> Result<Index> {
    let mut columns: Vec<String> = Vec::with_capacity(spec.column_names.len());

    for requested in &spec.column_names {
        let column = table
            .column(requested)
            .ok_or_else(|| Error::UnresolvedColumn {
                table: table.name.clone(),
                index: spec.name.clone(),
                column: requested.clone(),
            })?;
        if columns.contains(&column.name) {
            return Err(Error::DuplicateIndexColumn {
                table: table.name.clone(),
                index: spec.name.clone(),
                column: requested.clone(),
            });
        }
        columns.push(column.name.clone());
    }

    if columns.len() != spec.column_names.len() {
        return Err(Error::IndexColumnCount {
            table: table.name.clone(),
            index: spec.name.clone(),
            requested: spec.column_names.len(),
            resolved: columns.len(),
        });
    }

    Ok(Index {
        name: spec.name.clone(),
        columns,
    })
}

use std::path::Path;

use jobschema_core::{SchemaGraph, Table};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dialect::Dialect;
use crate::errors::Result;
use crate::output::write_script;

/// Layout switches for rendered scripts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitOptions {
    /// Prepend `drop table` statements, children first.
    pub drop_first: bool,
    /// One column definition per line.
    pub pretty: bool,
}

/// Renders a schema graph as DDL for one dialect.
#[derive(Debug, Clone, Default)]
pub struct DdlEmitter {
    options: EmitOptions,
}

impl DdlEmitter {
    pub fn new(options: EmitOptions) -> Self {
        Self { options }
    }

    /// Render the whole script. Tables appear in graph order, each followed by
    /// its indexes, so every foreign key targets an already-created table.
    pub fn render(&self, graph: &SchemaGraph, dialect: Dialect) -> String {
        let mut script = String::new();

        if self.options.drop_first {
            for table in graph.tables().iter().rev() {
                script.push_str(&dialect.drop_table(&table.name));
                script.push_str(";\n");
            }
            if self.options.pretty && !graph.is_empty() {
                script.push('\n');
            }
        }

        for (position, table) in graph.iter().enumerate() {
            if self.options.pretty && position > 0 {
                script.push('\n');
            }
            self.render_table(&mut script, table, dialect);
        }

        script
    }

    /// Render and write the script to `destination`, replacing its content.
    pub fn emit(&self, graph: &SchemaGraph, dialect: Dialect, destination: &Path) -> Result<()> {
        let script = self.render(graph, dialect);
        write_script(destination, &script)?;
        info!(
            event = "ddl_written",
            dialect = %dialect,
            tables = graph.len(),
            bytes = script.len(),
            path = %destination.display()
        );
        Ok(())
    }

    fn render_table(&self, script: &mut String, table: &Table, dialect: Dialect) {
        let mut definitions: Vec<String> = table
            .columns
            .iter()
            .map(|column| {
                let type_name = dialect.type_name(column.sql_type);
                if column.nullable {
                    format!("{} {type_name}", column.name)
                } else {
                    format!("{} {type_name} not null", column.name)
                }
            })
            .collect();

        definitions.push(format!(
            "primary key ({})",
            table.primary_key.columns.join(", ")
        ));

        if let Some(fk) = &table.foreign_key {
            definitions.push(format!(
                "constraint {} foreign key ({}) references {} ({})",
                fk.name,
                fk.columns.join(", "),
                fk.referenced_table,
                fk.referenced_columns.join(", ")
            ));
        }

        if self.options.pretty {
            script.push_str(&format!("create table {} (\n    ", table.name));
            script.push_str(&definitions.join(",\n    "));
            script.push_str("\n);\n");
        } else {
            script.push_str(&format!(
                "create table {} ({});\n",
                table.name,
                definitions.join(", ")
            ));
        }

        for index in &table.indexes {
            script.push_str(&format!(
                "create index {} on {} ({});\n",
                index.name,
                table.name,
                index.columns.join(", ")
            ));
        }
    }
}

/// Write `graph` as a DDL script for `dialect` using default layout.
pub fn emit(graph: &SchemaGraph, dialect: Dialect, destination: &Path) -> Result<()> {
    DdlEmitter::default().emit(graph, dialect, destination)
}

/// Render `graph` as a DDL script for `dialect` using default layout.
pub fn render(graph: &SchemaGraph, dialect: Dialect) -> String {
    DdlEmitter::default().render(graph, dialect)
}

//! Target SQL dialects and their type-name spellings.

use std::fmt;
use std::str::FromStr;

use jobschema_core::SqlType;
use serde::{Deserialize, Serialize};

use crate::errors::EmitError;

/// SQL dialects with a known type-name mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Postgres,
    MySql,
    SqlServer,
    Oracle,
    H2,
    Hsqldb,
    Sqlite,
    Db2,
}

impl Dialect {
    pub const ALL: [Dialect; 8] = [
        Dialect::Postgres,
        Dialect::MySql,
        Dialect::SqlServer,
        Dialect::Oracle,
        Dialect::H2,
        Dialect::Hsqldb,
        Dialect::Sqlite,
        Dialect::Db2,
    ];

    /// Canonical identifier accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::MySql => "mysql",
            Dialect::SqlServer => "sqlserver",
            Dialect::Oracle => "oracle",
            Dialect::H2 => "h2",
            Dialect::Hsqldb => "hsqldb",
            Dialect::Sqlite => "sqlite",
            Dialect::Db2 => "db2",
        }
    }

    /// Detect the dialect from a connection URL, plain or `jdbc:` prefixed.
    pub fn from_url(url: &str) -> Result<Self, EmitError> {
        let body = url.strip_prefix("jdbc:").unwrap_or(url);
        let scheme = body
            .split(':')
            .next()
            .filter(|scheme| *scheme != body)
            .ok_or_else(|| EmitError::UnsupportedDialect(url.to_string()))?;
        scheme
            .parse()
            .map_err(|_| EmitError::UnsupportedDialect(url.to_string()))
    }

    /// `drop table` statement body for this dialect.
    pub fn drop_table(self, table: &str) -> String {
        match self {
            Dialect::Oracle | Dialect::Db2 => format!("drop table {table}"),
            _ => format!("drop table if exists {table}"),
        }
    }

    /// Type name for a column's physical type.
    pub fn type_name(self, sql_type: SqlType) -> String {
        match sql_type {
            SqlType::Varchar { length } => match self {
                Dialect::Oracle => format!("varchar2({length} char)"),
                _ => format!("varchar({length})"),
            },
            SqlType::Decimal { precision, scale } => match self {
                Dialect::Oracle => format!("number({precision},{scale})"),
                Dialect::MySql | Dialect::Db2 => format!("decimal({precision},{scale})"),
                _ => format!("numeric({precision},{scale})"),
            },
            SqlType::Blob => match self {
                Dialect::Postgres => "bytea",
                Dialect::MySql => "longblob",
                Dialect::SqlServer => "varbinary(max)",
                _ => "blob",
            }
            .to_string(),
            SqlType::Boolean => match self {
                Dialect::MySql | Dialect::SqlServer => "bit",
                Dialect::Oracle => "number(1,0)",
                Dialect::Db2 => "smallint",
                _ => "boolean",
            }
            .to_string(),
            SqlType::Integer => match self {
                Dialect::SqlServer => "int",
                Dialect::Oracle => "number(10,0)",
                _ => "integer",
            }
            .to_string(),
            SqlType::BigInt => match self {
                Dialect::Oracle => "number(19,0)",
                _ => "bigint",
            }
            .to_string(),
            SqlType::SmallInt => match self {
                Dialect::Oracle => "number(5,0)",
                _ => "smallint",
            }
            .to_string(),
        }
    }
}

impl FromStr for Dialect {
    type Err = EmitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Dialect::Postgres),
            "mysql" | "mariadb" => Ok(Dialect::MySql),
            "sqlserver" | "mssql" => Ok(Dialect::SqlServer),
            "oracle" => Ok(Dialect::Oracle),
            "h2" => Ok(Dialect::H2),
            "hsqldb" => Ok(Dialect::Hsqldb),
            "sqlite" => Ok(Dialect::Sqlite),
            "db2" => Ok(Dialect::Db2),
            _ => Err(EmitError::UnsupportedDialect(s.to_string())),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

use std::path::{Path, PathBuf};

use jobschema_core::DEFAULT_TABLE_PREFIX;
use jobschema_ddl::{Dialect, EmitOptions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "jobschema.toml";
pub const DEFAULT_OUTPUT: &str = "schema.sql";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("toml error in {path}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("no dialect configured: pass --dialect or --url, or set one in jobschema.toml")]
    MissingDialect,
    #[error("cannot resolve dialect: {0}")]
    Dialect(#[from] jobschema_ddl::EmitError),
}

/// Settings as they appear in `jobschema.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub dialect: Option<String>,
    pub url: Option<String>,
    pub table_prefix: Option<String>,
    pub output: Option<PathBuf>,
    pub drop_first: Option<bool>,
    pub pretty: Option<bool>,
}

/// Values given on the command line; they win over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub dialect: Option<String>,
    pub url: Option<String>,
    pub table_prefix: Option<String>,
    pub output: Option<PathBuf>,
    pub drop_first: Option<bool>,
    pub pretty: Option<bool>,
}

/// Fully resolved generation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub dialect: Dialect,
    pub url: Option<String>,
    pub table_prefix: String,
    pub output: PathBuf,
    pub emit: EmitOptions,
}

/// Load the explicit config file, or the default one when present.
pub fn load_file_config(path: Option<&Path>) -> Result<Option<FileConfig>, ConfigError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                return Ok(None);
            }
            default
        }
    };

    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    parse_file_config(&content)
        .map(Some)
        .map_err(|source| ConfigError::Toml { path, source })
}

pub fn parse_file_config(content: &str) -> Result<FileConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Table prefix from the command line, then the file, then the default.
pub fn resolve_prefix(file: &FileConfig, overrides: &Overrides) -> String {
    overrides
        .table_prefix
        .clone()
        .or_else(|| file.table_prefix.clone())
        .unwrap_or_else(|| DEFAULT_TABLE_PREFIX.to_string())
}

/// Merge file values and overrides.
///
/// The dialect comes from `--dialect`, the file's `dialect`, `--url`, then
/// the file's `url`, in that order.
pub fn resolve(file: FileConfig, overrides: Overrides) -> Result<Settings, ConfigError> {
    let table_prefix = resolve_prefix(&file, &overrides);
    let url = overrides.url.or(file.url);

    let dialect = match overrides.dialect.or(file.dialect) {
        Some(name) => name.parse::<Dialect>()?,
        None => match url.as_deref() {
            Some(url) => Dialect::from_url(url)?,
            None => return Err(ConfigError::MissingDialect),
        },
    };

    Ok(Settings {
        dialect,
        url,
        table_prefix,
        output: overrides
            .output
            .or(file.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        emit: EmitOptions {
            drop_first: overrides.drop_first.or(file.drop_first).unwrap_or(false),
            pretty: overrides.pretty.or(file.pretty).unwrap_or(false),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_file() {
        let file = parse_file_config(
            r#"
dialect = "oracle"
table_prefix = "SCHED_"
output = "out/quartz.sql"
drop_first = true
"#,
        )
        .expect("parse config");
        assert_eq!(file.dialect.as_deref(), Some("oracle"));
        assert_eq!(file.output, Some(PathBuf::from("out/quartz.sql")));
        assert_eq!(file.drop_first, Some(true));
        assert_eq!(file.pretty, None);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(parse_file_config("dialekt = \"h2\"").is_err());
    }

    #[test]
    fn defaults_apply_without_file_values() {
        let overrides = Overrides {
            dialect: Some("h2".to_string()),
            ..Overrides::default()
        };
        let settings = resolve(FileConfig::default(), overrides).expect("resolve");
        assert_eq!(settings.dialect, Dialect::H2);
        assert_eq!(settings.table_prefix, DEFAULT_TABLE_PREFIX);
        assert_eq!(settings.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(settings.emit, EmitOptions::default());
    }

    #[test]
    fn overrides_win_over_file() {
        let file = FileConfig {
            dialect: Some("mysql".to_string()),
            table_prefix: Some("FILE_".to_string()),
            output: Some(PathBuf::from("file.sql")),
            pretty: Some(true),
            ..FileConfig::default()
        };
        let overrides = Overrides {
            dialect: Some("postgres".to_string()),
            table_prefix: Some("CLI_".to_string()),
            ..Overrides::default()
        };
        let settings = resolve(file, overrides).expect("resolve");
        assert_eq!(settings.dialect, Dialect::Postgres);
        assert_eq!(settings.table_prefix, "CLI_");
        assert_eq!(settings.output, PathBuf::from("file.sql"));
        assert!(settings.emit.pretty);
        assert!(!settings.emit.drop_first);
    }

    #[test]
    fn cli_can_switch_off_file_flags() {
        let file = FileConfig {
            dialect: Some("postgres".to_string()),
            drop_first: Some(true),
            pretty: Some(true),
            ..FileConfig::default()
        };
        let overrides = Overrides {
            drop_first: Some(false),
            ..Overrides::default()
        };
        let settings = resolve(file, overrides).expect("resolve");
        assert!(!settings.emit.drop_first);
        assert!(settings.emit.pretty);
    }

    #[test]
    fn dialect_falls_back_to_url() {
        let file = FileConfig {
            url: Some("jdbc:sqlserver://db:1433;databaseName=q".to_string()),
            ..FileConfig::default()
        };
        let settings = resolve(file, Overrides::default()).expect("resolve");
        assert_eq!(settings.dialect, Dialect::SqlServer);
    }

    #[test]
    fn explicit_dialect_beats_url() {
        let overrides = Overrides {
            url: Some("postgres://localhost/db".to_string()),
            ..Overrides::default()
        };
        let file = FileConfig {
            dialect: Some("hsqldb".to_string()),
            ..FileConfig::default()
        };
        let settings = resolve(file, overrides).expect("resolve");
        assert_eq!(settings.dialect, Dialect::Hsqldb);
    }

    #[test]
    fn missing_dialect_is_reported() {
        let err = resolve(FileConfig::default(), Overrides::default()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingDialect));
    }

    #[test]
    fn unknown_dialect_is_reported() {
        let overrides = Overrides {
            dialect: Some("informix".to_string()),
            ..Overrides::default()
        };
        let err = resolve(FileConfig::default(), overrides).unwrap_err();
        assert!(matches!(err, ConfigError::Dialect(_)));
    }
}

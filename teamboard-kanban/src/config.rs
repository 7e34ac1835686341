//! Board configuration loaded with Figment
//!
//! Sources, later overriding earlier:
//! 1. Built-in defaults (`To Do` / `In Progress` / `Done`)
//! 2. An optional config file (TOML, YAML or JSON, chosen by extension)
//! 3. Environment variables prefixed with `TEAMBOARD_`

use crate::error::{KanbanError, Result};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, trace};

/// Prefix for environment overrides, e.g. `TEAMBOARD_TERMINAL_COLUMN=Shipped`
pub const ENV_PREFIX: &str = "TEAMBOARD_";

/// The fixed, ordered set of columns and which one counts as finished
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Column names in display order. New tasks land in the first one.
    pub columns: Vec<String>,
    /// Tasks in this column are excluded from the due-today count
    pub terminal_column: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: vec!["To Do".into(), "In Progress".into(), "Done".into()],
            terminal_column: "Done".into(),
        }
    }
}

impl BoardConfig {
    /// Create a config from explicit columns. The last column is terminal.
    pub fn with_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let terminal_column = columns
            .last()
            .cloned()
            .ok_or_else(|| KanbanError::invalid_config("at least one column is required"))?;
        let config = Self {
            columns,
            terminal_column,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load defaults, then `path` if given, then `TEAMBOARD_*` env vars
    pub fn load(path: Option<&Path>) -> Result<Self> {
        debug!("Loading board configuration");

        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            trace!("Merging board config file: {}", path.display());
            figment = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => figment.merge(Toml::file(path)),
                Some("yaml") | Some("yml") => figment.merge(Yaml::file(path)),
                Some("json") => figment.merge(Json::file(path)),
                _ => {
                    return Err(KanbanError::invalid_config(format!(
                        "unsupported config file format: {}",
                        path.display()
                    )))
                }
            };
        }

        let config: Self = figment.merge(Env::prefixed(ENV_PREFIX)).extract()?;
        config.validate()?;

        debug!(
            columns = ?config.columns,
            terminal = %config.terminal_column,
            "Loaded board configuration"
        );
        Ok(config)
    }

    /// Reject empty or duplicated columns and a terminal column outside the set
    pub fn validate(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(KanbanError::invalid_config("at least one column is required"));
        }

        let mut seen = HashSet::new();
        for column in &self.columns {
            if column.trim().is_empty() {
                return Err(KanbanError::invalid_config("column names must not be blank"));
            }
            if !seen.insert(column.as_str()) {
                return Err(KanbanError::invalid_config(format!(
                    "duplicate column '{}'",
                    column
                )));
            }
        }

        if !self.is_column(&self.terminal_column) {
            return Err(KanbanError::invalid_config(format!(
                "terminal column '{}' is not one of the board columns",
                self.terminal_column
            )));
        }
        Ok(())
    }

    /// The column new tasks start in
    pub fn initial_column(&self) -> &str {
        // BoardStore only holds configs that passed validate(), so this is never empty
        self.columns.first().map(String::as_str).unwrap_or_default()
    }

    pub fn is_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn clear_env() {
        std::env::remove_var("TEAMBOARD_TERMINAL_COLUMN");
        std::env::remove_var("TEAMBOARD_COLUMNS");
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = BoardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.initial_column(), "To Do");
        assert!(config.is_column("In Progress"));
        assert!(!config.is_column("Blocked"));
    }

    #[test]
    fn test_with_columns_uses_last_as_terminal() {
        let config = BoardConfig::with_columns(["Backlog", "Doing", "Shipped"]).unwrap();
        assert_eq!(config.terminal_column, "Shipped");
        assert_eq!(config.initial_column(), "Backlog");
    }

    #[test]
    fn test_validate_rejects_bad_columns() {
        assert!(matches!(
            BoardConfig::with_columns(Vec::<String>::new()),
            Err(KanbanError::InvalidConfig { .. })
        ));
        assert!(BoardConfig::with_columns(["A", "B", "A"]).is_err());

        let config = BoardConfig {
            columns: vec!["A".into()],
            terminal_column: "Z".into(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_load_defaults_without_file() {
        clear_env();
        let config = BoardConfig::load(None).unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    #[serial]
    fn test_load_toml_file() {
        clear_env();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("board.toml");
        fs::write(
            &path,
            "columns = [\"Backlog\", \"Doing\", \"Shipped\"]\nterminal_column = \"Shipped\"\n",
        )
        .unwrap();

        let config = BoardConfig::load(Some(&path)).unwrap();
        assert_eq!(config.columns, vec!["Backlog", "Doing", "Shipped"]);
        assert_eq!(config.terminal_column, "Shipped");
    }

    #[test]
    #[serial]
    fn test_load_yaml_file() {
        clear_env();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("board.yaml");
        fs::write(
            &path,
            "columns:\n  - Todo\n  - Review\n  - Done\nterminal_column: Done\n",
        )
        .unwrap();

        let config = BoardConfig::load(Some(&path)).unwrap();
        assert_eq!(config.columns, vec!["Todo", "Review", "Done"]);
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        clear_env();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("board.json");
        fs::write(
            &path,
            r#"{"columns": ["To Do", "Review", "Done"], "terminal_column": "Done"}"#,
        )
        .unwrap();

        std::env::set_var("TEAMBOARD_TERMINAL_COLUMN", "Review");
        let result = BoardConfig::load(Some(&path));
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.terminal_column, "Review");
    }

    #[test]
    #[serial]
    fn test_load_rejects_invalid_terminal() {
        clear_env();
        std::env::set_var("TEAMBOARD_TERMINAL_COLUMN", "Archived");
        let result = BoardConfig::load(None);
        clear_env();

        assert!(matches!(result, Err(KanbanError::InvalidConfig { .. })));
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let result = BoardConfig::load(Some(Path::new("board.ini")));
        assert!(matches!(result, Err(KanbanError::InvalidConfig { .. })));
    }
}

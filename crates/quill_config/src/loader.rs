//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::QuillConfig;
use std::collections::HashSet;
use std::path::Path;

/// The name of the configuration file looked up in a project directory.
pub const CONFIG_FILE_NAME: &str = "quill.toml";

/// Loads and validates `quill.toml` from a project directory.
pub fn load_config(project_dir: &Path) -> Result<QuillConfig, ConfigError> {
    let config_path = project_dir.join(CONFIG_FILE_NAME);
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `quill.toml` configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<QuillConfig, ConfigError> {
    let config: QuillConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Checks the routing section for values that would misroute diagnostics.
fn validate_config(config: &QuillConfig) -> Result<(), ConfigError> {
    let routing = &config.routing;
    if routing.batch_mode && routing.primary_files.is_empty() {
        return Err(ConfigError::ValidationError(
            "batch mode requires at least one primary file".to_string(),
        ));
    }
    let mut seen = HashSet::new();
    for file in &routing.primary_files {
        if file.is_empty() {
            return Err(ConfigError::ValidationError(
                "primary file names must not be empty".to_string(),
            ));
        }
        if !seen.insert(file.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate primary file '{file}'"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let config = load_config_from_str("").unwrap();
        assert!(!config.routing.batch_mode);
        assert!(config.routing.primary_files.is_empty());
        assert!(!config.logging.log_discarded);
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[routing]
batch_mode = true
primary_files = ["src/a.ql", "src/b.ql"]

[logging]
log_discarded = true
"#;
        let config = load_config_from_str(toml).unwrap();
        assert!(config.routing.batch_mode);
        assert_eq!(config.routing.primary_files, vec!["src/a.ql", "src/b.ql"]);
        assert!(config.logging.log_discarded);
        assert!(config.routing.is_suppressed("src/c.ql"));
    }

    #[test]
    fn batch_mode_without_primaries_rejected() {
        let err = load_config_from_str("[routing]\nbatch_mode = true\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(format!("{err}").contains("at least one primary file"));
    }

    #[test]
    fn duplicate_primary_rejected() {
        let toml = r#"
[routing]
batch_mode = true
primary_files = ["a.ql", "a.ql"]
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(format!("{err}").contains("duplicate primary file 'a.ql'"));
    }

    #[test]
    fn empty_primary_rejected() {
        let err = load_config_from_str("[routing]\nprimary_files = [\"\"]\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = load_config_from_str("[routing\nbatch_mode = ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn wrong_type_is_parse_error() {
        let err = load_config_from_str("[routing]\nbatch_mode = \"yes\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn load_from_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[logging]\nlog_discarded = true\n",
        )
        .unwrap();
        let config = load_config(dir.path()).unwrap();
        assert!(config.logging.log_discarded);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = load_config(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}

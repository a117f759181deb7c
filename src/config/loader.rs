//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::LoggerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<LoggerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: LoggerConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::VerbosityMode;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("diaglog-{}-{}.toml", name, std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_and_validates_toml() {
        let path = write_temp(
            "valid",
            r#"
max_entries = 50
mode = "detailed"
log_to_console = false
"#,
        );
        let config = load_config(&path).unwrap();
        assert_eq!(config.max_entries, 50);
        assert_eq!(config.mode, VerbosityMode::Detailed);
        assert!(!config.log_to_console);
        fs::remove_file(path).unwrap_or_default();
    }

    #[test]
    fn rejects_invalid_values() {
        let path = write_temp("invalid", "max_entries = 0\n");
        let error = load_config(&path).unwrap_err();
        assert!(matches!(error, ConfigError::Validation(_)));
        fs::remove_file(path).unwrap_or_default();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let error = load_config(Path::new("/nonexistent/diaglog.toml")).unwrap_err();
        assert!(matches!(error, ConfigError::Io(_)));
    }
}

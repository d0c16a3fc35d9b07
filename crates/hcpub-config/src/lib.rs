//! Configuration management for hcpub.
//!
//! Parses `hcpub.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! A bare `$` without braces is kept literally.
//!
//! Expanded fields:
//! - `zendesk.base_url`
//! - `zendesk.username`
//! - `zendesk.api_token`
//! - `zendesk.section_id`
//! - `zendesk.locale`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override target section ID.
    pub section_id: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "hcpub.toml";

/// Locale used for new articles when none is configured.
pub const DEFAULT_LOCALE: &str = "en-us";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Zendesk Help Center configuration.
    pub zendesk: Option<ZendeskConfig>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Zendesk Help Center configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ZendeskConfig {
    /// Help Center base URL, e.g. `https://example.zendesk.com`.
    pub base_url: String,
    /// API username. For token auth this is `user@domain.com/token`.
    pub username: String,
    /// API token from the admin interface.
    pub api_token: String,
    /// Section new articles are created in.
    #[serde(deserialize_with = "string_or_integer")]
    pub section_id: String,
    /// Article locale.
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl ZendeskConfig {
    /// Validate that all required fields are properly set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty or has invalid format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.base_url, "zendesk.base_url")?;
        require_http_url(&self.base_url, "zendesk.base_url")?;
        require_non_empty(&self.username, "zendesk.username")?;
        require_non_empty(&self.api_token, "zendesk.api_token")?;
        require_non_empty(&self.section_id, "zendesk.section_id")?;
        require_non_empty(&self.locale, "zendesk.locale")?;
        Ok(())
    }
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_owned()
}

/// Section IDs are numeric in Zendesk but are accepted as strings too.
fn string_or_integer<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrInteger {
        String(String),
        Integer(u64),
    }

    Ok(match StringOrInteger::deserialize(deserializer)? {
        StringOrInteger::String(s) => s,
        StringOrInteger::Integer(n) => n.to_string(),
    })
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`zendesk.api_token`").
        field: String,
        /// Error message (e.g., "${`ZENDESK_TOKEN`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `hcpub.toml` in current directory and parents.
    /// When nothing is found, an empty configuration is returned.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(zendesk) = &mut self.zendesk
            && let Some(section_id) = &settings.section_id
        {
            zendesk.section_id.clone_from(section_id);
        }
    }

    /// Get validated Zendesk configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the section is missing or invalid.
    pub fn require_zendesk(&self) -> Result<&ZendeskConfig, ConfigError> {
        let zendesk = self.zendesk.as_ref().ok_or_else(|| {
            ConfigError::Validation("[zendesk] section required in config".into())
        })?;
        zendesk.validate()?;
        Ok(zendesk)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_from(&current)
    }

    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref mut zendesk) = self.zendesk {
            zendesk.base_url = expand::expand_env(&zendesk.base_url, "zendesk.base_url")?;
            zendesk.username = expand::expand_env(&zendesk.username, "zendesk.username")?;
            zendesk.api_token = expand::expand_env(&zendesk.api_token, "zendesk.api_token")?;
            zendesk.section_id = expand::expand_env(&zendesk.section_id, "zendesk.section_id")?;
            zendesk.locale = expand::expand_env(&zendesk.locale, "zendesk.locale")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Create a valid Zendesk config for testing.
    fn valid_zendesk_config() -> ZendeskConfig {
        ZendeskConfig {
            base_url: "https://example.zendesk.com".to_owned(),
            username: "user@example.com/token".to_owned(),
            api_token: "token".to_owned(),
            section_id: "360001".to_owned(),
            locale: DEFAULT_LOCALE.to_owned(),
        }
    }

    fn assert_validation_error(config: &ZendeskConfig, expected_substrings: &[&str]) {
        let result = config.validate();
        assert!(result.is_err(), "Expected validation to fail");
        let err = result.unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.zendesk.is_none());
    }

    #[test]
    fn test_parse_zendesk_config() {
        let toml = r#"
[zendesk]
base_url = "https://example.zendesk.com"
username = "user@example.com/token"
api_token = "abc123"
section_id = "360001"
locale = "de"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let zendesk = config.zendesk.unwrap();
        assert_eq!(zendesk.base_url, "https://example.zendesk.com");
        assert_eq!(zendesk.username, "user@example.com/token");
        assert_eq!(zendesk.api_token, "abc123");
        assert_eq!(zendesk.section_id, "360001");
        assert_eq!(zendesk.locale, "de");
    }

    #[test]
    fn test_parse_numeric_section_id_and_default_locale() {
        let toml = r#"
[zendesk]
base_url = "https://example.zendesk.com"
username = "user"
api_token = "abc"
section_id = 360001234567
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let zendesk = config.zendesk.unwrap();
        assert_eq!(zendesk.section_id, "360001234567");
        assert_eq!(zendesk.locale, "en-us");
    }

    #[test]
    fn test_apply_cli_settings_section() {
        let mut config = Config {
            zendesk: Some(valid_zendesk_config()),
            config_path: None,
        };

        config.apply_cli_settings(&CliSettings {
            section_id: Some("999".to_owned()),
        });

        assert_eq!(config.zendesk.unwrap().section_id, "999");
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config {
            zendesk: Some(valid_zendesk_config()),
            config_path: None,
        };

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.zendesk.unwrap().section_id, "360001");
    }

    #[test]
    fn test_expand_env_vars_zendesk() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("TEST_HCPUB_URL", "https://acme.zendesk.com");
            std::env::set_var("TEST_HCPUB_TOKEN", "my-token");
        }

        let toml = r#"
[zendesk]
base_url = "${TEST_HCPUB_URL}"
username = "bot@acme.com/token"
api_token = "${TEST_HCPUB_TOKEN}"
section_id = "${TEST_HCPUB_SECTION:-42}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        let zendesk = config.zendesk.unwrap();
        assert_eq!(zendesk.base_url, "https://acme.zendesk.com");
        assert_eq!(zendesk.api_token, "my-token");
        assert_eq!(zendesk.section_id, "42");

        unsafe {
            std::env::remove_var("TEST_HCPUB_URL");
            std::env::remove_var("TEST_HCPUB_TOKEN");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("MISSING_VAR_HCPUB_TEST");
        }

        let toml = r#"
[zendesk]
base_url = "${MISSING_VAR_HCPUB_TEST}"
username = "user"
api_token = "token"
section_id = "1"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.expand_env_vars().unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("MISSING_VAR_HCPUB_TEST"));
        assert!(err.to_string().contains("zendesk.base_url"));
    }

    #[test]
    fn test_literal_dollar_in_token_is_kept() {
        let toml = r#"
[zendesk]
base_url = "https://acme.zendesk.com"
username = "bot@acme.com/token"
api_token = "p$w0rd"
section_id = "1"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(config.zendesk.unwrap().api_token, "p$w0rd");
    }

    #[test]
    fn test_zendesk_config_validate_valid() {
        assert!(valid_zendesk_config().validate().is_ok());
    }

    #[test]
    fn test_zendesk_config_validate_empty_token() {
        let config = ZendeskConfig {
            api_token: String::new(),
            ..valid_zendesk_config()
        };
        assert_validation_error(&config, &["api_token", "empty"]);
    }

    #[test]
    fn test_zendesk_config_validate_empty_section() {
        let config = ZendeskConfig {
            section_id: String::new(),
            ..valid_zendesk_config()
        };
        assert_validation_error(&config, &["section_id", "empty"]);
    }

    #[test]
    fn test_zendesk_config_validate_invalid_url() {
        let config = ZendeskConfig {
            base_url: "example.zendesk.com".to_owned(),
            ..valid_zendesk_config()
        };
        assert_validation_error(&config, &["base_url", "http"]);
    }

    #[test]
    fn test_require_zendesk_missing_section() {
        let config = Config::default();
        let err = config.require_zendesk().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("[zendesk]"));
    }

    #[test]
    fn test_require_zendesk_returns_validated() {
        let config = Config {
            zendesk: Some(valid_zendesk_config()),
            config_path: None,
        };
        assert_eq!(
            config.require_zendesk().unwrap().base_url,
            "https://example.zendesk.com"
        );
    }

    #[test]
    fn test_load_explicit_missing_path() {
        let err = Config::load(Some(Path::new("/nonexistent/hcpub.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_from_file_records_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            r#"
[zendesk]
base_url = "https://example.zendesk.com"
username = "user"
api_token = "token"
section_id = 7
"#,
        )
        .unwrap();

        let settings = CliSettings {
            section_id: Some("8".to_owned()),
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.config_path, Some(path));
        assert_eq!(config.require_zendesk().unwrap().section_id, "8");
    }

    #[test]
    fn test_discover_from_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("docs/guides");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();

        assert_eq!(
            Config::discover_from(&nested),
            Some(dir.path().join(CONFIG_FILENAME))
        );
    }
}

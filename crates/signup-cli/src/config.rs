//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate only ever sees the
//! [`PasswordPolicy`] built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `SIGNUP_<SECTION>__<KEY>`, e.g.
//!    `SIGNUP_POLICY__MIN_PASSWORD_LENGTH=8`
//! 3. Config file: `--config FILE`, else the per-user default path
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use signup_core::domain::{DEFAULT_MIN_PASSWORD_LENGTH, DomainError, PasswordPolicy};

const ENV_PREFIX: &str = "SIGNUP";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Password rules.
    pub policy: PolicyConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Prompting for missing fields.
    pub prompt: PromptConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    pub min_password_length: usize,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub require_digit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Ask for fields missing from the command line when stdin is a terminal.
    pub interactive: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self { interactive: true }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::config_path(), false),
        };

        let defaults = Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let config = Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        config
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.signup.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "signup", "signup")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".signup.toml"))
    }

    /// The password policy these settings describe.
    pub fn password_policy(&self) -> Result<PasswordPolicy, DomainError> {
        let p = &self.policy;
        Ok(PasswordPolicy::new(p.min_password_length)?
            .require_uppercase(p.require_uppercase)
            .require_lowercase(p.require_lowercase)
            .require_digit(p.require_digit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_core_policy() {
        let policy = AppConfig::default().password_policy().unwrap();
        assert_eq!(policy, PasswordPolicy::default());
    }

    #[test]
    fn zero_length_policy_is_rejected() {
        let mut cfg = AppConfig::default();
        cfg.policy.min_password_length = 0;
        assert!(matches!(
            cfg.password_policy(),
            Err(DomainError::InvalidPolicy { .. })
        ));
    }

    #[test]
    fn file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(
            file,
            "[policy]\nmin_password_length = 10\nrequire_digit = false\n\n[output]\nformat = \"json\""
        )
        .unwrap();

        let cfg = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(cfg.policy.min_password_length, 10);
        assert!(!cfg.policy.require_digit);
        assert!(cfg.policy.require_uppercase);
        assert_eq!(cfg.output.format, "json");
        assert!(cfg.prompt.interactive);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, AppConfig::default());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}

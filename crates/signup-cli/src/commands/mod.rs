//! One module per subcommand. Handlers translate arguments into core calls
//! and render the result; they hold no rules.

pub mod check;
pub mod completions;
pub mod config;
pub mod init;
pub mod login;
pub mod register;

use signup_core::domain::FormValidator;

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Validator configured from the `[policy]` section.
fn validator(config: &AppConfig) -> CliResult<FormValidator> {
    let policy = config
        .password_policy()
        .map_err(|e| CliError::ConfigError {
            message: e.to_string(),
            source: Some(Box::new(e)),
        })?;
    Ok(FormValidator::new(policy))
}

//! `signup check`: live feedback for a single field.

use std::slice;

use signup_core::domain::{Field, SignUpForm};
use tracing::{debug, instrument};

use crate::{
    cli::CheckArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::{OutputManager, StatusReport},
};

/// Validate one field. An invalid value exits like a rejected form.
#[instrument(skip_all, fields(field = %args.field))]
pub fn execute(args: CheckArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    if args.password.is_some() && args.field != Field::ConfirmPassword {
        return Err(CliError::InvalidInput {
            message: format!(
                "--password only applies to confirm-password, not {}",
                args.field
            ),
            source: None,
        });
    }

    let validator = super::validator(&config)?;
    let form = SignUpForm::new()
        .with(Field::Password, args.password.unwrap_or_default())
        .with(args.field, args.value);

    let result = validator.validate_field(args.field, &form);
    debug!(valid = result.is_valid(), "Field checked");

    if output.is_json() {
        output.json(&StatusReport {
            status: if result.is_valid() { "valid" } else { "invalid" },
            screen: None,
            errors: result.error().map(slice::from_ref).unwrap_or_default(),
        })?;
    }

    match result.error() {
        None => {
            if !output.is_json() {
                output.success(&format!("{} looks good", args.field.label()))?;
            }
            Ok(())
        }
        Some(error) => Err(CliError::FormRejected {
            errors: vec![*error],
        }),
    }
}

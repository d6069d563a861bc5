//! Asking the user for fields missing from the command line.

use signup_core::domain::Field;

use crate::error::{CliError, CliResult};

/// Source of field values typed by a person.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Read one field. An empty answer is allowed; the rules decide.
    fn ask(&self, field: Field) -> CliResult<String>;
}

/// `dialoguer` prompts on the controlling terminal. Secret fields are not
/// echoed.
#[cfg(feature = "interactive")]
#[derive(Debug, Default)]
pub struct TerminalPrompter;

#[cfg(feature = "interactive")]
impl Prompter for TerminalPrompter {
    fn ask(&self, field: Field) -> CliResult<String> {
        let answer = if field.is_secret() {
            dialoguer::Password::new()
                .with_prompt(field.label())
                .allow_empty_password(true)
                .interact()
        } else {
            dialoguer::Input::<String>::new()
                .with_prompt(field.label())
                .allow_empty(true)
                .interact_text()
        };
        answer.map_err(|e| from_prompt_error(e.into()))
    }
}

/// The prompter for this build, or why there is none.
pub fn terminal_prompter() -> CliResult<Box<dyn Prompter>> {
    #[cfg(feature = "interactive")]
    {
        Ok(Box::new(TerminalPrompter))
    }
    #[cfg(not(feature = "interactive"))]
    {
        Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        })
    }
}

/// Ctrl-C at a prompt is a cancellation, anything else an I/O failure.
fn from_prompt_error(err: std::io::Error) -> CliError {
    if err.kind() == std::io::ErrorKind::Interrupted {
        CliError::Cancelled
    } else {
        CliError::IoError {
            message: "failed to read prompt input".into(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn interrupt_is_cancellation() {
        let err = from_prompt_error(io::Error::from(io::ErrorKind::Interrupted));
        assert!(matches!(err, CliError::Cancelled));
    }

    #[test]
    fn other_failures_are_io_errors() {
        let err = from_prompt_error(io::Error::from(io::ErrorKind::UnexpectedEof));
        assert!(matches!(err, CliError::IoError { .. }));
    }

    #[cfg(feature = "interactive")]
    #[test]
    fn interactive_build_has_a_prompter() {
        assert!(terminal_prompter().is_ok());
    }

    #[cfg(not(feature = "interactive"))]
    #[test]
    fn plain_build_reports_missing_feature() {
        assert!(matches!(
            terminal_prompter(),
            Err(CliError::FeatureNotAvailable { .. })
        ));
    }
}

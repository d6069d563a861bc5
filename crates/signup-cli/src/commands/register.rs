//! Implementation of the `signup register` command.
//!
//! Responsibility: gather the five field values (flags, environment, or
//! prompts), hand them to a [`SignUpSession`], and render the outcome.
//! Every rule decision is made by the core.

use std::io::IsTerminal;

use signup_adapters::{InMemoryRouter, NoopAccountCreator};
use signup_core::{
    application::{Screen, SignUpSession},
    domain::{Field, Registration, SubmitOutcome},
};
use tracing::{debug, info, instrument};

use crate::{
    cli::RegisterArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::{OutputManager, StatusReport},
    prompt::{Prompter, terminal_prompter},
};

/// Execute the `signup register` command.
///
/// Dispatch sequence:
/// 1. Build the validator from the configured password policy
/// 2. Open a session wired to the in-process router and account hook
/// 3. Fill every field, prompting for missing ones when allowed
/// 4. Submit; on acceptance the session creates the account and goes home
/// 5. Render the outcome; a rejection becomes [`CliError::FormRejected`]
#[instrument(skip_all)]
pub fn execute(args: RegisterArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let router = InMemoryRouter::new();
    let mut session = SignUpSession::open(
        super::validator(&config)?,
        Box::new(router.clone()),
        Box::new(NoopAccountCreator::new()),
    );

    let prompter = select_prompter(&args, &config)?;
    fill_form(&mut session, &args, prompter.as_deref(), &output)?;

    let outcome = session.submit()?;
    let screen = router.current().unwrap_or(Screen::SignUp);

    match outcome {
        SubmitOutcome::Accepted(registration) => {
            info!(%screen, "Registration accepted");
            render_accepted(&registration, screen, &output)
        }
        SubmitOutcome::Rejected(errors) => {
            if output.is_json() {
                output.json(&StatusReport {
                    status: "rejected",
                    screen: None,
                    errors: &errors,
                })?;
            }
            Err(CliError::FormRejected { errors })
        }
    }
}

/// Decide whether missing fields are asked for.
///
/// `--interactive` insists (and fails if prompting is not compiled in);
/// otherwise prompting happens only when configured and stdin is a terminal.
fn select_prompter(
    args: &RegisterArgs,
    config: &AppConfig,
) -> CliResult<Option<Box<dyn Prompter>>> {
    let missing = Field::ALL.iter().any(|f| args.value(*f).is_none());
    if !missing {
        return Ok(None);
    }
    if args.interactive {
        return terminal_prompter().map(Some);
    }
    if config.prompt.interactive && std::io::stdin().is_terminal() {
        return Ok(terminal_prompter().ok());
    }
    Ok(None)
}

/// Copy flag values into the session and prompt for the rest.
///
/// Prompted fields get immediate feedback, like the form does while typing.
/// Fields neither given nor prompted stay empty and will fail `Required`.
fn fill_form(
    session: &mut SignUpSession,
    args: &RegisterArgs,
    prompter: Option<&dyn Prompter>,
    output: &OutputManager,
) -> CliResult<()> {
    for field in Field::ALL {
        match (args.value(field), prompter) {
            (Some(value), _) => session.set_field(field, value)?,
            (None, Some(prompter)) => {
                session.set_field(field, prompter.ask(field)?)?;
                if let Some(message) = session.check(field).message() {
                    output.warning(&message)?;
                }
            }
            (None, None) => debug!(%field, "Not provided, left empty"),
        }
    }
    Ok(())
}

fn render_accepted(
    registration: &Registration,
    screen: Screen,
    output: &OutputManager,
) -> CliResult<()> {
    if output.is_json() {
        output.json(&StatusReport {
            status: "accepted",
            screen: Some(screen.as_str()),
            errors: &[],
        })?;
        return Ok(());
    }

    output.success(&format!("Welcome, {}!", registration.display_name()))?;
    output.info(&format!("Account created for {}", registration.email()))?;
    output.info(&format!("Now on: {screen}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cli::{GlobalArgs, OutputFormat},
        prompt::MockPrompter,
    };
    use mockall::predicate::eq;
    use signup_core::domain::FormValidator;

    fn quiet_output() -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    fn session(router: &InMemoryRouter) -> SignUpSession {
        SignUpSession::open(
            FormValidator::default(),
            Box::new(router.clone()),
            Box::new(NoopAccountCreator::new()),
        )
    }

    fn marie() -> RegisterArgs {
        RegisterArgs {
            first_name: Some("Marie".into()),
            last_name: Some("Dupont".into()),
            email: Some("marie@example.com".into()),
            password: Some("Abcdef1".into()),
            confirm_password: Some("Abcdef1".into()),
            interactive: false,
        }
    }

    fn run(args: RegisterArgs) -> CliResult<()> {
        execute(args, AppConfig::default(), quiet_output())
    }

    #[test]
    fn complete_flags_are_accepted() {
        assert!(run(marie()).is_ok());
    }

    #[test]
    fn mismatched_confirmation_is_rejected_with_one_error() {
        let args = RegisterArgs {
            confirm_password: Some("abcdef1".into()),
            ..marie()
        };
        match run(args) {
            Err(CliError::FormRejected { errors }) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, Field::ConfirmPassword);
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn missing_fields_without_prompter_are_required() {
        let args = RegisterArgs {
            first_name: Some("Marie".into()),
            ..RegisterArgs::default()
        };
        let router = InMemoryRouter::new();
        let mut s = session(&router);
        fill_form(&mut s, &args, None, &quiet_output()).unwrap();

        let report = s.validate();
        assert!(report.get(Field::FirstName).is_valid());
        assert_eq!(report.errors().count(), 4);
    }

    #[test]
    fn prompter_fills_only_missing_fields() {
        let args = RegisterArgs {
            password: None,
            confirm_password: None,
            ..marie()
        };

        let mut prompter = MockPrompter::new();
        prompter
            .expect_ask()
            .with(eq(Field::Password))
            .times(1)
            .returning(|_| Ok("Abcdef1".into()));
        prompter
            .expect_ask()
            .with(eq(Field::ConfirmPassword))
            .times(1)
            .returning(|_| Ok("Abcdef1".into()));

        let router = InMemoryRouter::new();
        let mut s = session(&router);
        fill_form(&mut s, &args, Some(&prompter), &quiet_output()).unwrap();

        assert!(s.submit().unwrap().is_accepted());
        assert_eq!(router.current(), Some(Screen::Home));
    }

    #[test]
    fn cancelled_prompt_stops_before_submit() {
        let args = RegisterArgs {
            email: None,
            ..marie()
        };

        let mut prompter = MockPrompter::new();
        prompter
            .expect_ask()
            .times(1)
            .returning(|_| Err(CliError::Cancelled));

        let router = InMemoryRouter::new();
        let mut s = session(&router);
        let result = fill_form(&mut s, &args, Some(&prompter), &quiet_output());

        assert!(matches!(result, Err(CliError::Cancelled)));
        assert!(router.history().is_empty());
    }

    #[test]
    fn nothing_missing_means_no_prompter() {
        assert!(
            select_prompter(&marie(), &AppConfig::default())
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn prompting_disabled_in_config_means_no_prompter() {
        let mut config = AppConfig::default();
        config.prompt.interactive = false;
        assert!(
            select_prompter(&RegisterArgs::default(), &config)
                .unwrap()
                .is_none()
        );
    }
}

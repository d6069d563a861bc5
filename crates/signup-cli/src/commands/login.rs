//! `signup login`: the "already have an account" link.

use signup_adapters::{InMemoryRouter, NoopAccountCreator};
use signup_core::application::{Screen, SignUpSession};
use tracing::instrument;

use crate::{
    config::AppConfig,
    error::CliResult,
    output::{OutputManager, StatusReport},
};

/// Leave the sign-up form for login without validating anything.
#[instrument(skip_all)]
pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    let router = InMemoryRouter::new();
    let mut session = SignUpSession::open(
        super::validator(&config)?,
        Box::new(router.clone()),
        Box::new(NoopAccountCreator::new()),
    );

    session.go_to_login()?;
    let screen = router.current().unwrap_or(Screen::Login);

    if output.is_json() {
        output.json(&StatusReport {
            status: "navigated",
            screen: Some(screen.as_str()),
            errors: &[],
        })?;
    } else {
        output.info("Already have an account? Taking you to login.")?;
        output.success(&format!("Now on: {screen}"))?;
    }

    Ok(())
}

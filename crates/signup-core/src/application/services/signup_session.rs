//! Sign-up Session - one open registration screen.
//!
//! This service owns the field values for the lifetime of the screen and
//! runs the submit workflow:
//! 1. Validate every field
//! 2. On rejection, hand the errors back and do nothing else
//! 3. On acceptance, run the account-creation hook, then navigate home
//!
//! The hook runs once per session. If navigation fails after it, the session
//! keeps the account id and the next `submit` only retries the navigation.
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{AccountCreator, AccountId, NavigationMode, Navigator, Screen},
    },
    domain::{Field, FormReport, FormValidator, SignUpForm, SubmitOutcome, ValidationResult},
    error::SignUpResult,
};

/// Lifecycle of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// The form is on screen and accepts input.
    Open,
    /// The account exists but the move home has not happened yet. Values are
    /// locked; `submit` retries the navigation.
    AccountCreated { account: AccountId },
    /// The session navigated to `screen`; its values were discarded.
    Closed { screen: Screen },
}

/// One open sign-up screen.
///
/// Every session starts from an empty form, so nothing typed into a
/// previous screen can show up here.
pub struct SignUpSession {
    validator: FormValidator,
    navigator: Box<dyn Navigator>,
    accounts: Box<dyn AccountCreator>,
    form: SignUpForm,
    state: SessionState,
}

impl SignUpSession {
    /// Open a fresh session with the given collaborators.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use signup_core::prelude::*;
    ///
    /// let mut session = SignUpSession::open(
    ///     FormValidator::default(),
    ///     navigator, // Box<dyn Navigator>
    ///     accounts,  // Box<dyn AccountCreator>
    /// );
    /// session.set_field(Field::Email, "marie@example.com")?;
    /// ```
    pub fn open(
        validator: FormValidator,
        navigator: Box<dyn Navigator>,
        accounts: Box<dyn AccountCreator>,
    ) -> Self {
        debug!("Sign-up session opened");
        Self {
            validator,
            navigator,
            accounts,
            form: SignUpForm::new(),
            state: SessionState::Open,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state.clone()
    }

    /// `true` until the session navigates away.
    pub fn is_open(&self) -> bool {
        !matches!(self.state, SessionState::Closed { .. })
    }

    /// The account created by an earlier submit that could not finish.
    pub fn pending_account(&self) -> Option<&AccountId> {
        match &self.state {
            SessionState::AccountCreated { account } => Some(account),
            _ => None,
        }
    }

    pub fn validator(&self) -> &FormValidator {
        &self.validator
    }

    pub fn form(&self) -> &SignUpForm {
        &self.form
    }

    pub fn field(&self, field: Field) -> &str {
        self.form.get(field)
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> SignUpResult<()> {
        self.ensure_editable()?;
        self.form.set(field, value);
        Ok(())
    }

    pub fn push_char(&mut self, field: Field, c: char) -> SignUpResult<()> {
        self.ensure_editable()?;
        self.form.push_char(field, c);
        Ok(())
    }

    pub fn pop_char(&mut self, field: Field) -> SignUpResult<()> {
        self.ensure_editable()?;
        self.form.pop_char(field);
        Ok(())
    }

    /// Empty every field without leaving the screen.
    pub fn clear(&mut self) -> SignUpResult<()> {
        self.ensure_editable()?;
        self.form.clear();
        Ok(())
    }

    /// Live feedback for one field. No side effects.
    pub fn check(&self, field: Field) -> ValidationResult {
        self.validator.validate_field(field, &self.form)
    }

    /// Live feedback for the whole form. No side effects.
    pub fn validate(&self) -> FormReport {
        self.validator.validate(&self.form)
    }

    /// Validate and, if everything passes, create the account and go home.
    ///
    /// A rejected form touches nothing: no account call, no navigation, and
    /// the values stay in place for correction. After a failed navigation the
    /// account is not created again; only the move home is retried.
    #[instrument(skip_all)]
    pub fn submit(&mut self) -> SignUpResult<SubmitOutcome> {
        self.ensure_open()?;

        let outcome = self.validator.submit(&self.form);
        let SubmitOutcome::Accepted(registration) = &outcome else {
            info!(invalid = outcome.errors().len(), "Submission rejected");
            return Ok(outcome);
        };

        if let Some(account) = self.pending_account() {
            debug!(account = %account, "Account already created, retrying navigation");
        } else {
            let account = self.accounts.create_account(registration)?;
            info!(account = %account, "Account created");
            self.state = SessionState::AccountCreated { account };
        }

        if let Err(e) = self
            .navigator
            .navigate_to(Screen::Home, NavigationMode::Replace)
        {
            warn!(error = %e, "Account created but navigation home failed");
            return Err(e);
        }

        self.close(Screen::Home);
        info!("Sign-up completed");
        Ok(outcome)
    }

    /// The "already have an account" action. Skips validation entirely.
    #[instrument(skip_all)]
    pub fn go_to_login(&mut self) -> SignUpResult<()> {
        self.ensure_open()?;
        self.navigator
            .navigate_to(Screen::Login, NavigationMode::Replace)?;
        self.close(Screen::Login);
        info!("Left sign-up for login");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn ensure_open(&self) -> SignUpResult<()> {
        match self.state {
            SessionState::Closed { .. } => Err(ApplicationError::SessionClosed.into()),
            _ => Ok(()),
        }
    }

    fn ensure_editable(&self) -> SignUpResult<()> {
        self.ensure_open()?;
        match &self.state {
            SessionState::AccountCreated { account } => Err(ApplicationError::FormLocked {
                account: account.clone(),
            }
            .into()),
            _ => Ok(()),
        }
    }

    fn close(&mut self, screen: Screen) {
        self.form.clear();
        self.state = SessionState::Closed { screen };
    }
}

use std::fmt;

use serde::Serialize;

use crate::domain::entities::form::{Redacted, SignUpForm};

/// The data of a form that passed every rule.
///
/// Only [`crate::domain::FormValidator::submit`] builds one, so holding a
/// `Registration` means the values were valid when it was made.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    first_name: String,
    last_name: String,
    email: String,
    #[serde(skip)]
    password: String,
}

impl Registration {
    pub(crate) fn from_form(form: &SignUpForm) -> Self {
        Self {
            first_name: form.first_name().to_string(),
            last_name: form.last_name().to_string(),
            email: form.email().to_string(),
            password: form.password().to_string(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// "First Last".
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &Redacted(self.password.chars().count()))
            .finish()
    }
}

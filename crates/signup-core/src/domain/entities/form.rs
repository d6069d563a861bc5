//! The mutable field values behind one open sign-up screen.

use std::fmt;

use crate::domain::field::Field;

/// Current values of the five sign-up inputs.
///
/// Starts empty. The view layer mutates it on every change; the validator
/// only ever reads it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    confirm_password: String,
}

impl SignUpForm {
    /// An empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, handy in tests and for pre-filled forms.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    /// Append a character to a field value.
    pub fn push_char(&mut self, field: Field, c: char) {
        self.slot(field).push(c);
    }

    /// Remove the last character from a field value.
    pub fn pop_char(&mut self, field: Field) {
        self.slot(field).pop();
    }

    pub fn clear_field(&mut self, field: Field) {
        self.slot(field).clear();
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// `true` if no field holds any text.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
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

    pub fn confirm_password(&self) -> &str {
        &self.confirm_password
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        }
    }
}

// Passwords never reach logs through `{:?}`.
impl fmt::Debug for SignUpForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpForm")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &Redacted(self.password.chars().count()))
            .field(
                "confirm_password",
                &Redacted(self.confirm_password.chars().count()),
            )
            .finish()
    }
}

pub(crate) struct Redacted(pub(crate) usize);

impl fmt::Debug for Redacted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<redacted: {} chars>", self.0)
    }
}

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, instrument};

use crate::domain::{
    entities::{Registration, SignUpForm},
    field::Field,
    policy::PasswordPolicy,
    violation::{FieldError, ValidationResult, Violation},
};

/// `<non-@>+ @ <non-@>+ . <non-@>+`, anchored at both ends.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("email shape pattern is valid")
});

/// Centralized sign-up validation.
///
/// Every rule is a pure function of its inputs: the same value always gives
/// the same [`ValidationResult`], and nothing is remembered between calls.
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    policy: PasswordPolicy,
}

impl FormValidator {
    pub fn new(policy: PasswordPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    pub fn validate_first_name(&self, value: &str) -> ValidationResult {
        required(Field::FirstName, value)
    }

    pub fn validate_last_name(&self, value: &str) -> ValidationResult {
        required(Field::LastName, value)
    }

    pub fn validate_email(&self, value: &str) -> ValidationResult {
        if value.is_empty() {
            return ValidationResult::invalid(Field::Email, Violation::Required);
        }
        if !EMAIL_SHAPE.is_match(value) {
            return ValidationResult::invalid(Field::Email, Violation::InvalidFormat);
        }
        ValidationResult::Valid
    }

    /// Checks the password rules in fixed order and reports only the first
    /// one that fails.
    pub fn validate_password(&self, value: &str) -> ValidationResult {
        let fail = |v| ValidationResult::invalid(Field::Password, v);
        let policy = &self.policy;

        if value.is_empty() {
            return fail(Violation::Required);
        }
        if value.chars().count() < policy.min_length() {
            return fail(Violation::TooShort {
                min: policy.min_length(),
            });
        }
        if policy.requires_uppercase() && !value.chars().any(|c| c.is_ascii_uppercase()) {
            return fail(Violation::MissingUppercase);
        }
        if policy.requires_lowercase() && !value.chars().any(|c| c.is_ascii_lowercase()) {
            return fail(Violation::MissingLowercase);
        }
        if policy.requires_digit() && !value.chars().any(|c| c.is_ascii_digit()) {
            return fail(Violation::MissingDigit);
        }
        ValidationResult::Valid
    }

    /// Only compares against `current_password`; whether that password is
    /// itself acceptable is the password rule's business.
    pub fn validate_confirm_password(
        &self,
        value: &str,
        current_password: &str,
    ) -> ValidationResult {
        if value.is_empty() {
            return ValidationResult::invalid(Field::ConfirmPassword, Violation::Required);
        }
        if value != current_password {
            return ValidationResult::invalid(Field::ConfirmPassword, Violation::Mismatch);
        }
        ValidationResult::Valid
    }

    /// Validate one field against the current form values.
    pub fn validate_field(&self, field: Field, form: &SignUpForm) -> ValidationResult {
        match field {
            Field::FirstName => self.validate_first_name(form.first_name()),
            Field::LastName => self.validate_last_name(form.last_name()),
            Field::Email => self.validate_email(form.email()),
            Field::Password => self.validate_password(form.password()),
            Field::ConfirmPassword => {
                self.validate_confirm_password(form.confirm_password(), form.password())
            }
        }
    }

    /// Validate every field, in [`Field::ALL`] order.
    pub fn validate(&self, form: &SignUpForm) -> FormReport {
        FormReport {
            results: Field::ALL.map(|field| (field, self.validate_field(field, form))),
        }
    }

    /// Run all five rules and decide.
    #[instrument(skip_all)]
    pub fn submit(&self, form: &SignUpForm) -> SubmitOutcome {
        let report = self.validate(form);

        if report.is_valid() {
            debug!("All fields valid");
            SubmitOutcome::Accepted(Registration::from_form(form))
        } else {
            let errors = report.into_errors();
            debug!(
                invalid = errors.len(),
                fields = ?errors.iter().map(|e| e.field.as_str()).collect::<Vec<_>>(),
                "Form rejected"
            );
            SubmitOutcome::Rejected(errors)
        }
    }
}

fn required(field: Field, value: &str) -> ValidationResult {
    if value.is_empty() {
        ValidationResult::invalid(field, Violation::Required)
    } else {
        ValidationResult::Valid
    }
}

/// Per-field results of one validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormReport {
    results: [(Field, ValidationResult); 5],
}

impl FormReport {
    /// The derived form state: valid iff every field is.
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|(_, r)| r.is_valid())
    }

    pub fn get(&self, field: Field) -> &ValidationResult {
        // `results` always holds every field, in `Field::ALL` order.
        &self.results[field as usize].1
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationResult)> {
        self.results.iter().map(|(f, r)| (*f, r))
    }

    pub fn errors(&self) -> impl Iterator<Item = &FieldError> {
        self.results.iter().filter_map(|(_, r)| r.error())
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.results
            .into_iter()
            .filter_map(|(_, r)| r.into_result().err())
            .collect()
    }
}

/// The aggregate decision of a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(Registration),
    Rejected(Vec<FieldError>),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Invalid fields, empty when accepted.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Accepted(_) => &[],
            Self::Rejected(errors) => errors,
        }
    }

    /// Messages of every invalid field, in field order.
    pub fn messages(&self) -> Vec<String> {
        self.errors().iter().map(FieldError::message).collect()
    }
}

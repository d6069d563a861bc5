//! Integration tests for signup-core: the observable contract of the
//! validator and the session, through the public API only.

use std::sync::{Arc, Mutex};

use signup_core::prelude::*;

fn marie() -> SignUpForm {
    SignUpForm::new()
        .with(Field::FirstName, "Marie")
        .with(Field::LastName, "Dupont")
        .with(Field::Email, "marie@example.com")
        .with(Field::Password, "Abcdef1")
        .with(Field::ConfirmPassword, "Abcdef1")
}

#[test]
fn every_empty_field_is_required() {
    let report = FormValidator::default().validate(&SignUpForm::new());
    for field in Field::ALL {
        assert_eq!(
            report.get(field).violation(),
            Some(Violation::Required),
            "{field}"
        );
    }
}

#[test]
fn password_examples() {
    let v = FormValidator::default();
    assert_eq!(
        v.validate_password("abc").violation(),
        Some(Violation::TooShort { min: 6 })
    );
    assert_eq!(
        v.validate_password("abcdef").violation(),
        Some(Violation::MissingUppercase)
    );
    assert_eq!(
        v.validate_password("Abcdef").violation(),
        Some(Violation::MissingDigit)
    );
    assert_eq!(v.validate_password("Abcdef1"), ValidationResult::Valid);
}

#[test]
fn email_examples() {
    let v = FormValidator::default();
    assert_eq!(v.validate_email("a@b.c"), ValidationResult::Valid);
    assert_eq!(
        v.validate_email("abc").violation(),
        Some(Violation::InvalidFormat)
    );
    assert_eq!(
        v.validate_email("a@b").violation(),
        Some(Violation::InvalidFormat)
    );
}

#[test]
fn confirmation_examples() {
    let v = FormValidator::default();
    assert_eq!(
        v.validate_confirm_password("X", "Y").violation(),
        Some(Violation::Mismatch)
    );
    assert_eq!(v.validate_confirm_password("X", "X"), ValidationResult::Valid);
}

#[test]
fn marie_is_accepted() {
    assert!(FormValidator::default().submit(&marie()).is_accepted());
}

#[test]
fn lowercase_confirmation_is_rejected_on_that_field_only() {
    let form = marie().with(Field::ConfirmPassword, "abcdef1");
    match FormValidator::default().submit(&form) {
        SubmitOutcome::Rejected(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, Field::ConfirmPassword);
            assert_eq!(errors[0].violation, Violation::Mismatch);
        }
        SubmitOutcome::Accepted(_) => panic!("mismatched confirmation must be rejected"),
    }
}

#[test]
fn weak_password_with_matching_confirmation() {
    let form = marie()
        .with(Field::Password, "abc")
        .with(Field::ConfirmPassword, "abc");
    let outcome = FormValidator::default().submit(&form);
    let fields: Vec<_> = outcome.errors().iter().map(|e| e.field).collect();
    assert_eq!(fields, vec![Field::Password]);
}

// ── session with hand-written collaborators ──────────────────────────────────

#[derive(Clone, Default)]
struct Trail(Arc<Mutex<Vec<String>>>);

impl Trail {
    fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Navigator for Trail {
    fn navigate_to(&self, screen: Screen, mode: NavigationMode) -> SignUpResult<()> {
        self.0.lock().unwrap().push(format!("nav:{screen}:{mode:?}"));
        Ok(())
    }
}

impl AccountCreator for Trail {
    fn create_account(&self, registration: &Registration) -> SignUpResult<AccountId> {
        self.0
            .lock()
            .unwrap()
            .push(format!("create:{}", registration.email()));
        Ok(AccountId::new("1"))
    }
}

#[test]
fn session_records_create_then_replace_home() {
    let trail = Trail::default();
    let mut session = SignUpSession::open(
        FormValidator::default(),
        Box::new(trail.clone()),
        Box::new(trail.clone()),
    );
    for field in Field::ALL {
        session.set_field(field, marie().get(field)).unwrap();
    }

    assert!(session.submit().unwrap().is_accepted());
    assert_eq!(
        trail.entries(),
        vec![
            "create:marie@example.com".to_string(),
            "nav:home:Replace".to_string()
        ]
    );
}

#[test]
fn rejected_session_leaves_no_trail() {
    let trail = Trail::default();
    let mut session = SignUpSession::open(
        FormValidator::default(),
        Box::new(trail.clone()),
        Box::new(trail.clone()),
    );
    session.set_field(Field::Email, "abc").unwrap();

    let outcome = session.submit().unwrap();
    assert_eq!(outcome.errors().len(), 5);
    assert!(trail.entries().is_empty());
}

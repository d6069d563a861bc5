//! Integration tests: the sign-up session wired to the real adapters.

use std::sync::atomic::{AtomicBool, Ordering};

use signup_adapters::{InMemoryAccountStore, InMemoryRouter, Navigation, NoopAccountCreator};
use signup_core::{
    application::{
        ApplicationError, NavigationMode, Navigator, Screen, SessionState, SignUpSession,
    },
    domain::{Field, FormValidator, SubmitOutcome, Violation},
    error::{SignUpError, SignUpResult},
};

/// Router that refuses the first navigation, then behaves normally.
struct FailsOnce {
    router: InMemoryRouter,
    failed: AtomicBool,
}

impl Navigator for FailsOnce {
    fn navigate_to(&self, screen: Screen, mode: NavigationMode) -> SignUpResult<()> {
        if !self.failed.swap(true, Ordering::SeqCst) {
            return Err(ApplicationError::NavigationFailed {
                screen,
                reason: "screen not ready".into(),
            }
            .into());
        }
        self.router.navigate_to(screen, mode)
    }
}

fn open(router: &InMemoryRouter, store: &InMemoryAccountStore) -> SignUpSession {
    SignUpSession::open(
        FormValidator::default(),
        Box::new(router.clone()),
        Box::new(store.clone()),
    )
}

fn fill(session: &mut SignUpSession, email: &str, confirm: &str) {
    session.set_field(Field::FirstName, "Marie").unwrap();
    session.set_field(Field::LastName, "Dupont").unwrap();
    session.set_field(Field::Email, email).unwrap();
    session.set_field(Field::Password, "Abcdef1").unwrap();
    session.set_field(Field::ConfirmPassword, confirm).unwrap();
}

#[test]
fn accepted_sign_up_lands_on_home_with_no_way_back() {
    let router = InMemoryRouter::new();
    let store = InMemoryAccountStore::new();
    let mut session = open(&router, &store);
    fill(&mut session, "marie@example.com", "Abcdef1");

    let outcome = session.submit().unwrap();
    assert!(outcome.is_accepted());

    assert_eq!(router.stack(), vec![Screen::Home]);
    assert_eq!(
        router.history(),
        vec![Navigation {
            screen: Screen::Home,
            mode: NavigationMode::Replace
        }]
    );
    let stored = store.find_by_email("MARIE@example.com").unwrap();
    assert_eq!(stored.display_name, "Marie Dupont");
}

#[test]
fn rejected_sign_up_stays_on_form() {
    let router = InMemoryRouter::new();
    let store = InMemoryAccountStore::new();
    let mut session = open(&router, &store);
    fill(&mut session, "marie@example.com", "abcdef1");

    match session.submit().unwrap() {
        SubmitOutcome::Rejected(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, Field::ConfirmPassword);
            assert_eq!(errors[0].violation, Violation::Mismatch);
        }
        other => panic!("expected rejection, got {other:?}"),
    }

    assert_eq!(router.current(), Some(Screen::SignUp));
    assert!(router.history().is_empty());
    assert!(store.is_empty());
}

#[test]
fn duplicate_email_is_a_conflict_and_does_not_navigate() {
    let store = InMemoryAccountStore::new();

    let first_router = InMemoryRouter::new();
    let mut first = open(&first_router, &store);
    fill(&mut first, "marie@example.com", "Abcdef1");
    first.submit().unwrap();

    let router = InMemoryRouter::new();
    let mut second = open(&router, &store);
    fill(&mut second, "Marie@Example.com", "Abcdef1");

    let err = second.submit().unwrap_err();
    assert!(matches!(
        err,
        SignUpError::Application(ApplicationError::Conflict { .. })
    ));
    assert_eq!(router.current(), Some(Screen::SignUp));
    assert_eq!(store.len(), 1);
    assert!(second.is_open());
}

#[test]
fn offline_store_is_retryable() {
    let router = InMemoryRouter::new();
    let store = InMemoryAccountStore::new();
    store.set_offline(true);

    let mut session = open(&router, &store);
    fill(&mut session, "marie@example.com", "Abcdef1");

    let err = session.submit().unwrap_err();
    assert!(err.is_retryable());
    assert!(router.history().is_empty());

    store.set_offline(false);
    assert!(session.submit().unwrap().is_accepted());
    assert_eq!(router.current(), Some(Screen::Home));
}

#[test]
fn login_link_replaces_form_without_validation() {
    let router = InMemoryRouter::new();
    let mut session = SignUpSession::open(
        FormValidator::default(),
        Box::new(router.clone()),
        Box::new(NoopAccountCreator::new()),
    );

    session.go_to_login().unwrap();

    assert_eq!(router.stack(), vec![Screen::Login]);
    assert_eq!(
        session.state(),
        SessionState::Closed {
            screen: Screen::Login
        }
    );
}

#[test]
fn noop_creator_still_navigates_home() {
    let router = InMemoryRouter::new();
    let mut session = SignUpSession::open(
        FormValidator::default(),
        Box::new(router.clone()),
        Box::new(NoopAccountCreator::new()),
    );
    fill(&mut session, "marie@example.com", "Abcdef1");

    assert!(session.submit().unwrap().is_accepted());
    assert_eq!(router.current(), Some(Screen::Home));
}

#[test]
fn unroutable_home_keeps_session_open() {
    let router = InMemoryRouter::new().without_route(Screen::Home);
    let store = InMemoryAccountStore::new();
    let mut session = open(&router, &store);
    fill(&mut session, "marie@example.com", "Abcdef1");

    let err = session.submit().unwrap_err();
    assert!(matches!(
        err,
        SignUpError::Application(ApplicationError::NavigationFailed { .. })
    ));
    assert!(session.is_open());
}

#[test]
fn retry_after_navigation_failure_reaches_home_without_second_account() {
    let router = InMemoryRouter::new();
    let store = InMemoryAccountStore::new();
    let mut session = SignUpSession::open(
        FormValidator::default(),
        Box::new(FailsOnce {
            router: router.clone(),
            failed: AtomicBool::new(false),
        }),
        Box::new(store.clone()),
    );
    fill(&mut session, "marie@example.com", "Abcdef1");

    let err = session.submit().unwrap_err();
    assert!(matches!(
        err,
        SignUpError::Application(ApplicationError::NavigationFailed { .. })
    ));
    assert!(session.is_open());
    assert_eq!(store.len(), 1);

    assert!(session.submit().unwrap().is_accepted());
    assert_eq!(store.len(), 1);
    assert_eq!(router.stack(), vec![Screen::Home]);
    assert_eq!(
        session.state(),
        SessionState::Closed {
            screen: Screen::Home
        }
    );
}

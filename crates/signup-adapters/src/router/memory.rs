//! In-memory screen router.

use std::{
    collections::HashSet,
    sync::{Arc, RwLock},
};

use signup_core::{
    application::{
        ApplicationError,
        ports::{NavigationMode, Navigator, Screen},
    },
    error::SignUpResult,
};
use tracing::debug;

/// One recorded transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub screen: Screen,
    pub mode: NavigationMode,
}

/// Thread-safe in-memory router with a screen stack.
///
/// Starts on [`Screen::SignUp`]. `Replace` swaps the top of the stack, so
/// after a successful sign-up there is no way back to the form.
#[derive(Debug, Clone)]
pub struct InMemoryRouter {
    inner: Arc<RwLock<RouterInner>>,
}

#[derive(Debug)]
struct RouterInner {
    stack: Vec<Screen>,
    history: Vec<Navigation>,
    routes: HashSet<Screen>,
}

impl InMemoryRouter {
    /// Create a router that knows every screen and shows the sign-up form.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(RouterInner {
                stack: vec![Screen::SignUp],
                history: Vec::new(),
                routes: [Screen::SignUp, Screen::Home, Screen::Login]
                    .into_iter()
                    .collect(),
            })),
        }
    }

    /// Unregister a route; navigating to it will fail.
    pub fn without_route(self, screen: Screen) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.routes.remove(&screen);
        }
        self
    }

    /// Screen currently on top.
    pub fn current(&self) -> Option<Screen> {
        self.inner.read().ok()?.stack.last().copied()
    }

    /// Back stack, bottom first.
    pub fn stack(&self) -> Vec<Screen> {
        self.inner
            .read()
            .map(|inner| inner.stack.clone())
            .unwrap_or_default()
    }

    /// Every successful navigation, oldest first.
    pub fn history(&self) -> Vec<Navigation> {
        self.inner
            .read()
            .map(|inner| inner.history.clone())
            .unwrap_or_default()
    }
}

impl Default for InMemoryRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for InMemoryRouter {
    fn navigate_to(&self, screen: Screen, mode: NavigationMode) -> SignUpResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if !inner.routes.contains(&screen) {
            return Err(ApplicationError::NavigationFailed {
                screen,
                reason: "no route registered".into(),
            }
            .into());
        }

        match mode {
            NavigationMode::Push => inner.stack.push(screen),
            NavigationMode::Replace => {
                inner.stack.pop();
                inner.stack.push(screen);
            }
        }
        inner.history.push(Navigation { screen, mode });

        debug!(%screen, ?mode, depth = inner.stack.len(), "Navigated");
        Ok(())
    }
}

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use super::{Navigator, SessionEnd, SessionStore};

/// Whether a credential is currently stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Authenticated,
    Anonymous,
}

/// Login/logout facade over a [`SessionStore`].
///
/// The client only ever clears the credential; writing one is the job of a
/// login flow, which goes through [`Session::login`].
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    login_route: String,
}

impl Session {
    pub fn new(
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
        login_route: impl Into<String>,
    ) -> Self {
        Self {
            store,
            navigator,
            login_route: login_route.into(),
        }
    }

    /// Current state. An unreadable store counts as anonymous.
    pub fn state(&self) -> SessionState {
        match self.store.get() {
            Ok(Some(_)) => SessionState::Authenticated,
            Ok(None) => SessionState::Anonymous,
            Err(e) => {
                warn!(error = %e, "Session store unreadable, treating as anonymous");
                SessionState::Anonymous
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state() == SessionState::Authenticated
    }

    /// Replace any stored credential with `token`.
    pub fn login(&self, token: &str) -> Result<()> {
        let token = token.trim();
        if token.is_empty() {
            anyhow::bail!("Refusing to store an empty token");
        }
        self.store.set(token)?;
        info!("Session credential stored");
        Ok(())
    }

    /// Clear the credential and tell the navigator the user logged out.
    pub fn logout(&self) -> Result<()> {
        self.store.clear()?;
        info!("Session credential cleared by logout");
        self.navigator
            .navigate(&self.login_route, SessionEnd::LoggedOut);
        Ok(())
    }

    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }
}

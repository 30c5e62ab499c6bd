use tracing::{info, warn};

/// Why a session ended.
///
/// Both cases clear the credential. Only `Expired` is raised by the client
/// itself; `LoggedOut` comes from [`Session::logout`](super::Session::logout).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Expired,
    LoggedOut,
}

/// Port through which the client forces the application to its login entry
/// point.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str, reason: SessionEnd);
}

/// Navigator that only records the event in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, route: &str, reason: SessionEnd) {
        match reason {
            SessionEnd::Expired => warn!(route = route, "Session expired, navigating to login"),
            SessionEnd::LoggedOut => info!(route = route, "Logged out"),
        }
    }
}

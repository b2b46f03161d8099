use hs_core::Identity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Persisted credentials have not been inspected yet
    Resolving,
    Anonymous,
    Authenticated,
}

/// Snapshot of the process-wide session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub current: Option<Identity>,
    /// Set once the startup pass over persisted credentials has finished.
    pub resolved: bool,
    /// A login, registration or external-token exchange is running.
    pub in_flight: bool,
}

impl Session {
    pub fn state(&self) -> SessionState {
        if !self.resolved {
            SessionState::Resolving
        } else if self.current.is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }

    /// True during startup resolution and while a sign-in call is in flight.
    pub fn is_resolving(&self) -> bool {
        !self.resolved || self.in_flight
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.current.as_ref()
    }
}

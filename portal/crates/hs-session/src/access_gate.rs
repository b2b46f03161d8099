use crate::{
    route::Route,
    session::{Session, SessionState},
};

use hs_core::Identity;
use tokio::sync::watch;

/// What a screen that requires sign-in should do for a given session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Loading,
    Redirect(Route),
    Render(Identity),
}

impl GateDecision {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Decide on resolution status alone. A sign-in call in flight does not
/// bounce an already rendered page.
pub fn evaluate(session: &Session) -> GateDecision {
    match (session.state(), session.current.as_ref()) {
        (SessionState::Resolving, _) => GateDecision::Loading,
        (SessionState::Authenticated, Some(identity)) => GateDecision::Render(identity.clone()),
        _ => GateDecision::Redirect(Route::Login),
    }
}

/// Wait until the session leaves `Resolving`, then decide.
///
/// If the sender is dropped first the last observed session decides.
pub async fn wait_for_decision(rx: &mut watch::Receiver<Session>) -> GateDecision {
    let decided = rx
        .wait_for(|s| !evaluate(s).is_loading())
        .await
        .map(|session| evaluate(&session));
    decided.unwrap_or_else(|_| evaluate(&rx.borrow()))
}

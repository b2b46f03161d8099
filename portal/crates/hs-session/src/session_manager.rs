use crate::{
    credential_store::CredentialStore,
    demo::{self, DemoAccount},
    error::{Result as SessionResult, SessionError},
    route::Route,
    session::{Session, SessionState},
    store::KeyValueStore,
};

use hs_api::ApiClient;
use hs_core::{AuthResponse, Identity, RegistrationRequest, StoredCredential};
use log::{debug, info, warn};
use tokio::sync::{Mutex, watch};

/// Owns the current identity and the persisted credential behind it.
///
/// Every mutation takes the credential lock for its whole duration, so
/// overlapping calls run in the order they acquire it and the last one wins.
pub struct SessionManager<S: KeyValueStore> {
    api: ApiClient,
    credentials: Mutex<CredentialStore<S>>,
    state: watch::Sender<Session>,
}

/// Marks the session as busy until dropped, including when the owning
/// future is cancelled mid-call.
struct InFlightGuard<'a> {
    state: &'a watch::Sender<Session>,
}

impl<'a> InFlightGuard<'a> {
    fn engage(state: &'a watch::Sender<Session>) -> Self {
        state.send_modify(|s| s.in_flight = true);
        Self { state }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.state
            .send_if_modified(|s| std::mem::replace(&mut s.in_flight, false));
    }
}

impl<S: KeyValueStore> SessionManager<S> {
    pub fn new(api: ApiClient, store: S) -> Self {
        Self {
            api,
            credentials: Mutex::new(CredentialStore::new(store)),
            state: watch::Sender::new(Session::default()),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().state()
    }

    pub fn current(&self) -> Option<Identity> {
        self.state.borrow().current.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    /// Bearer token for authenticated API calls. Demo sessions have none.
    pub async fn access_token(&self) -> Option<String> {
        self.credentials.lock().await.access_token()
    }

    /// Startup pass over persisted credentials. Runs once; later calls
    /// return the current state without touching storage.
    pub async fn resolve(&self) -> SessionState {
        let mut credentials = self.credentials.lock().await;
        if self.state.borrow().resolved {
            return self.state();
        }

        let loaded = credentials.load();
        let current = match (loaded.credential, loaded.corruption_error) {
            (_, Some(_)) => {
                if let Err(e) = credentials.discard_demo() {
                    warn!("Failed to discard unreadable demo record: {e}");
                }
                None
            }
            (Some(StoredCredential::DemoIdentity(identity)), None) => {
                info!("Restored demo session for {}", identity.id);
                Some(identity)
            }
            (Some(StoredCredential::TokenPair(pair)), None) => {
                match self.api.fetch_profile(&pair.access).await {
                    Ok(identity) => {
                        info!("Restored session for {}", identity.id);
                        Some(identity)
                    }
                    Err(e) => {
                        warn!("Stored token rejected, signing out: {e}");
                        if let Err(e) = credentials.discard_tokens() {
                            warn!("Failed to discard stored tokens: {e}");
                        }
                        None
                    }
                }
            }
            (None, None) => {
                debug!("No stored credential");
                None
            }
        };

        self.publish(current);
        self.state()
    }

    /// Sign in with email and password.
    ///
    /// The fixed demo accounts with the shared demo password never reach the
    /// backend. Any remote failure is reported as invalid credentials.
    pub async fn login(&self, email: &str, password: &str) -> SessionResult<Identity> {
        let mut credentials = self.credentials.lock().await;
        let _in_flight = InFlightGuard::engage(&self.state);

        if let Some(identity) = demo::authenticate(email, password) {
            credentials.save(&StoredCredential::DemoIdentity(identity.clone()))?;
            info!("Signed in with demo account {}", identity.id);
            self.publish(Some(identity.clone()));
            return Ok(identity);
        }

        let response = self.api.login(email, password).await.map_err(|e| {
            warn!("Login failed: {e}");
            SessionError::invalid_credentials(e)
        })?;

        self.establish(&mut credentials, response)
    }

    pub async fn login_demo(&self, account: DemoAccount) -> SessionResult<Identity> {
        self.login(account.email(), demo::DEMO_PASSWORD).await
    }

    /// Create an account and sign in as it.
    ///
    /// A password confirmation mismatch fails before any request is made.
    pub async fn register(&self, registration: &RegistrationRequest) -> SessionResult<Identity> {
        if !registration.passwords_match() {
            return Err(SessionError::password_mismatch());
        }

        let mut credentials = self.credentials.lock().await;
        let _in_flight = InFlightGuard::engage(&self.state);

        let response = self.api.register(registration).await.map_err(|e| {
            warn!("Registration failed: {e}");
            SessionError::registration_failed(e)
        })?;

        self.establish(&mut credentials, response)
    }

    /// Exchange a third-party identity token for a session.
    pub async fn login_with_external_token(&self, token: &str) -> SessionResult<Identity> {
        let mut credentials = self.credentials.lock().await;
        let _in_flight = InFlightGuard::engage(&self.state);

        let response = self.api.google_login(token).await.map_err(|e| {
            warn!("External token login failed: {e}");
            SessionError::external_login_failed(e)
        })?;

        self.establish(&mut credentials, response)
    }

    /// Forget the current identity and every stored credential.
    ///
    /// In-memory state is cleared before storage, so a storage failure still
    /// leaves the session anonymous.
    pub async fn logout(&self) -> SessionResult<Route> {
        let mut credentials = self.credentials.lock().await;

        let changed = self.state.send_if_modified(|s| {
            let changed = s.current.is_some() || !s.resolved;
            s.current = None;
            s.resolved = true;
            changed
        });
        if changed {
            info!("Signed out");
        }

        credentials.clear()?;
        Ok(Route::Landing)
    }

    fn establish(
        &self,
        credentials: &mut CredentialStore<S>,
        response: AuthResponse,
    ) -> SessionResult<Identity> {
        let (tokens, identity) = response.into_parts();
        credentials.save(&StoredCredential::TokenPair(tokens))?;
        info!("Signed in as {}", identity.id);
        self.publish(Some(identity.clone()));
        Ok(identity)
    }

    fn publish(&self, current: Option<Identity>) {
        self.state.send_modify(|s| {
            s.current = current;
            s.resolved = true;
        });
    }
}

//! Session/auth provider: the single source of truth for who is logged in
//!
//! The provider mirrors the identity service's session and the matching
//! profile row into an [`AuthState`] published over a `watch` channel.
//! Only the provider writes to it; the rendering layer reads snapshots or
//! awaits changes.

mod effects;
mod guard;
mod state;

use log::{debug, error, info, warn};
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use mbet_adera_auth::{AuthStateChange, Session, User};

use crate::config::ClientOptions;
use crate::error::Error;
use crate::identity::IdentityService;
use crate::profiles::{ProfileDetails, ProfileStore, UserProfile};

pub use effects::{LogNavigator, LogNotifier, Navigator, Notification, NotificationKind, Notifier};
pub use guard::{Operation, OperationState, Outcome};
pub use state::{AuthState, ProfileState};

use guard::InFlightGuard;

struct Inner {
    identity: Arc<dyn IdentityService>,
    profiles: Arc<dyn ProfileStore>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    options: ClientOptions,
    state: watch::Sender<AuthState>,
}

/// Shared handle to the auth state container
#[derive(Clone)]
pub struct AuthProvider {
    inner: Arc<Inner>,
}

/// Builder for [`AuthProvider`]
pub struct AuthProviderBuilder {
    identity: Arc<dyn IdentityService>,
    profiles: Arc<dyn ProfileStore>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    options: ClientOptions,
}

impl AuthProviderBuilder {
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    pub fn options(mut self, options: ClientOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> AuthProvider {
        let (state, _) = watch::channel(AuthState::default());
        AuthProvider {
            inner: Arc::new(Inner {
                identity: self.identity,
                profiles: self.profiles,
                notifier: self.notifier,
                navigator: self.navigator,
                options: self.options,
                state,
            }),
        }
    }
}

/// Registration of the provider's session-change listener.
///
/// Dropping it stops the listener task and releases the subscription.
pub struct AuthListener {
    handle: JoinHandle<()>,
}

impl AuthListener {
    pub fn is_active(&self) -> bool {
        !self.handle.is_finished()
    }

    pub fn unsubscribe(self) {}
}

impl Drop for AuthListener {
    fn drop(&mut self) {
        debug!("Unsubscribing auth listener");
        self.handle.abort();
    }
}

impl AuthProvider {
    /// Start building a provider over the two collaborators. Notifications
    /// and navigation default to the log.
    pub fn builder(
        identity: Arc<dyn IdentityService>,
        profiles: Arc<dyn ProfileStore>,
    ) -> AuthProviderBuilder {
        AuthProviderBuilder {
            identity,
            profiles,
            notifier: Arc::new(LogNotifier),
            navigator: Arc::new(LogNavigator),
            options: ClientOptions::default(),
        }
    }

    /// Current snapshot
    pub fn state(&self) -> AuthState {
        self.inner.state.borrow().clone()
    }

    /// Receiver that observes every state change
    pub fn watch(&self) -> watch::Receiver<AuthState> {
        self.inner.state.subscribe()
    }

    pub fn current_session(&self) -> Option<Session> {
        self.inner.state.borrow().session.clone()
    }

    pub fn current_user(&self) -> Option<User> {
        self.inner.state.borrow().user.clone()
    }

    pub fn current_profile(&self) -> Option<UserProfile> {
        self.inner.state.borrow().current_profile().cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.state.borrow().loading
    }

    pub fn error(&self) -> Option<String> {
        self.inner.state.borrow().error.clone()
    }

    /// Subscribe, then load the current session.
    ///
    /// Must be called inside a tokio runtime.
    pub async fn start(&self) -> AuthListener {
        let listener = self.listen();
        self.initialize().await;
        listener
    }

    /// Load the current session and its profile.
    ///
    /// A provider failure leaves the state logged out and notifies the user;
    /// `loading` is cleared either way.
    pub async fn initialize(&self) {
        match self.inner.identity.current_session().await {
            Ok(session) => {
                let user_id = session.as_ref().map(|session| session.user.id.clone());
                self.inner.state.send_modify(|state| state.set_session(session));

                match user_id {
                    Some(user_id) => {
                        info!("Restored session for {}", user_id);
                        let _ = self.fetch_profile(&user_id).await;
                    }
                    None => debug!("No session to restore"),
                }
            }
            Err(err) => {
                error!("Auth initialization error: {}", err);
                self.notify(Notification::destructive(
                    "Authentication Error",
                    "Failed to initialize authentication. Please refresh the page.",
                ));
            }
        }

        self.clear_loading();
    }

    /// Register one listener for session changes and apply each of them.
    ///
    /// Must be called inside a tokio runtime.
    pub fn listen(&self) -> AuthListener {
        let mut events = self.inner.identity.subscribe();
        let provider = self.clone();

        let handle = tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(change) => provider.apply_change(change).await,
                    Err(RecvError::Lagged(skipped)) => {
                        warn!("Auth listener lagged, skipped {} event(s)", skipped);
                    }
                    Err(RecvError::Closed) => {
                        debug!("Auth event channel closed");
                        break;
                    }
                }
            }
        });

        AuthListener { handle }
    }

    async fn apply_change(&self, change: AuthStateChange) {
        info!("Auth state changed: {:?}", change.event);

        let user_id = change.session.as_ref().map(|session| session.user.id.clone());
        self.inner.state.send_modify(|state| state.set_session(change.session));

        if let Some(user_id) = user_id {
            let _ = self.fetch_profile(&user_id).await;
        }

        self.clear_loading();
    }

    /// Drop `loading` unless a guarded operation owns it
    fn clear_loading(&self) {
        self.inner.state.send_if_modified(|state| {
            if state.operation.is_in_flight() || !state.loading {
                return false;
            }
            state.loading = false;
            true
        });
    }

    /// Fetch the profile for `user_id`.
    ///
    /// On failure the user is notified and a loaded profile is marked stale.
    /// A result, success or failure, for a user who is no longer current is
    /// discarded.
    pub async fn fetch_profile(&self, user_id: &str) -> Result<UserProfile, Error> {
        match self.inner.profiles.fetch_profile(user_id).await {
            Ok(profile) => {
                let applied = self.inner.state.send_if_modified(|state| {
                    if state.user_id() != Some(user_id) {
                        return false;
                    }
                    state.profile = ProfileState::Loaded(profile.clone());
                    true
                });
                if !applied {
                    debug!("Discarding profile for {}, no longer the current user", user_id);
                }
                Ok(profile)
            }
            Err(err) => {
                error!("Error fetching user details for {}: {}", user_id, err);
                let mut current = false;
                self.inner.state.send_if_modified(|state| {
                    if state.user_id() != Some(user_id) {
                        return false;
                    }
                    current = true;
                    let was_loaded = state.profile.is_loaded();
                    state.profile.mark_stale();
                    was_loaded
                });
                if current {
                    self.notify(Notification::destructive(
                        "Error",
                        "Failed to fetch user details. Some features may be limited.",
                    ));
                } else {
                    debug!("Ignoring failed fetch for {}, no longer the current user", user_id);
                }
                Err(err)
            }
        }
    }

    /// Sign in with email and password.
    ///
    /// Success loads the profile, opens the authenticated route and notifies.
    /// Failure records the provider's message in `error`.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), Error> {
        let mut guard = InFlightGuard::begin(&self.inner.state, Operation::SignIn)?;

        let session = match self.inner.identity.sign_in_with_password(email, password).await {
            Ok(session) => session,
            Err(err) => return Err(self.fail(Operation::SignIn, err)),
        };

        let user_id = session.user.id.clone();
        info!("Signed in as {}", user_id);
        self.inner.state.send_modify(|state| state.set_session(Some(session)));

        let _ = self.fetch_profile(&user_id).await;

        self.inner.navigator.navigate(&self.inner.options.authenticated_route);
        self.notify(Notification::success(
            "Welcome back!",
            "You have successfully signed in.",
        ));

        guard.succeed();
        Ok(())
    }

    /// Create an identity and its profile row.
    ///
    /// The two writes are not atomic. When the profile insert fails the
    /// identity stays behind unless `compensate_orphaned_identity` is set.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        details: ProfileDetails,
    ) -> Result<(), Error> {
        let mut guard = InFlightGuard::begin(&self.inner.state, Operation::SignUp)?;

        let response = match self.inner.identity.sign_up(email, password).await {
            Ok(response) => response,
            Err(err) => return Err(self.fail(Operation::SignUp, err)),
        };

        let Some(user) = response.user else {
            warn!("Sign up for {} returned no user", email);
            guard.succeed();
            return Ok(());
        };

        let user_id = user.id.clone();
        info!("Created identity {}", user_id);
        self.inner.state.send_modify(|state| {
            state.profile = ProfileState::Absent;
            state.session = response.session;
            state.user = Some(user);
        });

        let row = details.into_new_profile(&user_id, email);
        if let Err(err) = self.inner.profiles.insert_profile(&row).await {
            let err = self.fail(Operation::SignUp, err);
            self.compensate(&user_id).await;
            return Err(err);
        }

        let _ = self.fetch_profile(&user_id).await;

        self.inner.navigator.navigate(&self.inner.options.authenticated_route);
        self.notify(Notification::success(
            "Welcome to MBet-Adera!",
            "Your account has been created successfully.",
        ));

        guard.succeed();
        Ok(())
    }

    /// Sign out.
    ///
    /// Session and profile are cleared by the `SignedOut` event that follows,
    /// not by this call.
    pub async fn sign_out(&self) -> Result<(), Error> {
        let mut guard = InFlightGuard::begin(&self.inner.state, Operation::SignOut)?;

        if let Err(err) = self.inner.identity.sign_out().await {
            return Err(self.fail(Operation::SignOut, err));
        }

        info!("Signed out");
        self.inner.navigator.navigate(&self.inner.options.landing_route);
        self.notify(Notification::success(
            "Signed out",
            "You have been successfully signed out.",
        ));

        guard.succeed();
        Ok(())
    }

    /// Undo a sign-up whose profile insert failed
    async fn compensate(&self, user_id: &str) {
        if !self.inner.options.compensate_orphaned_identity {
            warn!("Identity {} has no profile row and was left in place", user_id);
            return;
        }

        match self.inner.identity.delete_identity(user_id).await {
            Ok(()) => {
                info!("Deleted orphaned identity {}", user_id);
                self.inner.state.send_modify(|state| {
                    if state.user_id() == Some(user_id) {
                        state.set_session(None);
                    }
                });
            }
            Err(err) => error!("Failed to delete orphaned identity {}: {}", user_id, err),
        }
    }

    /// Record a failed operation and tell the user
    fn fail(&self, operation: Operation, err: Error) -> Error {
        error!("{} error: {}", operation, err);

        let message = err.message();
        self.inner
            .state
            .send_modify(|state| state.error = Some(message.clone()));

        let description = if message.trim().is_empty() {
            operation.fallback_message()
        } else {
            message.as_str()
        };
        self.notify(Notification::destructive(operation.failure_title(), description));

        err
    }

    fn notify(&self, notification: Notification) {
        self.inner.notifier.notify(notification);
    }
}

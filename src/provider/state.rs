//! Snapshot of the auth state exposed to the rendering layer

use mbet_adera_auth::{Session, User};

use crate::profiles::UserProfile;
use crate::provider::guard::OperationState;

/// Profile slot
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProfileState {
    #[default]
    Absent,
    Loaded(UserProfile),
    /// Last known profile; the most recent re-fetch failed
    Stale(UserProfile),
}

impl ProfileState {
    /// The profile, fresh or stale
    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            ProfileState::Absent => None,
            ProfileState::Loaded(profile) | ProfileState::Stale(profile) => Some(profile),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, ProfileState::Loaded(_))
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, ProfileState::Stale(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, ProfileState::Absent)
    }

    pub(crate) fn mark_stale(&mut self) {
        *self = match std::mem::take(self) {
            ProfileState::Loaded(profile) => ProfileState::Stale(profile),
            other => other,
        };
    }
}

/// What the rendering layer sees.
///
/// While `loading` is true the rest of the snapshot is not authoritative.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub user: Option<User>,
    pub profile: ProfileState,
    pub loading: bool,
    /// Message of the last failed operation
    pub error: Option<String>,
    pub operation: OperationState,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: None,
            user: None,
            profile: ProfileState::Absent,
            loading: true,
            error: None,
            operation: OperationState::Idle,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn current_profile(&self) -> Option<&UserProfile> {
        self.profile.profile()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.id.as_str())
    }

    /// Mirror a session from the identity service. The profile goes with the
    /// user: a different or absent user drops it.
    pub(crate) fn set_session(&mut self, session: Option<Session>) {
        let user = session.as_ref().map(|session| session.user.clone());
        if self.user_id() != user.as_ref().map(|user| user.id.as_str()) {
            self.profile = ProfileState::Absent;
        }
        self.user = user;
        self.session = session;
    }
}

//! Single-slot guard serializing sign-in, sign-up and sign-out

use log::warn;
use std::fmt;
use tokio::sync::watch;

use crate::error::Error;
use crate::provider::state::AuthState;

/// An auth operation that takes the in-flight slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    SignIn,
    SignUp,
    SignOut,
}

impl Operation {
    pub(crate) fn failure_title(self) -> &'static str {
        match self {
            Operation::SignIn => "Sign in failed",
            Operation::SignUp => "Sign up failed",
            Operation::SignOut => "Sign out failed",
        }
    }

    pub(crate) fn fallback_message(self) -> &'static str {
        match self {
            Operation::SignIn => "Failed to sign in. Please try again.",
            Operation::SignUp => "Failed to create account. Please try again.",
            Operation::SignOut => "Failed to sign out. Please try again.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::SignIn => "Sign in",
            Operation::SignUp => "Sign up",
            Operation::SignOut => "Sign out",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
}

/// State of the in-flight slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperationState {
    #[default]
    Idle,
    InFlight(Operation),
    Settled {
        operation: Operation,
        outcome: Outcome,
    },
}

impl OperationState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, OperationState::InFlight(_))
    }
}

/// Holds the slot until dropped.
///
/// Dropping settles the operation as failed unless [`succeed`](Self::succeed)
/// was called, so an abandoned future still frees the slot.
pub(crate) struct InFlightGuard<'a> {
    state: &'a watch::Sender<AuthState>,
    operation: Operation,
    outcome: Outcome,
}

impl<'a> InFlightGuard<'a> {
    /// Claim the slot, clearing the error and raising `loading`
    pub(crate) fn begin(state: &'a watch::Sender<AuthState>, operation: Operation) -> Result<Self, Error> {
        let mut busy = None;
        state.send_if_modified(|current| match current.operation {
            OperationState::InFlight(running) => {
                busy = Some(running);
                false
            }
            _ => {
                current.operation = OperationState::InFlight(operation);
                current.loading = true;
                current.error = None;
                true
            }
        });

        if let Some(running) = busy {
            warn!("Rejecting {} while {} is in flight", operation, running);
            return Err(Error::Busy(running));
        }

        Ok(Self {
            state,
            operation,
            outcome: Outcome::Failed,
        })
    }

    pub(crate) fn succeed(&mut self) {
        self.outcome = Outcome::Succeeded;
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let operation = self.operation;
        let outcome = self.outcome;
        self.state.send_modify(|current| {
            current.operation = OperationState::Settled { operation, outcome };
            current.loading = false;
        });
    }
}

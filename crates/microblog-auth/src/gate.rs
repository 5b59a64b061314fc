//! The login gate: a two-state session machine checked against configured
//! credentials.

use crate::AuthError;

/// Per-client authentication state.
///
/// The flag lives in the client-held session token; a missing flag is the
/// same as `Anonymous`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated,
}

impl SessionState {
    /// Reconstruct the state from the session's `logged_in` flag, treating
    /// an absent flag as false.
    pub fn from_flag(logged_in: Option<bool>) -> Self {
        if logged_in.unwrap_or(false) {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }

    pub fn is_authenticated(self) -> bool {
        self == SessionState::Authenticated
    }
}

/// Credential gate for the single admin account.
///
/// Comparison is exact string equality against the configured values, with
/// the username checked first. Plaintext comparison is preserved from the
/// original application; any hardening (hashing, constant-time compare)
/// changes observable behavior and belongs to a deliberate follow-up, not a
/// silent swap.
#[derive(Debug, Clone)]
pub struct AuthGate {
    username: String,
    password: String,
}

impl AuthGate {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Attempt a login. On success the session becomes `Authenticated`; on
    /// any mismatch the caller's state is unchanged and the error names
    /// which field failed.
    pub fn login(&self, username: &str, password: &str) -> Result<SessionState, AuthError> {
        if username != self.username {
            return Err(AuthError::InvalidUsername);
        }
        if password != self.password {
            return Err(AuthError::InvalidPassword);
        }
        Ok(SessionState::Authenticated)
    }

    /// Log out. Valid from any state, so logout is idempotent.
    pub fn logout(&self) -> SessionState {
        SessionState::Anonymous
    }

    /// Gate for privileged operations: reject before any other work happens
    /// unless the session is authenticated.
    pub fn require_authenticated(&self, state: SessionState) -> Result<(), AuthError> {
        if state.is_authenticated() {
            Ok(())
        } else {
            Err(AuthError::Unauthorized)
        }
    }
}

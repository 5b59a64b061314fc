//! HTTP surface: router, shared state, and session plumbing.
//!
//! Session data (the `logged_in` flag and any pending flash messages) lives
//! in an in-process store; the client holds only a session id cookie signed
//! with a key derived from the configured secret, so the flag cannot be
//! forged. This differs from a purely client-held token: logins do not
//! survive a restart, and stored sessions are bounded by an inactivity
//! expiry rather than growing forever. Anonymous reads allocate no session
//! record.

mod auth;
mod entries;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use sha2::{Digest, Sha512};
use tower_http::cors::CorsLayer;
use tower_sessions::cookie::time::Duration;
use tower_sessions::cookie::{Key, SameSite};
use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};

use microblog_auth::{AuthGate, SessionState};
use microblog_db::Database;

const LOGGED_IN_KEY: &str = "logged_in";
const FLASH_KEY: &str = "flash";

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub gate: Arc<AuthGate>,
}

pub fn create_router(db: Arc<Database>, gate: Arc<AuthGate>, secret_key: &str) -> Router {
    let state = AppState { db, gate };

    // The signing key wants 64 bytes; the configured secret is stretched
    // with SHA-512 so short development secrets still work.
    let key = Key::from(Sha512::digest(secret_key.as_bytes()).as_slice());
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
        .with_signed(key);

    Router::new()
        .route("/", get(entries::show_entries))
        .route("/add", post(entries::add_entry))
        .route("/login", post(auth::login))
        .route("/logout", get(auth::logout))
        .layer(session_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Read the caller's authentication state from the session. An absent flag
/// is `Anonymous`.
async fn session_state(session: &Session) -> Result<SessionState, (StatusCode, String)> {
    let flag = session
        .get::<bool>(LOGGED_IN_KEY)
        .await
        .map_err(session_error)?;
    Ok(SessionState::from_flag(flag))
}

/// Queue a flash message for the next page load.
async fn flash(session: &Session, message: &str) -> Result<(), (StatusCode, String)> {
    let mut messages: Vec<String> = session
        .get(FLASH_KEY)
        .await
        .map_err(session_error)?
        .unwrap_or_default();
    messages.push(message.to_string());
    session
        .insert(FLASH_KEY, messages)
        .await
        .map_err(session_error)
}

/// Drain any queued flash messages.
async fn take_flashes(session: &Session) -> Result<Vec<String>, (StatusCode, String)> {
    Ok(session
        .remove::<Vec<String>>(FLASH_KEY)
        .await
        .map_err(session_error)?
        .unwrap_or_default())
}

fn session_error(err: tower_sessions::session::Error) -> (StatusCode, String) {
    tracing::error!("Session failure: {}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

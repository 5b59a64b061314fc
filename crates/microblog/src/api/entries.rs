//! Entry listing and the guarded insert.
//!
//! Each handler that touches storage opens its own connection and drops it
//! on the way out, success or error. Nothing holds a connection across
//! requests.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Json, Redirect};
use axum::Form;
use serde::{Deserialize, Serialize};

use microblog_db::{Entries, Entry, StorageError};

use super::{flash, session_state, take_flashes, AppState};

#[derive(Debug, Deserialize)]
pub struct AddEntryForm {
    pub title: String,
    pub text: String,
}

#[derive(Serialize)]
pub struct ShowEntriesResponse {
    pub entries: Vec<Entry>,
    pub messages: Vec<String>,
    pub logged_in: bool,
}

pub async fn show_entries(
    State(state): State<AppState>,
    session: tower_sessions::Session,
) -> Result<Json<ShowEntriesResponse>, (StatusCode, String)> {
    let auth = session_state(&session).await?;
    let messages = take_flashes(&session).await?;

    let mut conn = state.db.connect().map_err(storage_error)?;
    let entries = Entries::new(&mut conn).list().map_err(storage_error)?;

    Ok(Json(ShowEntriesResponse {
        entries,
        messages,
        logged_in: auth.is_authenticated(),
    }))
}

pub async fn add_entry(
    State(state): State<AppState>,
    session: tower_sessions::Session,
    Form(form): Form<AddEntryForm>,
) -> Result<Redirect, (StatusCode, String)> {
    // The gate runs before any storage access
    let auth = session_state(&session).await?;
    state
        .gate
        .require_authenticated(auth)
        .map_err(|e| (StatusCode::UNAUTHORIZED, e.to_string()))?;

    let mut conn = state.db.connect().map_err(storage_error)?;
    Entries::new(&mut conn)
        .insert(&form.title, &form.text)
        .map_err(storage_error)?;

    flash(&session, "New entry was successfully posted").await?;
    Ok(Redirect::to("/"))
}

fn storage_error(err: StorageError) -> (StatusCode, String) {
    tracing::error!("Storage failure: {}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

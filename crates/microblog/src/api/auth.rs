//! Login and logout.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::Form;
use serde::Deserialize;

use super::{flash, session_error, AppState, LOGGED_IN_KEY};

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    session: tower_sessions::Session,
    Form(form): Form<LoginForm>,
) -> Result<Redirect, (StatusCode, String)> {
    match state.gate.login(&form.username, &form.password) {
        Ok(_) => {
            session
                .insert(LOGGED_IN_KEY, true)
                .await
                .map_err(session_error)?;
            flash(&session, "You were logged in").await?;
            Ok(Redirect::to("/"))
        }
        // The session stays anonymous; the message names which field failed
        Err(err) => Err((StatusCode::UNAUTHORIZED, err.to_string())),
    }
}

pub async fn logout(
    session: tower_sessions::Session,
) -> Result<Redirect, (StatusCode, String)> {
    // Removing an absent flag is a no-op, so logging out twice is fine
    session
        .remove::<bool>(LOGGED_IN_KEY)
        .await
        .map_err(session_error)?;
    flash(&session, "You were logged out").await?;
    Ok(Redirect::to("/"))
}

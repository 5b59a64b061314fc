use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Login attempted with an unknown username. The message text is
    /// user-visible.
    #[error("Invalid username")]
    InvalidUsername,

    /// Login attempted with the right username but the wrong password.
    #[error("Invalid password")]
    InvalidPassword,

    /// A guarded operation was attempted without an authenticated session.
    #[error("Unauthorized")]
    Unauthorized,
}

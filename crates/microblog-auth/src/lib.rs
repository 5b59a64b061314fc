mod error;
mod gate;

pub use error::AuthError;
pub use gate::{AuthGate, SessionState};

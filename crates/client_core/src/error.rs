use reqwest::StatusCode;
use thiserror::Error;

/// Failures surfaced by [`crate::NotesClient`].
///
/// `Transport` covers both an unreachable endpoint and a response body that
/// could not be decoded; it is logged to the diagnostic channel before it is
/// returned. None of these are retried.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("login rejected by authentication endpoint (status {status})")]
    LoginFailed { status: StatusCode },
    #[error("request rejected by notes endpoint (status {status})")]
    RequestFailed { status: StatusCode },
    #[error("transport failure talking to notes API: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("not logged in: no session token")]
    NotLoggedIn,
}

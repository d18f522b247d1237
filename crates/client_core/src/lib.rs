use reqwest::Client;
use shared::protocol::{
    CreateNoteRequest, LoginRequest, LoginResponse, NoteSummary, RegisterRequest,
};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

pub mod error;
mod session;

pub use error::SessionError;
pub use session::{Session, SessionPhase};

/// Client for the notes service, owning the login session for the life of
/// the process.
///
/// All methods borrow `&self`; the session lives behind a mutex so a single
/// client can be shared by a UI thread and a backend worker. The lock is
/// only held across state reads and writes, never across a network await.
/// Overlapping `login` calls are not guarded against: the last response to
/// arrive wins.
pub struct NotesClient {
    http: Client,
    api_base: String,
    inner: Mutex<ClientState>,
}

struct ClientState {
    session: Session,
}

impl NotesClient {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_base: api_base.into(),
            inner: Mutex::new(ClientState {
                session: Session::default(),
            }),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub async fn session_phase(&self) -> SessionPhase {
        self.inner.lock().await.session.phase()
    }

    pub async fn session_token(&self) -> Option<String> {
        self.inner.lock().await.session.token().map(str::to_string)
    }

    /// Exchanges credentials for a bearer token at `POST {api_base}/auth/login`.
    ///
    /// The session is only mutated on a 2xx response carrying a decodable
    /// token body; every failure leaves it exactly as it was.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), SessionError> {
        let response = self
            .http
            .post(format!("{}/auth/login", self.api_base))
            .json(&LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            })
            .send()
            .await
            .map_err(|err| {
                error!("login request to {} failed: {err}", self.api_base);
                SessionError::Transport(err)
            })?;

        let status = response.status();
        if !status.is_success() {
            info!(%status, "login rejected by authentication endpoint");
            return Err(SessionError::LoginFailed { status });
        }

        let body: LoginResponse = response.json().await.map_err(|err| {
            error!("login response from {} was not decodable: {err}", self.api_base);
            SessionError::Transport(err)
        })?;

        let mut inner = self.inner.lock().await;
        inner.session.establish(body.token);
        info!("session established");
        Ok(())
    }

    /// Drops the bearer token. No network call; always succeeds; calling it
    /// while already logged out is a no-op.
    pub async fn logout(&self) {
        let mut inner = self.inner.lock().await;
        if inner.session.phase() == SessionPhase::LoggedIn {
            inner.session.clear();
            info!("session cleared");
        }
    }

    /// Fetches the caller's notes from `GET {api_base}/notes`.
    pub async fn load_notes(&self) -> Result<Vec<NoteSummary>, SessionError> {
        let token = self.bearer_token().await?;
        let response = self
            .http
            .get(format!("{}/notes", self.api_base))
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|err| {
                error!("notes listing request to {} failed: {err}", self.api_base);
                SessionError::Transport(err)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "notes listing rejected");
            return Err(SessionError::RequestFailed { status });
        }

        let notes: Vec<NoteSummary> = response.json().await.map_err(|err| {
            error!("notes listing response was not decodable: {err}");
            SessionError::Transport(err)
        })?;
        debug!(count = notes.len(), "loaded notes");
        Ok(notes)
    }

    /// Creates a note via `POST {api_base}/notes` and returns it as stored.
    pub async fn add_note(
        &self,
        title: &str,
        content: &str,
    ) -> Result<NoteSummary, SessionError> {
        let token = self.bearer_token().await?;
        let response = self
            .http
            .post(format!("{}/notes", self.api_base))
            .bearer_auth(&token)
            .json(&CreateNoteRequest {
                title: title.to_string(),
                content: content.to_string(),
            })
            .send()
            .await
            .map_err(|err| {
                error!("note create request to {} failed: {err}", self.api_base);
                SessionError::Transport(err)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "note create rejected");
            return Err(SessionError::RequestFailed { status });
        }

        let note: NoteSummary = response.json().await.map_err(|err| {
            error!("note create response was not decodable: {err}");
            SessionError::Transport(err)
        })?;
        debug!(note_id = note.id.0, "note created");
        Ok(note)
    }

    /// Creates an account via `POST {api_base}/auth/register`. Requires no
    /// session and establishes none.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), SessionError> {
        let response = self
            .http
            .post(format!("{}/auth/register", self.api_base))
            .json(&RegisterRequest {
                username: username.to_string(),
                password: password.to_string(),
            })
            .send()
            .await
            .map_err(|err| {
                error!("register request to {} failed: {err}", self.api_base);
                SessionError::Transport(err)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "registration rejected");
            return Err(SessionError::RequestFailed { status });
        }
        info!(username, "account registered");
        Ok(())
    }

    async fn bearer_token(&self) -> Result<String, SessionError> {
        let inner = self.inner.lock().await;
        inner
            .session
            .token()
            .map(str::to_string)
            .ok_or(SessionError::NotLoggedIn)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

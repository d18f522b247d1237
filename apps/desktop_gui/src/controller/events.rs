//! UI/backend events and error modeling for the desktop shell.

use shared::protocol::NoteSummary;

pub enum UiEvent {
    LoginOk,
    LoggedOut,
    NotesLoaded(Vec<NoteSummary>),
    NoteAdded(NoteSummary),
    Info(String),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Auth,
    Transport,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Login,
    LoadNotes,
    AddNote,
}

pub fn classify_login_failure(message: &str) -> String {
    let lower = message.to_ascii_lowercase();
    if lower.contains("backend worker startup failure")
        || lower.contains("failed to build backend runtime")
    {
        "Backend worker startup failure; verify the local app environment and retry.".to_string()
    } else if lower.contains("failed to connect")
        || lower.contains("connection refused")
        || lower.contains("dns")
        || lower.contains("timed out")
        || lower.contains("transport failure")
    {
        "Notes service unreachable; check the API base URL and network, then retry sign-in."
            .to_string()
    } else {
        format!("Login/API error: {message}")
    }
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("401")
            || message_lower.contains("403")
            || message_lower.contains("unauthorized")
            || message_lower.contains("forbidden")
            || message_lower.contains("not logged in")
            || message_lower.contains("invalid token")
            || message_lower.contains("invalid credential")
        {
            UiErrorCategory::Auth
        } else if message_lower.contains("invalid")
            || message_lower.contains("missing")
            || message_lower.contains("malformed")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("timeout")
            || message_lower.contains("connection")
            || message_lower.contains("network")
            || message_lower.contains("transport")
            || message_lower.contains("unavailable")
            || message_lower.contains("disconnect")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn requires_reauth(&self) -> bool {
        self.category == UiErrorCategory::Auth
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_rejected_credentials_as_auth() {
        let err = UiError::from_message(
            UiErrorContext::Login,
            "login rejected by authentication endpoint (status 401 Unauthorized)",
        );
        assert_eq!(err.category(), UiErrorCategory::Auth);
        assert!(err.requires_reauth());
    }

    #[test]
    fn classifies_connection_trouble_as_transport() {
        let err = UiError::from_message(
            UiErrorContext::Login,
            "transport failure talking to notes API: error sending request",
        );
        assert_eq!(err.category(), UiErrorCategory::Transport);
        assert!(!err.requires_reauth());
    }

    #[test]
    fn classifies_stale_session_listing_as_auth() {
        let err = UiError::from_message(
            UiErrorContext::LoadNotes,
            "request rejected by notes endpoint (status 401 Unauthorized)",
        );
        assert!(err.requires_reauth());
    }

    #[test]
    fn classifies_queue_disconnect_as_transport() {
        let err = UiError::from_message(
            UiErrorContext::LoadNotes,
            "Backend command processor disconnected (possible startup/runtime failure)",
        );
        assert_eq!(err.category(), UiErrorCategory::Transport);
    }

    #[test]
    fn login_failure_hint_mentions_unreachable_service() {
        let hint = classify_login_failure("transport failure talking to notes API: connection refused");
        assert!(hint.contains("unreachable"));
    }
}

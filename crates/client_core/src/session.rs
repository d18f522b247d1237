/// Phase of the login session. The notes surface is shown iff `LoggedIn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    LoggedOut,
    LoggedIn,
}

/// In-memory custody of the bearer token for the life of the process.
///
/// A fresh session starts logged out. The token is never persisted and never
/// leaves the process except as an `Authorization` header.
#[derive(Debug, Default)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn phase(&self) -> SessionPhase {
        if self.token.is_some() {
            SessionPhase::LoggedIn
        } else {
            SessionPhase::LoggedOut
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub(crate) fn establish(&mut self, token: String) {
        self.token = Some(token);
    }

    pub(crate) fn clear(&mut self) {
        self.token = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_is_logged_out() {
        let session = Session::default();
        assert_eq!(session.phase(), SessionPhase::LoggedOut);
        assert!(session.token().is_none());
    }

    #[test]
    fn establish_then_clear_round_trips_phase() {
        let mut session = Session::default();
        session.establish("abc123".to_string());
        assert_eq!(session.phase(), SessionPhase::LoggedIn);
        assert_eq!(session.token(), Some("abc123"));

        session.clear();
        assert_eq!(session.phase(), SessionPhase::LoggedOut);
        assert!(session.token().is_none());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut session = Session::default();
        session.clear();
        session.clear();
        assert_eq!(session.phase(), SessionPhase::LoggedOut);
    }

    #[test]
    fn establish_replaces_previous_token() {
        let mut session = Session::default();
        session.establish("first".to_string());
        session.establish("second".to_string());
        assert_eq!(session.token(), Some("second"));
    }
}

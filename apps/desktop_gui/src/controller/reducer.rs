//! Reducer-like view state for the session lifecycle.
//!
//! The two screens are mutually exclusive by construction: which one is
//! visible is a single enum field, so there is no state in which both (or
//! neither) could be shown.

use shared::protocol::NoteSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppViewState {
    Login,
    Notes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBannerSeverity {
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusBanner {
    pub severity: StatusBannerSeverity,
    pub message: String,
}

/// Session-derived UI state. Widget drafts (text field contents, focus)
/// stay in the app shell; everything that follows from the session phase
/// lives here so the transitions can be tested without a window.
#[derive(Debug)]
pub struct SessionViewModel {
    pub view_state: AppViewState,
    pub notes: Vec<NoteSummary>,
    pub status: String,
    pub status_banner: Option<StatusBanner>,
    pub login_pending: bool,
}

impl Default for SessionViewModel {
    fn default() -> Self {
        Self {
            view_state: AppViewState::Login,
            notes: Vec::new(),
            status: "Not logged in".to_string(),
            status_banner: None,
            login_pending: false,
        }
    }
}

impl SessionViewModel {
    /// A login was queued; the submit control stays disabled until the
    /// backend answers.
    pub fn login_submitted(&mut self) {
        self.login_pending = true;
        self.status = "Signing in...".to_string();
        self.status_banner = None;
    }

    pub fn session_established(&mut self) {
        self.login_pending = false;
        self.view_state = AppViewState::Notes;
        self.notes.clear();
        self.status = "Logged in - loading notes".to_string();
        self.status_banner = None;
    }

    /// Sign-out transition; also used when already on the login screen, in
    /// which case it changes nothing visible.
    pub fn session_cleared(&mut self) {
        self.login_pending = false;
        self.view_state = AppViewState::Login;
        self.notes.clear();
        self.status = "Signed out".to_string();
        self.status_banner = None;
    }

    /// An auth-categorized failure: drop back to the login screen and tell
    /// the user why.
    pub fn forced_reauth(&mut self, status: String, banner: String) {
        self.login_pending = false;
        self.view_state = AppViewState::Login;
        self.notes.clear();
        self.status = status;
        self.status_banner = Some(StatusBanner {
            severity: StatusBannerSeverity::Error,
            message: banner,
        });
    }

    pub fn notes_loaded(&mut self, notes: Vec<NoteSummary>) {
        self.status = format!("{} note(s) loaded", notes.len());
        self.notes = notes;
    }

    pub fn note_added(&mut self, note: NoteSummary) {
        self.status = format!("Added note '{}'", note.title);
        self.notes.push(note);
    }

    /// Non-auth failure: report without leaving the current screen.
    pub fn report_error(&mut self, status: String, banner: Option<String>) {
        self.login_pending = false;
        self.status = status;
        if let Some(message) = banner {
            self.status_banner = Some(StatusBanner {
                severity: StatusBannerSeverity::Error,
                message,
            });
        }
    }

    pub fn notes_view_visible(&self) -> bool {
        self.view_state == AppViewState::Notes
    }

    pub fn login_view_visible(&self) -> bool {
        !self.notes_view_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::NoteId;

    fn note(id: i64, title: &str) -> NoteSummary {
        NoteSummary {
            id: NoteId(id),
            title: title.to_string(),
            content: format!("{title} body"),
        }
    }

    #[test]
    fn default_shows_login_view_with_empty_notes() {
        let view = SessionViewModel::default();
        assert!(view.login_view_visible());
        assert!(!view.notes_view_visible());
        assert!(view.notes.is_empty());
        assert!(!view.login_pending);
    }

    #[test]
    fn exactly_one_view_is_visible_after_every_transition() {
        let mut view = SessionViewModel::default();
        assert_ne!(view.login_view_visible(), view.notes_view_visible());

        view.login_submitted();
        assert_ne!(view.login_view_visible(), view.notes_view_visible());

        view.session_established();
        assert_ne!(view.login_view_visible(), view.notes_view_visible());

        view.forced_reauth("expired".to_string(), "sign in again".to_string());
        assert_ne!(view.login_view_visible(), view.notes_view_visible());

        view.session_cleared();
        assert_ne!(view.login_view_visible(), view.notes_view_visible());
    }

    #[test]
    fn login_success_switches_to_notes_view() {
        let mut view = SessionViewModel::default();
        view.login_submitted();
        view.session_established();
        assert!(view.notes_view_visible());
        assert!(!view.login_view_visible());
        assert!(!view.login_pending);
    }

    #[test]
    fn failed_login_keeps_login_view_and_reenables_submit() {
        let mut view = SessionViewModel::default();
        view.login_submitted();
        assert!(view.login_pending);

        view.forced_reauth(
            "Authentication error".to_string(),
            "Session expired or invalid credentials. Please sign in again.".to_string(),
        );
        assert!(view.login_view_visible());
        assert!(!view.login_pending);
        assert!(view.status_banner.is_some());
    }

    #[test]
    fn sign_out_returns_to_login_and_clears_notes() {
        let mut view = SessionViewModel::default();
        view.session_established();
        view.notes_loaded(vec![note(1, "groceries"), note(2, "ideas")]);
        assert_eq!(view.notes.len(), 2);

        view.session_cleared();
        assert!(view.login_view_visible());
        assert!(view.notes.is_empty());
    }

    #[test]
    fn sign_out_when_already_logged_out_changes_nothing_visible() {
        let mut view = SessionViewModel::default();
        view.session_cleared();
        let first_status = view.status.clone();

        view.session_cleared();
        assert!(view.login_view_visible());
        assert!(view.notes.is_empty());
        assert!(view.status_banner.is_none());
        assert_eq!(view.status, first_status);
    }

    #[test]
    fn auth_error_while_on_notes_view_forces_login_view() {
        let mut view = SessionViewModel::default();
        view.session_established();
        view.notes_loaded(vec![note(1, "groceries")]);

        view.forced_reauth(
            "Authentication error".to_string(),
            "Session expired".to_string(),
        );
        assert!(view.login_view_visible());
        assert!(view.notes.is_empty());
    }

    #[test]
    fn notes_loaded_replaces_previous_list() {
        let mut view = SessionViewModel::default();
        view.session_established();
        view.notes_loaded(vec![note(1, "groceries")]);
        view.notes_loaded(vec![note(2, "ideas"), note(3, "todo")]);
        assert_eq!(view.notes.len(), 2);
        assert_eq!(view.notes[0].id, NoteId(2));
    }

    #[test]
    fn note_added_appends_and_reports() {
        let mut view = SessionViewModel::default();
        view.session_established();
        view.note_added(note(1, "groceries"));
        assert_eq!(view.notes.len(), 1);
        assert!(view.status.contains("groceries"));
    }

    #[test]
    fn non_auth_error_keeps_current_view() {
        let mut view = SessionViewModel::default();
        view.session_established();
        view.report_error("Transport error: connection refused".to_string(), None);
        assert!(view.notes_view_visible());
    }
}

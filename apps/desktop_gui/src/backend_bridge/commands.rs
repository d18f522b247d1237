//! Backend commands queued from UI to backend worker.

pub enum BackendCommand {
    Login { username: String, password: String },
    Logout,
    LoadNotes,
    AddNote { title: String, content: String },
}

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{
    classify_login_failure, UiErrorCategory, UiErrorContext, UiEvent,
};
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::{
    AppViewState, SessionViewModel, StatusBanner, StatusBannerSeverity,
};

fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Auth => "Authentication",
        UiErrorCategory::Transport => "Transport",
        UiErrorCategory::Validation => "Validation",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

fn lighten_color(c: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    egui::Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoginFocusField {
    Username,
    Password,
}

#[derive(Debug, Clone)]
struct LoginUiState {
    focus: Option<LoginFocusField>,
    attempted_auto_focus: bool,
}

impl Default for LoginUiState {
    fn default() -> Self {
        Self {
            focus: Some(LoginFocusField::Username),
            attempted_auto_focus: false,
        }
    }
}

pub struct NotesGuiApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    username: String,
    password: String,
    note_title_draft: String,
    note_content_draft: String,

    view: SessionViewModel,
    login_ui: LoginUiState,
}

impl NotesGuiApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            username: String::new(),
            password: String::new(),
            note_title_draft: String::new(),
            note_content_draft: String::new(),
            view: SessionViewModel::default(),
            login_ui: LoginUiState::default(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::LoginOk => {
                    self.view.session_established();
                    self.password.clear();
                    dispatch_backend_command(
                        &self.cmd_tx,
                        BackendCommand::LoadNotes,
                        &mut self.view.status,
                    );
                }
                UiEvent::LoggedOut => {
                    self.view.session_cleared();
                }
                UiEvent::NotesLoaded(notes) => {
                    self.view.notes_loaded(notes);
                }
                UiEvent::NoteAdded(note) => {
                    self.note_title_draft.clear();
                    self.note_content_draft.clear();
                    self.view.note_added(note);
                }
                UiEvent::Info(message) => {
                    self.view.status = message;
                }
                UiEvent::Error(err) => {
                    if err.requires_reauth() {
                        self.view.forced_reauth(
                            format!("Authentication error: {}", err.message()),
                            "Session expired or invalid credentials. Please sign in again."
                                .to_string(),
                        );
                        self.login_ui.focus = Some(LoginFocusField::Username);
                    } else {
                        let status = if err.context() == UiErrorContext::Login {
                            classify_login_failure(err.message())
                        } else {
                            format!("{} error: {}", err_label(err.category()), err.message())
                        };
                        let banner = matches!(
                            err.context(),
                            UiErrorContext::Login
                                | UiErrorContext::AddNote
                                | UiErrorContext::BackendStartup
                        )
                        .then(|| status.clone());
                        self.view.report_error(status, banner);
                    }
                }
            }
        }
    }

    fn try_login(&mut self) {
        if self.view.login_pending {
            return;
        }

        let username = self.username.trim().to_string();
        if username.is_empty() {
            self.view.status = "Username is required".to_string();
            self.view.status_banner = Some(StatusBanner {
                severity: StatusBannerSeverity::Error,
                message: "Please enter a username.".to_string(),
            });
            self.login_ui.focus = Some(LoginFocusField::Username);
            return;
        }

        if self.password.is_empty() {
            self.view.status = "Password is required".to_string();
            self.view.status_banner = Some(StatusBanner {
                severity: StatusBannerSeverity::Error,
                message: "Please enter a password.".to_string(),
            });
            self.login_ui.focus = Some(LoginFocusField::Password);
            return;
        }

        let password = self.password.clone();
        self.view.login_submitted();
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::Login { username, password },
            &mut self.view.status,
        );
    }

    fn sign_out(&mut self) {
        // Flip the view immediately; the backend confirms with LoggedOut,
        // which lands on an already-signed-out view model.
        self.view.session_cleared();
        self.note_title_draft.clear();
        self.note_content_draft.clear();
        dispatch_backend_command(&self.cmd_tx, BackendCommand::Logout, &mut self.view.status);
    }

    fn try_add_note(&mut self) {
        let title = self.note_title_draft.trim().to_string();
        if title.is_empty() {
            self.view.status = "Note title is required".to_string();
            return;
        }
        let content = self.note_content_draft.trim().to_string();
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::AddNote { title, content },
            &mut self.view.status,
        );
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        if let Some(banner) = self.view.status_banner.clone() {
            let (fill, stroke) = match banner.severity {
                StatusBannerSeverity::Error => (
                    egui::Color32::from_rgb(111, 53, 53),
                    egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
                ),
            };

            egui::Frame::NONE
                .fill(fill)
                .stroke(stroke)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new(&banner.message).color(egui::Color32::WHITE));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Dismiss").clicked() {
                                self.view.status_banner = None;
                            }
                        });
                    });
                });
        }
    }

    fn login_text_field(
        &mut self,
        ui: &mut egui::Ui,
        id: &'static str,
        label: &str,
        hint: &str,
        value: &mut String,
        masked: bool,
        should_focus: bool,
    ) -> egui::Response {
        ui.label(egui::RichText::new(label).strong());
        let edit = egui::TextEdit::singleline(value)
            .id_salt(id)
            .password(masked)
            .hint_text(
                egui::RichText::new(hint)
                    .color(ui.visuals().weak_text_color().gamma_multiply(0.85)),
            )
            .desired_width(f32::INFINITY);

        let response = ui.add_sized([ui.available_width(), 34.0], edit);

        if should_focus {
            response.request_focus();
        }

        response
    }

    fn show_login_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let avail = ui.available_size();
            let card_width = avail.x.clamp(380.0, 480.0);
            let top_space = (avail.y * 0.12).clamp(18.0, 90.0);

            ui.add_space(top_space);

            ui.vertical_centered(|ui| {
                ui.set_width(card_width);

                let card_fill = lighten_color(ui.visuals().panel_fill, 0.02);

                egui::Frame::NONE
                    .fill(card_fill)
                    .corner_radius(14.0)
                    .stroke(egui::Stroke::new(
                        1.0,
                        ui.visuals().widgets.noninteractive.bg_stroke.color,
                    ))
                    .inner_margin(egui::Margin::symmetric(20, 18))
                    .show(ui, |ui| {
                        ui.style_mut().spacing.item_spacing = egui::vec2(10.0, 10.0);

                        ui.vertical(|ui| {
                            ui.heading("Notes");
                            ui.weak("Sign in to your notes.");
                        });

                        ui.add_space(8.0);
                        self.show_status_banner(ui);

                        let mut focus_to_set = None;
                        if !self.login_ui.attempted_auto_focus {
                            self.login_ui.attempted_auto_focus = true;
                            focus_to_set = self.login_ui.focus;
                        } else if self.login_ui.focus.is_some() {
                            focus_to_set = self.login_ui.focus;
                            self.login_ui.focus = None;
                        }

                        let mut username_buf = self.username.clone();
                        let mut password_buf = self.password.clone();

                        let user_resp = self.login_text_field(
                            ui,
                            "login_username",
                            "Username",
                            "alice",
                            &mut username_buf,
                            false,
                            focus_to_set == Some(LoginFocusField::Username),
                        );

                        ui.add_space(6.0);

                        let pass_resp = self.login_text_field(
                            ui,
                            "login_password",
                            "Password",
                            "password",
                            &mut password_buf,
                            true,
                            focus_to_set == Some(LoginFocusField::Password),
                        );

                        self.username = username_buf;
                        self.password = password_buf;

                        let enter_pressed = ctx.input(|i| i.key_pressed(egui::Key::Enter));
                        let can_submit = user_resp.has_focus() || pass_resp.has_focus();
                        if can_submit && enter_pressed {
                            self.try_login();
                        }

                        ui.add_space(10.0);

                        let btn = egui::Button::new(
                            egui::RichText::new("Sign in").strong().size(16.0),
                        )
                        .min_size(egui::vec2(ui.available_width(), 40.0));
                        if ui.add_enabled(!self.view.login_pending, btn).clicked() {
                            self.try_login();
                        }

                        ui.add_space(10.0);
                        ui.separator();
                        ui.add_space(6.0);

                        ui.horizontal_wrapped(|ui| {
                            ui.small("Status:");
                            ui.small(egui::RichText::new(&self.view.status).weak());
                        });
                    });
            });

            ui.add_space((avail.y * 0.08).clamp(12.0, 60.0));
        });
    }

    fn show_notes_screen(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("notes_header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.heading("Notes");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Sign out").clicked() {
                        self.sign_out();
                    }
                    ui.small(egui::RichText::new(&self.view.status).weak());
                });
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_status_banner(ui);
            ui.add_space(6.0);
            self.show_add_note_form(ui);
            ui.add_space(8.0);
            ui.separator();
            ui.add_space(4.0);
            self.show_notes_list(ui);
        });
    }

    fn show_add_note_form(&mut self, ui: &mut egui::Ui) {
        let mut submit = false;

        egui::Frame::NONE
            .fill(ui.visuals().faint_bg_color.gamma_multiply(0.55))
            .corner_radius(12.0)
            .inner_margin(egui::Margin::symmetric(14, 12))
            .show(ui, |ui| {
                ui.label(egui::RichText::new("New note").strong());
                ui.add_space(4.0);

                ui.add_sized(
                    [ui.available_width(), 30.0],
                    egui::TextEdit::singleline(&mut self.note_title_draft)
                        .id_salt("note_title")
                        .hint_text("Title"),
                );
                ui.add_space(4.0);
                ui.add_sized(
                    [ui.available_width(), 60.0],
                    egui::TextEdit::multiline(&mut self.note_content_draft)
                        .id_salt("note_content")
                        .desired_rows(3)
                        .hint_text("Write something..."),
                );
                ui.add_space(6.0);

                let can_add = !self.note_title_draft.trim().is_empty();
                if ui.add_enabled(can_add, egui::Button::new("Add note")).clicked() {
                    submit = true;
                }
            });

        if submit {
            self.try_add_note();
        }
    }

    fn show_notes_list(&mut self, ui: &mut egui::Ui) {
        if self.view.notes.is_empty() {
            ui.weak("No notes yet.");
            return;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for note in &self.view.notes {
                    egui::Frame::NONE
                        .fill(ui.visuals().faint_bg_color)
                        .corner_radius(8.0)
                        .inner_margin(egui::Margin::symmetric(10, 8))
                        .show(ui, |ui| {
                            ui.label(egui::RichText::new(&note.title).strong());
                            if !note.content.is_empty() {
                                ui.label(&note.content);
                            }
                        });
                    ui.add_space(6.0);
                }
            });
    }
}

impl eframe::App for NotesGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        match self.view.view_state {
            AppViewState::Login => self.show_login_screen(ctx),
            AppViewState::Notes => self.show_notes_screen(ctx),
        }

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

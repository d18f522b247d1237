//! Runtime bridge: a dedicated backend thread that owns the session client
//! and drains the UI command queue.

use std::thread;

use client_core::NotesClient;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn spawn(api_base: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let client = NotesClient::new(api_base);
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::Login { username, password } => {
                        match client.login(&username, &password).await {
                            Ok(()) => {
                                let _ = ui_tx.try_send(UiEvent::LoginOk);
                            }
                            Err(err) => {
                                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                                    UiErrorContext::Login,
                                    err.to_string(),
                                )));
                            }
                        }
                    }
                    BackendCommand::Logout => {
                        client.logout().await;
                        let _ = ui_tx.try_send(UiEvent::LoggedOut);
                    }
                    BackendCommand::LoadNotes => match client.load_notes().await {
                        Ok(notes) => {
                            let _ = ui_tx.try_send(UiEvent::NotesLoaded(notes));
                        }
                        Err(err) => {
                            let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                                UiErrorContext::LoadNotes,
                                err.to_string(),
                            )));
                        }
                    },
                    BackendCommand::AddNote { title, content } => {
                        match client.add_note(&title, &content).await {
                            Ok(note) => {
                                let _ = ui_tx.try_send(UiEvent::NoteAdded(note));
                            }
                            Err(err) => {
                                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                                    UiErrorContext::AddNote,
                                    err.to_string(),
                                )));
                            }
                        }
                    }
                }
            }
        });
    });
}

mod backend_bridge;
mod config;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::NotesGuiApp;

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the notes API; overrides notes.toml and environment.
    #[arg(long)]
    api_base: Option<String>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let settings = match config::load_settings(args.api_base) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!("invalid configuration: {err:#}");
            std::process::exit(2);
        }
    };
    tracing::info!(api_base = %settings.api_base, "starting notes desktop");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::spawn(settings.api_base, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Notes Desktop")
            .with_inner_size([980.0, 680.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Notes Desktop",
        options,
        Box::new(move |_cc| Ok(Box::new(NotesGuiApp::new(cmd_tx, ui_rx)))),
    )
}

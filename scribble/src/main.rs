#![warn(clippy::pedantic)]

pub mod actions;
pub mod app;
pub mod global;
pub mod input;
pub mod io;
pub mod view;

use anyhow::Result as AnyResult;

fn main() -> AnyResult<()> {
    let has_term = std::io::IsTerminal::is_terminal(&std::io::stdin());
    // Log to a terminal, if available. Else, log to "log.out" in the working directory.
    if has_term {
        env_logger::builder()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        let _ = simple_logging::log_to_file("log.out", log::LevelFilter::Debug);
    }

    let preferences = global::Preferences::get();
    if let Err(e) = preferences.save_if_missing() {
        log::warn!("Failed to save preferences:\n{e:?}");
    };

    let title = format!("Scribble v{}", env!("CARGO_PKG_VERSION"));
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([440.0, 480.0])
            .with_min_inner_size([200.0, 120.0]),
        ..Default::default()
    };

    log::info!("Starting {title}");
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Box::new(app::ScribbleApp::new(preferences))),
    )
    // eframe's error isn't Send + Sync on every platform.
    .map_err(|e| anyhow::anyhow!("event loop failed: {e}"))
}

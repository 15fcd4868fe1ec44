// main.rs - Interactive letter grid window
// Letters flip between lit and unlit on a randomized async schedule

use std::sync::{Arc, OnceLock};

use clap::Parser;
use eframe::egui;
use tracing::info;

use letter_grid::config::{Cli, Settings};
use letter_grid::logging::init_logging;
use letter_grid::{LetterGridApp, Result};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;
    let settings = Settings::try_from(&cli)?;
    info!(?settings, "starting letter grid");

    // The driver may tick before the window exists; repaint once a context is set.
    let repaint_ctx: Arc<OnceLock<egui::Context>> = Arc::new(OnceLock::new());
    let notify_ctx = Arc::clone(&repaint_ctx);
    let app = LetterGridApp::new(&settings, move || {
        if let Some(ctx) = notify_ctx.get() {
            ctx.request_repaint();
        }
    })?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 860.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Interactive Letter Grid",
        options,
        Box::new(move |cc| {
            let _ = repaint_ctx.set(cc.egui_ctx.clone());
            Box::new(app)
        }),
    )?;
    Ok(())
}

use eframe::{egui, NativeOptions};
use egui::ViewportBuilder;
use std::error::Error;
use tracing_subscriber::EnvFilter;

use dm_roster::RosterApp;

fn main() -> Result<(), Box<dyn Error>> {
    // RUST_LOG overrides the default filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dm_roster=info")),
        )
        .init();

    let app = RosterApp::new();
    tracing::info!("Starting encounter roster");

    let mut viewport = ViewportBuilder::default()
        .with_inner_size([760.0, 520.0])
        .with_min_inner_size([420.0, 240.0])
        .with_resizable(true)
        .with_decorations(false); // custom header bar in the central panel
    if app.settings.always_on_top {
        viewport = viewport.with_always_on_top();
    }

    let native_options = NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Encounter Roster",
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(app))
        }),
    )?;

    Ok(())
}

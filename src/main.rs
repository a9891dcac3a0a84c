//! Superheterodyne Receiver Demonstrator - Main Entry Point
//!
//! Opens a single window showing the original, mixed and filtered signals
//! of a superheterodyne receiver together with their spectra.

use superhet_rs::{config::AppConfig, frontend::SuperhetApp, i18n};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,superhet_rs=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting superheterodyne receiver demonstrator");

    let config = AppConfig::load_or_default();
    i18n::set_language(config.ui.language);

    let title = i18n::translate("app.title");
    let [width, height] = config.ui.window_size;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([640.0, 480.0])
            .with_title(title.clone()),
        ..Default::default()
    };

    let result = eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_zoom_factor(config.ui.font_scale);
            if config.ui.dark_mode {
                cc.egui_ctx.set_visuals(egui::Visuals::dark());
            } else {
                cc.egui_ctx.set_visuals(egui::Visuals::light());
            }

            let app = SuperhetApp::new(&config)?;
            Ok(Box::new(app))
        }),
    );

    tracing::info!("Shutting down...");

    result
}

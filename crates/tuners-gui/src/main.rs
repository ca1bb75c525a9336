//! GUI entry point for the Tuners Vehicle Cost Predictor

mod app;
mod cost_panel;
mod predict_panel;
mod settings_panel;

use app::TunersApp;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([600.0, 450.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Tuners Vehicle Cost Predictor",
        options,
        Box::new(|cc| Ok(Box::new(TunersApp::new(cc)))),
    )
}

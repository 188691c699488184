use anyhow::Context;
use eframe::egui;
use log::{info, warn};

use tip_calculator_egui::config::TipCalculatorConfig;
use tip_calculator_egui::ui::TipCalculatorApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging (RUST_LOG controls verbosity)
    env_logger::init();
    info!("Starting Tip Calculator egui application");

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            warn!("⚠️ {:#}; falling back to default settings", e);
            TipCalculatorConfig::default()
        }
    };

    // Narrow, tall window: the form is a single column
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 900.0])
            .with_min_inner_size([360.0, 480.0])
            .with_title("Tip Calculator")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Tip Calculator",
        options,
        Box::new(move |cc| {
            let app = TipCalculatorApp::new(cc, config);
            info!("Successfully initialized Tip Calculator app");
            Ok(Box::new(app))
        }),
    )
}

fn load_config() -> anyhow::Result<TipCalculatorConfig> {
    let path = TipCalculatorConfig::default_path()
        .context("Could not determine a config directory")?;
    let config = TipCalculatorConfig::load_from_path(&path)
        .with_context(|| format!("Could not load settings from {}", path.display()))?;
    Ok(config)
}

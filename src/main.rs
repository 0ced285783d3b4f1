use anyhow::Context;
use eframe::NativeOptions;
use rvar::config::ConfigManager;
use rvar::ui::RvarApp;
use std::path::PathBuf;

const DEFAULT_CONFIG: &str = "rvar.toml";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));

    let manager = ConfigManager::new();
    manager
        .load_from_file(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    let config = manager.get();
    log::info!("Using backend {}", config.backend.base_url);

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 750.0])
            .with_min_inner_size([800.0, 500.0])
            .with_title("rvar - Variation Browser"),
        ..Default::default()
    };

    eframe::run_native(
        "rvar",
        native_options,
        Box::new(|cc| {
            RvarApp::new(cc, config)
                .map(|app| Box::new(app) as Box<dyn eframe::App>)
                .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
        }),
    )
    .map_err(|e| anyhow::anyhow!("{}", e))
}

use anyhow::{anyhow, Context as _, Result};
use eframe::egui::{self, Vec2};

use crate::config::AppConfig;
use crate::ui::app::SwitcherApp;
use crate::ui::icons::create_app_icon;

// Importation des modules
mod config;
mod logging;
mod switcher;
mod theme;
mod ui;

const ICON_SIZE: u32 = 64;

fn main() -> Result<()> {
    // La configuration est lue avant les logs : son niveau de log s'applique
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    let _log_guard = logging::init(&config.log_level, AppConfig::log_dir().as_deref());
    if let Some(e) = config_error {
        tracing::warn!("Configuration ignorée, valeurs par défaut utilisées: {}", e);
    }
    tracing::info!(?config, "Démarrage de Split Theme Switcher");

    // Options de l'application
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Switch Theme")
            .with_inner_size(Vec2::new(config.window_width, config.window_height))
            .with_min_inner_size(Vec2::new(320.0, 240.0))
            .with_icon(create_app_icon(ICON_SIZE)),
        centered: true,
        default_theme: eframe::Theme::Dark,
        follow_system_theme: false,
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        vsync: true,
        ..Default::default()
    };

    eframe::run_native(
        "Switch Theme",
        options,
        Box::new(move |cc| Box::new(SwitcherApp::new(cc, &config))),
    )
    .map_err(|e| anyhow!("{e}"))
    .context("failed to open the switcher window")
}

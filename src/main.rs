// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! SNGMaker - Main Entry Point
//!
//! A small desktop tool for assembling SongBeamer `.sng` song files from a
//! metadata form and the lyrics text. Built with Rust and egui.

mod app;
mod config;
mod error;
mod export;
mod files;
mod song;
mod state;
mod theme;

use app::SngMakerApp;
use config::load_config;
use log::info;

/// Application name constant.
const APP_NAME: &str = "SNGMaker";

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting {}", APP_NAME);

    // Load settings to get window configuration
    let settings = load_config();
    let window_size = &settings.window_size;

    info!(
        "Window configuration: {}x{}, maximized: {}",
        window_size.width, window_size.height, window_size.maximized
    );

    let viewport = egui::ViewportBuilder::default()
        .with_title(APP_NAME)
        .with_inner_size([window_size.width, window_size.height])
        .with_min_inner_size([640.0, 400.0])
        .with_maximized(window_size.maximized);

    // Apply position if saved
    let viewport = if let (Some(x), Some(y)) = (window_size.x, window_size.y) {
        viewport.with_position([x, y])
    } else {
        viewport
    };

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        native_options,
        Box::new(|cc| Ok(Box::new(SngMakerApp::new(cc)))),
    )
}

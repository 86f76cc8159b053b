//! Theme handling for SNGMaker
//!
//! Light and dark use egui's stock visuals; `System` follows the mode the
//! platform reported at startup.

mod manager;

pub use manager::ThemeManager;

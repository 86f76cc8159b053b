//! Theme Manager for SNGMaker
//!
//! Tracks the selected theme and applies it to the egui context once per
//! change.

use egui::{Context, Visuals};
use log::{debug, info};

use crate::config::Theme;

/// Manages theme state and applies themes to the egui context.
#[derive(Debug, Clone)]
pub struct ThemeManager {
    /// Current theme setting (Light, Dark, or System)
    current_theme: Theme,
    /// Dark mode reported by the platform when the app started
    system_dark_mode: bool,
    /// Whether the theme needs to be reapplied
    needs_apply: bool,
}

impl ThemeManager {
    /// Create a manager. `system_dark_mode` is the platform preference.
    pub fn new(theme: Theme, system_dark_mode: bool) -> Self {
        info!(
            "ThemeManager initialized with theme: {:?} (system dark: {})",
            theme, system_dark_mode
        );
        Self {
            current_theme: theme,
            system_dark_mode,
            needs_apply: true,
        }
    }

    /// Set the theme and mark for reapplication.
    pub fn set_theme(&mut self, theme: Theme) {
        if self.current_theme != theme {
            info!("Theme changed from {:?} to {:?}", self.current_theme, theme);
            self.current_theme = theme;
            self.needs_apply = true;
        }
    }

    /// Whether the resolved theme is dark.
    pub fn is_dark(&self) -> bool {
        match self.current_theme {
            Theme::Dark => true,
            Theme::Light => false,
            Theme::System => self.system_dark_mode,
        }
    }

    /// The egui visuals for the resolved theme.
    pub fn visuals(&self) -> Visuals {
        if self.is_dark() {
            Visuals::dark()
        } else {
            Visuals::light()
        }
    }

    /// Apply the theme if it changed since the last call.
    ///
    /// Returns `true` if visuals were updated.
    pub fn apply_if_needed(&mut self, ctx: &Context) -> bool {
        if !self.needs_apply {
            return false;
        }
        ctx.set_visuals(self.visuals());
        self.needs_apply = false;
        debug!("Applied theme: {:?}", self.current_theme);
        true
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

//! Application state management for SNGMaker
//!
//! This module defines the central `AppState` struct that owns the song
//! being edited (metadata form and lyrics body), the user settings, and
//! transient UI state such as toasts and the error modal.

use crate::config::{load_config, save_config_silent, Settings};
use crate::song::SongMetadata;
use log::{debug, info};
use std::path::Path;

// ─────────────────────────────────────────────────────────────────────────────
// UI State
// ─────────────────────────────────────────────────────────────────────────────

/// Transient UI state that is never persisted.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Whether the settings window is open
    pub show_settings: bool,
    /// Whether to show error modal
    pub show_error_modal: bool,
    /// Error message for modal
    pub error_message: String,
    /// Temporary toast message (shown in the status bar)
    pub toast_message: Option<String>,
    /// When the toast message should expire (as seconds since app start)
    pub toast_expires_at: Option<f64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Application State
// ─────────────────────────────────────────────────────────────────────────────

/// Central application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// User preferences
    pub settings: Settings,
    /// Metadata form of the current song
    pub song: SongMetadata,
    /// Lyrics body as typed into the editor
    pub body: String,
    /// Transient UI state
    pub ui: UiState,
    /// Whether settings changed since the last save
    settings_dirty: bool,
}

impl AppState {
    /// Create state from the persisted configuration.
    pub fn new() -> Self {
        Self::with_settings(load_config())
    }

    /// Create state with explicit settings and a fresh song.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            song: SongMetadata::new(),
            body: String::new(),
            ui: UiState::default(),
            settings_dirty: false,
        }
    }

    /// Editor body, or `None` when nothing has been typed.
    pub fn body_text(&self) -> Option<&str> {
        Some(self.body.as_str()).filter(|b| !b.is_empty())
    }

    /// Whether the form and the editor are both untouched.
    pub fn is_pristine(&self) -> bool {
        self.body.is_empty() && self.song == SongMetadata::new()
    }

    /// Discard the current song and start over with the initial form.
    pub fn reset_song(&mut self) {
        info!("Starting a new song");
        self.song = SongMetadata::new();
        self.body.clear();
    }

    /// Record a successful save.
    pub fn record_saved(&mut self, path: &Path) {
        let previous = self.settings.last_save_directory.clone();
        self.settings.remember_save_path(path);
        if self.settings.last_save_directory != previous {
            self.mark_settings_dirty();
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Settings
    // ─────────────────────────────────────────────────────────────────────────

    /// Flag settings for the next periodic save.
    pub fn mark_settings_dirty(&mut self) {
        self.settings_dirty = true;
    }

    /// Persist settings if they changed.
    pub fn save_settings_if_dirty(&mut self) {
        if self.settings_dirty {
            debug!("Saving dirty settings");
            if save_config_silent(&self.settings) {
                self.settings_dirty = false;
            }
        }
    }

    /// Final save before the window closes.
    pub fn shutdown(&mut self) {
        info!("Shutting down, saving settings");
        self.settings_dirty = true;
        self.save_settings_if_dirty();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Messages
    // ─────────────────────────────────────────────────────────────────────────

    /// Toggle the settings window.
    pub fn toggle_settings(&mut self) {
        self.ui.show_settings = !self.ui.show_settings;
    }

    /// Show an error in a modal dialog.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.ui.error_message = message.into();
        self.ui.show_error_modal = true;
    }

    /// Dismiss the error modal.
    pub fn dismiss_error(&mut self) {
        self.ui.show_error_modal = false;
        self.ui.error_message.clear();
    }

    /// Show a temporary toast message (disappears after duration).
    ///
    /// `current_time` should be the current app time in seconds.
    /// `duration` is how long to show the message in seconds.
    pub fn show_toast(&mut self, message: impl Into<String>, current_time: f64, duration: f64) {
        self.ui.toast_message = Some(message.into());
        self.ui.toast_expires_at = Some(current_time + duration);
    }

    /// Update toast state - clears expired toasts.
    ///
    /// Call this each frame with the current time.
    pub fn update_toast(&mut self, current_time: f64) {
        if let Some(expires_at) = self.ui.toast_expires_at {
            if current_time >= expires_at {
                self.ui.toast_message = None;
                self.ui.toast_expires_at = None;
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::song::FieldName;
    use std::path::PathBuf;

    #[test]
    fn test_new_state_is_pristine() {
        let state = AppState::default();
        assert!(state.is_pristine());
        assert_eq!(state.body_text(), None);
        assert_eq!(state.song.get(FieldName::Version), "3");
    }

    #[test]
    fn test_body_text() {
        let mut state = AppState::default();
        state.body = "Verse\n".to_string();
        assert_eq!(state.body_text(), Some("Verse\n"));
        assert!(!state.is_pristine());
    }

    #[test]
    fn test_reset_song() {
        let mut state = AppState::default();
        state.song.set(FieldName::Title, "Old");
        state.song.set(FieldName::Version, "");
        state.body = "lyrics".to_string();

        state.reset_song();

        assert!(state.is_pristine());
        assert_eq!(state.song.get(FieldName::Title), "");
        assert_eq!(state.song.get(FieldName::Version), "3");
    }

    #[test]
    fn test_record_saved_marks_dirty_on_new_directory() {
        let mut state = AppState::default();
        state.record_saved(Path::new("/songs/a.sng"));
        assert!(state.settings_dirty);
        assert_eq!(
            state.settings.last_save_directory,
            Some(PathBuf::from("/songs"))
        );
    }

    #[test]
    fn test_record_saved_same_directory_stays_clean() {
        let mut settings = Settings::default();
        settings.last_save_directory = Some(PathBuf::from("/songs"));
        let mut state = AppState::with_settings(settings);

        state.record_saved(Path::new("/songs/b.sng"));
        assert!(!state.settings_dirty);
    }

    #[test]
    fn test_toast_expires() {
        let mut state = AppState::default();
        state.show_toast("Copied", 10.0, 2.0);
        state.update_toast(11.0);
        assert_eq!(state.ui.toast_message.as_deref(), Some("Copied"));
        state.update_toast(12.0);
        assert!(state.ui.toast_message.is_none());
        assert!(state.ui.toast_expires_at.is_none());
    }

    #[test]
    fn test_error_modal() {
        let mut state = AppState::default();
        state.show_error("Failed to save");
        assert!(state.ui.show_error_modal);
        assert_eq!(state.ui.error_message, "Failed to save");

        state.dismiss_error();
        assert!(!state.ui.show_error_modal);
        assert!(state.ui.error_message.is_empty());
    }

    #[test]
    fn test_toggle_settings() {
        let mut state = AppState::default();
        state.toggle_settings();
        assert!(state.ui.show_settings);
        state.toggle_settings();
        assert!(!state.ui.show_settings);
    }
}

//! Main application module for SNGMaker
//!
//! This module implements the eframe App trait: the song details form, the
//! lyrics editor, the copy/save actions and the settings window.

use crate::config::{Settings, Theme, WindowSize};
use crate::export::{copy_song, save_song, ActionOutcome, SaveOutcome, SystemClipboard};
use crate::files::dialogs::save_song_dialog;
use crate::song::FieldName;
use crate::state::AppState;
use crate::theme::ThemeManager;
use log::{debug, info, warn};
use std::sync::Arc;

const APP_NAME: &str = "SNGMaker";

/// Keyboard shortcut actions that need to be deferred.
///
/// These actions are detected in the input handling closure and executed
/// afterwards to avoid borrow conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyboardAction {
    /// Save song as .sng (Ctrl+S)
    Save,
    /// Copy song to clipboard (Ctrl+Shift+C)
    Copy,
    /// Start a new song (Ctrl+N)
    New,
    /// Toggle settings window (Ctrl+,)
    ToggleSettings,
}

/// The main application struct that holds all state and implements eframe::App.
pub struct SngMakerApp {
    /// Central application state
    state: AppState,
    /// Theme manager for handling theme switching
    theme_manager: ThemeManager,
    /// Last known window size (for detecting changes)
    last_window_size: Option<egui::Vec2>,
    /// Last known window position (for detecting changes)
    last_window_pos: Option<egui::Pos2>,
    /// Application start time for timing toast messages
    start_time: std::time::Instant,
}

impl SngMakerApp {
    /// Create the application from the persisted configuration.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        info!("Initializing {}", APP_NAME);

        let state = AppState::new();

        // eframe has already applied the platform theme at this point
        let system_dark = cc.egui_ctx.style().visuals.dark_mode;
        let mut theme_manager = ThemeManager::new(state.settings.theme, system_dark);
        theme_manager.apply_if_needed(&cc.egui_ctx);

        Self {
            state,
            theme_manager,
            last_window_size: None,
            last_window_pos: None,
            start_time: std::time::Instant::now(),
        }
    }

    /// Get elapsed time since app start in seconds.
    fn get_app_time(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    /// Update window size in settings if changed.
    fn update_window_state(&mut self, ctx: &egui::Context) {
        let mut changed = false;

        ctx.input(|i| {
            let viewport = i.viewport();
            if let Some((current_size, current_pos)) =
                window_geometry(viewport.inner_rect, viewport.outer_rect)
            {

                let size_changed = self
                    .last_window_size
                    .map(|s| (s - current_size).length() > 1.0)
                    .unwrap_or(true);
                let pos_changed = self
                    .last_window_pos
                    .map(|p| (p - current_pos).length() > 1.0)
                    .unwrap_or(true);

                if size_changed || pos_changed {
                    self.last_window_size = Some(current_size);
                    self.last_window_pos = Some(current_pos);
                    changed = true;
                }
            }
        });

        if changed {
            if let (Some(size), Some(pos)) = (self.last_window_size, self.last_window_pos) {
                let maximized = ctx.input(|i| i.viewport().maximized.unwrap_or(false));

                self.state.settings.window_size = WindowSize {
                    width: size.x,
                    height: size.y,
                    x: Some(pos.x),
                    y: Some(pos.y),
                    maximized,
                };
                self.state.mark_settings_dirty();
            }
        }
    }

    /// Window title: "Song Title - SNGMaker", or just the app name.
    fn window_title(&self) -> String {
        let title = self.state.song.get(FieldName::Title).trim();
        if title.is_empty() {
            APP_NAME.to_string()
        } else {
            format!("{} - {}", title, APP_NAME)
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────

    fn render_ui(&mut self, ctx: &egui::Context) {
        let mut pending: Option<KeyboardAction> = None;
        let has_body = self.state.body_text().is_some();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(has_body, egui::Button::new("📋 Copy"))
                    .on_hover_text("Copy the song to the clipboard (Ctrl+Shift+C)")
                    .clicked()
                {
                    pending = Some(KeyboardAction::Copy);
                }
                if ui
                    .add_enabled(has_body, egui::Button::new("💾 Save"))
                    .on_hover_text("Save the song as a .sng file (Ctrl+S)")
                    .clicked()
                {
                    pending = Some(KeyboardAction::Save);
                }
                if ui
                    .add_enabled(!self.state.is_pristine(), egui::Button::new("🆕 New"))
                    .on_hover_text("Clear the form and the editor (Ctrl+N)")
                    .clicked()
                {
                    pending = Some(KeyboardAction::New);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("⚙").on_hover_text("Settings (Ctrl+,)").clicked() {
                        pending = Some(KeyboardAction::ToggleSettings);
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let lines = self.state.body.lines().count();
                ui.label(format!("{} lines", lines));
                if let Some(toast) = &self.state.ui.toast_message {
                    ui.separator();
                    ui.label(egui::RichText::new(toast).italics());
                }
            });
        });

        egui::SidePanel::left("song_details")
            .resizable(true)
            .default_width(340.0)
            .show(ctx, |ui| {
                ui.heading("Song details");
                ui.add_space(4.0);
                egui::ScrollArea::vertical().show(ui, |ui| {
                    egui::Grid::new("song_fields")
                        .num_columns(2)
                        .striped(true)
                        .show(ui, |ui| {
                            for field in self.state.song.fields_mut() {
                                ui.label(field.label);
                                ui.add(
                                    egui::TextEdit::singleline(&mut field.value)
                                        .id_source(field.name.name())
                                        .desired_width(f32::INFINITY),
                                );
                                ui.end_row();
                            }
                        });
                });
            });

        let font_size = self.state.settings.editor_font_size;
        let word_wrap = self.state.settings.word_wrap;
        let mut layouter = move |ui: &egui::Ui, text: &str, wrap_width: f32| -> Arc<egui::Galley> {
            let wrap_width = if word_wrap { wrap_width } else { f32::INFINITY };
            let layout_job = egui::text::LayoutJob::simple(
                text.to_owned(),
                egui::FontId::monospace(font_size),
                ui.visuals().text_color(),
                wrap_width,
            );
            ui.fonts(|f| f.layout_job(layout_job))
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both()
                .id_source("lyrics_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut self.state.body)
                            .id_source("lyrics")
                            .hint_text("Verse 1\nFirst line of lyrics…")
                            .desired_width(f32::INFINITY)
                            .desired_rows(24)
                            .lock_focus(true)
                            .layouter(&mut layouter),
                    );
                });
        });

        if let Some(action) = pending {
            self.run_action(action);
        }
    }

    fn render_dialogs(&mut self, ctx: &egui::Context) {
        if self.state.ui.show_error_modal {
            let mut dismiss = false;
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(self.state.ui.error_message.as_str());
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        dismiss = true;
                    }
                });
            if dismiss {
                self.state.dismiss_error();
            }
        }

        if self.state.ui.show_settings {
            let mut open = true;
            let mut settings = self.state.settings.clone();

            egui::Window::new("Settings")
                .open(&mut open)
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.label("Theme:");
                        for theme in Theme::all() {
                            ui.selectable_value(&mut settings.theme, *theme, theme.label());
                        }
                    });
                    ui.add(
                        egui::Slider::new(
                            &mut settings.editor_font_size,
                            Settings::MIN_FONT_SIZE..=Settings::MAX_FONT_SIZE,
                        )
                        .text("Editor font size"),
                    );
                    ui.checkbox(&mut settings.word_wrap, "Wrap long lines");
                });

            if settings != self.state.settings {
                self.theme_manager.set_theme(settings.theme);
                self.state.settings = settings;
                self.state.mark_settings_dirty();
            }
            if !open {
                self.state.ui.show_settings = false;
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Actions
    // ─────────────────────────────────────────────────────────────────────────

    fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        use egui::{Key, KeyboardShortcut, Modifiers};

        let copy = KeyboardShortcut::new(Modifiers::COMMAND | Modifiers::SHIFT, Key::C);
        let save = KeyboardShortcut::new(Modifiers::COMMAND, Key::S);
        let new = KeyboardShortcut::new(Modifiers::COMMAND, Key::N);
        let settings = KeyboardShortcut::new(Modifiers::COMMAND, Key::Comma);

        let action = ctx.input_mut(|i| {
            if i.consume_shortcut(&copy) {
                Some(KeyboardAction::Copy)
            } else if i.consume_shortcut(&save) {
                Some(KeyboardAction::Save)
            } else if i.consume_shortcut(&new) {
                Some(KeyboardAction::New)
            } else if i.consume_shortcut(&settings) {
                Some(KeyboardAction::ToggleSettings)
            } else {
                None
            }
        });

        if let Some(action) = action {
            debug!("Keyboard shortcut: {:?}", action);
            self.run_action(action);
        }
    }

    fn run_action(&mut self, action: KeyboardAction) {
        match action {
            KeyboardAction::Copy => self.handle_copy(),
            KeyboardAction::Save => self.handle_save(),
            KeyboardAction::New => self.state.reset_song(),
            KeyboardAction::ToggleSettings => self.state.toggle_settings(),
        }
    }

    /// Copy the assembled song to the clipboard.
    fn handle_copy(&mut self) {
        let result = copy_song(
            &mut SystemClipboard,
            &self.state.song,
            self.state.body_text(),
        );
        let time = self.get_app_time();

        match result {
            Ok(ActionOutcome::Done) => {
                self.state.show_toast("Song copied to clipboard", time, 2.0);
            }
            Ok(ActionOutcome::Skipped) => {}
            Err(e) => {
                warn!("Failed to copy song to clipboard: {}", e);
                self.state
                    .show_toast(format!("Copy failed: {}", e), time, 3.0);
            }
        }
    }

    /// Ask for a location and save the assembled song there.
    fn handle_save(&mut self) {
        let initial_dir = self.state.settings.last_save_directory.clone();
        let result = save_song(&self.state.song, self.state.body_text(), |name| {
            save_song_dialog(initial_dir.as_deref(), name)
        });

        match result {
            Ok(SaveOutcome::Saved(path)) => {
                self.state.record_saved(&path);
                let time = self.get_app_time();
                self.state
                    .show_toast(format!("Saved: {}", path.display()), time, 3.0);
            }
            Ok(SaveOutcome::Cancelled | SaveOutcome::Skipped) => {}
            Err(e) => {
                warn!("Failed to save song: {}", e);
                self.state
                    .show_error(format!("Failed to save song:\n{}", e));
            }
        }
    }
}

/// Size and position to persist for the window.
///
/// The size is the inner (content) size because the viewport is restored with
/// `with_inner_size`. The position is the outer corner, matching
/// `with_position`.
fn window_geometry(
    inner: Option<egui::Rect>,
    outer: Option<egui::Rect>,
) -> Option<(egui::Vec2, egui::Pos2)> {
    let inner = inner?;
    let pos = outer.map_or(inner.min, |rect| rect.min);
    Some((inner.size(), pos))
}

impl eframe::App for SngMakerApp {
    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.theme_manager.apply_if_needed(ctx);

        let current_time = self.get_app_time();
        self.state.update_toast(current_time);

        ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.window_title()));

        self.update_window_state(ctx);

        self.render_ui(ctx);
        self.handle_keyboard_shortcuts(ctx);
        self.render_dialogs(ctx);
    }

    /// Called when the application is about to close.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application exiting");
        self.state.shutdown();
    }

    /// Save persistent state.
    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        self.state.save_settings_if_dirty();
    }

    /// Auto-save interval in seconds.
    fn auto_save_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(30)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2, Rect};

    #[test]
    fn test_window_geometry_uses_inner_size() {
        let outer = Rect::from_min_size(pos2(100.0, 50.0), vec2(1016.0, 759.0));
        let inner = Rect::from_min_size(pos2(108.0, 81.0), vec2(1000.0, 720.0));

        let (size, pos) = window_geometry(Some(inner), Some(outer)).unwrap();
        assert_eq!(size, vec2(1000.0, 720.0));
        assert_eq!(pos, pos2(100.0, 50.0));
    }

    #[test]
    fn test_window_geometry_restored_size_is_stable() {
        let settings = Settings::default();
        let inner = Rect::from_min_size(
            pos2(0.0, 0.0),
            vec2(settings.window_size.width, settings.window_size.height),
        );
        let outer = inner.expand(12.0);

        let (size, _) = window_geometry(Some(inner), Some(outer)).unwrap();
        assert_eq!(size.x, settings.window_size.width);
        assert_eq!(size.y, settings.window_size.height);
    }

    #[test]
    fn test_window_geometry_without_outer_rect() {
        let inner = Rect::from_min_size(pos2(5.0, 6.0), vec2(800.0, 600.0));
        let (size, pos) = window_geometry(Some(inner), None).unwrap();
        assert_eq!(size, vec2(800.0, 600.0));
        assert_eq!(pos, pos2(5.0, 6.0));
    }

    #[test]
    fn test_window_geometry_unknown_before_first_frame() {
        let outer = Rect::from_min_size(pos2(0.0, 0.0), vec2(10.0, 10.0));
        assert!(window_geometry(None, Some(outer)).is_none());
    }
}

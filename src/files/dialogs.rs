//! Native file dialog integration using the rfd crate

use crate::song::SNG_EXTENSION;
use rfd::FileDialog;
use std::path::{Path, PathBuf};

/// Opens a native save dialog for a song file.
///
/// Returns `Some(PathBuf)` if a location was selected, `None` if cancelled.
pub fn save_song_dialog(initial_dir: Option<&Path>, default_name: &str) -> Option<PathBuf> {
    let mut dialog = FileDialog::new()
        .set_title("Save Song")
        .add_filter("SongBeamer Song", &[SNG_EXTENSION])
        .add_filter("All Files", &["*"])
        .set_file_name(default_name);

    if let Some(dir) = initial_dir {
        dialog = dialog.set_directory(dir);
    }

    dialog.save_file()
}

//! Copy and save actions for the assembled song
//!
//! Both actions do nothing when the editor body is empty or missing. The
//! platform side (clipboard, save dialog) is passed in so the actions can run
//! without a display.

use super::clipboard::{ClipboardError, ClipboardWriter};
use crate::error::{Error, Result};
use crate::song::{build_document, suggested_file_name, SongMetadata};
use log::{debug, info};
use std::fs;
use std::path::PathBuf;

/// Result of the copy action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Body was empty, nothing happened
    Skipped,
    /// Document was written to the clipboard
    Done,
}

/// Result of the save action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Body was empty, no dialog was shown
    Skipped,
    /// User dismissed the save dialog
    Cancelled,
    /// Document was written to this path
    Saved(PathBuf),
}

fn document_for(metadata: &SongMetadata, body: Option<&str>) -> Option<String> {
    let body = body.filter(|b| !b.is_empty())?;
    build_document(metadata.fields(), body)
}

/// Copy the full document to the clipboard.
pub fn copy_song<C: ClipboardWriter + ?Sized>(
    clipboard: &mut C,
    metadata: &SongMetadata,
    body: Option<&str>,
) -> std::result::Result<ActionOutcome, ClipboardError> {
    let Some(document) = document_for(metadata, body) else {
        debug!("Copy skipped: editor is empty");
        return Ok(ActionOutcome::Skipped);
    };

    clipboard.write_text(&document)?;
    info!("Copied song to clipboard ({} bytes)", document.len());
    Ok(ActionOutcome::Done)
}

/// Save the full document to a file.
///
/// `pick_path` receives the suggested file name and returns the chosen
/// destination, or `None` if the user cancelled.
pub fn save_song<F>(
    metadata: &SongMetadata,
    body: Option<&str>,
    pick_path: F,
) -> Result<SaveOutcome>
where
    F: FnOnce(&str) -> Option<PathBuf>,
{
    let Some(document) = document_for(metadata, body) else {
        debug!("Save skipped: editor is empty");
        return Ok(SaveOutcome::Skipped);
    };

    let file_name = suggested_file_name(metadata);
    let Some(path) = pick_path(&file_name) else {
        debug!("Save dialog cancelled");
        return Ok(SaveOutcome::Cancelled);
    };

    fs::write(&path, document.as_bytes()).map_err(|e| Error::FileWrite {
        path: path.clone(),
        source: e,
    })?;

    info!("Saved song to {}", path.display());
    Ok(SaveOutcome::Saved(path))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::song::FieldName;
    use std::cell::{Cell, RefCell};
    use tempfile::TempDir;

    /// Clipboard double that records every write.
    #[derive(Default)]
    struct RecordingClipboard {
        writes: Vec<String>,
        fail: bool,
    }

    impl ClipboardWriter for RecordingClipboard {
        fn write_text(&mut self, text: &str) -> std::result::Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::AccessError("no display".to_string()));
            }
            self.writes.push(text.to_string());
            Ok(())
        }
    }

    fn titled(title: &str) -> SongMetadata {
        let mut metadata = SongMetadata::empty();
        metadata.set(FieldName::Title, title);
        metadata
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Copy
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_copy_writes_document() {
        let mut clipboard = RecordingClipboard::default();
        let outcome = copy_song(&mut clipboard, &titled("My Song"), Some("Verse\nHello\n")).unwrap();

        assert_eq!(outcome, ActionOutcome::Done);
        assert_eq!(clipboard.writes, vec!["#Title=My Song\n---\nVerse\nHello\n"]);
    }

    #[test]
    fn test_copy_body_only_without_headers() {
        let mut clipboard = RecordingClipboard::default();
        copy_song(&mut clipboard, &SongMetadata::empty(), Some("Hello\n")).unwrap();
        assert_eq!(clipboard.writes, vec!["Hello\n"]);
    }

    #[test]
    fn test_copy_skips_empty_body() {
        let mut clipboard = RecordingClipboard::default();
        let metadata = titled("My Song");

        assert_eq!(
            copy_song(&mut clipboard, &metadata, Some("")).unwrap(),
            ActionOutcome::Skipped
        );
        assert_eq!(
            copy_song(&mut clipboard, &metadata, None).unwrap(),
            ActionOutcome::Skipped
        );
        assert!(clipboard.writes.is_empty());
    }

    #[test]
    fn test_copy_skip_does_not_touch_failing_clipboard() {
        let mut clipboard = RecordingClipboard {
            fail: true,
            ..Default::default()
        };
        assert!(copy_song(&mut clipboard, &titled("X"), None).is_ok());
    }

    #[test]
    fn test_copy_propagates_clipboard_error() {
        let mut clipboard = RecordingClipboard {
            fail: true,
            ..Default::default()
        };
        let result = copy_song(&mut clipboard, &titled("X"), Some("body"));
        assert!(matches!(result, Err(ClipboardError::AccessError(_))));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Save
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_save_writes_file_with_suggested_name() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let metadata = titled("My Song");

        let outcome = save_song(&metadata, Some("Verse\nHello\n"), |name| {
            assert_eq!(name, "My Song.sng");
            Some(dir.path().join(name))
        })
        .unwrap();

        let expected_path = dir.path().join("My Song.sng");
        assert_eq!(outcome, SaveOutcome::Saved(expected_path.clone()));
        let written = fs::read_to_string(&expected_path).unwrap();
        assert_eq!(written, "#Title=My Song\n---\nVerse\nHello\n");
    }

    #[test]
    fn test_save_default_name_without_title() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let outcome = save_song(&SongMetadata::empty(), Some("Hello\n"), |name| {
            assert_eq!(name, "sngFile.sng");
            Some(dir.path().join(name))
        })
        .unwrap();

        assert!(matches!(outcome, SaveOutcome::Saved(_)));
        let written = fs::read_to_string(dir.path().join("sngFile.sng")).unwrap();
        assert_eq!(written, "Hello\n");
    }

    #[test]
    fn test_save_skips_empty_body_without_dialog() {
        let asked = Cell::new(false);
        for body in [None, Some("")] {
            let outcome = save_song(&titled("My Song"), body, |_| {
                asked.set(true);
                None
            })
            .unwrap();
            assert_eq!(outcome, SaveOutcome::Skipped);
        }
        assert!(!asked.get());
    }

    #[test]
    fn test_save_cancelled_writes_nothing() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let offered = RefCell::new(None);
        let outcome = save_song(&titled("My Song"), Some("body"), |name| {
            *offered.borrow_mut() = Some(dir.path().join(name));
            None
        })
        .unwrap();

        assert_eq!(outcome, SaveOutcome::Cancelled);
        let offered = offered.into_inner().expect("picker was not asked");
        assert_eq!(offered, dir.path().join("My Song.sng"));
        assert!(!offered.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_save_reports_write_failure() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let target = dir.path().join("missing").join("song.sng");

        let result = save_song(&titled("Song"), Some("body"), |_| Some(target.clone()));
        assert!(matches!(result, Err(Error::FileWrite { path, .. }) if path == target));
    }
}

//! Clipboard Operations
//!
//! This module provides cross-platform clipboard functionality for copying
//! song text to the system clipboard using the arboard crate.

// - enum_variant_names: Error variants follow standard naming convention
#![allow(clippy::enum_variant_names)]

use arboard::Clipboard;

// ─────────────────────────────────────────────────────────────────────────────
// Clipboard Error
// ─────────────────────────────────────────────────────────────────────────────

/// Errors that can occur during clipboard operations.
#[derive(Debug)]
pub enum ClipboardError {
    /// Failed to access clipboard
    AccessError(String),
    /// Failed to set clipboard content
    WriteError(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::AccessError(msg) => write!(f, "Clipboard access error: {}", msg),
            ClipboardError::WriteError(msg) => write!(f, "Clipboard write error: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

impl From<arboard::Error> for ClipboardError {
    fn from(err: arboard::Error) -> Self {
        ClipboardError::WriteError(err.to_string())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Clipboard Writer
// ─────────────────────────────────────────────────────────────────────────────

/// Destination for plain text copied by the user.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The operating system clipboard. Opens a fresh arboard handle per write.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        copy_text_to_clipboard(text)
    }
}

/// Copy plain text to clipboard.
///
/// Uses arboard for cross-platform clipboard support.
pub fn copy_text_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(|e| ClipboardError::AccessError(e.to_string()))?;

    clipboard.set_text(text)?;

    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_error_display() {
        let err = ClipboardError::AccessError("test".to_string());
        assert!(err.to_string().contains("test"));
        assert!(err.to_string().starts_with("Clipboard access error"));
    }

    #[test]
    fn test_clipboard_error_write() {
        let err = ClipboardError::WriteError("write failed".to_string());
        assert!(err.to_string().contains("write failed"));
    }

    #[test]
    fn test_arboard_error_conversion() {
        let err: ClipboardError = arboard::Error::ContentNotAvailable.into();
        assert!(matches!(err, ClipboardError::WriteError(_)));
    }

    // Note: Actual clipboard tests require a display/clipboard context
    // which isn't typically available in CI environments.
}

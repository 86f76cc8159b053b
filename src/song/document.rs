//! `.sng` document serialization
//!
//! A document is a block of `#Tag=value` header lines, a `---` separator, and
//! the lyric body copied verbatim:
//!
//! ```text
//! #Title=My Song
//! #Version=3
//! ---
//! Verse
//! Hello
//! ```
//!
//! The separator is only written when at least one header line exists.

use super::fields::{FieldName, MetadataField, SongMetadata};

/// Line that terminates the header block.
pub const SEPARATOR: &str = "---\n";

/// File extension of SongBeamer songs (without the dot).
pub const SNG_EXTENSION: &str = "sng";

/// File name suggested when the song has no title.
pub const DEFAULT_FILE_NAME: &str = "sngFile.sng";

/// Serialize one field as a header line.
///
/// Returns `None` for blank values. Line breaks inside the value are folded
/// into spaces so the header stays on one line.
pub fn header_line(field: &MetadataField) -> Option<String> {
    if field.is_blank() {
        return None;
    }
    let value = single_line(&field.value);
    Some(format!("#{}={}\n", field.name.tag(), value))
}

/// Serialize all non-blank fields followed by the separator.
///
/// Returns `None` when no field carries a value.
pub fn header_section(fields: &[MetadataField]) -> Option<String> {
    let headers: String = fields.iter().filter_map(header_line).collect();
    if headers.trim().is_empty() {
        return None;
    }
    Some(headers + SEPARATOR)
}

/// Build the full document from the form fields and the editor body.
///
/// The body is appended untouched. Returns `None` when there is neither a
/// header nor any body text.
pub fn build_document(fields: &[MetadataField], body: &str) -> Option<String> {
    match header_section(fields) {
        Some(mut document) => {
            document.push_str(body);
            Some(document)
        }
        None if body.is_empty() => None,
        None => Some(body.to_string()),
    }
}

/// File name offered in the save dialog.
///
/// Uses the trimmed title with a `.sng` extension, or [`DEFAULT_FILE_NAME`]
/// when the title is blank or nothing but the extension.
pub fn suggested_file_name(metadata: &SongMetadata) -> String {
    let title: String = metadata
        .get(FieldName::Title)
        .trim()
        .chars()
        .map(|c| if is_forbidden_in_file_name(c) { '_' } else { c })
        .collect();

    let suffix = format!(".{}", SNG_EXTENSION);
    let stem_len = title.len().saturating_sub(suffix.len());
    let has_suffix = title
        .get(stem_len..)
        .is_some_and(|tail| tail.eq_ignore_ascii_case(&suffix));
    let stem = if has_suffix { &title[..stem_len] } else { title.as_str() };
    if stem.trim().is_empty() {
        return DEFAULT_FILE_NAME.to_string();
    }

    if has_suffix {
        title
    } else {
        title + &suffix
    }
}

fn is_forbidden_in_file_name(c: char) -> bool {
    c.is_control() || matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*')
}

fn single_line(value: &str) -> String {
    if !value.contains(['\r', '\n']) {
        return value.to_string();
    }
    value.replace("\r\n", " ").replace(['\r', '\n'], " ")
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

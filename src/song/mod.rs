//! SongBeamer song model for SNGMaker
//!
//! - `fields.rs` - Metadata field names, labels and the header tag table
//! - `document.rs` - Serialization of fields and body into `.sng` text

pub mod document;
pub mod fields;

pub use document::{build_document, suggested_file_name, SNG_EXTENSION};
pub use fields::{FieldName, SongMetadata};

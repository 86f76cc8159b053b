//! Song Output Module for SNGMaker
//!
//! This module delivers the assembled `.sng` document to the outside world:
//! the system clipboard or a file chosen by the user.
//!
//! # Architecture
//!
//! - `actions.rs` - Copy and save actions with the empty-body guard
//! - `clipboard.rs` - Platform clipboard operations

pub mod actions;
pub mod clipboard;

pub use actions::{copy_song, save_song, ActionOutcome, SaveOutcome};
pub use clipboard::SystemClipboard;

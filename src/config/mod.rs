//! Configuration module for SNGMaker
//!
//! This module handles user preferences, their JSON serialization and
//! persistent storage in the platform-specific config directory.

mod persistence;
mod settings;

pub use persistence::*;
pub use settings::*;

//! File operations module for SNGMaker
//!
//! Native dialogs for choosing where songs are saved.

pub mod dialogs;

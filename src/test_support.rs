//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::path::PathBuf;

use log::LevelFilter;

use crate::core::config::ResolvedConfig;
use crate::core::item::Quantity;

/// A confirmation that always gives the same answer.
pub fn always(answer: bool) -> impl FnMut(&str) -> bool {
    move |_prompt: &str| answer
}

/// Shorthand for a quantity known to be in range.
pub fn qty(value: u8) -> Quantity {
    Quantity::new(value).expect("test quantity in range")
}

/// Resolved config with defaults and no file logging.
pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        default_quantity: Quantity::default(),
        log_level: LevelFilter::Off,
        log_file: PathBuf::from("test.log"),
    }
}

/// Flatten a rendered test buffer into one string.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}

// NVDU Library - Public API

// Re-export error types
pub mod error;
pub use error::{NvduError, Result};

// Module declarations
pub mod cli;
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use core::config::Config;

// Initialize logging
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    // RUST_LOG still overrides the default level
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

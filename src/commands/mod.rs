// Command handlers module
pub mod check;
pub mod completions;
pub mod config;
pub mod info;
pub mod version;

// Re-exports for cleaner imports
pub use check::execute as check;
pub use info::execute as info;
pub use version::execute as version;

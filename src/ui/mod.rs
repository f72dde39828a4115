// UI and formatting module

pub mod progress;
pub mod prompts;

// Re-export commonly used items for cleaner imports
pub use progress::{clear_line, show_download_progress};
pub use prompts::{confirm, dimmed, error, field, info, read_driver_version, success, warn};

// Progress bar and progress indicators module

use colored::Colorize;
use humansize::{format_size, BINARY};
use std::io::{self, Write};

const BAR_LENGTH: usize = 30;

/// Percentage of `done` over `total`, 0 when the total is unknown
pub fn percentage(done: u64, total: Option<u64>) -> usize {
    match total {
        Some(total) if total > 0 => ((done as f64 / total as f64) * 100.0).min(100.0) as usize,
        _ => 0,
    }
}

/// Display a download progress bar
///
/// # Arguments
/// * `downloaded` - Bytes written so far
/// * `total` - Announced size, if the server sent one
/// * `prefix` - Text to display before the progress bar
pub fn show_download_progress(downloaded: u64, total: Option<u64>, prefix: &str) {
    match total {
        Some(total) if total > 0 => {
            let percent = percentage(downloaded, Some(total));
            let filled = percent * BAR_LENGTH / 100;
            let empty = BAR_LENGTH.saturating_sub(filled);

            print!(
                "\r{} [{}{}] {}% ({}/{}) ",
                prefix.white(),
                "=".repeat(filled).green(),
                " ".repeat(empty),
                percent,
                format_size(downloaded, BINARY),
                format_size(total, BINARY)
            );
        }
        _ => {
            print!("\r{} {} ", prefix.white(), format_size(downloaded, BINARY));
        }
    }

    io::stdout().flush().ok();
}

/// Clear the current line (useful for progress bars)
pub fn clear_line() {
    print!("\r{}\r", " ".repeat(80));
    io::stdout().flush().ok();
}

// UI prompts and user interaction module

use colored::Colorize;
use dialoguer::{Confirm, Input};

use crate::core::DriverVersion;

/// Ask the user for a yes/no answer
pub fn confirm(message: &str, default: bool) -> anyhow::Result<bool> {
    Ok(Confirm::new()
        .with_prompt(message)
        .default(default)
        .interact()?)
}

/// Ask for the installed driver version until it parses
///
/// Returns `None` when the user types `q` to quit.
pub fn read_driver_version() -> anyhow::Result<Option<DriverVersion>> {
    let input: String = Input::new()
        .with_prompt("Enter current NVIDIA driver version (q to quit)")
        .validate_with(|value: &String| -> Result<(), String> {
            if is_quit(value) {
                return Ok(());
            }
            DriverVersion::parse(value)
                .map(|_| ())
                .map_err(|_| "Enter a valid version number (e.g. 456.71)".to_string())
        })
        .interact_text()?;

    if is_quit(&input) {
        return Ok(None);
    }

    Ok(Some(DriverVersion::parse(&input)?))
}

fn is_quit(value: &str) -> bool {
    value.trim().to_lowercase().starts_with('q')
}

/// Display a warning message
pub fn warn(message: &str) {
    println!("{}", format!("⚠️  Warning: {}", message).yellow().bold());
}

/// Display an info message
pub fn info(message: &str) {
    println!("{}", message.cyan());
}

/// Display a success message
pub fn success(message: &str) {
    println!("{}", message.green().bold());
}

/// Display an error message
pub fn error(message: &str) {
    println!("{}", message.red().bold());
}

/// Display a dimmed/secondary message
pub fn dimmed(message: &str) {
    println!("{}", message.dimmed());
}

/// Print an aligned `label: value` line
pub fn field(label: &str, value: &str) {
    println!("  {:<18} {}", format!("{}:", label).dimmed(), value.white().bold());
}

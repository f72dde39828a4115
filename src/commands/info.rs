use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::{
    classify, collect_local_report, detect_host, Config, DeviceIdentity, DriverVersion,
};
use crate::platform::{get_device_query, has_battery};
use crate::ui;

/// Show what would be sent to the catalog, without network access
pub fn execute(_matches: &clap::ArgMatches) -> Result<()> {
    let config = Config::load()?;

    let query = get_device_query(&config)?;
    let report = collect_local_report(query.as_ref(), &config, has_battery)?;
    let host = detect_host().with_version_override(config.os_version_override.as_deref());

    println!("{}", "Local device".bold());
    ui::field("Backend", query.backend());
    ui::field("Reported name", report.device_name.trim_end());
    ui::field("Reported driver", report.driver_version.trim_end());
    ui::field("Notebook", &report.is_notebook.to_string());

    match DriverVersion::parse(&report.driver_version) {
        Ok(version) => ui::field("Driver version", &version.to_string()),
        Err(e) => ui::warn(&e.to_string()),
    }

    println!();
    println!("{}", "Catalog filters".bold());

    let identity = DeviceIdentity::parse(&report.device_name, report.is_notebook)?;
    ui::field("Canonical name", &identity.canonical_name);

    match classify(&identity) {
        Ok(classification) => {
            ui::field("Product class", &classification.product_class);
            ui::field("Series", &classification.series_label);
            ui::field("Family", &classification.family_label);
        }
        Err(e) => ui::error(&format!("✗ {}", e)),
    }

    let descriptor = format!("{} {} {}", host.os_type, host.os_version, host.arch_bits);
    match host.identify() {
        Ok(platform) => ui::field("Operating system", &platform.to_string()),
        Err(e) => {
            ui::field("Detected host", descriptor.trim());
            ui::error(&format!("✗ {}", e));
            ui::dimmed("Set 'os-version' with 'nvdu config set' if the host is misdetected.");
        }
    }

    Ok(())
}

/// Classify an arbitrary device name
pub fn execute_classify(matches: &clap::ArgMatches) -> Result<()> {
    let name = matches
        .get_one::<String>("name")
        .context("Name argument is required")?;
    let notebook = matches.get_flag("notebook");

    let identity = DeviceIdentity::parse(name, notebook)?;
    let classification = classify(&identity)?;

    ui::field("Canonical name", &identity.canonical_name);
    ui::field("Product class", &classification.product_class);
    ui::field("Series", &classification.series_label.green().to_string());
    ui::field("Family", &classification.family_label);

    Ok(())
}

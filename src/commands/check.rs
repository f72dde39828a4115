use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use std::sync::atomic::Ordering;

use crate::core::{
    collect_local_report, detect_host, CatalogEntry, ClassifiedDevice, Config, DriverCatalog,
    DriverVersion, Downloader, NvidiaCatalog, UpdateChecker, UpdateDecision,
};
use crate::platform::{get_device_query, has_battery};
use crate::ui;

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    println!();
    println!("{}", "━".repeat(50).cyan());
    println!("  {}", "NVIDIA Driver Update Check".bold().cyan());
    println!("{}", "━".repeat(50).cyan());
    println!();

    let mut config = Config::load()?;
    apply_notebook_flags(matches, &mut config);

    // 1. Consultar el dispositivo local
    let query = get_device_query(&config)?;
    let report = collect_local_report(query.as_ref(), &config, has_battery)?;

    // 2. Versión instalada (el usuario puede corregirla)
    let raw_current = matches
        .get_one::<String>("current")
        .cloned()
        .unwrap_or_else(|| report.driver_version.clone());

    let current = match DriverVersion::parse(&raw_current) {
        Ok(version) => version,
        Err(e) => {
            ui::warn(&format!("Unable to get driver version ({})", e));
            match ui::read_driver_version()? {
                Some(version) => version,
                None => {
                    ui::dimmed("Bye!");
                    return Ok(());
                }
            }
        }
    };

    println!(
        "{} {}",
        "Current version:".dimmed(),
        current.to_string().yellow().bold()
    );

    // 3. Clasificar GPU y plataforma
    let host = detect_host().with_version_override(config.os_version_override.as_deref());
    let device = ClassifiedDevice::from_report(&report, &host)
        .context("Could not map this GPU onto the driver catalog")?;

    println!(
        "{} {}{}",
        "GPU Model:".dimmed(),
        device.identity.canonical_name.yellow().bold(),
        device.identity.notebook_suffix()
    );

    // 4. Consultar el catálogo
    println!();
    ui::info("Searching the NVIDIA driver catalog...");

    let checker = UpdateChecker::new(NvidiaCatalog::new(config.language())?);
    let result = checker.check(&device, &current)?;

    match result.decision {
        UpdateDecision::UpToDate => {
            println!();
            println!("{}", "✓ You're using the latest version!".green().bold());
            println!();
            Ok(())
        }
        UpdateDecision::UpdateAvailable(latest) => {
            println!();
            println!(
                "{} {} {}",
                "✓ New version is available:".green(),
                latest.to_string().yellow().bold(),
                format!("({})", result.entry.name).dimmed()
            );
            println!();

            let proceed = matches.get_flag("yes") || ui::confirm("Would you like to download?", true)?;
            if !proceed {
                println!("{}", "Not downloading the new version. Bye!".yellow());
                return Ok(());
            }

            download(checker.catalog(), &result.entry, &config)
        }
        UpdateDecision::Invalid(reason) => {
            println!();
            ui::error(&format!("✗ Invalid result: {}", reason));
            ui::dimmed("The catalog filters probably selected the wrong product.");
            Err(anyhow!("invalid update decision: {}", reason))
        }
    }
}

fn apply_notebook_flags(matches: &clap::ArgMatches, config: &mut Config) {
    if matches.get_flag("notebook") {
        config.notebook_override = Some(true);
    } else if matches.get_flag("desktop") {
        config.notebook_override = Some(false);
    }
}

fn download(catalog: &impl DriverCatalog, entry: &CatalogEntry, config: &Config) -> Result<()> {
    let url = catalog
        .download_url(entry)
        .context("Failed to resolve the installer download link")?;

    let downloader = Downloader::new(config.resolve_download_dir())?;

    let cancel = downloader.cancel_flag();
    ctrlc::set_handler(move || {
        cancel.store(true, Ordering::Relaxed);
    })
    .map_err(|e| anyhow!("Failed to set Ctrl+C handler: {}", e))?;

    println!("{} {}", "Downloading:".cyan(), url.yellow());
    ui::dimmed("Press Ctrl+C to cancel");

    let outcome = downloader.download(&url, |done, total| {
        ui::show_download_progress(done, total, "Downloading")
    });
    ui::clear_line();

    let outcome = outcome.context("Download failed, the partial file was removed")?;

    println!();
    ui::success("✓ Download complete!");
    println!("  {}", outcome.path.display().to_string().cyan());
    println!();

    Ok(())
}

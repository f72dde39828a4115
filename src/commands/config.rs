use crate::core::config::{Config, CONFIG_KEYS};
use anyhow::{Context, Result};
use colored::Colorize;

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("set", sub_matches)) => handle_set(sub_matches),
        Some(("get", sub_matches)) => handle_get(sub_matches),
        Some(("unset", sub_matches)) => handle_unset(sub_matches),
        Some(("reset", _)) => handle_reset(),
        Some(("path", _)) => {
            println!("{}", Config::get_config_path()?.display());
            Ok(())
        }
        _ => {
            println!("Use 'nvdu config --help' for more information.");
            Ok(())
        }
    }
}

fn handle_set(matches: &clap::ArgMatches) -> Result<()> {
    let key = matches
        .get_one::<String>("key")
        .context("Key argument is required")?;
    let value = matches
        .get_one::<String>("value")
        .context("Value argument is required")?;

    let mut config = Config::load()?;
    config.set_value(key, value)?;
    config.save()?;

    println!("{} {} = {}", "✓ Set".green(), key.cyan(), value.bold());
    Ok(())
}

fn handle_get(matches: &clap::ArgMatches) -> Result<()> {
    let config = Config::load()?;

    let keys: Vec<&str> = match matches.get_one::<String>("key") {
        Some(key) => vec![key.as_str()],
        None => CONFIG_KEYS.to_vec(),
    };

    for key in keys {
        match config.get_value(key)? {
            Some(value) => println!("{} = {}", key.cyan(), value.bold()),
            None => println!("{} = {}", key.cyan(), "(not set)".dimmed()),
        }
    }

    Ok(())
}

fn handle_unset(matches: &clap::ArgMatches) -> Result<()> {
    let key = matches
        .get_one::<String>("key")
        .context("Key argument is required")?;

    let mut config = Config::load()?;
    config.unset_value(key)?;
    config.save()?;

    println!("{} {}", "✓ Unset".green(), key.cyan());
    Ok(())
}

fn handle_reset() -> Result<()> {
    Config::default().save()?;
    println!("{}", "✓ Configuration reset to defaults".green());
    Ok(())
}

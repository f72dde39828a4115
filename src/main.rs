use anyhow::Result;
use colored::Colorize;

use nvdu::cli::build_cli;
use nvdu::commands;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let matches = build_cli().get_matches();

    nvdu::init_logging(matches.get_flag("verbose"));

    if matches.get_flag("version") {
        return commands::version();
    }

    match matches.subcommand() {
        Some(("check", sub_matches)) => commands::check(sub_matches),
        Some(("info", sub_matches)) => commands::info(sub_matches),
        Some(("classify", sub_matches)) => commands::info::execute_classify(sub_matches),
        Some(("config", sub_matches)) => commands::config::execute(sub_matches),
        Some(("completions", sub_matches)) => {
            let mut cli = build_cli();
            commands::completions::execute(sub_matches, &mut cli)
        }
        Some(("version", _)) => commands::version(),
        _ => {
            // Sin subcomando: comportamiento por defecto
            let default_matches = build_cli().get_matches_from(["nvdu", "check"]);
            match default_matches.subcommand() {
                Some((_, check_matches)) => commands::check(check_matches),
                None => Ok(()),
            }
        }
    }
}

use clap::{Arg, ArgAction, Command};

use crate::core::config::CONFIG_KEYS;

pub fn build_cli() -> Command {
    Command::new("nvdu")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Checks for a newer NVIDIA driver for this GPU")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('V')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Show debug logging")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("check")
                .about("Check for a newer driver and offer to download it (default)")
                .arg(
                    Arg::new("yes")
                        .short('y')
                        .long("yes")
                        .help("Download without asking")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("notebook")
                        .long("notebook")
                        .help("Treat this machine as a notebook")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("desktop"),
                )
                .arg(
                    Arg::new("desktop")
                        .long("desktop")
                        .help("Treat this machine as a desktop")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("current")
                        .long("current")
                        .value_name("VERSION")
                        .help("Installed driver version, instead of asking the driver"),
                ),
        )
        .subcommand(
            Command::new("info")
                .about("Show the detected GPU and the catalog filters it maps to"),
        )
        .subcommand(
            Command::new("classify")
                .about("Classify a device name without querying the GPU")
                .arg(
                    Arg::new("name")
                        .help("Device name, e.g. \"NVIDIA GeForce GTX 1060 6GB\"")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("notebook")
                        .long("notebook")
                        .help("Classify as a notebook GPU")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Manage configuration (use 'nvdu config --help' for subcommands)")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("set")
                        .about("Set a configuration value")
                        .arg(config_key_arg())
                        .arg(Arg::new("value").required(true).index(2)),
                )
                .subcommand(
                    Command::new("get")
                        .about("Show one or all configuration values")
                        .arg(config_key_arg().required(false)),
                )
                .subcommand(
                    Command::new("unset")
                        .about("Remove a configuration value")
                        .arg(config_key_arg()),
                )
                .subcommand(Command::new("reset").about("Restore default configuration"))
                .subcommand(Command::new("path").about("Show the configuration file path")),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Shell type (bash, zsh, fish, powershell, elvish)")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("version").about("Shows version information"))
}

fn config_key_arg() -> Arg {
    Arg::new("key")
        .help("Configuration key")
        .required(true)
        .index(1)
        .value_parser(CONFIG_KEYS)
}

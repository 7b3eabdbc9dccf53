//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use plango_core::{config, logging};

mod commands;

#[derive(Parser)]
#[command(name = "plango")]
#[command(version)]
#[command(about = "PlanGo sign-in screen for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// On a successful login, leave the screen and print the email to stdout
    #[arg(long)]
    exit_on_login: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Validate credentials without opening the screen
    Check {
        /// Email to validate
        #[arg(long, default_value = "")]
        email: String,

        /// Password to validate
        #[arg(long, conflicts_with = "password_stdin")]
        password: Option<String>,

        /// Read the password from the first line of stdin
        #[arg(long)]
        password_stdin: bool,

        /// Print the resulting notice as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    dispatch(cli)
}

fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        command,
        exit_on_login,
    } = cli;

    match command {
        None => {
            let config = config::Config::load().context("load config")?;
            let _log_guard =
                logging::init_file_logging(&config::paths::logs_dir(), &config.log_level)?;
            tracing::info!(config = %config::paths::config_path().display(), "starting");
            commands::login::run(&config, exit_on_login)
        }
        Some(Commands::Check {
            email,
            password,
            password_stdin,
            json,
        }) => {
            let password = if password_stdin {
                commands::check::read_password_line(std::io::stdin().lock())?
            } else {
                password.unwrap_or_default()
            };
            commands::check::run(&email, &password, json)
        }
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}

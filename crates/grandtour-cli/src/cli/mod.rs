//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use grandtour_core::config::{self, Config};
use grandtour_core::logging;
use tracing::debug;

mod commands;

#[derive(Parser)]
#[command(name = "grandtour")]
#[command(version)]
#[command(about = "Grand Tour Sochi: role-based navigation for the client app")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the interactive app (default)
    Tui,

    /// Show which view every role lands on
    Routes {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List registered views and their contracts
    Views {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Run a sign-in headlessly and print where it lands
    Simulate(commands::simulate::SimulateArgs),

    /// Print the illustrative architecture overview
    Diagram {
        /// Print JSON instead of text
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
    /// Print the effective configuration
    Show,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // default to the interactive app
    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            let (config, _log_guard) = load_with_logging()?;
            commands::tui::run(&config)
        }
        Commands::Routes { json } => commands::routes::routes(json),
        Commands::Views { json } => commands::routes::views(json),
        Commands::Simulate(args) => {
            let (config, _log_guard) = load_with_logging()?;
            commands::simulate::run(&args, &config)
        }
        Commands::Diagram { json } => commands::diagram::run(json),
        // Config commands must work even when the file is broken.
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Show => commands::config::show(),
        },
    }
}

/// Loads the config and starts file logging. Logging is best effort: a
/// read-only home must not stop the app.
fn load_with_logging() -> Result<(Config, Option<logging::WorkerGuard>)> {
    let config = Config::load().context("load config")?;
    let guard = match logging::init(&config::paths::logs_dir(), &config.log_level) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {e:#}");
            None
        }
    };
    debug!(home = %config::paths::grandtour_home().display(), "config loaded");
    Ok((config, guard))
}

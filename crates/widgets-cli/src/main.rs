use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use widgets_infrastructure::ConfigService;

mod commands;
mod display;
mod helper;
mod input;
mod logging;

#[derive(Parser)]
#[command(name = "widgets")]
#[command(about = "Widgets - a personal terminal dashboard", long_about = None)]
struct Cli {
    /// Configuration file (defaults to <config dir>/widgets/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Session to open
    #[arg(long, global = true, default_value = "default")]
    session: String,

    /// Write logs to stderr instead of the log file
    #[arg(long, global = true)]
    log_stderr: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive dashboard (default)
    Repl {
        /// Snapshot file to import before the first render
        #[arg(long)]
        import: Option<PathBuf>,
    },
    /// Import a snapshot and print the dashboard once
    Render {
        /// Snapshot file to import
        #[arg(long)]
        import: PathBuf,
        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the configuration file path
    Path,
    /// Print the effective configuration
    Show,
    /// Write the default configuration if none exists
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_service = match &cli.config {
        Some(path) => ConfigService::with_path(path.clone()),
        None => ConfigService::new()?,
    };

    let command = cli.command.unwrap_or(Commands::Repl { import: None });
    if let Commands::Config { action } = &command {
        return match action {
            ConfigAction::Path => commands::config::path(&config_service),
            ConfigAction::Show => commands::config::show(&config_service),
            ConfigAction::Init => commands::config::init(&config_service),
        };
    }

    let config = config_service.load()?;
    let _log_guard = logging::init(&config.logging, cli.log_stderr)?;
    tracing::info!(session = %cli.session, "Starting widgets");

    let usecase = commands::build_usecase(&config);
    match command {
        Commands::Repl { import } => {
            commands::repl::run(&usecase, &config.dashboard, cli.session, import).await?
        }
        Commands::Render { import, json } => {
            commands::render::run(&usecase, &cli.session, import, json).await?
        }
        Commands::Config { .. } => {}
    }

    Ok(())
}

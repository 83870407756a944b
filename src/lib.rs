//! rTimesheet library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod sheet;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Template { .. } => cli::commands::template::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Projects { .. } => cli::commands::projects::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Check => cli::commands::check::handle(cfg),
    }
}

/// Install the tracing subscriber: stderr by default, the configured log
/// file (without colours) when one is set. `RUST_LOG` wins unless
/// `debug` is on.
pub fn init_logging(cfg: &Config) -> AppResult<()> {
    let filter = if cfg.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    // a subscriber may already be installed (e.g. by a test harness)
    match &cfg.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(expand_tilde(path))?;
            let _ = builder.with_ansi(false).with_writer(Mutex::new(file)).try_init();
        }
        None => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
    }

    Ok(())
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once; `init` must work before a config file exists
    let mut cfg = match &cli.command {
        Commands::Init => Config::default(),
        _ => Config::load(cli.config.as_deref().map(Path::new))?,
    };

    // 3️⃣ command-line overrides
    if let Some(wb) = &cli.workbook {
        cfg.workbook = wb.clone();
    }
    if let Some(out) = &cli.output {
        cfg.output = Some(out.clone());
    }
    if cli.debug {
        cfg.debug = true;
    }

    init_logging(&cfg)?;
    tracing::debug!(workbook = %cfg.workbook, output = %cfg.output_path(), "configuration loaded");

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}

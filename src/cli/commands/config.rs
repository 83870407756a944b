use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::PathBuf;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = &cli.command
    {
        let path = cli
            .config
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(Config::config_file);

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", ConfigLogic::render(cfg)?);
        }

        if *edit_config {
            if !path.exists() {
                Config::init_all(Some(&path))?;
            }
            let used = ConfigLogic::edit(&path, editor.as_deref())?;
            success(format!("Configuration file edited successfully using '{used}'"));
        }

        if !*print_config && !*edit_config {
            info("Nothing to do: use --print or --edit.");
        }
    }

    Ok(())
}

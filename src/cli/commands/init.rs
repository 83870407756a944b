use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::PathBuf;

/// Handle the `init` command
///
/// Creates the config directory and writes the default configuration,
/// leaving an existing file untouched.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let target = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);
    let existed = target.exists();

    let path = Config::init_all(Some(&target))?;

    println!("⚙️  Initializing rTimesheet…");
    println!("📄 Config file : {}", path.display());

    if existed {
        info("Configuration file already present, left unchanged.");
    } else {
        success("Default configuration written.");
    }

    println!("🎉 rTimesheet initialization completed!");
    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::template::TemplateLogic;
use crate::errors::AppResult;
use crate::export::ensure_writable;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Template { file, year, force } = cmd {
        let path = expand_tilde(file);
        ensure_writable(&path, *force)?;
        TemplateLogic::create(&path, *year, cfg)?;
        success(format!("Timesheet template for {year} written to {}", path.display()));
    }
    Ok(())
}

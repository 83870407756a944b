use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::load_with_progress;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::utils::date::parse_month;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        force,
    } = cmd
    {
        let month = month
            .as_deref()
            .map(|m| parse_month(m).ok_or_else(|| AppError::InvalidMonth(m.to_string())))
            .transpose()?;

        let loaded = load_with_progress(cfg)?;
        ExportLogic::export(&loaded.year, *format, file, month, *force)?;
    }
    Ok(())
}

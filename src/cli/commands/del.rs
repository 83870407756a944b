use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::core::session::{load_with_progress, save_months};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::date;
use chrono::Datelike;
use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        date: date_str,
        pair,
        yes,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;

        let prompt = if let Some(p) = pair {
            format!("Delete entry #{} for {}?", p, d)
        } else {
            format!("Delete ALL entries for {}?", d)
        };

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut loaded = load_with_progress(cfg)?;
        let removed = DeleteLogic::apply(&mut loaded, d, *pair)?;
        save_months(&mut loaded, cfg, &[d.month()])?;

        success(format!("{removed} entr{} for {d} deleted.", if removed == 1 { "y" } else { "ies" }));
        success(format!("Workbook saved to {}", cfg.output_path()));
    }

    Ok(())
}

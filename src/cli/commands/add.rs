use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, AddRequest};
use crate::core::session::{load_with_progress, save_months};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::{format_duration, parse_duration, parse_optional_time};
use chrono::Datelike;

/// Add or update an entry and save the workbook.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        pause,
        project,
        description,
        edit_pair,
        edit,
    } = cmd
    {
        //
        // 1. Parse arguments before touching the workbook
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let req = AddRequest {
            date: Some(d),
            start: parse_optional_time(start.as_ref())?,
            end: parse_optional_time(end.as_ref())?,
            pause: pause.as_deref().map(parse_duration).transpose()?,
            project: project.clone(),
            description: description.clone(),
            edit_pair: if *edit { *edit_pair } else { None },
        };

        //
        // 2. Load, apply, save
        //
        let mut loaded = load_with_progress(cfg)?;
        let entry = AddLogic::apply(&mut loaded, &req)?;
        save_months(&mut loaded, cfg, &[d.month()])?;

        if let Some(work) = entry.work() {
            let verb = if req.edit_pair.is_some() { "Updated" } else { "Added" };
            success(format!(
                "{verb} entry #{} on {}: {}–{} (net {})",
                entry.row_index + 1,
                entry.date_str(),
                work.start.format("%H:%M"),
                work.end.format("%H:%M"),
                format_duration(work.net()),
            ));
        }
        success(format!("Workbook saved to {}", cfg.output_path()));
    }

    Ok(())
}

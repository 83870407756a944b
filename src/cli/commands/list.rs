use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::{ListFilter, ListLogic};
use crate::core::session::load_with_progress;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { month, day } = cmd {
        let filter = resolve_filter(month.as_deref(), day.as_deref())?;
        let loaded = load_with_progress(cfg)?;

        let rows = ListLogic::select(&loaded.year, filter);
        if rows.is_empty() {
            info("No entries found.");
            return Ok(());
        }

        header(describe(filter));
        print!("{}", ListLogic::table(&rows).render());
    }
    Ok(())
}

fn resolve_filter(month: Option<&str>, day: Option<&str>) -> AppResult<ListFilter> {
    if let Some(d) = day {
        let d = date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?;
        return Ok(ListFilter::Day(d));
    }
    if let Some(m) = month {
        let m = date::parse_month(m).ok_or_else(|| AppError::InvalidMonth(m.to_string()))?;
        return Ok(ListFilter::Month(m));
    }
    Ok(ListFilter::All)
}

fn describe(filter: ListFilter) -> String {
    match filter {
        ListFilter::All => "All entries".to_string(),
        ListFilter::Month(m) => format!("Month {m:02}"),
        ListFilter::Day(d) => format!("Day {d}"),
    }
}

use crate::config::Config;
use crate::core::check::CheckLogic;
use crate::core::session::load_with_progress;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let loaded = load_with_progress(cfg)?;
    let report = CheckLogic::run(&loaded, cfg)?;

    if report.is_clean() {
        success(format!(
            "Round trip clean: {} entries, {} row(s) would be inserted, {} removed.",
            report.entries, report.rows_inserted, report.rows_removed
        ));
    } else {
        warning(format!("{} day(s) would change on save:", report.drift.len()));
        for line in &report.drift {
            println!("  - {line}");
        }
    }
    Ok(())
}

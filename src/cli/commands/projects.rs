use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::projects::ProjectsLogic;
use crate::core::session::load_with_progress;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Projects { search } = cmd {
        let loaded = load_with_progress(cfg)?;
        let table = ProjectsLogic::table(&loaded.projects, search.as_deref());

        if table.rows.is_empty() {
            info("No projects found.");
        } else {
            print!("{}", table.render());
        }
    }
    Ok(())
}

use crate::models::ProjectDirectory;
use crate::utils::table::Table;

pub struct ProjectsLogic;

impl ProjectsLogic {
    /// Table of projects matching `search` (all when `None`), ordered by code.
    pub fn table(projects: &ProjectDirectory, search: Option<&str>) -> Table {
        let mut table = Table::new(&["Code", "Project", "Customer"]);
        for p in projects.search(search.unwrap_or("")) {
            table.add_row(vec![p.code.clone(), p.name.clone(), p.customer.clone()]);
        }
        table
    }
}

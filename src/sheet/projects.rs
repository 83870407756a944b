//! Project number sheet.

use crate::models::{Project, ProjectDirectory};
use tracing::debug;

/// Build the project directory from the rows of the lookup sheet.
///
/// Columns: code, project name, customer. Rows with fewer than three
/// populated leading cells are ignored; later rows override earlier ones.
pub fn load_projects(rows: &[Vec<String>], header_rows: usize) -> ProjectDirectory {
    let mut dir = ProjectDirectory::default();

    for (i, row) in rows.iter().enumerate().skip(header_rows) {
        let leading: Vec<&str> = row.iter().take(3).map(|c| c.trim()).collect();
        if leading.len() < 3 || leading.iter().any(|c| c.is_empty()) {
            debug!(row = i + 1, "skipping project row");
            continue;
        }

        dir.insert(Project {
            code: leading[0].to_string(),
            name: leading[1].to_string(),
            customer: leading[2].to_string(),
        });
    }

    dir
}

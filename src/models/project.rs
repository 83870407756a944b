use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub code: String,
    pub name: String,
    pub customer: String,
}

/// Project lookup tables read from the project-number sheet.
///
/// The same `Project` is stored under its code, its name and its customer;
/// a later row with the same key replaces an earlier one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectDirectory {
    pub by_code: BTreeMap<String, Project>,
    pub by_name: BTreeMap<String, Project>,
    pub by_customer: BTreeMap<String, Project>,
}

impl ProjectDirectory {
    pub fn insert(&mut self, project: Project) {
        self.by_code.insert(project.code.clone(), project.clone());
        self.by_name.insert(project.name.clone(), project.clone());
        self.by_customer.insert(project.customer.clone(), project);
    }

    pub fn lookup_code(&self, code: &str) -> Option<&Project> {
        self.by_code.get(code.trim())
    }

    /// Case-insensitive substring match on code, name or customer.
    pub fn search(&self, term: &str) -> Vec<&Project> {
        let needle = term.trim().to_lowercase();
        self.by_code
            .values()
            .filter(|p| {
                needle.is_empty()
                    || p.code.to_lowercase().contains(&needle)
                    || p.name.to_lowercase().contains(&needle)
                    || p.customer.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

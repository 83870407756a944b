use crate::errors::{AppError, AppResult};
use crate::sheet::{OverviewLayout, SheetLayout};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Runtime configuration.
///
/// Loaded once by `run()` and handed down by reference; the sheet code only
/// ever sees the [`SheetLayout`] derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_workbook")]
    pub workbook: String,
    /// Where `add`/`del` save to. `None` overwrites the input workbook.
    #[serde(default)]
    pub output: Option<String>,
    /// Number of header rows before the first day row of a month sheet.
    #[serde(default = "default_start_row")]
    pub start_row: u32,
    #[serde(default)]
    pub col_date: u32,
    #[serde(default = "default_col_start")]
    pub col_start: u32,
    #[serde(default = "default_col_end")]
    pub col_end: u32,
    #[serde(default = "default_col_pause")]
    pub col_pause: u32,
    #[serde(default = "default_projects_sheet")]
    pub projects_sheet: String,
    #[serde(default = "default_projects_header_rows")]
    pub projects_header_rows: usize,
    #[serde(default = "default_overview_sheet")]
    pub overview_sheet: String,
    #[serde(default)]
    pub log_file: Option<String>,
    #[serde(default)]
    pub debug: bool,
}

fn default_workbook() -> String {
    "timesheet.xlsx".to_string()
}
fn default_start_row() -> u32 {
    6
}
fn default_col_start() -> u32 {
    2
}
fn default_col_end() -> u32 {
    3
}
fn default_col_pause() -> u32 {
    4
}
fn default_projects_sheet() -> String {
    "Projektnummern".to_string()
}
fn default_projects_header_rows() -> usize {
    4
}
fn default_overview_sheet() -> String {
    "Gesamt".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workbook: default_workbook(),
            output: None,
            start_row: default_start_row(),
            col_date: 0,
            col_start: default_col_start(),
            col_end: default_col_end(),
            col_pause: default_col_pause(),
            projects_sheet: default_projects_sheet(),
            projects_header_rows: default_projects_header_rows(),
            overview_sheet: default_overview_sheet(),
            log_file: None,
            debug: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rtimesheet")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    /// Load configuration from `path` (or the default location).
    /// A missing default file is not an error: defaults are used.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let explicit = path.is_some();
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            if explicit {
                return Err(AppError::Config(format!(
                    "configuration file not found: {}",
                    path.display()
                )));
            }
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write the default configuration file, unless one already exists.
    pub fn init_all(path: Option<&Path>) -> AppResult<PathBuf> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        if !path.exists() {
            let yaml = serde_yaml::to_string(&Config::default()).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(&path)?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(path)
    }

    /// Path the edited workbook is saved to.
    pub fn output_path(&self) -> &str {
        self.output.as_deref().unwrap_or(&self.workbook)
    }

    pub fn layout(&self) -> SheetLayout {
        SheetLayout {
            start_row: self.start_row,
            col_date: self.col_date,
            col_start: self.col_start,
            col_end: self.col_end,
            col_pause: self.col_pause,
            ..SheetLayout::default()
        }
    }

    pub fn overview(&self) -> OverviewLayout {
        OverviewLayout {
            sheet: self.overview_sheet.clone(),
            ..OverviewLayout::default()
        }
    }
}

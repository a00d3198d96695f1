use crate::core::table::Table;
use crate::errors::{AppError, AppResult};
use crate::models::{Style, TableBorder, WidthHint};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Rendering defaults read from the YAML configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_padding")]
    pub padding: usize,
    #[serde(default = "default_padding_char")]
    pub padding_char: char,
    #[serde(default)]
    pub borders: TableBorder,
    #[serde(default)]
    pub terminal_width: Option<usize>,
    #[serde(default)]
    pub column_widths: Vec<WidthHint>,
    #[serde(default = "default_separator_marker")]
    pub separator_marker: String,
    #[serde(default)]
    pub style: Style,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_padding() -> usize {
    1
}
fn default_padding_char() -> char {
    ' '
}
fn default_separator_marker() -> String {
    "---".to_string()
}
fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            padding: default_padding(),
            padding_char: default_padding_char(),
            borders: TableBorder::default(),
            terminal_width: None,
            column_widths: Vec::new(),
            separator_marker: default_separator_marker(),
            style: Style::default(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tablebuilder")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tablebuilder.yaml")
    }

    /// Load configuration from `path` (or the default location), falling
    /// back to defaults when the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.style.validate()?;

        debug!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    /// Write the configuration as YAML, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Copy the configured layout options onto `table`.
    pub fn apply_to(&self, table: &mut Table) {
        table.padding = self.padding;
        table.padding_char = self.padding_char;
        table.borders = self.borders.clone();
        table.style = self.style.clone();
        if self.terminal_width.is_some() {
            table.terminal_width = self.terminal_width;
        }
        if !self.column_widths.is_empty() {
            table.column_widths = self.column_widths.clone();
        }
    }
}

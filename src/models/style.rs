use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Named rendering presets. The layout engine never looks at these; they
/// are forwarded to the line sink untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TableStyle {
    Compact,
    Borderless,
    Unicode,
    #[default]
    Default,
}

/// Style descriptor handed to the line sink with every emitted line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    #[serde(default)]
    pub preset: TableStyle,
    #[serde(default)]
    pub fg: Option<String>,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub dim: bool,
}

impl Style {
    pub fn preset(preset: TableStyle) -> Self {
        Self {
            preset,
            ..Self::default()
        }
    }

    /// Reject colour names the console sink would not understand.
    pub fn validate(&self) -> AppResult<()> {
        match &self.fg {
            Some(name) if !KNOWN_COLOURS.contains(&name.to_lowercase().as_str()) => Err(
                AppError::InvalidStyle(format!("unknown colour '{name}'")),
            ),
            _ => Ok(()),
        }
    }
}

pub const KNOWN_COLOURS: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "purple", "cyan", "white",
];

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Requested width for one column.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum WidthHint {
    /// Size to the longest content in the column.
    #[default]
    Auto,
    /// Exact character count. `Fixed(0)` behaves like `Auto`.
    Fixed(usize),
    /// Percentage of the width left after borders (`25.0` = 25%).
    Percent(f64),
    /// Even share of whatever is left once the other columns are sized.
    Flexible,
}

impl WidthHint {
    /// Collapse `Fixed(0)` into `Auto` and reject unusable percentages.
    pub fn normalized(self) -> AppResult<Self> {
        match self {
            WidthHint::Fixed(0) => Ok(WidthHint::Auto),
            WidthHint::Percent(p) if !p.is_finite() || p < 0.0 => {
                Err(AppError::InvalidWidthHint(format!("{p}%")))
            }
            other => Ok(other),
        }
    }

    /// Parse a comma separated list such as `0,35,*,25%`.
    pub fn parse_list(list: &str) -> AppResult<Vec<Self>> {
        list.split(',')
            .filter(|s| !s.trim().is_empty())
            .map(str::parse)
            .collect()
    }
}

impl FromStr for WidthHint {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let hint = match s.to_lowercase().as_str() {
            "auto" => WidthHint::Auto,
            "*" | "flex" | "none" => WidthHint::Flexible,
            v if v.ends_with('%') => v[..v.len() - 1]
                .trim()
                .parse::<f64>()
                .map(WidthHint::Percent)
                .map_err(|_| AppError::InvalidWidthHint(s.to_string()))?,
            v => v
                .parse::<usize>()
                .map(WidthHint::Fixed)
                .map_err(|_| AppError::InvalidWidthHint(s.to_string()))?,
        };
        hint.normalized()
    }
}

impl fmt::Display for WidthHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidthHint::Auto => write!(f, "auto"),
            WidthHint::Fixed(n) => write!(f, "{n}"),
            WidthHint::Percent(p) => write!(f, "{p}%"),
            WidthHint::Flexible => write!(f, "*"),
        }
    }
}

impl Serialize for WidthHint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WidthHint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(usize),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Int(n) => WidthHint::Fixed(n)
                .normalized()
                .map_err(serde::de::Error::custom),
            Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

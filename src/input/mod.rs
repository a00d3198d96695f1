//! Loading table data from CSV or JSON sources.

mod from_csv;
mod from_json;

use crate::core::table::Table;
use crate::errors::AppResult;
use crate::models::{Cell, Row};
use clap::ValueEnum;
use std::io::Read;

pub use from_csv::load_csv;
pub use from_json::load_json;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Csv => "csv",
            InputFormat::Json => "json",
        }
    }
}

/// Headers and rows read from an input source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableData {
    pub headers: Vec<Cell>,
    pub rows: Vec<Row>,
}

impl From<TableData> for Table {
    fn from(data: TableData) -> Self {
        Table {
            headers: data.headers,
            rows: data.rows,
            ..Table::default()
        }
    }
}

/// Read `reader` in the given format. With `has_header` the first record is
/// used as the header row. A record equal to `separator_marker` becomes a
/// horizontal rule.
pub fn load<R: Read>(
    reader: R,
    format: InputFormat,
    has_header: bool,
    separator_marker: &str,
) -> AppResult<TableData> {
    match format {
        InputFormat::Csv => load_csv(reader, has_header, separator_marker),
        InputFormat::Json => load_json(reader, has_header, separator_marker),
    }
}

use super::TableData;
use crate::errors::{AppError, AppResult};
use crate::models::{Cell, Row};
use serde_json::Value;
use std::io::Read;
use tracing::debug;

/// Accepts either `[[...], [...]]` or `{"headers": [...], "rows": [[...]]}`.
///
/// Cells may be strings, numbers, booleans or `null` (blank). A row that is
/// `null` or the separator marker string is a horizontal rule.
pub fn load_json<R: Read>(
    reader: R,
    has_header: bool,
    separator_marker: &str,
) -> AppResult<TableData> {
    let value: Value = serde_json::from_reader(reader)?;

    let data = match value {
        Value::Array(items) => {
            let mut items = items.into_iter();
            let headers = if has_header {
                match items.next() {
                    Some(Value::Array(cells)) => json_cells(&cells)?,
                    Some(other) => {
                        return Err(AppError::Input(format!(
                            "header row must be an array, found {other}"
                        )));
                    }
                    None => Vec::new(),
                }
            } else {
                Vec::new()
            };
            let rows = items
                .map(|item| json_row(&item, separator_marker))
                .collect::<AppResult<Vec<_>>>()?;
            TableData { headers, rows }
        }
        Value::Object(mut map) => {
            let headers = match map.remove("headers") {
                Some(Value::Array(cells)) => json_cells(&cells)?,
                Some(Value::Null) | None => Vec::new(),
                Some(other) => {
                    return Err(AppError::Input(format!(
                        "'headers' must be an array, found {other}"
                    )));
                }
            };
            let rows = match map.remove("rows") {
                Some(Value::Array(items)) => items
                    .iter()
                    .map(|item| json_row(item, separator_marker))
                    .collect::<AppResult<Vec<_>>>()?,
                Some(Value::Null) | None => Vec::new(),
                Some(other) => {
                    return Err(AppError::Input(format!(
                        "'rows' must be an array, found {other}"
                    )));
                }
            };
            TableData { headers, rows }
        }
        other => {
            return Err(AppError::Input(format!(
                "expected an array of rows or an object with 'rows', found {other}"
            )));
        }
    };

    debug!(headers = data.headers.len(), rows = data.rows.len(), "json loaded");
    Ok(data)
}

fn json_row(value: &Value, separator_marker: &str) -> AppResult<Row> {
    match value {
        Value::Null => Ok(Row::Separator),
        Value::String(s) if s == separator_marker => Ok(Row::Separator),
        Value::Array(cells) => Ok(Row::Cells(json_cells(cells)?)),
        other => Err(AppError::Input(format!("row must be an array, found {other}"))),
    }
}

fn json_cells(values: &[Value]) -> AppResult<Vec<Cell>> {
    values.iter().map(json_cell).collect()
}

fn json_cell(value: &Value) -> AppResult<Cell> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(AppError::Input(format!(
            "cell must be a scalar value, found {other}"
        ))),
    }
}

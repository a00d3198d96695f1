use super::TableData;
use crate::errors::AppResult;
use crate::models::{Cell, Row};
use std::io::Read;
use tracing::debug;

/// Records may have any number of fields; empty fields become blank cells.
pub fn load_csv<R: Read>(
    reader: R,
    has_header: bool,
    separator_marker: &str,
) -> AppResult<TableData> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut data = TableData::default();
    for (n, record) in rdr.records().enumerate() {
        let record = record?;

        if n == 0 && has_header {
            data.headers = record.iter().map(to_cell).collect();
            continue;
        }

        if record.len() == 1 && record.get(0) == Some(separator_marker) {
            data.rows.push(Row::Separator);
        } else {
            data.rows.push(Row::Cells(record.iter().map(to_cell).collect()));
        }
    }

    debug!(headers = data.headers.len(), rows = data.rows.len(), "csv loaded");
    Ok(data)
}

fn to_cell(field: &str) -> Cell {
    (!field.is_empty()).then(|| field.to_string())
}

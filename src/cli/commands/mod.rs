pub mod config;
pub mod demo;
pub mod render;

use crate::core::table::Table;
use crate::errors::AppResult;
use crate::output::ConsoleSink;

/// Render `table` to stdout.
pub(crate) fn print_table(table: &Table, colour: bool) -> AppResult<()> {
    let mut sink = ConsoleSink::stdout(colour);
    table.render(&mut sink)
}

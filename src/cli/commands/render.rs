use crate::cli::commands::print_table;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::table::Table;
use crate::errors::{AppError, AppResult};
use crate::input;
use std::fs::File;
use std::io;
use tracing::debug;

/// Handle the `render` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Render {
        file,
        format,
        no_header,
        layout,
    } = cmd
    {
        let has_header = !*no_header;
        debug!(format = format.as_str(), has_header, "loading input");
        let data = match file {
            Some(path) => {
                let f = File::open(path).map_err(|e| {
                    AppError::Input(format!("cannot open {}: {e}", path.display()))
                })?;
                input::load(f, *format, has_header, &cfg.separator_marker)?
            }
            None => input::load(io::stdin().lock(), *format, has_header, &cfg.separator_marker)?,
        };

        let mut table = Table::from(data);
        cfg.apply_to(&mut table);
        layout.apply(&mut table)?;

        print_table(&table, cfg.color)?;
    }

    Ok(())
}

use crate::cli::commands::print_table;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::table::Table;
use crate::errors::AppResult;

/// Book catalogue used by `demo`.
pub fn sample_table() -> Table {
    let mut table = Table::new().with_headers(["ISBN", "Title", "Author"]);
    table.add_row(vec!["99921-58-10-7", "Divine Comedy", "Dante Alighieri"]);
    table.add_row(vec!["9971-5-0210-0", "A Tale of Two Cities", "Charles Dickens"]);
    table.add_separator();
    table.add_row(vec![
        "80-902734-1-6",
        "And Then There Were None Is A Really Long Title",
        "Agatha Christie",
    ]);
    table.add_row(vec!["960-425-059-0", "The Lord of the Rings", "J. R. R. Tolkien"]);
    table
}

/// Handle the `demo` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Demo { layout } = cmd {
        let mut table = sample_table();
        cfg.apply_to(&mut table);
        layout.apply(&mut table)?;
        print_table(&table, cfg.color)?;
    }
    Ok(())
}

#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;
use tablebuilder::{Row, Table, WidthHint};

pub fn tb() -> Command {
    cargo_bin_cmd!("tablebuilder")
}

/// Create a temporary file path inside the system temp dir and remove any existing file
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tablebuilder.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a fresh temp file and return its path
pub fn temp_file(name: &str, ext: &str, content: &str) -> String {
    let p = temp_path(name, ext);
    fs::write(&p, content).expect("write temp file");
    p
}

/// The book catalogue every render test starts from.
pub fn build_table() -> Table {
    let mut table = Table::new()
        .with_terminal_width(80)
        .with_headers(["ISBN", "Title", "Author"]);
    table.rows = vec![
        Row::from(vec!["99921-58-10-7", "Divine Comedy", "Dante Alighieri"]),
        Row::from(vec!["9971-5-0210-0", "A Tale of Two Cities", "Charles Dickens"]),
    ];
    table.rows.push(Row::Separator);
    table.rows.push(Row::from(vec![
        "80-902734-1-6",
        "And Then There Were None Is A Really Long Title",
        "Agatha Christie",
    ]));
    table.rows.push(Row::from(vec!["960-425-059-0", "The Lord of the Rings", "J. R. R. Tolkien"]));
    table
}

pub fn narrow_widths() -> Vec<WidthHint> {
    vec![WidthHint::Fixed(0), WidthHint::Fixed(35), WidthHint::Flexible]
}

pub const BASIC_RENDER: &str = concat!(
    "+=============+===============================================+================+\n",
    "| ISBN        | Title                                         | Author         |\n",
    "+=============+===============================================+================+\n",
    "| 99921-58-10 | Divine Comedy                                 | Dante          |\n",
    "| -7          |                                               | Alighieri      |\n",
    "| 9971-5-0210 | A Tale of Two Cities                          | Charles        |\n",
    "| -0          |                                               | Dickens        |\n",
    "+=============+===============================================+================+\n",
    "| 80-902734-1 | And Then There Were None Is A Really Long     | Agatha         |\n",
    "| -6          | Title                                         | Christie       |\n",
    "| 960-425-059 | The Lord of the Rings                         | J. R. R.       |\n",
    "| -0          |                                               | Tolkien        |\n",
    "+=============+===============================================+================+"
);

pub const COLUMN_WIDTHS_RENDER: &str = concat!(
    "+===============+=====================================+========================+\n",
    "| ISBN          | Title                               | Author                 |\n",
    "+===============+=====================================+========================+\n",
    "| 99921-58-10-7 | Divine Comedy                       | Dante Alighieri        |\n",
    "| 9971-5-0210-0 | A Tale of Two Cities                | Charles Dickens        |\n",
    "+===============+=====================================+========================+\n",
    "| 80-902734-1-6 | And Then There Were None Is A       | Agatha Christie        |\n",
    "|               | Really Long Title                   |                        |\n",
    "| 960-425-059-0 | The Lord of the Rings               | J. R. R. Tolkien       |\n",
    "+===============+=====================================+========================+"
);

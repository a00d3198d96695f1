use crate::core::table::Table;
use crate::errors::AppResult;
use crate::input::InputFormat;
use crate::models::{TableStyle, WidthHint};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for tablebuilder
#[derive(Parser)]
#[command(
    name = "tablebuilder",
    version = env!("CARGO_PKG_VERSION"),
    about = "Render CSV or JSON data as a wrapped, bordered text table",
    long_about = None
)]
pub struct Cli {
    /// Use a different configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase diagnostic output on stderr (-v debug, -vv trace)
    #[arg(global = true, short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable ANSI styling of the output
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a CSV or JSON file (stdin when FILE is omitted)
    Render {
        /// Input file
        file: Option<PathBuf>,

        /// Input format
        #[arg(long, value_enum, default_value = "csv")]
        format: InputFormat,

        /// Treat the first record as data instead of headers
        #[arg(long = "no-header")]
        no_header: bool,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Render a small built-in book catalogue
    Demo {
        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Print or create the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a configuration file with default values")]
        init: bool,

        #[arg(long, short = 'f', requires = "init", help = "Overwrite an existing file")]
        force: bool,
    },
}

/// Layout options shared by the rendering commands. Anything left unset
/// keeps the value from the configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct LayoutArgs {
    /// Column width hints, comma separated: 0/auto, N, N%, * (flexible)
    #[arg(long, value_name = "LIST")]
    pub widths: Option<String>,

    /// Total width budget (defaults to the terminal width)
    #[arg(long, value_name = "N")]
    pub width: Option<usize>,

    /// Padding characters on each side of a column separator
    #[arg(long, value_name = "N")]
    pub padding: Option<usize>,

    /// Character used for padding and blank fill
    #[arg(long = "padding-char", value_name = "C")]
    pub padding_char: Option<char>,

    /// Character where rules and separators cross (empty to blank)
    #[arg(long, value_name = "C")]
    pub crossing: Option<String>,

    /// Character for horizontal rules (empty to disable rules)
    #[arg(long, value_name = "C")]
    pub horizontal: Option<String>,

    /// Character between columns (empty for plain spacing)
    #[arg(long, value_name = "C")]
    pub vertical: Option<String>,

    /// Style preset forwarded to the output
    #[arg(long, value_enum)]
    pub style: Option<TableStyle>,

    /// Foreground colour (black, red, green, yellow, blue, purple, cyan, white)
    #[arg(long, value_name = "COLOUR")]
    pub fg: Option<String>,

    /// Bold output
    #[arg(long)]
    pub bold: bool,
}

impl LayoutArgs {
    /// Override `table` options with the ones given on the command line.
    pub fn apply(&self, table: &mut Table) -> AppResult<()> {
        if let Some(list) = &self.widths {
            table.column_widths = WidthHint::parse_list(list)?;
        }
        if let Some(width) = self.width {
            table.terminal_width = Some(width);
        }
        if let Some(padding) = self.padding {
            table.padding = padding;
        }
        if let Some(c) = self.padding_char {
            table.padding_char = c;
        }
        if let Some(c) = &self.crossing {
            table.borders.crossing_char = c.clone();
        }
        if let Some(c) = &self.horizontal {
            table.borders.horizontal_char = c.clone();
        }
        if let Some(c) = &self.vertical {
            table.borders.vertical_char = c.clone();
        }
        if let Some(preset) = self.style {
            table.style.preset = preset;
        }
        if let Some(fg) = &self.fg {
            table.style.fg = Some(fg.clone());
        }
        if self.bold {
            table.style.bold = true;
        }
        table.style.validate()
    }
}

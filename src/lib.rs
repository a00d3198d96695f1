//! tablebuilder library root.
//! Renders rows of text as a fixed-width table: column widths are
//! negotiated against a width budget, overflowing cells wrap onto extra
//! lines, and every finished line is handed to a [`LineSink`].

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod input;
pub mod models;
pub mod output;
pub mod ui;
pub mod utils;

pub use crate::core::table::Table;
pub use crate::core::widths::Layout;
pub use errors::{AppError, AppResult};
pub use models::{Cell, Row, Style, TableBorder, TableStyle, WidthHint};
pub use output::{ConsoleSink, LineSink};

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Render { .. } => cli::commands::render::handle(&cli.command, cfg),
        Commands::Demo { .. } => cli::commands::demo::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    utils::logging::init(cli.verbose);

    let mut cfg = Config::load(cli.config.as_deref())?;
    if cli.no_color {
        cfg.color = false;
    }

    dispatch(&cli, &cfg)
}

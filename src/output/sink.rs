use crate::errors::{AppError, AppResult};
use crate::models::Style;
use ansi_term::Colour;
use std::io::{self, Write};

/// Receives every finished line together with the table's style.
pub trait LineSink {
    fn write_line(&mut self, line: &str, style: &Style) -> AppResult<()>;
}

/// Capture lines in memory; the style is dropped.
impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &str, _style: &Style) -> AppResult<()> {
        self.push(line.to_string());
        Ok(())
    }
}

/// Writes lines to a terminal (or any writer), painting them with
/// `ansi_term` when colour output is enabled.
pub struct ConsoleSink<W: Write> {
    out: W,
    colour: bool,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout(colour: bool) -> Self {
        Self::new(io::stdout(), colour)
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W, colour: bool) -> Self {
        Self { out, colour }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> LineSink for ConsoleSink<W> {
    fn write_line(&mut self, line: &str, style: &Style) -> AppResult<()> {
        if self.colour {
            writeln!(self.out, "{}", ansi_style(style)?.paint(line))?;
        } else {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }
}

fn ansi_style(style: &Style) -> AppResult<ansi_term::Style> {
    let mut painted = match &style.fg {
        Some(name) => colour_by_name(name)?.normal(),
        None => ansi_term::Style::new(),
    };
    if style.bold {
        painted = painted.bold();
    }
    if style.dim {
        painted = painted.dimmed();
    }
    Ok(painted)
}

fn colour_by_name(name: &str) -> AppResult<Colour> {
    match name.to_lowercase().as_str() {
        "black" => Ok(Colour::Black),
        "red" => Ok(Colour::Red),
        "green" => Ok(Colour::Green),
        "yellow" => Ok(Colour::Yellow),
        "blue" => Ok(Colour::Blue),
        "purple" => Ok(Colour::Purple),
        "cyan" => Ok(Colour::Cyan),
        "white" => Ok(Colour::White),
        other => Err(AppError::InvalidStyle(format!("unknown colour '{other}'"))),
    }
}

//! The table itself: data, layout options and the render pipeline.

use crate::core::render::RowRenderer;
use crate::core::widths::{Layout, column_count, resolve_column_widths_and_borders};
use crate::errors::AppResult;
use crate::models::{Cell, Row, Style, TableBorder, WidthHint};
use crate::output::LineSink;
use crate::utils::terminal::terminal_width;
use tracing::debug;

/// A table of text rows rendered to fixed-width lines.
///
/// All fields are public and may be changed between renders; the layout is
/// resolved again on every call to [`Table::render`].
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub rows: Vec<Row>,
    pub column_widths: Vec<WidthHint>,
    pub headers: Vec<Cell>,
    pub style: Style,
    pub padding: usize,
    pub padding_char: char,
    pub borders: TableBorder,
    /// Explicit width budget; the current terminal width when `None`.
    pub terminal_width: Option<usize>,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            column_widths: Vec::new(),
            headers: Vec::new(),
            style: Style::default(),
            padding: 1,
            padding_char: ' ',
            borders: TableBorder::default(),
            terminal_width: None,
        }
    }
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(|h| Some(h.into())).collect();
        self
    }

    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_column_widths(mut self, hints: Vec<WidthHint>) -> Self {
        self.column_widths = hints;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_padding(mut self, padding: usize, padding_char: char) -> Self {
        self.padding = padding;
        self.padding_char = padding_char;
        self
    }

    pub fn with_borders(mut self, borders: TableBorder) -> Self {
        self.borders = borders;
        self
    }

    pub fn with_terminal_width(mut self, width: usize) -> Self {
        self.terminal_width = Some(width);
        self
    }

    pub fn add_row<R: Into<Row>>(&mut self, row: R) {
        self.rows.push(row.into());
    }

    pub fn add_separator(&mut self) {
        self.rows.push(Row::Separator);
    }

    /// Append a column after the current last one.
    ///
    /// `values` fill the data rows top to bottom (separators are skipped);
    /// leftover values start new rows, short rows are padded with blanks.
    pub fn add_column(&mut self, values: Vec<Cell>, header: Option<String>, hint: WidthHint) {
        let index = self.column_count();

        if header.is_some() || !self.headers.is_empty() {
            self.headers.resize(index, None);
            self.headers.push(header);
        }
        self.column_widths.resize(index, WidthHint::Auto);
        self.column_widths.push(hint);

        let mut values = values.into_iter();
        for row in self.rows.iter_mut().filter(|r| !r.is_separator()) {
            if let Row::Cells(cells) = row {
                cells.resize(index, None);
                cells.push(values.next().flatten());
            }
        }
        for value in values {
            let mut cells = vec![None; index];
            cells.push(value);
            self.rows.push(Row::Cells(cells));
        }
    }

    pub fn column_count(&self) -> usize {
        column_count(&self.headers, &self.rows)
    }

    /// Width budget used for layout.
    pub fn effective_width(&self) -> usize {
        self.terminal_width.unwrap_or_else(terminal_width)
    }

    pub fn layout(&self) -> AppResult<Layout> {
        resolve_column_widths_and_borders(
            &self.column_widths,
            &self.headers,
            &self.rows,
            self.padding,
            self.padding_char,
            &self.borders.vertical_char,
            self.effective_width(),
        )
    }

    /// Render every line into `sink`.
    ///
    /// Headers are framed by rules, data rows follow and a closing rule ends
    /// the table. Rules and separator rows are left out when the horizontal
    /// char is blank. A table with no columns emits nothing.
    pub fn render(&self, sink: &mut dyn LineSink) -> AppResult<()> {
        let layout = self.layout()?;
        if layout.column_count() == 0 {
            debug!("table has no columns, nothing to render");
            return Ok(());
        }

        let renderer = RowRenderer::new(&layout, &self.borders, self.padding_char);
        let rule = renderer.render_separator();
        let mut emitted = 0;

        if !self.headers.is_empty() {
            emitted += self.emit(sink, rule.iter().cloned())?;
            emitted += self.emit(sink, renderer.render_row(&Row::Cells(self.headers.clone())))?;
            emitted += self.emit(sink, rule.iter().cloned())?;
        }

        for row in &self.rows {
            if row.is_separator() && !self.borders.has_horizontal_rule() {
                continue;
            }
            emitted += self.emit(sink, renderer.render_row(row))?;
        }

        emitted += self.emit(sink, rule.iter().cloned())?;

        debug!(rows = self.rows.len(), lines = emitted, "table rendered");
        Ok(())
    }

    /// Render into memory, one entry per line.
    pub fn render_lines(&self) -> AppResult<Vec<String>> {
        let mut lines = Vec::new();
        self.render(&mut lines)?;
        Ok(lines)
    }

    pub fn render_to_string(&self) -> AppResult<String> {
        Ok(self.render_lines()?.join("\n"))
    }

    fn emit<I>(&self, sink: &mut dyn LineSink, lines: I) -> AppResult<usize>
    where
        I: IntoIterator<Item = String>,
    {
        let mut count = 0;
        for line in lines {
            sink.write_line(&line, &self.style)?;
            count += 1;
        }
        Ok(count)
    }
}

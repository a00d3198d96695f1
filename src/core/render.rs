//! Turns rows into output lines for a resolved [`Layout`].

use crate::core::widths::Layout;
use crate::core::wrap::{display_width, wrap_line};
use crate::models::{Cell, Row, TableBorder};
use std::iter::repeat_n;

pub struct RowRenderer<'a> {
    layout: &'a Layout,
    border: &'a TableBorder,
    padding_char: char,
}

impl<'a> RowRenderer<'a> {
    pub fn new(layout: &'a Layout, border: &'a TableBorder, padding_char: char) -> Self {
        Self {
            layout,
            border,
            padding_char,
        }
    }

    /// Lines for one row. A data row yields one line per wrapped fragment,
    /// a separator yields a single rule (or nothing when rules are off).
    pub fn render_row(&self, row: &Row) -> Vec<String> {
        match row {
            Row::Separator => self.render_separator().into_iter().collect(),
            Row::Cells(cells) => self.render_cells(cells.clone()),
        }
    }

    /// Horizontal rule. Vertical glyphs in the border segments become the
    /// crossing glyph, everything else the horizontal one.
    ///
    /// Returns `None` when the horizontal char is blank: there is no rule to
    /// draw, so [`Table`](crate::core::table::Table) drops the header rules,
    /// the closing rule and every separator row instead of emitting a line of
    /// padding.
    pub fn render_separator(&self) -> Option<String> {
        let horizontal = self.border.horizontal()?;
        let crossing = self.border.crossing().unwrap_or(horizontal);
        let vertical = self.border.vertical();

        let mut line = String::new();
        for (index, segment) in self.layout.borders.iter().enumerate() {
            line.extend(segment.chars().map(|c| {
                if Some(c) == vertical {
                    crossing
                } else {
                    horizontal
                }
            }));
            if let Some(&width) = self.layout.widths.get(index) {
                line.extend(repeat_n(horizontal, width));
            }
        }
        Some(line)
    }

    fn render_cells(&self, cells: Vec<Cell>) -> Vec<String> {
        let mut lines = Vec::new();
        let mut pending = Some(cells);

        // Each pass emits one line and queues what did not fit.
        while let Some(fragment) = pending.take() {
            let (line, overflow) = self.render_fragment(&fragment);
            lines.push(line);
            if overflow.iter().any(Option::is_some) {
                pending = Some(overflow);
            }
        }

        lines
    }

    fn render_fragment(&self, cells: &[Cell]) -> (String, Vec<Cell>) {
        let widths = &self.layout.widths;
        let borders = &self.layout.borders;

        let mut line = String::new();
        let mut overflow = Vec::with_capacity(widths.len());

        for (index, &width) in widths.iter().enumerate() {
            if let Some(segment) = borders.get(index) {
                line.push_str(segment);
            }

            let text = cells.get(index).and_then(|c| c.as_deref()).unwrap_or("");
            let (head, tail) = wrap_line(text, width);
            line.push_str(&head);
            line.extend(repeat_n(
                self.padding_char,
                width.saturating_sub(display_width(&head)),
            ));
            overflow.push(tail);
        }

        if let Some(last) = borders.get(widths.len()) {
            line.push_str(last);
        }

        (line, overflow)
    }
}

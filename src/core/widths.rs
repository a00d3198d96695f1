//! Column width negotiation.
//!
//! Every column gets a concrete width from its [`WidthHint`]:
//!
//! - `Auto` columns are sized to their longest content (header plus the first
//!   [`AUTO_SAMPLE_ROWS`] rows),
//! - `Fixed` columns keep their value, capped at the total width,
//! - `Percent` columns take a share of the width left after borders, with the
//!   same cap,
//! - `Flexible` columns split whatever is left evenly.
//!
//! If the result is wider than the terminal, columns are shrunk in the order
//! flexible, percentage, automatic and finally all columns, never below
//! [`MIN_COLUMN_WIDTH`].

use crate::core::borders::generate_border_columns;
use crate::core::wrap::display_width;
use crate::errors::AppResult;
use crate::models::{Cell, Row, WidthHint};
use tracing::{debug, trace};

/// Floor applied while shrinking columns to fit the terminal.
pub const MIN_COLUMN_WIDTH: usize = 7;

/// Number of leading rows inspected when sizing automatic columns.
pub const AUTO_SAMPLE_ROWS: usize = 20;

/// Resolved geometry for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub widths: Vec<usize>,
    pub borders: Vec<String>,
}

impl Layout {
    pub fn column_count(&self) -> usize {
        self.widths.len()
    }

    /// Width of a rendered line: all border segments plus all columns.
    pub fn total_width(&self) -> usize {
        border_length(&self.borders).saturating_add(sum_widths(&self.widths))
    }
}

/// Number of columns needed to show every header and every cell.
pub fn column_count(headers: &[Cell], rows: &[Row]) -> usize {
    rows.iter().map(Row::len).fold(headers.len(), usize::max)
}

/// Longest content at `index` across the header and the sampled rows.
/// Separators, short rows and absent cells count as zero.
pub fn resolve_max_width(index: usize, headers: &[Cell], rows: &[Row]) -> usize {
    let header = header_at(headers, index).map(display_width).unwrap_or(0);

    rows.iter()
        .take(AUTO_SAMPLE_ROWS)
        .filter_map(|row| row.cell(index))
        .map(display_width)
        .fold(header, usize::max)
}

/// Longest single word at `index` across the header and every row.
pub fn resolve_min_width(index: usize, headers: &[Cell], rows: &[Row]) -> usize {
    let header = header_at(headers, index).map(longest_word).unwrap_or(0);

    rows.iter()
        .filter_map(|row| row.cell(index))
        .map(longest_word)
        .fold(header, usize::max)
}

/// Shrink the columns listed in `index_list` until `current_width` reaches
/// `target_width` or none of them can shrink any further.
///
/// Each round takes the outstanding reduction divided evenly (rounded up)
/// from every column still above `min_width`, so a round may overshoot the
/// target. Returns the new total width.
pub fn reduce_by_list(
    current_width: usize,
    target_width: usize,
    column_widths: &mut [usize],
    index_list: &[usize],
    min_width: usize,
) -> usize {
    let mut current = current_width;

    while current > target_width {
        let shrinkable: Vec<usize> = index_list
            .iter()
            .copied()
            .filter(|&i| column_widths[i] > min_width)
            .collect();
        if shrinkable.is_empty() {
            break;
        }

        let intended = (current - target_width).div_ceil(shrinkable.len());
        for index in shrinkable {
            let step = intended.min(column_widths[index] - min_width);
            column_widths[index] -= step;
            current -= step;
        }
        trace!(current, target_width, "reduction round");
    }

    current
}

/// Assign a width to every column and build the border segments.
///
/// `hints` is read, never modified; missing hints default to `Auto` and
/// hints beyond the column count are ignored. Fails only on a percentage
/// hint that is negative or not finite.
pub fn resolve_column_widths_and_borders(
    hints: &[WidthHint],
    headers: &[Cell],
    rows: &[Row],
    padding: usize,
    padding_char: char,
    border_char: &str,
    terminal_width: usize,
) -> AppResult<Layout> {
    let count = column_count(headers, rows);
    let borders = generate_border_columns(count, padding, padding_char, border_char);
    let borders_len = border_length(&borders);
    let usable = i64::try_from(terminal_width)
        .unwrap_or(i64::MAX)
        .saturating_sub(i64::try_from(borders_len).unwrap_or(i64::MAX));

    let mut autos = Vec::new();
    let mut flexibles = Vec::new();
    let mut percents = Vec::new();
    let mut widths = vec![0usize; count];

    for index in 0..count {
        let hint = hints.get(index).copied().unwrap_or_default().normalized()?;
        match hint {
            WidthHint::Auto => autos.push(index),
            WidthHint::Flexible => flexibles.push(index),
            WidthHint::Percent(p) => percents.push((index, p)),
            WidthHint::Fixed(n) => widths[index] = n.min(terminal_width),
        }
    }

    for &index in &autos {
        widths[index] = resolve_max_width(index, headers, rows);
    }

    for &(index, percent) in &percents {
        let share = (usable.max(0) as f64 * percent / 100.0).floor() as usize;
        widths[index] = share.min(terminal_width);
    }

    if !flexibles.is_empty() {
        let assigned = i64::try_from(sum_widths(&widths)).unwrap_or(i64::MAX);
        let remaining = usable.saturating_sub(assigned);
        let share = if remaining > 0 {
            remaining as usize / flexibles.len()
        } else {
            0
        };

        if share < flexibles.len() {
            debug!(remaining, "no room for flexible columns, using minimum widths");
            for &index in &flexibles {
                widths[index] = resolve_min_width(index, headers, rows);
            }
        } else {
            for &index in &flexibles {
                widths[index] = share;
            }
        }
    }

    let percent_indexes: Vec<usize> = percents.iter().map(|&(i, _)| i).collect();
    let all: Vec<usize> = (0..count).collect();
    let mut current = borders_len.saturating_add(sum_widths(&widths));

    for target in [&flexibles, &percent_indexes, &autos, &all] {
        if current > terminal_width && !target.is_empty() {
            current = reduce_by_list(
                current,
                terminal_width,
                &mut widths,
                target,
                MIN_COLUMN_WIDTH,
            );
        }
    }

    debug!(?widths, total = current, terminal_width, "resolved column widths");
    Ok(Layout { widths, borders })
}

fn header_at(headers: &[Cell], index: usize) -> Option<&str> {
    headers.get(index).and_then(|h| h.as_deref())
}

fn longest_word(text: &str) -> usize {
    text.split(' ').map(display_width).max().unwrap_or(0)
}

fn border_length(borders: &[String]) -> usize {
    borders.iter().map(|b| display_width(b)).sum()
}

fn sum_widths(widths: &[usize]) -> usize {
    widths.iter().fold(0, |acc, w| acc.saturating_add(*w))
}

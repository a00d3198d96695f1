//! Word-boundary line wrapping for a single cell.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of `text` in terminal columns.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Split `text` into the part that fits in `width` columns and the rest.
///
/// Words are separated by single spaces. When the first word alone is wider
/// than `width` the text is cut mid-word; otherwise as many whole words as
/// fit (joined width `<= width`) go into the head and the remainder starts at
/// the first word that did not fit. An empty remainder is returned as `None`.
pub fn wrap_line(text: &str, width: usize) -> (String, Option<String>) {
    if display_width(text) <= width {
        return (text.to_string(), None);
    }

    let pieces: Vec<&str> = text.split(' ').collect();
    if display_width(pieces[0]) > width {
        let (head, tail) = split_at_width(text, width);
        return (head.to_string(), non_empty(tail));
    }

    let mut fitted = 1;
    let mut joined = display_width(pieces[0]);
    for piece in &pieces[1..] {
        let next = joined + 1 + display_width(piece);
        if next > width {
            break;
        }
        joined = next;
        fitted += 1;
    }

    let head = pieces[..fitted].join(" ");
    let tail = pieces[fitted..].join(" ");
    (head, non_empty(&tail))
}

/// Hard break at a character boundary. Always consumes at least one
/// character so callers looping on the remainder terminate.
fn split_at_width(text: &str, width: usize) -> (&str, &str) {
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        let w = ch.width().unwrap_or(0);
        if idx > 0 && used + w > width {
            return text.split_at(idx);
        }
        used += w;
    }
    (text, "")
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

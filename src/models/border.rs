use serde::{Deserialize, Serialize};

/// Characters used to draw rules and column separators.
///
/// Each field is independently blankable: an empty `vertical_char` turns
/// column separators into plain spacers, an empty `horizontal_char`
/// suppresses every horizontal rule. Only the first character of each
/// string is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableBorder {
    #[serde(default = "default_crossing_char")]
    pub crossing_char: String,
    #[serde(default = "default_horizontal_char")]
    pub horizontal_char: String,
    #[serde(default = "default_vertical_char")]
    pub vertical_char: String,
}

fn default_crossing_char() -> String {
    "+".to_string()
}
fn default_horizontal_char() -> String {
    "=".to_string()
}
fn default_vertical_char() -> String {
    "|".to_string()
}

impl Default for TableBorder {
    fn default() -> Self {
        Self {
            crossing_char: default_crossing_char(),
            horizontal_char: default_horizontal_char(),
            vertical_char: default_vertical_char(),
        }
    }
}

impl TableBorder {
    pub fn vertical(&self) -> Option<char> {
        self.vertical_char.chars().next()
    }

    pub fn horizontal(&self) -> Option<char> {
        self.horizontal_char.chars().next()
    }

    /// Crossing glyph, falling back to the horizontal rule when blank.
    pub fn crossing(&self) -> Option<char> {
        self.crossing_char.chars().next().or_else(|| self.horizontal())
    }

    /// False when rules and separator rows are switched off.
    pub fn has_horizontal_rule(&self) -> bool {
        self.horizontal().is_some()
    }
}

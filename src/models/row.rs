/// A single table cell. `None` renders as a padding-filled blank.
pub type Cell = Option<String>;

/// One table row: either data cells or a horizontal rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Cells(Vec<Cell>),
    Separator,
}

impl Row {
    /// Number of cells; a separator has none.
    pub fn len(&self) -> usize {
        match self {
            Row::Cells(cells) => cells.len(),
            Row::Separator => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, Row::Separator)
    }

    /// Cell at `index`, treating separators and short rows as absent.
    pub fn cell(&self, index: usize) -> Option<&str> {
        match self {
            Row::Cells(cells) => cells.get(index).and_then(|c| c.as_deref()),
            Row::Separator => None,
        }
    }
}

impl From<Vec<&str>> for Row {
    fn from(cells: Vec<&str>) -> Self {
        Row::Cells(cells.into_iter().map(|c| Some(c.to_string())).collect())
    }
}

impl From<Vec<Option<&str>>> for Row {
    fn from(cells: Vec<Option<&str>>) -> Self {
        Row::Cells(cells.into_iter().map(|c| c.map(str::to_string)).collect())
    }
}

impl From<Vec<String>> for Row {
    fn from(cells: Vec<String>) -> Self {
        Row::Cells(cells.into_iter().map(Some).collect())
    }
}

impl From<Vec<Cell>> for Row {
    fn from(cells: Vec<Cell>) -> Self {
        Row::Cells(cells)
    }
}

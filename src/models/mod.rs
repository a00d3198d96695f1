pub mod border;
pub mod row;
pub mod style;
pub mod width_hint;

pub use border::TableBorder;
pub use row::{Cell, Row};
pub use style::{Style, TableStyle};
pub use width_hint::WidthHint;

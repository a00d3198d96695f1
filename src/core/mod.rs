pub mod borders;
pub mod render;
pub mod table;
pub mod widths;
pub mod wrap;

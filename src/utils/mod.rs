pub mod logging;
pub mod terminal;

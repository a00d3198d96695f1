mod sink;

pub use sink::{ConsoleSink, LineSink};

pub mod palette_formatter;

pub use palette_formatter::{format_grouped, format_result};

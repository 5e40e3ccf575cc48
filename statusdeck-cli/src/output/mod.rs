//! Output formatting for CLI.

mod json;
mod text;

pub use json::{Attribution, JsonFormatter};
pub use text::TextFormatter;
#[cfg(test)]
mod tests;

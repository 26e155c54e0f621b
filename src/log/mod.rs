//! Parsing for metal-HUD performance log lines.

pub mod parse;
pub mod row;

pub use parse::{LineParser, MARKER};
pub use row::{FrameRow, ParsedLine};

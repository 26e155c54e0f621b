//! Output rendering: detail and summary CSV tables.

pub mod table;

pub use table::{write_detail_csv, write_summary_csv};

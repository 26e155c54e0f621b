use serde::Serialize;

/// A single detail row: one (interval, gpu time) pair of a metal-HUD line.
///
/// Only the first row of a line carries `frame_misses` and `memory_usage`;
/// the rest leave them empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameRow {
    pub frame_number: i64,
    pub frame_misses: String,
    pub memory_usage: String,
    pub present_interval: String,
    pub gpu_time: String,
}

/// Rows expanded from one log line, with one FPS value per row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedLine {
    pub rows: Vec<FrameRow>,
    pub fps: Vec<f64>,
}

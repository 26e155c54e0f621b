//! Aggregation model: fold parsed metal-HUD lines into whole-file totals.

use crate::Result;
use crate::log::{FrameRow, LineParser, MARKER, ParsedLine};

use anyhow::Context;

/// Everything collected from one input file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Accumulator {
    pub rows: Vec<FrameRow>,
    /// One FPS value per row, in row order.
    pub fps: Vec<f64>,
    /// Frame number of every emitted row (not deduplicated).
    pub frames: Vec<i64>,
    /// Lines that carried the marker.
    pub lines: usize,
}

impl Accumulator {
    fn absorb(mut self, parsed: ParsedLine) -> Self {
        self.frames.extend(parsed.rows.iter().map(|r| r.frame_number));
        self.rows.extend(parsed.rows);
        self.fps.extend(parsed.fps);
        self.lines += 1;
        self
    }
}

/// Parse every marker line of `text`; other lines are skipped.
///
/// `source` only labels errors (`source:line`).
pub fn accumulate(text: &str, source: &str) -> Result<Accumulator> {
    let parser = LineParser::new()?;

    text.lines()
        .enumerate()
        .map(|(lineno, line)| (lineno + 1, line.trim()))
        .filter(|(_, line)| line.contains(MARKER))
        .try_fold(Accumulator::default(), |acc, (lno, line)| -> Result<Accumulator> {
            let parsed = parser
                .parse_line(line)
                .with_context(|| format!("parse error at {}:{}", source, lno))?;
            Ok(acc.absorb(parsed))
        })
}

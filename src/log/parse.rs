use crate::Result;
use crate::log::row::{FrameRow, ParsedLine};

use anyhow::{Context, anyhow, bail};
use regex::Regex;
use tracing::debug;

/// Substring that marks a qualifying metal-HUD line.
pub const MARKER: &str = "metal-HUD";

/// Splits metal-HUD lines into detail rows.
///
/// Expected payload after the marker (comma-separated):
/// frame_number, frame_misses, memory_usage, interval_1, gpu_time_1, interval_2, gpu_time_2, ...
///
/// Example:
/// 2024-05-01 12:00:00.123 metal-HUD: 10, N, 512MB, 16.0, 2.1, 8.0, 1.0
pub struct LineParser {
    re: Regex,
}

impl LineParser {
    pub fn new() -> Result<Self> {
        // Everything after the first "metal-HUD:" is the payload.
        const PAYLOAD_RE: &str = r#"metal-HUD:(.*)$"#;
        Ok(Self {
            re: Regex::new(PAYLOAD_RE)?,
        })
    }

    /// Parse one trimmed line that already contains [`MARKER`].
    ///
    /// The first row keeps the miss/memory fields verbatim, every further
    /// pair gets empty strings there and the base frame number plus its
    /// pair index.
    pub fn parse_line(&self, line: &str) -> Result<ParsedLine> {
        let caps = self
            .re
            .captures(line)
            .ok_or_else(|| anyhow!("missing '{}:' payload in line: {:?}", MARKER, line))?;
        let payload = caps.get(1).map_or("", |m| m.as_str()).trim();

        let fields: Vec<&str> = payload.split(',').map(str::trim).collect();
        let [frame, misses, memory, pairs @ ..] = fields.as_slice() else {
            bail!(
                "expected at least 3 header fields (frame, misses, memory), got {}: {:?}",
                fields.len(),
                payload
            );
        };

        let base: i64 = frame
            .parse()
            .with_context(|| format!("bad frame number {:?}", frame))?;

        if pairs.len() % 2 != 0 {
            bail!(
                "frame {}: odd number of interval/gpu time fields ({})",
                base,
                pairs.len()
            );
        }

        let mut out = ParsedLine::default();
        for (i, pair) in pairs.chunks_exact(2).enumerate() {
            let (interval, gpu_time) = (pair[0], pair[1]);
            let interval_ms: f64 = interval
                .parse()
                .with_context(|| {
                    format!("frame {}: bad present interval {:?}", base, interval)
                })?;

            let frame_number = base
                .checked_add(i as i64)
                .ok_or_else(|| anyhow!("frame number overflow: {} + {}", base, i))?;

            let (frame_misses, memory_usage) = if i == 0 {
                (misses.to_string(), memory.to_string())
            } else {
                (String::new(), String::new())
            };

            out.fps.push(fps_from_interval(interval_ms));
            out.rows.push(FrameRow {
                frame_number,
                frame_misses,
                memory_usage,
                present_interval: interval.to_string(),
                gpu_time: gpu_time.to_string(),
            });
        }

        debug!(frame = base, rows = out.rows.len(), "parsed metal-HUD line");
        Ok(out)
    }
}

/// Frames per second for a present interval in milliseconds; 0 when the
/// interval is not positive.
pub fn fps_from_interval(interval_ms: f64) -> f64 {
    if interval_ms > 0.0 {
        1000.0 / interval_ms
    } else {
        0.0
    }
}

use crate::Result;
use crate::log::FrameRow;
use crate::stats::FpsSummary;

use anyhow::Context;
use csv::{Writer, WriterBuilder};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const DETAIL_HEADER: [&str; 5] = [
    "Frame Number",
    "Frame Misses",
    "Memory Usage",
    "Frame Present Interval",
    "Frame GPU Time",
];

pub const SUMMARY_HEADER: [&str; 2] = ["Metric", "Value"];

/// Write the per-pair detail table to `path` (truncating it).
pub fn write_detail_csv(path: &Path, rows: &[FrameRow]) -> Result<()> {
    let file = create(path)?;
    write_table(file, &DETAIL_HEADER, rows)
        .with_context(|| format!("write detail csv {}", path.display()))
}

/// Write the five-row FPS summary table to `path` (truncating it).
pub fn write_summary_csv(path: &Path, summary: &FpsSummary) -> Result<()> {
    let file = create(path)?;
    write_table(file, &SUMMARY_HEADER, &summary.records())
        .with_context(|| format!("write summary csv {}", path.display()))
}

fn create(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("create {}", path.display()))
}

// The header is written explicitly so an empty table still gets one.
fn write_table<W: Write, R: Serialize>(out: W, header: &[&str], records: &[R]) -> Result<()> {
    let mut wtr: Writer<W> = WriterBuilder::new().has_headers(false).from_writer(out);
    wtr.write_record(header)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render<R: Serialize>(header: &[&str], records: &[R]) -> String {
        let mut buf = Vec::new();
        write_table(&mut buf, header, records).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn detail_rows_keep_empty_fields() {
        let rows = vec![
            FrameRow {
                frame_number: 10,
                frame_misses: "N".into(),
                memory_usage: "512MB".into(),
                present_interval: "16.0".into(),
                gpu_time: "2.1".into(),
            },
            FrameRow {
                frame_number: 11,
                frame_misses: String::new(),
                memory_usage: String::new(),
                present_interval: "8.0".into(),
                gpu_time: "1.0".into(),
            },
        ];

        assert_eq!(
            render(&DETAIL_HEADER, &rows),
            "Frame Number,Frame Misses,Memory Usage,Frame Present Interval,Frame GPU Time\n\
             10,N,512MB,16.0,2.1\n\
             11,,,8.0,1.0\n"
        );
    }

    #[test]
    fn empty_table_still_has_header() {
        let rows: Vec<FrameRow> = Vec::new();
        assert_eq!(
            render(&DETAIL_HEADER, &rows),
            "Frame Number,Frame Misses,Memory Usage,Frame Present Interval,Frame GPU Time\n"
        );
    }

    #[test]
    fn summary_rows_in_order() {
        let summary = FpsSummary::from_values(&[50.0]).unwrap();
        assert_eq!(
            render(&SUMMARY_HEADER, &summary.records()),
            "Metric,Value\n\
             Min FPS,50.0\n\
             Avg FPS,50.0\n\
             Max FPS,50.0\n\
             1 Percentile FPS,50.0\n\
             5 Percentile FPS,50.0\n"
        );
    }
}

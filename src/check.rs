//! Consistency checks over the emitted frame-number sequence.
//!
//! Both checks are advisory: callers report the results and keep going.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

/// Entries shown at each end of a long frame list in a warning.
const PREVIEW_EDGE: usize = 5;

/// Frame numbers in `[min, max]` of `frames` that never appear, ascending.
pub fn missing_frames(frames: &[i64]) -> Vec<i64> {
    let seen: BTreeSet<i64> = frames.iter().copied().collect();
    let mut missing = Vec::new();
    let mut iter = seen.into_iter();
    let Some(mut prev) = iter.next() else {
        return missing;
    };
    for next in iter {
        missing.extend(prev + 1..next);
        prev = next;
    }
    missing
}

/// Frame numbers that appear more than once, ascending.
pub fn overlapping_frames(frames: &[i64]) -> Vec<i64> {
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for &f in frames {
        *counts.entry(f).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|&(_, n)| n > 1)
        .map(|(f, _)| f)
        .collect()
}

/// One-line rendering of a frame list for warnings: short lists verbatim,
/// long ones as a count with the first and last few entries.
pub fn preview(frames: &[i64]) -> String {
    if frames.len() <= 2 * PREVIEW_EDGE {
        return format!("{:?}", frames);
    }
    let mut out = format!("{} frames [", frames.len());
    for f in &frames[..PREVIEW_EDGE] {
        let _ = write!(out, "{}, ", f);
    }
    out.push_str("...");
    for f in &frames[frames.len() - PREVIEW_EDGE..] {
        let _ = write!(out, ", {}", f);
    }
    out.push(']');
    out
}

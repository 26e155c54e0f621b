//! FPS summary statistics.

use crate::Result;

use anyhow::bail;
use serde::Serialize;

/// One row of the summary table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRecord {
    pub metric: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FpsSummary {
    pub min: f64,
    pub avg: f64,
    pub max: f64,
    pub p1: f64,
    pub p5: f64,
}

impl FpsSummary {
    /// Summarize FPS samples. Fails on an empty sample set.
    pub fn from_values(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            bail!("no FPS samples: input contained no metal-HUD interval data");
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let avg = sorted.iter().sum::<f64>() / sorted.len() as f64;

        Ok(Self {
            min: sorted[0],
            avg,
            max: sorted[sorted.len() - 1],
            p1: percentile(&sorted, 1.0),
            p5: percentile(&sorted, 5.0),
        })
    }

    /// Summary rows in output order.
    pub fn records(&self) -> [SummaryRecord; 5] {
        [
            SummaryRecord {
                metric: "Min FPS",
                value: self.min,
            },
            SummaryRecord {
                metric: "Avg FPS",
                value: self.avg,
            },
            SummaryRecord {
                metric: "Max FPS",
                value: self.max,
            },
            SummaryRecord {
                metric: "1 Percentile FPS",
                value: self.p1,
            },
            SummaryRecord {
                metric: "5 Percentile FPS",
                value: self.p5,
            },
        ]
    }
}

/// Linear-interpolated percentile over ascending `sorted` values.
///
/// rank = p/100 * (n - 1); the result blends the two closest ranks.
/// Returns 0.0 for an empty slice.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let rank = (p / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn percentile_interpolates_between_ranks() {
        let sorted: Vec<f64> = (1..=101).map(f64::from).collect();
        assert!(close(percentile(&sorted, 1.0), 2.0));
        assert!(close(percentile(&sorted, 5.0), 6.0));

        let sorted = [10.0, 20.0, 30.0, 40.0];
        // rank = 0.05 * 3 = 0.15
        assert!(close(percentile(&sorted, 5.0), 11.5));
        assert!(close(percentile(&sorted, 100.0), 40.0));
        assert!(close(percentile(&sorted, 0.0), 10.0));
    }

    #[test]
    fn single_sample_summary() {
        let s = FpsSummary::from_values(&[60.0]).unwrap();
        assert_eq!(
            s,
            FpsSummary {
                min: 60.0,
                avg: 60.0,
                max: 60.0,
                p1: 60.0,
                p5: 60.0,
            }
        );
    }

    #[test]
    fn summary_of_two_samples() {
        let s = FpsSummary::from_values(&[125.0, 62.5]).unwrap();
        assert_eq!(s.min, 62.5);
        assert_eq!(s.max, 125.0);
        assert!(close(s.avg, 93.75));
        assert!(close(s.p1, 63.125));
        assert!(close(s.p5, 65.625));
    }

    // p5 <= avg only holds for typical data; a few slow outliers among
    // otherwise flat samples can push p5 above the mean.
    #[test]
    fn summary_is_ordered_on_typical_samples() {
        let values: Vec<f64> = (0..240)
            .map(|i| if i % 37 == 0 { 20.0 } else { 58.0 + (i % 5) as f64 })
            .collect();
        let s = FpsSummary::from_values(&values).unwrap();
        assert!(s.min <= s.p1);
        assert!(s.p1 <= s.p5);
        assert!(s.p5 <= s.avg);
        assert!(s.avg <= s.max);
    }

    #[test]
    fn empty_samples_fail() {
        assert!(FpsSummary::from_values(&[]).is_err());
    }

    #[test]
    fn records_keep_fixed_order() {
        let s = FpsSummary::from_values(&[30.0, 60.0]).unwrap();
        let metrics: Vec<&str> = s.records().iter().map(|r| r.metric).collect();
        assert_eq!(
            metrics,
            vec![
                "Min FPS",
                "Avg FPS",
                "Max FPS",
                "1 Percentile FPS",
                "5 Percentile FPS"
            ]
        );
    }
}

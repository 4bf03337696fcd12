use std::fmt;
use std::io;
use std::time::Duration;

use serde::Serialize;

use crate::error::Result;

/// Timing summary for one problem size.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeReport {
    pub size: usize,
    /// Mean trial duration in seconds.
    pub mean: f64,
    /// Sample standard deviation of the trial durations in seconds.
    pub stddev: f64,
    /// `mean / previous mean`; `None` for the first size of a sweep.
    pub ratio: Option<f64>,
    pub trials: Vec<Duration>,
    /// Fingerprint of the generated instance, equal across backends for the same seed.
    pub instance_fingerprint: u64,
}

impl fmt::Display for SizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "size={:<6} mean={:.6e}s stddev={:.6e}s ratio=",
            self.size, self.mean, self.stddev
        )?;
        match self.ratio {
            Some(r) => write!(f, "{:.3}", r),
            None => write!(f, "-"),
        }
    }
}

/// Mean and sample standard deviation (n - 1 denominator) in seconds.
pub fn mean_stddev(trials: &[Duration]) -> (f64, f64) {
    if trials.is_empty() {
        return (0.0, 0.0);
    }
    let secs: Vec<f64> = trials.iter().map(Duration::as_secs_f64).collect();
    let n = secs.len() as f64;
    let mean = secs.iter().sum::<f64>() / n;
    if secs.len() < 2 {
        return (mean, 0.0);
    }
    let var = secs.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (mean, var.sqrt())
}

#[derive(Serialize)]
struct CsvRecord {
    size: usize,
    mean_s: f64,
    stddev_s: f64,
    ratio: Option<f64>,
}

/// Writes `size,mean_s,stddev_s,ratio` records with a header row.
pub fn write_csv<W: io::Write>(reports: &[SizeReport], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for report in reports {
        wtr.serialize(CsvRecord {
            size: report.size,
            mean_s: report.mean,
            stddev_s: report.stddev,
            ratio: report.ratio,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn report(size: usize, ratio: Option<f64>) -> SizeReport {
        SizeReport {
            size,
            mean: 0.5,
            stddev: 0.25,
            ratio,
            trials: vec![],
            instance_fingerprint: 0,
        }
    }

    #[test]
    fn test_mean_stddev() {
        let trials = [1.0, 2.0, 3.0, 4.0].map(Duration::from_secs_f64);
        let (mean, stddev) = mean_stddev(&trials);
        assert_relative_eq!(mean, 2.5, epsilon = 1e-12);
        assert_relative_eq!(stddev, (5.0f64 / 3.0).sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn test_mean_stddev_single_trial() {
        let (mean, stddev) = mean_stddev(&[Duration::from_millis(10)]);
        assert_relative_eq!(mean, 0.01, epsilon = 1e-12);
        assert_eq!(stddev, 0.0);
    }

    #[test]
    fn test_display_first_size_has_no_ratio() {
        let line = report(50, None).to_string();
        assert!(line.starts_with("size=50"));
        assert!(line.ends_with("ratio=-"));
        assert!(report(100, Some(7.9)).to_string().ends_with("ratio=7.900"));
    }

    #[test]
    fn test_write_csv() {
        let mut out = Vec::new();
        write_csv(&[report(50, None), report(100, Some(8.0))], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "size,mean_s,stddev_s,ratio");
        assert_eq!(lines[1], "50,0.5,0.25,");
        assert_eq!(lines[2], "100,0.5,0.25,8.0");
    }
}

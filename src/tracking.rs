//! Tracking-Data Analysis
//!
//! Ingestion and preprocessing for positional tracking data: parsing
//! whitespace-formatted `t x y` rows, converting normalized coordinates to
//! pitch meters, differentiating position series with centered finite
//! differences, and integrating a power series over time to get the energy
//! spent in a run-up.
//!
//! Parsing works on any [`std::io::BufRead`], so the numerical routines
//! themselves never touch the filesystem; [`TrackingData::from_path`] is
//! the one convenience that opens a file.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::ballistics::{PITCH_LENGTH, PITCH_WIDTH};
use crate::quadrature::{self, NewtonCotes, QuadratureError};

/// Errors from tracking-data ingestion
#[derive(Debug, Error)]
pub enum TrackingError {
    /// The underlying reader failed
    #[error("failed to read tracking data")]
    Io(#[from] io::Error),
    /// A row could not be parsed as three numeric columns
    #[error("malformed tracking data at line {line}: {reason}")]
    Malformed {
        /// 1-based line number of the offending row
        line: usize,
        /// What was wrong with the row
        reason: String,
    },
}

/// Per-column time series parsed from a tracking file.
///
/// Row `i` of the source corresponds to `(t[i], x[i], y[i])`; positions are
/// in whatever coordinates the source used (typically normalized pitch
/// coordinates — see [`to_pitch_coords`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackingData {
    /// Sample times in seconds
    pub t: Vec<f64>,
    /// Horizontal positions
    pub x: Vec<f64>,
    /// Vertical positions
    pub y: Vec<f64>,
}

impl TrackingData {
    /// Parse whitespace-separated `t x y` rows from a reader.
    ///
    /// Blank lines are skipped; columns past the third are ignored. A row
    /// with fewer than three columns or a non-numeric field is a
    /// [`TrackingError::Malformed`].
    pub fn parse<R: BufRead>(reader: R) -> Result<Self, TrackingError> {
        let mut data = Self::default();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let mut fields = line.split_whitespace();
            let mut column = |name: &str| -> Result<f64, TrackingError> {
                let field = fields.next().ok_or_else(|| TrackingError::Malformed {
                    line: idx + 1,
                    reason: format!("missing {} column", name),
                })?;
                field.parse().map_err(|_| TrackingError::Malformed {
                    line: idx + 1,
                    reason: format!("invalid {} value {:?}", name, field),
                })
            };

            let t = column("time")?;
            let x = column("x")?;
            let y = column("y")?;
            data.t.push(t);
            data.x.push(x);
            data.y.push(y);
        }

        Ok(data)
    }

    /// Read and parse a tracking file from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TrackingError> {
        Self::parse(BufReader::new(File::open(path)?))
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.t.len()
    }

    /// `true` if no rows were parsed.
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Sample spacing taken from the first two rows, if there are two.
    pub fn dt(&self) -> Option<f64> {
        match self.t.as_slice() {
            [first, second, ..] => Some(second - first),
            _ => None,
        }
    }
}

/// Convert normalized tracking coordinates to pitch meters.
///
/// Scales by the pitch dimensions and re-centers on the pitch center, so
/// `(0.5, 0.5)` maps to `(0, 0)`.
pub fn to_pitch_coords(x_norm: &[f64], y_norm: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let x = x_norm
        .iter()
        .map(|&x| x * PITCH_LENGTH - 0.5 * PITCH_LENGTH)
        .collect();
    let y = y_norm
        .iter()
        .map(|&y| y * PITCH_WIDTH - 0.5 * PITCH_WIDTH)
        .collect();
    (x, y)
}

/// First derivative by second-order centered differences:
/// `v[i] = (s[i+1] - s[i-1]) / (2 dt)`.
///
/// The endpoints have no centered stencil, so the result has two fewer
/// samples than the input (and is empty for inputs shorter than 3).
pub fn central_velocity(series: &[f64], dt: f64) -> Vec<f64> {
    series
        .windows(3)
        .map(|w| (w[2] - w[0]) / (2.0 * dt))
        .collect()
}

/// Second derivative by centered differences:
/// `a[i] = (s[i+1] - 2 s[i] + s[i-1]) / dt²`.
///
/// Same endpoint convention as [`central_velocity`].
pub fn central_acceleration(series: &[f64], dt: f64) -> Vec<f64> {
    series
        .windows(3)
        .map(|w| (w[2] - 2.0 * w[1] + w[0]) / (dt * dt))
        .collect()
}

/// Per-sample Euclidean magnitude of a 2-component series.
pub fn magnitude(x: &[f64], y: &[f64]) -> Vec<f64> {
    x.iter().zip(y).map(|(&a, &b)| a.hypot(b)).collect()
}

/// Energy spent over a run, from a uniformly sampled power series.
///
/// Integrates power (W) over time with the chosen Newton-Cotes rule and
/// returns joules. The power samples typically come from evaluating a
/// fitted power-vs-speed curve at each recorded speed sample.
pub fn kick_energy(power: &[f64], dt: f64, rule: NewtonCotes) -> Result<f64, QuadratureError> {
    quadrature::integrate_samples(power, dt, rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_three_columns() {
        let input = "0.0 0.30 0.50\n0.2 0.32 0.51\n\n0.4 0.35 0.53\n";
        let data = TrackingData::parse(input.as_bytes()).unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data.t, vec![0.0, 0.2, 0.4]);
        assert_eq!(data.x, vec![0.30, 0.32, 0.35]);
        assert_eq!(data.y, vec![0.50, 0.51, 0.53]);
        assert_relative_eq!(data.dt().unwrap(), 0.2);
    }

    #[test]
    fn test_parse_ignores_extra_columns() {
        let input = "0.0 0.3 0.5 99.0 tag\n";
        let data = TrackingData::parse(input.as_bytes()).unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data.y, vec![0.5]);
    }

    #[test]
    fn test_parse_rejects_short_row() {
        let input = "0.0 0.3 0.5\n0.2 0.32\n";
        let err = TrackingData::parse(input.as_bytes()).unwrap_err();
        match err {
            TrackingError::Malformed { line, .. } => assert_eq!(line, 2),
            other => panic!("expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_non_numeric_field() {
        let input = "0.0 abc 0.5\n";
        assert!(matches!(
            TrackingData::parse(input.as_bytes()),
            Err(TrackingError::Malformed { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_empty_input() {
        let data = TrackingData::parse("".as_bytes()).unwrap();
        assert!(data.is_empty());
        assert_eq!(data.dt(), None);
    }

    #[test]
    fn test_pitch_coordinate_transform() {
        let (x, y) = to_pitch_coords(&[0.0, 0.5, 1.0], &[0.0, 0.5, 1.0]);
        assert_eq!(x, vec![-50.0, 0.0, 50.0]);
        assert_eq!(y, vec![-32.0, 0.0, 32.0]);
    }

    #[test]
    fn test_central_velocity_exact_for_quadratic() {
        // s(t) = t²: centered differences of a quadratic are exact,
        // s'(t) = 2t at the interior points.
        let dt = 0.2;
        let s: Vec<f64> = (0..6).map(|i| (i as f64 * dt).powi(2)).collect();
        let v = central_velocity(&s, dt);
        assert_eq!(v.len(), 4);
        for (i, &vi) in v.iter().enumerate() {
            let t = (i + 1) as f64 * dt;
            assert_relative_eq!(vi, 2.0 * t, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_central_acceleration_exact_for_quadratic() {
        let dt = 0.2;
        let s: Vec<f64> = (0..6).map(|i| 3.0 * (i as f64 * dt).powi(2)).collect();
        let a = central_acceleration(&s, dt);
        assert_eq!(a.len(), 4);
        for &ai in &a {
            assert_relative_eq!(ai, 6.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_derivatives_of_short_series_are_empty() {
        assert!(central_velocity(&[1.0, 2.0], 0.1).is_empty());
        assert!(central_acceleration(&[1.0], 0.1).is_empty());
    }

    #[test]
    fn test_magnitude() {
        let m = magnitude(&[3.0, 0.0, -5.0], &[4.0, 2.0, 12.0]);
        assert_eq!(m, vec![5.0, 2.0, 13.0]);
    }

    #[test]
    fn test_kick_energy_constant_power() {
        // 100 W for 1 s is 100 J under any rule
        let power = vec![100.0; 11];
        let e = kick_energy(&power, 0.1, NewtonCotes::Trapezoid).unwrap();
        assert_relative_eq!(e, 100.0, epsilon = 1e-9);

        let e = kick_energy(&power, 0.1, NewtonCotes::Simpson).unwrap();
        assert_relative_eq!(e, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_kick_energy_propagates_rule_errors() {
        let power = vec![1.0, 2.0, 3.0, 4.0]; // 3 segments, odd
        assert_eq!(
            kick_energy(&power, 0.1, NewtonCotes::Simpson),
            Err(QuadratureError::OddSegmentCount { segments: 3 })
        );
    }
}

//! Composite Newton-Cotes Quadrature
//!
//! Closed Newton-Cotes rules on uniformly spaced grids: the trapezoid rule,
//! Simpson's 1/3 rule, and Simpson's 3/8 rule. Each rule is expressed as a
//! weight vector `c_0 .. c_N` over the `N+1` grid nodes so that the integral
//! estimate is the dot product `Σ c_i f(x_i)`.
//!
//! Weight vectors depend only on the segment count and step size; they are
//! stateless and cheap to recompute, so nothing is cached here. Callers that
//! integrate many sample series on the same grid may hold on to a vector
//! from one of the `*_weights` functions themselves.
//!
//! # Example
//!
//! ```rust
//! use freekick::{integrate_fn, NewtonCotes};
//!
//! // ∫₀¹ x² dx = 1/3, exact under Simpson's rule
//! let est = integrate_fn(|x| x * x, 0.0, 1.0, 10, NewtonCotes::Simpson).unwrap();
//! assert!((est - 1.0 / 3.0).abs() < 1e-12);
//! ```

use log::warn;
use thiserror::Error;

/// Closed composite Newton-Cotes rules over a uniform grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewtonCotes {
    /// 2-point rule: piecewise linear, exact for degree ≤ 1
    Trapezoid,
    /// 3-point rule (Simpson's 1/3): exact for degree ≤ 3, needs an even
    /// segment count
    Simpson,
    /// 4-point rule (Simpson's 3/8): exact for degree ≤ 3 when the segment
    /// count is a multiple of 3; leftover segments fall back to a
    /// lower-order patch (see [`simpson38_weights`])
    Simpson38,
}

impl NewtonCotes {
    /// Select a rule by its point count: 2 (trapezoid), 3 (Simpson 1/3),
    /// or 4 (Simpson 3/8).
    pub fn from_points(points: u32) -> Result<Self, QuadratureError> {
        match points {
            2 => Ok(Self::Trapezoid),
            3 => Ok(Self::Simpson),
            4 => Ok(Self::Simpson38),
            _ => Err(QuadratureError::UnsupportedRule { points }),
        }
    }

    /// The number of points in one panel of the underlying simple rule.
    pub fn points(&self) -> u32 {
        match self {
            Self::Trapezoid => 2,
            Self::Simpson => 3,
            Self::Simpson38 => 4,
        }
    }
}

/// Errors from quadrature configuration
///
/// These are recoverable: the caller gets a typed error distinct from any
/// numeric result and can fall back to another rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuadratureError {
    /// Simpson's 1/3 rule pairs sub-intervals and needs an even segment count
    #[error("composite Simpson 1/3 needs an even segment count, got {segments}")]
    OddSegmentCount {
        /// The offending segment count
        segments: usize,
    },
    /// No Newton-Cotes formula with this point count is implemented
    #[error("Newton-Cotes {points}-point formula is not available")]
    UnsupportedRule {
        /// The requested point count
        points: u32,
    },
    /// Fewer than two samples were supplied, so there is no segment to
    /// integrate over
    #[error("integration needs at least two samples, got {samples}")]
    TooFewSamples {
        /// The number of samples supplied
        samples: usize,
    },
}

/// Composite trapezoid weights for `n` segments of width `h`.
///
/// Every node gets weight `h` except the two endpoints, which get `h/2`.
/// Valid for any `n >= 1`; a single segment is the simple trapezoid rule.
pub fn trapezoid_weights(n: usize, h: f64) -> Vec<f64> {
    let mut ci = vec![h; n + 1];
    ci[0] = 0.5 * h;
    ci[n] = 0.5 * h;
    ci
}

/// Composite Simpson 1/3 weights for `n` segments of width `h`.
///
/// Endpoints get `h/3`, interior odd-indexed nodes `4h/3`, interior
/// even-indexed nodes `2h/3`. The rule pairs sub-intervals, so `n` must be
/// even; an odd count is reported as [`QuadratureError::OddSegmentCount`].
pub fn simpson_weights(n: usize, h: f64) -> Result<Vec<f64>, QuadratureError> {
    if n % 2 != 0 {
        return Err(QuadratureError::OddSegmentCount { segments: n });
    }

    let mut ci = vec![0.0; n + 1];
    for (i, w) in ci.iter_mut().enumerate() {
        *w = if i % 2 == 1 { 4.0 * h / 3.0 } else { 2.0 * h / 3.0 };
    }
    ci[0] = h / 3.0;
    ci[n] = h / 3.0;
    Ok(ci)
}

/// Composite Simpson 3/8 weights for `n` segments of width `h`.
///
/// The grid is processed in consecutive groups of 3 segments (4 nodes) with
/// per-group weights `[3h/8, 9h/8, 9h/8, 3h/8]`; contributions from
/// adjacent groups add at shared boundary nodes.
///
/// When `n` is not a multiple of 3, the leftover 1 or 2 trailing segments
/// are patched with the trapezoid rule or Simpson's 1/3 rule respectively,
/// added onto whatever the main loop already put on the boundary node. The
/// patch lowers the local accuracy order, so it is reported through
/// `log::warn!` rather than silently applied.
pub fn simpson38_weights(n: usize, h: f64) -> Vec<f64> {
    let mut ci = vec![0.0; n + 1];

    let mut i = 0;
    while i + 3 <= n {
        ci[i] += 3.0 * h / 8.0;
        ci[i + 1] += 9.0 * h / 8.0;
        ci[i + 2] += 9.0 * h / 8.0;
        ci[i + 3] += 3.0 * h / 8.0;
        i += 3;
    }

    let leftover = n % 3;
    if leftover != 0 {
        let s = n - leftover;
        if leftover == 1 {
            warn!("Simpson 3/8: 1 leftover segment integrated with the trapezoid rule");
            ci[s] += h / 2.0;
            ci[s + 1] += h / 2.0;
        } else {
            warn!("Simpson 3/8: 2 leftover segments integrated with Simpson's 1/3 rule");
            ci[s] += h / 3.0;
            ci[s + 1] += 4.0 * h / 3.0;
            ci[s + 2] += h / 3.0;
        }
    }

    ci
}

/// Weight vector for `rule` over `n` segments of width `h`.
pub fn weights(rule: NewtonCotes, n: usize, h: f64) -> Result<Vec<f64>, QuadratureError> {
    match rule {
        NewtonCotes::Trapezoid => Ok(trapezoid_weights(n, h)),
        NewtonCotes::Simpson => simpson_weights(n, h),
        NewtonCotes::Simpson38 => Ok(simpson38_weights(n, h)),
    }
}

/// Integrate a uniformly sampled series.
///
/// `f` holds `N+1` samples at spacing `h`; the estimate is the dot product
/// of the rule's weight vector with the samples.
pub fn integrate_samples(f: &[f64], h: f64, rule: NewtonCotes) -> Result<f64, QuadratureError> {
    if f.len() < 2 {
        return Err(QuadratureError::TooFewSamples { samples: f.len() });
    }

    let n = f.len() - 1;
    let ci = weights(rule, n, h)?;
    Ok(ci.iter().zip(f).map(|(c, fi)| c * fi).sum())
}

/// Integrate a closed-form function over `[a, b]`.
///
/// Samples `func` on the uniform grid with `panels` segments and delegates
/// to [`integrate_samples`]; a convenience overload, not a separate
/// algorithm.
pub fn integrate_fn<F>(
    func: F,
    a: f64,
    b: f64,
    panels: usize,
    rule: NewtonCotes,
) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    if panels == 0 {
        return Err(QuadratureError::TooFewSamples { samples: 1 });
    }

    let h = (b - a) / panels as f64;
    let samples: Vec<f64> = (0..=panels).map(|i| func(a + i as f64 * h)).collect();
    integrate_samples(&samples, h, rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_trapezoid_four_samples() {
        // h * (a/2 + b + c + d/2)
        let f = [1.0, 4.0, 2.0, 3.0];
        let h = 0.25;
        let est = integrate_samples(&f, h, NewtonCotes::Trapezoid).unwrap();
        assert_relative_eq!(est, h * (0.5 + 4.0 + 2.0 + 1.5), epsilon = 1e-14);
    }

    #[test]
    fn test_weights_sum_to_interval_length() {
        // Integrating f(x) = 1 must return the interval length, so every
        // weight vector sums to n*h — including Simpson 3/8 with its
        // leftover patches.
        let h = 0.1;
        for n in 1..=12 {
            let sum: f64 = trapezoid_weights(n, h).iter().sum();
            assert_relative_eq!(sum, n as f64 * h, epsilon = 1e-12);

            if n % 2 == 0 {
                let sum: f64 = simpson_weights(n, h).unwrap().iter().sum();
                assert_relative_eq!(sum, n as f64 * h, epsilon = 1e-12);
            }

            let sum: f64 = simpson38_weights(n, h).iter().sum();
            assert_relative_eq!(sum, n as f64 * h, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_trapezoid_exact_for_linear() {
        let est = integrate_fn(|x| 3.0 * x - 2.0, 0.0, 4.0, 7, NewtonCotes::Trapezoid).unwrap();
        // ∫₀⁴ (3x - 2) dx = 24 - 8 = 16
        assert_relative_eq!(est, 16.0, epsilon = 1e-12);
    }

    #[test]
    fn test_simpson_exact_for_cubic() {
        let est =
            integrate_fn(|x| x * x * x - x * x, 0.0, 2.0, 10, NewtonCotes::Simpson).unwrap();
        // ∫₀² (x³ - x²) dx = 4 - 8/3
        assert_relative_eq!(est, 4.0 - 8.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_simpson38_exact_for_cubic() {
        // Segment count a multiple of 3: no patch, exact for cubics
        let est = integrate_fn(|x| x * x * x, 0.0, 3.0, 9, NewtonCotes::Simpson38).unwrap();
        assert_relative_eq!(est, 81.0 / 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_simpson38_two_leftover_patch_exact_for_cubic() {
        // n = 5 = 3 + 2: the trailing pair is patched with Simpson 1/3,
        // which is also exact for cubics. The patch adds onto the boundary
        // node already weighted by the 3/8 loop, so cubic exactness is the
        // real check that the additive bookkeeping is right.
        let f: Vec<f64> = (0..=5).map(|i| (i as f64).powi(3)).collect();
        let est = integrate_samples(&f, 1.0, NewtonCotes::Simpson38).unwrap();
        // ∫₀⁵ x³ dx = 5⁴/4
        assert_relative_eq!(est, 625.0 / 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_simpson38_one_leftover_patch_exact_for_linear() {
        // n = 4 = 3 + 1: the last segment is patched with the trapezoid
        // rule, so only degree-1 exactness holds across the whole interval.
        let f: Vec<f64> = (0..=4).map(|i| 2.0 * i as f64 + 1.0).collect();
        let est = integrate_samples(&f, 1.0, NewtonCotes::Simpson38).unwrap();
        // ∫₀⁴ (2x + 1) dx = 20
        assert_relative_eq!(est, 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_simpson_odd_segments_rejected() {
        assert_eq!(
            simpson_weights(5, 0.1),
            Err(QuadratureError::OddSegmentCount { segments: 5 })
        );

        let f = [0.0, 1.0, 2.0, 3.0]; // 3 segments
        assert_eq!(
            integrate_samples(&f, 0.1, NewtonCotes::Simpson),
            Err(QuadratureError::OddSegmentCount { segments: 3 })
        );
    }

    #[test]
    fn test_rule_selection_by_points() {
        assert_eq!(NewtonCotes::from_points(2), Ok(NewtonCotes::Trapezoid));
        assert_eq!(NewtonCotes::from_points(3), Ok(NewtonCotes::Simpson));
        assert_eq!(NewtonCotes::from_points(4), Ok(NewtonCotes::Simpson38));
        assert_eq!(
            NewtonCotes::from_points(7),
            Err(QuadratureError::UnsupportedRule { points: 7 })
        );
        assert_eq!(NewtonCotes::Simpson38.points(), 4);
    }

    #[test]
    fn test_too_few_samples_rejected() {
        assert_eq!(
            integrate_samples(&[1.0], 0.1, NewtonCotes::Trapezoid),
            Err(QuadratureError::TooFewSamples { samples: 1 })
        );
        assert_eq!(
            integrate_fn(|x| x, 0.0, 1.0, 0, NewtonCotes::Trapezoid),
            Err(QuadratureError::TooFewSamples { samples: 1 })
        );
    }

    #[test]
    fn test_trapezoid_converges_on_sine() {
        // ∫₀^π sin(x) dx = 2, trapezoid error is O(h²)
        let coarse = integrate_fn(f64::sin, 0.0, std::f64::consts::PI, 10, NewtonCotes::Trapezoid)
            .unwrap();
        let fine = integrate_fn(f64::sin, 0.0, std::f64::consts::PI, 20, NewtonCotes::Trapezoid)
            .unwrap();

        let err_coarse = (coarse - 2.0).abs();
        let err_fine = (fine - 2.0).abs();
        let ratio = err_coarse / err_fine;
        assert!(
            ratio > 3.5 && ratio < 4.5,
            "halving h should quarter the trapezoid error, got ratio {}",
            ratio
        );
    }

    #[test]
    fn test_simpson_converges_on_sine() {
        // Simpson error is O(h⁴): halving h divides the error by ~16
        let coarse =
            integrate_fn(f64::sin, 0.0, std::f64::consts::PI, 10, NewtonCotes::Simpson).unwrap();
        let fine =
            integrate_fn(f64::sin, 0.0, std::f64::consts::PI, 20, NewtonCotes::Simpson).unwrap();

        let ratio = (coarse - 2.0).abs() / (fine - 2.0).abs();
        assert!(
            ratio > 13.0 && ratio < 19.0,
            "halving h should cut the Simpson error ~16x, got ratio {}",
            ratio
        );
    }
}

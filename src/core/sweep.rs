// src/core/sweep.rs

use serde::Serialize;

use crate::core::error::QuadError;
use crate::core::interval::Interval;
use crate::core::quadrature::Method;
use crate::debug_log;

/// One accepted estimate at subdivision count n.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResultRow {
    pub n: usize,
    pub estimate: f64,
}

/// A subdivision count whose estimate hit a domain failure.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    pub n: usize,
    pub error: QuadError,
}

/// Everything one method produced across the sweep, rows in ascending n.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSeries {
    pub method: Method,
    pub rows: Vec<ResultRow>,
    pub skipped: Vec<SkippedRow>,
}

/// Subdivision counts a method is swept over. Rectangle rules take
/// every count up to n_max; Simpson and trapezoid walk the even counts
/// 2, 4, .. n_max so the two stay comparable row by row.
pub fn sweep_counts(method: Method, n_max: usize) -> Vec<usize> {
    match method {
        Method::LeftRectangle | Method::RightRectangle | Method::MidpointRectangle => {
            (1..=n_max).collect()
        }
        Method::Simpson | Method::Trapezoid => (1..=n_max / 2).map(|k| 2 * k).collect(),
    }
}

/// Runs every method over its subdivision counts.
///
/// A domain failure skips that one estimate and is recorded on the
/// series; structural failures abort the whole sweep.
pub fn sweep<F>(
    methods: &[Method],
    f: F,
    interval: Interval,
    n_max: usize,
) -> Result<Vec<ResultSeries>, QuadError>
where
    F: Fn(f64) -> Result<f64, QuadError>,
{
    if n_max == 0 {
        return Err(QuadError::invalid_interval(
            "the number of subdivisions must be positive",
        ));
    }
    let mut out = Vec::with_capacity(methods.len());
    for &method in methods {
        let mut rows = Vec::new();
        let mut skipped = Vec::new();
        for n in sweep_counts(method, n_max) {
            match method.estimate(&f, interval, n) {
                Ok(estimate) => rows.push(ResultRow { n, estimate }),
                Err(err @ QuadError::Domain { .. }) => {
                    debug_log!("{} skipped n = {}: {}", method, n, err);
                    skipped.push(SkippedRow { n, error: err });
                }
                Err(err) => return Err(err),
            }
        }
        out.push(ResultSeries { method, rows, skipped });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(a: f64, b: f64) -> Interval {
        Interval::new(a, b).unwrap()
    }

    #[test]
    fn rectangle_rules_take_every_count() {
        assert_eq!(sweep_counts(Method::LeftRectangle, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn simpson_and_trapezoid_take_even_counts_only() {
        assert_eq!(sweep_counts(Method::Simpson, 8), vec![2, 4, 6, 8]);
        assert_eq!(sweep_counts(Method::Trapezoid, 7), vec![2, 4, 6]);
        assert_eq!(sweep_counts(Method::Simpson, 1), Vec::<usize>::new());
    }

    #[test]
    fn sweep_runs_methods_in_given_order_with_ascending_rows() {
        let f = |x: f64| -> Result<f64, QuadError> { Ok(x * x) };
        let series = sweep(&Method::ALL, f, iv(0.0, 1.0), 4).unwrap();
        assert_eq!(series.len(), 5);
        for (s, want) in series.iter().zip(Method::ALL) {
            assert_eq!(s.method, want);
            assert!(s.rows.windows(2).all(|w| w[0].n < w[1].n));
        }
        // Simpson nails a parabola at every even n
        let simpson = &series[3];
        assert_eq!(simpson.rows.len(), 2);
        for row in &simpson.rows {
            assert!((row.estimate - 1.0 / 3.0).abs() < 1e-15);
        }
    }

    #[test]
    fn domain_failures_skip_single_estimates_and_keep_the_rest() {
        // 1/x over [-1, 1]: the left rule lands on x = 0 exactly when
        // n is even, so those estimates are skipped and the odd ones kept
        let f = |x: f64| {
            if x == 0.0 {
                Err(QuadError::domain(x, "division by zero"))
            } else {
                Ok(1.0 / x)
            }
        };
        let series = sweep(&[Method::LeftRectangle], f, iv(-1.0, 1.0), 5).unwrap();
        let s = &series[0];
        let kept: Vec<usize> = s.rows.iter().map(|r| r.n).collect();
        let skipped: Vec<usize> = s.skipped.iter().map(|r| r.n).collect();
        assert_eq!(kept, vec![1, 3, 5]);
        assert_eq!(skipped, vec![2, 4]);
        assert!(matches!(s.skipped[0].error, QuadError::Domain { x, .. } if x == 0.0));
    }

    #[test]
    fn zero_n_max_fails_the_whole_sweep() {
        let f = |x: f64| -> Result<f64, QuadError> { Ok(x) };
        assert!(matches!(
            sweep(&Method::ALL, f, iv(0.0, 1.0), 0),
            Err(QuadError::InvalidInterval { .. })
        ));
    }
}

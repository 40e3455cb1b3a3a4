// src/core/sample.rs

use serde::Serialize;

use crate::core::error::QuadError;
use crate::core::interval::Interval;

/// One grid point: x_i = a + i * h and its function value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleRow {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// The n + 1 equally spaced samples of f over an interval.
///
/// Sample points come from the closed form a + i * h rather than a
/// running accumulator, so x_0 = a exactly and no drift builds up.
#[derive(Debug, Clone)]
pub struct SampleTable {
    interval: Interval,
    n: usize,
    h: f64,
    rows: Vec<SampleRow>,
}

impl SampleTable {
    pub fn build<F>(f: F, interval: Interval, n: usize) -> Result<Self, QuadError>
    where
        F: Fn(f64) -> Result<f64, QuadError>,
    {
        let h = interval.step(n)?;
        let a = interval.lower();
        let mut rows = Vec::with_capacity(n + 1);
        for i in 0..=n {
            let x = a + i as f64 * h;
            let y = f(x).map_err(|e| e.with_index(i))?;
            rows.push(SampleRow { index: i, x, y });
        }
        Ok(Self { interval, n, h, rows })
    }

    pub fn rows(&self) -> &[SampleRow] {
        &self.rows
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn h(&self) -> f64 {
        self.h
    }
}

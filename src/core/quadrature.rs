//! Composite quadrature rules over a validated interval.
//!
//! All rules take the integrand as `F: Fn(f64) -> Result<f64, QuadError>`
//! so a domain failure at any sample aborts that one estimate and
//! carries the failing x out to the caller. Sample points use the
//! closed form a + i * h; partial sums accumulate in ascending index
//! order.

use crate::core::error::QuadError;
use crate::core::interval::Interval;

/// Left rectangle rule: h * sum of f(a + i*h) for i in 0..n.
pub fn left_rectangle<F>(f: F, interval: Interval, n: usize) -> Result<f64, QuadError>
where
    F: Fn(f64) -> Result<f64, QuadError>,
{
    let h = interval.step(n)?;
    let a = interval.lower();
    let mut total = 0.0;
    for i in 0..n {
        total += f(a + i as f64 * h)?;
    }
    Ok(total * h)
}

/// Right rectangle rule: h * sum of f(a + (i+1)*h) for i in 0..n.
pub fn right_rectangle<F>(f: F, interval: Interval, n: usize) -> Result<f64, QuadError>
where
    F: Fn(f64) -> Result<f64, QuadError>,
{
    let h = interval.step(n)?;
    let a = interval.lower();
    let mut total = 0.0;
    for i in 0..n {
        total += f(a + (i as f64 + 1.0) * h)?;
    }
    Ok(total * h)
}

/// Midpoint rectangle rule: h * sum of f(a + (i+0.5)*h) for i in 0..n.
pub fn midpoint_rectangle<F>(f: F, interval: Interval, n: usize) -> Result<f64, QuadError>
where
    F: Fn(f64) -> Result<f64, QuadError>,
{
    let h = interval.step(n)?;
    let a = interval.lower();
    let mut total = 0.0;
    for i in 0..n {
        total += f(a + (i as f64 + 0.5) * h)?;
    }
    Ok(total * h)
}

/// Simpson's composite rule, n must be even:
/// h/3 * (f(a) + f(b) + 4 * odd-index sum + 2 * even-index sum).
pub fn simpson<F>(f: F, interval: Interval, n: usize) -> Result<f64, QuadError>
where
    F: Fn(f64) -> Result<f64, QuadError>,
{
    let h = interval.step(n)?;
    if n % 2 != 0 {
        return Err(QuadError::InvalidSubdivision { n });
    }
    let a = interval.lower();
    let mut odd = 0.0;
    for i in (1..n).step_by(2) {
        odd += f(a + i as f64 * h)?;
    }
    let mut even = 0.0;
    for i in (2..n).step_by(2) {
        even += f(a + i as f64 * h)?;
    }
    Ok(h / 3.0 * (f(a)? + f(interval.upper())? + 4.0 * odd + 2.0 * even))
}

/// Composite trapezoid rule:
/// h * (interior sum + (f(a) + f(b)) / 2).
pub fn trapezoid<F>(f: F, interval: Interval, n: usize) -> Result<f64, QuadError>
where
    F: Fn(f64) -> Result<f64, QuadError>,
{
    let h = interval.step(n)?;
    let a = interval.lower();
    let mut total = 0.0;
    for i in 1..n {
        total += f(a + i as f64 * h)?;
    }
    total += (f(a)? + f(interval.upper())?) / 2.0;
    Ok(total * h)
}

/// The five supported rules, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    LeftRectangle,
    RightRectangle,
    MidpointRectangle,
    Simpson,
    Trapezoid,
}

impl Method {
    pub const RECTANGLES: [Method; 3] = [
        Method::LeftRectangle,
        Method::RightRectangle,
        Method::MidpointRectangle,
    ];

    pub const ALL: [Method; 5] = [
        Method::LeftRectangle,
        Method::RightRectangle,
        Method::MidpointRectangle,
        Method::Simpson,
        Method::Trapezoid,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Method::LeftRectangle => "Left Rectangle",
            Method::RightRectangle => "Right Rectangle",
            Method::MidpointRectangle => "Midpoint Rectangle",
            Method::Simpson => "Simpson",
            Method::Trapezoid => "Trapezoid",
        }
    }

    pub fn estimate<F>(self, f: F, interval: Interval, n: usize) -> Result<f64, QuadError>
    where
        F: Fn(f64) -> Result<f64, QuadError>,
    {
        match self {
            Method::LeftRectangle => left_rectangle(f, interval, n),
            Method::RightRectangle => right_rectangle(f, interval, n),
            Method::MidpointRectangle => midpoint_rectangle(f, interval, n),
            Method::Simpson => simpson(f, interval, n),
            Method::Trapezoid => trapezoid(f, interval, n),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

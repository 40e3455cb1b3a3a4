//! Full-screen chart view on the alternate screen. The spec is built
//! first as plain data so drawing stays pure and testable; `show`
//! owns terminal setup and teardown and exits on any key press.

use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame, Terminal,
};

use crate::core::quadrature::Method;
use crate::core::sample::SampleTable;
use crate::core::sweep::ResultSeries;

/// One plotted line.
#[derive(Debug, Clone)]
pub struct SeriesLine {
    pub name: String,
    pub color: Color,
    pub points: Vec<(f64, f64)>,
}

/// Everything the chart needs, precomputed.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub lines: Vec<SeriesLine>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

/// Session palette: pink/fuchsia/red for the rectangle rules, amber
/// for Simpson, lilac for the trapezoid rule.
pub fn method_color(method: Method) -> Color {
    match method {
        Method::LeftRectangle => Color::Rgb(255, 192, 203),
        Method::RightRectangle => Color::Rgb(255, 0, 255),
        Method::MidpointRectangle => Color::Rgb(255, 0, 0),
        Method::Simpson => Color::Rgb(255, 189, 0),
        Method::Trapezoid => Color::Rgb(205, 180, 219),
    }
}

impl ChartSpec {
    /// Estimate-vs-n lines, one per method with at least one accepted
    /// row. None when nothing survived the sweep.
    pub fn convergence(title: &str, series: &[ResultSeries]) -> Option<ChartSpec> {
        let lines: Vec<SeriesLine> = series
            .iter()
            .filter(|s| !s.rows.is_empty())
            .map(|s| SeriesLine {
                name: s.method.label().to_string(),
                color: method_color(s.method),
                points: s.rows.iter().map(|r| (r.n as f64, r.estimate)).collect(),
            })
            .collect();
        Self::from_lines(title, "n", "estimate", lines)
    }

    /// The sampled f(x) curve itself.
    pub fn function_curve(title: &str, label: &str, table: &SampleTable) -> Option<ChartSpec> {
        let line = SeriesLine {
            name: format!("f(x) = {}", label),
            color: Color::Rgb(205, 180, 219),
            points: table.rows().iter().map(|r| (r.x, r.y)).collect(),
        };
        Self::from_lines(title, "x", "f(x)", vec![line])
    }

    fn from_lines(
        title: &str,
        x_title: &str,
        y_title: &str,
        lines: Vec<SeriesLine>,
    ) -> Option<ChartSpec> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for (x, y) in lines.iter().flat_map(|l| l.points.iter()) {
            x_min = x_min.min(*x);
            x_max = x_max.max(*x);
            y_min = y_min.min(*y);
            y_max = y_max.max(*y);
        }
        if !x_min.is_finite() || !y_min.is_finite() {
            return None;
        }
        // pad the ranges so flat lines and lone points stay visible
        let mut y_pad = (y_max - y_min) * 0.05;
        if y_pad == 0.0 {
            y_pad = y_max.abs().max(1.0) * 0.05;
        }
        let x_pad = if x_min == x_max { 0.5 } else { 0.0 };
        Some(ChartSpec {
            title: title.to_string(),
            x_title: x_title.to_string(),
            y_title: y_title.to_string(),
            lines,
            x_bounds: [x_min - x_pad, x_max + x_pad],
            y_bounds: [y_min - y_pad, y_max + y_pad],
        })
    }

    fn x_labels(&self) -> Vec<String> {
        axis_labels(self.x_bounds)
    }

    fn y_labels(&self, decimals: usize) -> Vec<String> {
        let mid = (self.y_bounds[0] + self.y_bounds[1]) / 2.0;
        [self.y_bounds[0], mid, self.y_bounds[1]]
            .iter()
            .map(|v| format!("{:.dec$}", v, dec = decimals))
            .collect()
    }
}

fn axis_labels(bounds: [f64; 2]) -> Vec<String> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    [bounds[0], mid, bounds[1]].iter().map(|v| fmt_axis_value(*v)).collect()
}

fn fmt_axis_value(v: f64) -> String {
    if v == v.trunc() && v.abs() < 1e6 {
        format!("{}", v as i64)
    } else {
        format!("{:.2}", v)
    }
}

/// Renders the chart into the whole frame.
pub fn draw(frame: &mut Frame, spec: &ChartSpec, decimals: usize) {
    let datasets: Vec<Dataset> = spec
        .lines
        .iter()
        .map(|line| {
            Dataset::default()
                .name(line.name.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(line.color))
                .data(&line.points)
        })
        .collect();

    let x_labels: Vec<Span> = spec.x_labels().into_iter().map(Span::from).collect();
    let y_labels: Vec<Span> = spec.y_labels(decimals).into_iter().map(Span::from).collect();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} (press any key to close)", spec.title)),
        )
        .x_axis(
            Axis::default()
                .title(spec.x_title.clone())
                .style(Style::default().fg(Color::Gray))
                .bounds(spec.x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(spec.y_title.clone())
                .style(Style::default().fg(Color::Gray))
                .bounds(spec.y_bounds)
                .labels(y_labels),
        );
    frame.render_widget(chart, frame.size());
}

/// Shows the chart on the alternate screen until a key is pressed.
pub fn show(spec: &ChartSpec, decimals: usize) -> Result<()> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_view(&mut terminal, spec, decimals);

    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    res
}

fn run_view(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    spec: &ChartSpec,
    decimals: usize,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, spec, decimals))?;
        if let Event::Key(key) = event::read()? {
            if matches!(key.kind, KeyEventKind::Press) {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::QuadError;
    use crate::core::interval::Interval;
    use crate::core::sweep::{ResultRow, ResultSeries};
    use ratatui::backend::TestBackend;

    fn series(method: Method, estimates: &[(usize, f64)]) -> ResultSeries {
        ResultSeries {
            method,
            rows: estimates
                .iter()
                .map(|&(n, estimate)| ResultRow { n, estimate })
                .collect(),
            skipped: vec![],
        }
    }

    #[test]
    fn convergence_spec_spans_all_series() {
        let spec = ChartSpec::convergence(
            "Rectangle Integration Methods",
            &[
                series(Method::LeftRectangle, &[(1, 0.0), (2, 0.25)]),
                series(Method::RightRectangle, &[(1, 1.0), (2, 0.75)]),
            ],
        )
        .unwrap();
        assert_eq!(spec.lines.len(), 2);
        assert_eq!(spec.x_bounds, [1.0, 2.0]);
        assert!(spec.y_bounds[0] < 0.0 && spec.y_bounds[1] > 1.0);
    }

    #[test]
    fn empty_series_yield_no_chart() {
        assert!(ChartSpec::convergence("x", &[]).is_none());
        assert!(ChartSpec::convergence(
            "x",
            &[series(Method::Simpson, &[])]
        )
        .is_none());
    }

    #[test]
    fn flat_lines_get_padded_bounds() {
        let spec = ChartSpec::convergence(
            "flat",
            &[series(Method::MidpointRectangle, &[(1, 0.5), (2, 0.5)])],
        )
        .unwrap();
        assert!(spec.y_bounds[0] < 0.5 && spec.y_bounds[1] > 0.5);
    }

    #[test]
    fn function_curve_tracks_sample_points() {
        let iv = Interval::new(0.0, 1.0).unwrap();
        let table =
            SampleTable::build(|x| Ok::<f64, QuadError>(x * x), iv, 4).unwrap();
        let spec = ChartSpec::function_curve("f", "x^2", &table).unwrap();
        assert_eq!(spec.lines.len(), 1);
        assert_eq!(spec.lines[0].points.len(), 5);
        assert_eq!(spec.x_bounds, [0.0, 1.0]);
        assert_eq!(spec.lines[0].name, "f(x) = x^2");
    }

    #[test]
    fn palette_matches_the_session_colors() {
        assert_eq!(method_color(Method::LeftRectangle), Color::Rgb(255, 192, 203));
        assert_eq!(method_color(Method::Simpson), Color::Rgb(255, 189, 0));
        assert_eq!(method_color(Method::Trapezoid), Color::Rgb(205, 180, 219));
    }

    #[test]
    fn draw_renders_on_a_test_backend() {
        let spec = ChartSpec::convergence(
            "smoke",
            &[series(Method::Simpson, &[(2, 0.333), (4, 0.333)])],
        )
        .unwrap();
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, &spec, 4)).unwrap();
    }
}

// src/render/json.rs

use serde::Serialize;

use crate::core::sample::{SampleRow, SampleTable};
use crate::core::sweep::{ResultRow, ResultSeries};

#[derive(Serialize)]
struct SkipDoc {
    n: usize,
    error: String,
}

#[derive(Serialize)]
struct SeriesDoc<'a> {
    method: &'static str,
    rows: &'a [ResultRow],
    skipped: Vec<SkipDoc>,
}

#[derive(Serialize)]
struct ReportDoc<'a> {
    function: &'a str,
    a: f64,
    b: f64,
    n_max: usize,
    h: f64,
    samples: &'a [SampleRow],
    series: Vec<SeriesDoc<'a>>,
}

/// The whole run as one pretty-printed JSON document: the integrand
/// label, bounds, sample grid and every method's series with its
/// skipped counts stringified.
pub fn report(
    function_label: &str,
    table: &SampleTable,
    series: &[ResultSeries],
) -> serde_json::Result<String> {
    let doc = ReportDoc {
        function: function_label,
        a: table.interval().lower(),
        b: table.interval().upper(),
        n_max: table.n(),
        h: table.h(),
        samples: table.rows(),
        series: series
            .iter()
            .map(|s| SeriesDoc {
                method: s.method.label(),
                rows: &s.rows,
                skipped: s
                    .skipped
                    .iter()
                    .map(|k| SkipDoc { n: k.n, error: k.error.to_string() })
                    .collect(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&doc)
}

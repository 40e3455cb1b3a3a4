// src/render/table.rs

use std::collections::BTreeSet;
use std::fmt::Write;

use crate::core::sample::SampleTable;
use crate::core::sweep::ResultSeries;

/// The x_i / y_i grid as a fixed-width table.
pub fn sample_table(table: &SampleTable, decimals: usize) -> String {
    let mut out = String::new();
    push_line(&mut out, "Table of x_i and y_i values:");
    push_line(&mut out, &format!("{:<10} {:<10} {:<10}", "i", "x_i", "y_i"));
    push_line(&mut out, &"-".repeat(30));
    for row in table.rows() {
        push_line(
            &mut out,
            &format!(
                "{:<10} {:<10.dec$} {:<10.dec$}",
                row.index,
                row.x,
                row.y,
                dec = decimals
            ),
        );
    }
    out
}

/// Sweep results with one column per method. Rows are the union of
/// every subdivision count any series produced or skipped; a cell
/// whose method has no estimate at that n holds a dash.
pub fn results_table(title: &str, series: &[ResultSeries], decimals: usize) -> String {
    let columns: Vec<(&str, &ResultSeries)> =
        series.iter().map(|s| (s.method.label(), s)).collect();
    column_table(title, &columns, decimals)
}

/// Single-method sweep results under the traditional `Integral (S)`
/// column header.
pub fn single_results_table(title: &str, series: &ResultSeries, decimals: usize) -> String {
    column_table(title, &[("Integral (S)", series)], decimals)
}

/// One report line per skipped estimate, in method order.
pub fn skipped_lines(series: &[ResultSeries]) -> Vec<String> {
    let mut lines = Vec::new();
    for s in series {
        for skip in &s.skipped {
            lines.push(format!(
                "{}: skipped n = {} ({})",
                s.method.label(),
                skip.n,
                skip.error
            ));
        }
    }
    lines
}

fn column_table(title: &str, columns: &[(&str, &ResultSeries)], decimals: usize) -> String {
    let mut out = String::new();
    push_line(&mut out, title);

    let mut header = format!("{:<10}", "n");
    for (label, _) in columns {
        let _ = write!(header, " {:<20}", label);
    }
    push_line(&mut out, &header);
    push_line(&mut out, &"-".repeat(10 + 20 * columns.len()));

    let mut counts = BTreeSet::new();
    for (_, s) in columns {
        counts.extend(s.rows.iter().map(|r| r.n));
        counts.extend(s.skipped.iter().map(|r| r.n));
    }
    for n in counts {
        let mut line = format!("{:<10}", n);
        for (_, s) in columns {
            match s.rows.iter().find(|r| r.n == n) {
                Some(row) => {
                    let _ = write!(line, " {:<20.dec$}", row.estimate, dec = decimals);
                }
                None => {
                    let _ = write!(line, " {:<20}", "-");
                }
            }
        }
        push_line(&mut out, &line);
    }
    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}

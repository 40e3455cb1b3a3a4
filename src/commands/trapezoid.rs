use anyhow::Result;

use crate::cli::SessionArgs;
use crate::commands::session::{self, ChartKind, SessionSpec};
use crate::config::Config;
use crate::core::function::NamedFormula;
use crate::core::quadrature::Method;

const SPEC: SessionSpec = SessionSpec {
    banner: "The method of trapezoids",
    default_formula: NamedFormula::InvSqrtSquare,
    methods: &[Method::Trapezoid],
    results_title: "Table of trapezoidal integration results for different n:",
    chart_title: "Graph of f(x) over [a, b]",
    chart: ChartKind::FunctionCurve,
    require_even_max: false,
};

pub fn main(
    args: SessionArgs,
    dump_tokens: bool,
    dump_ast: bool,
    config: &Config,
) -> Result<()> {
    session::run(
        &SPEC,
        args,
        dump_tokens,
        dump_ast,
        config,
        config.defaults.trapezoid.as_deref(),
    )
}

use anyhow::Result;

use crate::cli::SessionArgs;
use crate::commands::session::{self, ChartKind, SessionSpec};
use crate::config::Config;
use crate::core::function::NamedFormula;
use crate::core::quadrature::Method;

const SPEC: SessionSpec = SessionSpec {
    banner: "The Simpson's method",
    default_formula: NamedFormula::LogQuotient,
    methods: &[Method::Simpson],
    results_title: "Table of Simpson's integration results for different n:",
    chart_title: "Integration results by Simpson's method for different n",
    chart: ChartKind::Convergence,
    require_even_max: true,
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
        config.defaults.simpson.as_deref(),
    )
}

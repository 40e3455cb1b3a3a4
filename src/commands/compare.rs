use anyhow::Result;

use crate::cli::SessionArgs;
use crate::commands::session::{self, ChartKind, SessionSpec};
use crate::config::Config;
use crate::core::function::NamedFormula;
use crate::core::quadrature::Method;

const SPEC: SessionSpec = SessionSpec {
    banner: "All quadrature methods",
    default_formula: NamedFormula::InvSqrtLinear,
    methods: &Method::ALL,
    results_title: "Integration results for all methods:",
    chart_title: "Quadrature Methods Compared",
    chart: ChartKind::Convergence,
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
        config.defaults.compare.as_deref(),
    )
}

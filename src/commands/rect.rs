use anyhow::Result;

use crate::cli::SessionArgs;
use crate::commands::session::{self, ChartKind, SessionSpec};
use crate::config::Config;
use crate::core::function::NamedFormula;
use crate::core::quadrature::Method;

const SPEC: SessionSpec = SessionSpec {
    banner: "The method of rectangles",
    default_formula: NamedFormula::InvSqrtLinear,
    methods: &Method::RECTANGLES,
    results_title: "Integration Results with different values of n:",
    chart_title: "Rectangle Integration Methods",
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
        config.defaults.rect.as_deref(),
    )
}

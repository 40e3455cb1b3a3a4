//! The shared session flow behind every subcommand: resolve the
//! integrand, collect bounds and n_max (flags first, prompts second),
//! build the sample table, sweep, then render tables, JSON or chart.

use anyhow::{bail, Result};
use colored::Colorize;
use std::io::IsTerminal;

use crate::cli::SessionArgs;
use crate::commands::prompt;
use crate::config::Config;
use crate::core::error::QuadError;
use crate::core::function::{CompiledExpr, Integrand, NamedFormula};
use crate::core::interval::Interval;
use crate::core::lexer::Lexer;
use crate::core::quadrature::Method;
use crate::core::sample::SampleTable;
use crate::core::sweep::sweep;
use crate::debug_log;
use crate::render::chart::{self, ChartSpec};
use crate::render::{json, table};

/// What kind of chart a session shows after its tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Estimate against n, one line per method.
    Convergence,
    /// The sampled f(x) curve.
    FunctionCurve,
}

/// Static description of one session flavor.
pub struct SessionSpec {
    pub banner: &'static str,
    pub default_formula: NamedFormula,
    pub methods: &'static [Method],
    pub results_title: &'static str,
    pub chart_title: &'static str,
    pub chart: ChartKind,
    /// Simpson sessions reject an odd n_max before anything runs.
    pub require_even_max: bool,
}

pub fn run(
    spec: &SessionSpec,
    args: SessionArgs,
    dump_tokens: bool,
    dump_ast: bool,
    config: &Config,
    default_override: Option<&str>,
) -> Result<()> {
    let json_mode = args.json;
    let shown_default = default_override.unwrap_or(spec.default_formula.label());

    if !json_mode {
        println!("{}", spec.banner.bold());
        println!("Default integration function: f(x) = {}", shown_default);
    }

    let integrand = resolve_integrand(spec, &args, dump_tokens, dump_ast, default_override)?;

    let a = match args.lower {
        Some(v) => v,
        None if json_mode => bail!("--json runs need explicit -a, -b and -n"),
        None => prompt::read_f64("Enter a = ")?,
    };
    let b = match args.upper {
        Some(v) => v,
        None if json_mode => bail!("--json runs need explicit -a, -b and -n"),
        None => prompt::read_f64("Enter b = ")?,
    };
    let n_max = match args.max_n {
        Some(v) => v,
        None if json_mode => bail!("--json runs need explicit -a, -b and -n"),
        None if spec.require_even_max => {
            prompt::read_usize("Enter the maximum number of division segments n (even number) = ")?
        }
        None => prompt::read_usize("Enter the maximum number of division segments n = ")?,
    };

    let interval = Interval::new(a, b)?;
    if spec.require_even_max && n_max % 2 != 0 {
        return Err(QuadError::InvalidSubdivision { n: n_max }.into());
    }

    let f = |x: f64| integrand.eval(x);
    let samples = SampleTable::build(f, interval, n_max)?;
    let series = sweep(spec.methods, f, interval, n_max)?;
    debug_log!(
        "{}: swept {} methods over {} with n_max = {} ({} rows)",
        spec.banner,
        series.len(),
        interval,
        n_max,
        series.iter().map(|s| s.rows.len()).sum::<usize>()
    );

    if json_mode {
        println!("{}", json::report(integrand.label(), &samples, &series)?);
        return Ok(());
    }

    println!();
    print!("{}", table::sample_table(&samples, config.decimals));
    println!();
    if let [single] = series.as_slice() {
        print!(
            "{}",
            table::single_results_table(spec.results_title, single, config.decimals)
        );
    } else {
        print!(
            "{}",
            table::results_table(spec.results_title, &series, config.decimals)
        );
    }
    for line in table::skipped_lines(&series) {
        eprintln!("{} {}", "warn:".yellow().bold(), line);
    }

    if config.chart && !args.no_chart && std::io::stdout().is_terminal() {
        let chart_spec = match spec.chart {
            ChartKind::Convergence => ChartSpec::convergence(spec.chart_title, &series),
            ChartKind::FunctionCurve => {
                ChartSpec::function_curve(spec.chart_title, integrand.label(), &samples)
            }
        };
        if let Some(cs) = chart_spec {
            chart::show(&cs, config.decimals)?;
        }
    }
    Ok(())
}

fn resolve_integrand(
    spec: &SessionSpec,
    args: &SessionArgs,
    dump_tokens: bool,
    dump_ast: bool,
    default_override: Option<&str>,
) -> Result<Integrand> {
    if let Some(text) = &args.expr {
        return compile_formula(text, dump_tokens, dump_ast);
    }
    // --json never prompts; absent --expr it means the default formula
    if args.use_default || args.json {
        return default_integrand(spec, default_override, dump_tokens, dump_ast);
    }
    if prompt::confirm("Do you want to continue with this function? (yes/no): ")? {
        default_integrand(spec, default_override, dump_tokens, dump_ast)
    } else {
        let shown_default = default_override.unwrap_or(spec.default_formula.label());
        let text = prompt::read_formula(shown_default)?;
        compile_formula(&text, dump_tokens, dump_ast)
    }
}

fn default_integrand(
    spec: &SessionSpec,
    default_override: Option<&str>,
    dump_tokens: bool,
    dump_ast: bool,
) -> Result<Integrand> {
    let Some(text) = default_override else {
        return Ok(Integrand::Named(spec.default_formula));
    };
    match compile_formula(text, dump_tokens, dump_ast) {
        Ok(integrand) => Ok(integrand),
        Err(e) => {
            eprintln!(
                "{} configured default formula is invalid ({}); using the built-in one",
                "warn:".yellow().bold(),
                e
            );
            Ok(Integrand::Named(spec.default_formula))
        }
    }
}

fn compile_formula(text: &str, dump_tokens: bool, dump_ast: bool) -> Result<Integrand> {
    if dump_tokens {
        let tokens = Lexer::new(text).tokenize().map_err(QuadError::from)?;
        println!("=== Tokens ===");
        for token in &tokens {
            println!("{}", token);
        }
        println!();
    }
    let compiled = CompiledExpr::compile(text)?;
    if dump_ast {
        println!("=== AST ===\n{:#?}\n", compiled.root());
    }
    Ok(Integrand::Expr(compiled))
}

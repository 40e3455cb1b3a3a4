use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "quadlab",
    about = "quadlab — rectangle, Simpson and trapezoid quadrature over parsed formulas",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct QuadCli {
    /// Global: path to config (TOML); default: ~/.quadlab/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: dump formula tokens before running
    #[arg(long = "tokens", action = ArgAction::SetTrue, global = true)]
    pub tokens: bool,

    /// Global: dump the parsed formula AST before running
    #[arg(long = "ast", action = ArgAction::SetTrue, global = true)]
    pub ast: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sweep the left, right and midpoint rectangle rules
    ///
    /// Examples:
    ///   quadlab rect
    ///   quadlab rect --expr "sin(x) / x" -a 1 -b 2 -n 10
    Rect {
        #[command(flatten)]
        session: SessionArgs,
    },

    /// Sweep Simpson's composite rule (even subdivision counts)
    Simpson {
        #[command(flatten)]
        session: SessionArgs,
    },

    /// Sweep the composite trapezoid rule
    Trapezoid {
        #[command(flatten)]
        session: SessionArgs,
    },

    /// Sweep all five rules side by side
    Compare {
        #[command(flatten)]
        session: SessionArgs,
    },
}

/// Inputs shared by every session. Anything not given as a flag is
/// asked for interactively.
#[derive(Debug, Args, Default)]
pub struct SessionArgs {
    /// Integrand formula, e.g. "1 / sqrt(0.5 * x + 1.5)"
    #[arg(long = "expr", value_name = "FORMULA", conflicts_with = "use_default")]
    pub expr: Option<String>,

    /// Take the session's default formula without asking
    #[arg(long = "use-default", action = ArgAction::SetTrue)]
    pub use_default: bool,

    /// Lower integration bound a
    #[arg(short = 'a', long = "lower", value_name = "A", allow_hyphen_values = true)]
    pub lower: Option<f64>,

    /// Upper integration bound b
    #[arg(short = 'b', long = "upper", value_name = "B", allow_hyphen_values = true)]
    pub upper: Option<f64>,

    /// Maximum number of division segments
    #[arg(short = 'n', long = "max-n", value_name = "N")]
    pub max_n: Option<usize>,

    /// Skip the chart view
    #[arg(long = "no-chart", action = ArgAction::SetTrue)]
    pub no_chart: bool,

    /// Print one JSON report instead of tables and chart
    #[arg(long = "json", action = ArgAction::SetTrue)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parses_a_full_flag_set() {
        let cli = QuadCli::parse_from([
            "quadlab", "simpson", "--expr", "x^2", "-a", "0", "-b", "1", "-n", "8",
            "--no-chart", "--json",
        ]);
        match cli.cmd {
            Command::Simpson { session } => {
                assert_eq!(session.expr.as_deref(), Some("x^2"));
                assert_eq!(session.lower, Some(0.0));
                assert_eq!(session.upper, Some(1.0));
                assert_eq!(session.max_n, Some(8));
                assert!(session.no_chart);
                assert!(session.json);
            }
            other => panic!("wrong command: {:?}", other),
        }
    }

    #[test]
    fn negative_bounds_parse_as_values() {
        let cli = QuadCli::parse_from(["quadlab", "rect", "-a", "-1", "-b", "1", "-n", "4"]);
        match cli.cmd {
            Command::Rect { session } => {
                assert_eq!(session.lower, Some(-1.0));
                assert_eq!(session.upper, Some(1.0));
            }
            other => panic!("wrong command: {:?}", other),
        }
    }

    #[test]
    fn expr_and_use_default_conflict() {
        let res = QuadCli::try_parse_from([
            "quadlab", "rect", "--expr", "x", "--use-default",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn global_flags_ride_after_the_subcommand() {
        let cli = QuadCli::parse_from(["quadlab", "compare", "--tokens", "--ast"]);
        assert!(cli.tokens);
        assert!(cli.ast);
    }
}

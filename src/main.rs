use clap::Parser;
use colored::Colorize;

use quadlab::cli::{Command, QuadCli};
use quadlab::commands;
use quadlab::config;

fn main() {
    let args = QuadCli::parse();
    let config = config::load(&args.config);

    let result = match args.cmd {
        Command::Rect { session } => commands::rect::main(session, args.tokens, args.ast, &config),
        Command::Simpson { session } => {
            commands::simpson::main(session, args.tokens, args.ast, &config)
        }
        Command::Trapezoid { session } => {
            commands::trapezoid::main(session, args.tokens, args.ast, &config)
        }
        Command::Compare { session } => {
            commands::compare::main(session, args.tokens, args.ast, &config)
        }
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".bright_red().bold(), e);
        std::process::exit(1);
    }
}

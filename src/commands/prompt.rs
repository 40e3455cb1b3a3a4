//! Interactive stdin prompts for the session inputs.

use anyhow::{anyhow, bail, Result};
use std::io::{self, Write};

fn read_line() -> Result<String> {
    let mut line = String::new();
    let n = io::stdin().read_line(&mut line)?;
    if n == 0 {
        bail!("unexpected end of input");
    }
    Ok(line.trim().to_string())
}

fn ask(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    read_line()
}

/// Asks until the answer is a clear yes or no.
pub fn confirm(question: &str) -> Result<bool> {
    loop {
        match ask(question)?.to_lowercase().as_str() {
            "yes" | "y" => return Ok(true),
            "no" | "n" => return Ok(false),
            _ => println!("Please answer 'yes' or 'no'."),
        }
    }
}

pub fn read_formula(default_label: &str) -> Result<String> {
    println!(
        "Enter the function. For example, the default function is f(x) = {}.",
        default_label
    );
    let text = ask("f(x) = ")?;
    if text.is_empty() {
        bail!("no formula given");
    }
    Ok(text)
}

pub fn read_f64(prompt: &str) -> Result<f64> {
    let text = ask(prompt)?;
    text.parse()
        .map_err(|_| anyhow!("'{}' is not a number", text))
}

pub fn read_usize(prompt: &str) -> Result<usize> {
    let text = ask(prompt)?;
    text.parse()
        .map_err(|_| anyhow!("'{}' is not a positive whole number", text))
}

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

fn bin() -> String {
    // Cargo sets this for bin targets in integration tests
    env!("CARGO_BIN_EXE_quadlab").to_string()
}

#[test]
fn rect_runs_noninteractively_with_flags() {
    let output = Command::new(bin())
        .args(["rect", "--use-default", "-a", "1", "-b", "2", "-n", "4", "--no-chart"])
        .output()
        .expect("run");

    assert!(
        output.status.success(),
        "stdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("The method of rectangles"));
    assert!(stdout.contains("Default integration function: f(x) = 1 / sqrt(0.5 * x + 1.5)"));
    assert!(stdout.contains("Table of x_i and y_i values:"));
    assert!(stdout.contains("Integration Results with different values of n:"));
    assert!(stdout.contains("Left Rectangle"));
    assert!(stdout.contains("Right Rectangle"));
    assert!(stdout.contains("Midpoint Rectangle"));
}

#[test]
fn prompts_drive_a_session_over_piped_stdin() {
    let mut child = Command::new(bin())
        .args(["trapezoid", "--no-chart"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn");
    {
        let stdin = child.stdin.as_mut().unwrap();
        writeln!(stdin, "yes").unwrap();
        writeln!(stdin, "1").unwrap();
        writeln!(stdin, "2").unwrap();
        writeln!(stdin, "4").unwrap();
    }
    let output = child.wait_with_output().expect("wait");

    assert!(
        output.status.success(),
        "stdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("The method of trapezoids"));
    assert!(stdout.contains("Do you want to continue with this function? (yes/no): "));
    assert!(stdout.contains("Enter a = "));
    assert!(stdout.contains("Table of trapezoidal integration results for different n:"));
    assert!(stdout.contains("Integral (S)"));
}

#[test]
fn declining_the_default_asks_for_a_formula() {
    let mut child = Command::new(bin())
        .args(["rect", "--no-chart"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn");
    {
        let stdin = child.stdin.as_mut().unwrap();
        writeln!(stdin, "maybe").unwrap(); // not a yes/no answer, asked again
        writeln!(stdin, "no").unwrap();
        writeln!(stdin, "x^2").unwrap();
        writeln!(stdin, "0").unwrap();
        writeln!(stdin, "1").unwrap();
        writeln!(stdin, "2").unwrap();
    }
    let output = child.wait_with_output().expect("wait");

    assert!(
        output.status.success(),
        "stdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Please answer 'yes' or 'no'."));
    assert!(stdout.contains("Enter the function. For example, the default function is f(x) ="));
    assert!(stdout.contains("f(x) = "));
}

#[test]
fn simpson_rejects_an_odd_n_max() {
    let output = Command::new(bin())
        .args(["simpson", "--use-default", "-a", "1", "-b", "2", "-n", "5"])
        .output()
        .expect("run");

    assert!(!output.status.success(), "unexpected success");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Simpson's rule requires an even number of subdivisions, got n = 5"),
        "stderr:\n{}",
        stderr
    );
}

#[test]
fn backwards_bounds_are_rejected() {
    let output = Command::new(bin())
        .args(["rect", "--use-default", "-a", "2", "-b", "1", "-n", "4"])
        .output()
        .expect("run");

    assert!(!output.status.success(), "unexpected success");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("the lower bound must be less than the upper bound"));
}

#[test]
fn formula_errors_carry_the_failing_column() {
    let output = Command::new(bin())
        .args(["rect", "--expr", "2 +* x", "-a", "0", "-b", "1", "-n", "4"])
        .output()
        .expect("run");

    assert!(!output.status.success(), "unexpected success");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("parse error at column 4"), "stderr:\n{}", stderr);
}

#[test]
fn singular_samples_skip_estimates_with_a_warning() {
    // 1/x on [-1, 1] with n_max = 5: the n = 5 sample grid misses
    // zero, but even-n sweeps of the left rule land on it
    let output = Command::new(bin())
        .args(["rect", "--expr", "1 / x", "-a", "-1", "-b", "1", "-n", "5", "--no-chart"])
        .output()
        .expect("run");

    assert!(
        output.status.success(),
        "stdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Left Rectangle: skipped n = 2"), "stderr:\n{}", stderr);
    assert!(stderr.contains("division by zero"));

    // gaps show up as dashes in the results table
    let stdout = String::from_utf8_lossy(&output.stdout);
    let results_at = stdout
        .find("Integration Results with different values of n:")
        .expect("results table");
    let row2 = stdout[results_at..]
        .lines()
        .find(|l| l.starts_with("2 "))
        .expect("row for n = 2");
    assert!(row2.contains(" - "), "row:\n{}", row2);
}

#[test]
fn json_report_parses_and_carries_every_method() {
    let output = Command::new(bin())
        .args(["compare", "--expr", "x^2", "-a", "0", "-b", "1", "-n", "4", "--json"])
        .output()
        .expect("run");

    assert!(
        output.status.success(),
        "stderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    let doc: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is one JSON document");

    assert_eq!(doc["function"], "x^2");
    assert_eq!(doc["a"], 0.0);
    assert_eq!(doc["b"], 1.0);
    assert_eq!(doc["n_max"], 4);
    assert_eq!(doc["samples"].as_array().unwrap().len(), 5);
    let series = doc["series"].as_array().unwrap();
    assert_eq!(series.len(), 5);
    let methods: Vec<&str> = series
        .iter()
        .map(|s| s["method"].as_str().unwrap())
        .collect();
    assert_eq!(
        methods,
        ["Left Rectangle", "Right Rectangle", "Midpoint Rectangle", "Simpson", "Trapezoid"]
    );
    // Simpson sweeps even counts only
    let simpson_ns: Vec<u64> = series[3]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["n"].as_u64().unwrap())
        .collect();
    assert_eq!(simpson_ns, [2, 4]);
}

#[test]
fn json_mode_requires_explicit_bounds() {
    let output = Command::new(bin())
        .args(["rect", "--json"])
        .output()
        .expect("run");

    assert!(!output.status.success(), "unexpected success");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--json runs need explicit -a, -b and -n"));
}

#[test]
fn config_file_sets_decimals_and_default_formula() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("config.toml");
    fs::write(
        &cfg,
        "decimals = 6\nchart = false\n\n[defaults]\nrect = \"x^3\"\n",
    )
    .unwrap();

    let output = Command::new(bin())
        .args(["rect", "--use-default", "-a", "0", "-b", "1", "-n", "4"])
        .arg("--config")
        .arg(cfg.to_str().unwrap())
        .output()
        .expect("run");

    assert!(
        output.status.success(),
        "stdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Default integration function: f(x) = x^3"));
    // six decimals: x_1 = 0.25 renders with the configured width
    assert!(stdout.contains("0.250000"), "stdout:\n{}", stdout);
}

#[test]
fn broken_config_warns_and_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("config.toml");
    fs::write(&cfg, "decimals = \"lots\"").unwrap();

    let output = Command::new(bin())
        .args(["rect", "--use-default", "-a", "0", "-b", "1", "-n", "2", "--no-chart"])
        .arg("--config")
        .arg(cfg.to_str().unwrap())
        .output()
        .expect("run");

    assert!(
        output.status.success(),
        "stdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("warn:"), "stderr:\n{}", stderr);
    // default width still applies
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0.5000"));
}

#[test]
fn token_and_ast_dumps_precede_the_run() {
    let output = Command::new(bin())
        .args([
            "rect", "--tokens", "--ast", "--expr", "x^2", "-a", "0", "-b", "1", "-n", "2",
            "--no-chart",
        ])
        .output()
        .expect("run");

    assert!(
        output.status.success(),
        "stderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("=== Tokens ==="));
    assert!(stdout.contains("=== AST ==="));
    let tokens_at = stdout.find("=== Tokens ===").unwrap();
    let table_at = stdout.find("Table of x_i and y_i values:").unwrap();
    assert!(tokens_at < table_at);
}

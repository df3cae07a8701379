use std::process::{Command, Output};

const USAGE_OUTPUT: &str = "
Usage: termgenerator.py N LENGTH
where
  N:      Number of terms to generate (must be even)
  LENGTH: Approximate length of each generated term
The output of this script can be used as input for the LazyMathInstructor program.
";

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_termgenerator"))
        .args(args)
        .env_remove("TERMGEN_MAX_DEPTH")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run termgenerator")
}

fn stdout(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).expect("stdout is not UTF-8")
}

#[test]
fn test_default_invocation() {
    let output = run(&[]);
    assert!(output.status.success());
    let lines: Vec<&str> = stdout(&output).lines().collect();
    assert_eq!(lines[0], "10");
    assert_eq!(lines.len(), 21);
    assert!(lines[1..].iter().all(|term| term.len() >= 250));
}

#[test]
fn test_explicit_arguments() {
    let term_re = regex::Regex::new(r"^[()a-z0-9+*-]+$").unwrap();
    let output = run(&["6", "40"]);
    assert!(output.status.success());
    let lines: Vec<&str> = stdout(&output).lines().collect();
    assert_eq!(lines[0], "3");
    assert_eq!(lines.len(), 7);
    for term in &lines[1..] {
        assert!(term.len() >= 40, "too short: `{}`", term);
        assert!(term_re.is_match(term), "unexpected characters: `{}`", term);
        assert!(termgen::is_balanced(term), "unbalanced: `{}`", term);
    }
}

#[test]
fn test_single_atoms() {
    let atom_re = regex::Regex::new(r"^([a-z]|[0-9]{1,2}|100)$").unwrap();
    let output = run(&["2", "1"]);
    assert!(output.status.success());
    let lines: Vec<&str> = stdout(&output).lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "1");
    assert!(lines[1..].iter().all(|atom| atom_re.is_match(atom)));
}

#[test]
fn test_invalid_arguments() {
    let cases: &[&[&str]] = &[
        &["0", "10"],
        &["3", "10"],
        &["10", "-5"],
        &["10", "0"],
        &["abc", "10"],
        &["10"],
        &["10", "10", "10"],
        &["--help"],
    ];
    for args in cases {
        let output = run(args);
        assert_eq!(output.status.code(), Some(1), "args {:?}", args);
        assert_eq!(stdout(&output), USAGE_OUTPUT, "args {:?}", args);
    }
}

#[test]
fn test_max_depth_from_environment() {
    let output = Command::new(env!("CARGO_BIN_EXE_termgenerator"))
        .args(["4", "100"])
        .env("TERMGEN_MAX_DEPTH", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run termgenerator");
    assert!(output.status.success());
    let lines: Vec<&str> = stdout(&output).lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[1..].iter().all(|term| term.len() >= 100));

    let output = Command::new(env!("CARGO_BIN_EXE_termgenerator"))
        .env("TERMGEN_MAX_DEPTH", "deep")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run termgenerator");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("TERMGEN_MAX_DEPTH"));
}

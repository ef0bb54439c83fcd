//! End-to-end scenarios that run the built `igbo` binary against a source
//! file and assert on its captured stdout/stderr, the same shape as the
//! teacher's subprocess-based test harness (`test-utils`) asserted on a
//! compiled `why` binary's output.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

struct Expected<'a> {
    stdout: &'a str,
    stderr: &'a str,
}

fn run(source: &str) -> Output {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(source.as_bytes()).unwrap();

    Command::new(env!("CARGO_BIN_EXE_igbo"))
        .arg(file.path())
        .output()
        .unwrap()
}

fn assert_scenario(source: &str, expected: Expected) {
    let output = run(source);
    assert_eq!(std::str::from_utf8(&output.stdout).unwrap(), expected.stdout);
    assert_eq!(std::str::from_utf8(&output.stderr).unwrap(), expected.stderr);
}

#[test]
fn declares_and_prints_a_string() {
    assert_scenario(
        "dee aha = \"Emeka\" gosi(aha)",
        Expected {
            stdout: "Emeka\n",
            stderr: "",
        },
    );
}

#[test]
fn declares_and_prints_an_arithmetic_result() {
    assert_scenario(
        "dee r = 10 + 5 gosi(r)",
        Expected {
            stdout: "15\n",
            stderr: "",
        },
    );
}

#[test]
fn if_else_runs_the_true_branch() {
    assert_scenario(
        "ma 3 < 5 { gosi(\"kere\") } mana { gosi(\"nnukwu\") }",
        Expected {
            stdout: "kere\n",
            stderr: "",
        },
    );
}

#[test]
fn while_loop_prints_each_iteration() {
    assert_scenario(
        "dee i = 0 mgbe i < 3 { gosi(i) dee i = i + 1 }",
        Expected {
            stdout: "0\n1\n2\n",
            stderr: "",
        },
    );
}

#[test]
fn undefined_variable_reports_and_prints_fallback_zero() {
    assert_scenario(
        "gosi(unknown)",
        Expected {
            stdout: "0\n",
            stderr: "Error (line 1): Undefined variable 'unknown'\n",
        },
    );
}

#[test]
fn boolean_comparison_prints_igbo_words() {
    assert_scenario(
        "gosi(1 > 2)",
        Expected {
            stdout: "ụgha\n",
            stderr: "",
        },
    );
}

#[test]
fn adding_a_bool_to_a_number_reports_and_does_not_crash() {
    assert_scenario(
        "gosi(eziokwu + 1)",
        Expected {
            stdout: "0\n",
            stderr: "Error (line 1): Operands must be numbers for '+'\n",
        },
    );
}

#[test]
fn no_argument_prints_usage_and_exits_nonzero() {
    let output = Command::new(env!("CARGO_BIN_EXE_igbo")).output().unwrap();

    assert!(!output.status.success());
    assert_eq!(
        std::str::from_utf8(&output.stderr).unwrap(),
        "Usage: igbo program.igbo\n"
    );
}

#[test]
fn missing_file_reports_and_exits_nonzero() {
    let output = Command::new(env!("CARGO_BIN_EXE_igbo"))
        .arg("/no/such/file.igbo")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(
        std::str::from_utf8(&output.stderr).unwrap(),
        "Error: Could not read file: /no/such/file.igbo\n"
    );
}

//! Smoke tests for the `rgauss` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("rgauss").unwrap()
}

#[test]
fn no_args_shows_usage() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn prints_every_step_down_to_the_reduced_matrix() {
    cmd()
        .args(["1;1;3", "2;-1;0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1  1 | 3"))
        .stdout(predicate::str::contains("2 -1 | 0   - 2 * R1"))
        .stdout(predicate::str::contains("1 0 | 1\n0 1 | 2"));
}

#[test]
fn solve_flag_appends_solution() {
    cmd()
        .args(["--solve", "1;1;3", "2;-1;0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("x1 = 1"))
        .stdout(predicate::str::contains("x2 = 2"));
}

#[test]
fn rows_may_start_with_a_minus() {
    cmd()
        .args(["--solve", "-1;1;0", "1;1;2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("x1 = 1"))
        .stdout(predicate::str::contains("x2 = 1"));
}

#[test]
fn flags_may_follow_the_rows() {
    cmd()
        .args(["1;1;3", "2;-1;0", "-s"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 0 | 1\n0 1 | 2"));

    cmd()
        .args(["-1;1;0", "1;1;2", "--latex"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\\begin{array}{cc|c}"));

    cmd()
        .args(["0;1;5", "0;2;10", "--solve"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Infinitely many solutions"));
}

#[test]
fn flags_may_sit_between_rows() {
    cmd()
        .args(["-1;1;0", "--solve", "1;1;2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("x1 = 1"))
        .stdout(predicate::str::contains("x2 = 1"));
}

#[test]
fn latex_output() {
    cmd()
        .args(["--latex", "-s", "0;1;5", "1;1;8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\\begin{array}{cc|c}"))
        .stdout(predicate::str::contains("\\leftrightarrow \\mathrm{R}_{2}"));
}

#[test]
fn ragged_rows_fail_before_any_output() {
    cmd()
        .args(["1;2;3", "1;2"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "not all rows have the same number of coefficients",
        ));
}

#[test]
fn bad_coefficient_fails() {
    cmd()
        .args(["1;a;3", "1;2;3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid coefficient"));
}

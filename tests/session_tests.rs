use assert_cmd::Command;
use assert_cmd::cargo_bin;
use predicates::prelude::*;

fn session(input: &str) -> assert_cmd::assert::Assert {
    Command::new(cargo_bin!("tipcalc"))
        .args(["--locale", "en-US", "session"])
        .write_stdin(input)
        .assert()
}

#[test]
fn test_session_recomputes_on_every_change() {
    let input = "bill 10\ntip 20\nround on\ntip 15\nround off\n";

    session(input).success().stdout(
        "Tip Amount: $0.00\n\
         Tip Amount: $0.00\n\
         Tip Amount: $2.00\n\
         Tip Amount: $2.00\n\
         Tip Amount: $2.00\n\
         Tip Amount: $1.50\n",
    );
}

#[test]
fn test_session_quit_stops_reading() {
    session("bill 100\ntip 18\nquit\ntip 50\n")
        .success()
        .stdout("Tip Amount: $0.00\nTip Amount: $0.00\nTip Amount: $18.00\n");
}

#[test]
fn test_session_ignores_blank_and_unknown_lines() {
    session("\nsplit 3\nbill 10\n\ntip 10\n")
        .success()
        .stdout("Tip Amount: $0.00\nTip Amount: $0.00\nTip Amount: $1.00\n")
        .stderr(predicate::str::contains("Unknown session command"));
}

#[test]
fn test_session_rejects_bad_round_argument() {
    session("bill 10\ntip 15\nround on\nround maybe\nround\n")
        .success()
        .stdout(
            "Tip Amount: $0.00\n\
             Tip Amount: $0.00\n\
             Tip Amount: $1.50\n\
             Tip Amount: $2.00\n",
        )
        .stderr(predicate::str::contains("Unknown session command"))
        .stderr(predicate::str::contains("round maybe"));
}

#[test]
fn test_session_reset_and_toggle() {
    session("bill 7\ntip 18\nround toggle\nreset\n")
        .success()
        .stdout(
            "Tip Amount: $0.00\n\
             Tip Amount: $0.00\n\
             Tip Amount: $1.26\n\
             Tip Amount: $2.00\n\
             Tip Amount: $0.00\n",
        );
}

#[test]
fn test_session_empty_input_prints_initial_state() {
    session("").success().stdout("Tip Amount: $0.00\n");
}

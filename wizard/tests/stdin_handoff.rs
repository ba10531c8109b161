//! Stdin hand-off between wizard steps.
//!
//! The root question must leave unread answers on stdin for the steps that
//! follow it. Each test re-runs this test binary as a child with piped stdin;
//! the child half only acts when `HANDOFF_CHILD_ENV` is set.

use std::io::{self, BufRead, Write};
use std::process::{Command, Stdio};
use std::time::Duration;

use wizard::io::lines::LineSource;
use wizard::io::prompter::{Prompter, TerminalPrompter};

const HANDOFF_CHILD_ENV: &str = "WIZARD_HANDOFF_CHILD";

fn run_child(test_name: &str, input: &str) -> String {
    let mut child = Command::new(std::env::current_exe().expect("test binary"))
        .args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(HANDOFF_CHILD_ENV, "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn child");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait child");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    assert!(
        output.status.success(),
        "stdout: {stdout}\nstderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    stdout
}

fn is_child() -> bool {
    std::env::var_os(HANDOFF_CHILD_ENV).is_some()
}

#[test]
fn next_step_reads_stdin_after_root_answer() {
    if is_child() {
        return;
    }
    let stdout = run_child("child_answers_then_reads_stdin", "src/\nnext-step-answer\n");
    assert!(
        stdout.contains(r#"answers first="src/" next="next-step-answer""#),
        "stdout: {stdout}"
    );
}

#[test]
fn timed_sources_share_stdin_lines() {
    if is_child() {
        return;
    }
    let stdout = run_child("child_reads_through_timed_sources", "one\ntwo\nthree\n");
    assert!(
        stdout.contains(r#"answers first="one" second="two" third="three""#),
        "stdout: {stdout}"
    );
}

#[test]
fn child_answers_then_reads_stdin() {
    if !is_child() {
        return;
    }
    let mut prompter = TerminalPrompter::stdio(None);
    let first = prompter.input("Root?", None).expect("first answer");
    drop(prompter);

    let mut next = String::new();
    io::stdin().lock().read_line(&mut next).expect("read next");
    println!("answers first={first:?} next={:?}", next.trim_end());
}

#[test]
fn child_reads_through_timed_sources() {
    if !is_child() {
        return;
    }
    let timeout = Some(Duration::from_secs(10));
    let first = LineSource::stdin(timeout).next_line().expect("first");
    let second = LineSource::stdin(timeout).next_line().expect("second");
    // Once the timed reader exists, untimed sources go through it too.
    let third = LineSource::stdin(None).next_line().expect("third");
    println!("answers first={first:?} second={second:?} third={third:?}");
}

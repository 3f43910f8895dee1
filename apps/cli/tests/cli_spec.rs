use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use std::fs::File;
use std::io::Write;
use tempfile::tempdir;

#[test]
fn html_from_stdin_by_default() {
    let mut cmd = cargo_bin_cmd!("headmark");
    cmd.write_stdin("# Title\nbody\n## Sub")
        .assert()
        .success()
        .stdout("<h1>Title</h1>\nbody\n<h2>Sub</h2>\n");
}

#[test]
fn empty_stdin_prints_empty_line() {
    let mut cmd = cargo_bin_cmd!("headmark");
    cmd.write_stdin("").assert().success().stdout("\n");
}

#[test]
fn plain_text_passes_through_unescaped() {
    let mut cmd = cargo_bin_cmd!("headmark");
    cmd.write_stdin("a < b & c\n### deep")
        .assert()
        .success()
        .stdout("a < b & c\n### deep\n");
}

#[test]
fn reads_from_file_path() {
    let dir = tempdir().expect("temp dir");
    let file_path = dir.path().join("input.md");
    let mut f = File::create(&file_path).expect("create file");
    write!(f, "# Hello from file").expect("write file");

    let mut cmd = cargo_bin_cmd!("headmark");
    cmd.arg("--input")
        .arg(&file_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>Hello from file</h1>"));
}

#[test]
fn tokens_format_is_json_array() {
    let mut cmd = cargo_bin_cmd!("headmark");
    let output = cmd
        .args(["--format", "tokens"])
        .write_stdin("# Header 1\nText 1")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let v: Value = serde_json::from_slice(&output).expect("valid JSON");
    let arr = v.as_array().expect("array");
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0].get("type").and_then(|t| t.as_str()), Some("Header"));
    assert_eq!(arr[0].get("level").and_then(|l| l.as_u64()), Some(1));
    assert_eq!(arr[0].get("text").and_then(|t| t.as_str()), Some("Header 1"));
    assert_eq!(arr[1].get("type").and_then(|t| t.as_str()), Some("Text"));
    assert_eq!(arr[1].get("text").and_then(|t| t.as_str()), Some("Text 1"));
}

#[test]
fn pretty_tokens_span_multiple_lines() {
    let mut cmd = cargo_bin_cmd!("headmark");
    cmd.args(["-f", "tokens", "--pretty"])
        .write_stdin("## Sub")
        .assert()
        .success()
        .stdout(predicate::str::contains("\n  {").and(predicate::str::contains("\"level\": 2")));
}

#[test]
fn file_not_found_errors() {
    let mut cmd = cargo_bin_cmd!("headmark");
    cmd.arg("--input")
        .arg("/definitely/not/found.md")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error: cannot read file"));
}

#[test]
fn unsupported_format_errors() {
    let mut cmd = cargo_bin_cmd!("headmark");
    cmd.args(["--format", "pdf"])
        .write_stdin("x")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported format 'pdf'"));
}

#[test]
fn unexpected_arguments_error() {
    let mut cmd = cargo_bin_cmd!("headmark");
    cmd.arg("stray")
        .write_stdin("x")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error: unexpected arguments"));
}

#[cfg(unix)]
#[test]
fn non_utf8_argument_is_an_error_not_a_crash() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let mut cmd = cargo_bin_cmd!("headmark");
    cmd.arg(OsStr::from_bytes(b"\xff"))
        .write_stdin("x")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error: unexpected arguments"));
}

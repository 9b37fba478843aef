//! Command line tests for the `luagen` binary

use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

const ADD_MODULE: &str = r#"{
  "name": "add",
  "items": [
    { "function": {
        "name": "add",
        "nargs": 2,
        "vars": [ { "name": "a", "type": "i64" }, { "name": "b", "type": "i64" } ],
        "res_types": [ "i64" ],
        "insns": [
          { "code": "add", "ops": [ { "reg": 0 }, { "reg": 0 }, { "reg": 1 } ] },
          { "code": "ret", "ops": [ { "reg": 0 } ] }
        ]
    } }
  ]
}"#;

const PAIR_MODULE: &str = r#"{
  "name": "pair",
  "items": [
    { "prototype": { "name": "pair_p", "res_types": [ "i64", "i64" ] } },
    { "import": "pair" },
    { "function": {
        "name": "main",
        "nargs": 0,
        "vars": [ { "name": "a", "type": "i64" }, { "name": "b", "type": "i64" } ],
        "insns": [
          { "code": "call", "ops": [ { "ref": 0 }, { "reg": 0 }, { "reg": 1 }, { "ref": 1 } ] },
          { "code": "ret", "ops": [] }
        ]
    } }
  ]
}"#;

const ADD_LUA: &str = "function add(a, b)\n    a = a + b\n    return a\nend\n";

fn luagen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_luagen"))
}

#[test]
fn test_file_to_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("add.json");
    let output = dir.path().join("add.lua");
    std::fs::write(&input, ADD_MODULE).unwrap();

    let status = luagen().arg(&input).arg("-o").arg(&output).status().unwrap();
    assert!(status.success());
    assert_eq!(std::fs::read_to_string(&output).unwrap(), ADD_LUA);
}

#[test]
fn test_stdin_to_stdout() {
    let mut child = luagen()
        .arg("--indent")
        .arg("2")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(ADD_MODULE.as_bytes()).unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "function add(a, b)\n  a = a + b\n  return a\nend\n"
    );
}

#[test]
fn test_multi_result_call_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("pair.json");
    std::fs::write(&input, PAIR_MODULE).unwrap();

    let output = luagen().arg(&input).output().unwrap();
    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "function main()\n    local a\n    local b\n");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("main"), "{stderr}");
}

#[test]
fn test_keep_going_still_fails_but_finishes() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("pair.json");
    std::fs::write(&input, PAIR_MODULE).unwrap();

    let output = luagen().arg(&input).arg("--keep-going").output().unwrap();
    assert!(!output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "function main()\n    local a\n    local b\n    return\nend\n"
    );
}

#[test]
fn test_malformed_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bad.json");
    std::fs::write(&input, "{ \"name\": 3 }").unwrap();

    let output = luagen().arg(&input).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr).unwrap().contains("invalid IR module"));
}

#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let output = luagen().arg(dir.path().join("nope.json")).output().unwrap();
    assert!(!output.status.success());
}

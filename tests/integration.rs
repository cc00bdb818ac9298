// Integration testing can be done either by calling library functions directly or by invoking your CLI as a subprocess.
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const LAYOUT: &str = r#"
project:
  name: my_project
  version: 0.1
  description: Example project

directories:
  - name: a
    type: directory
  - name: b
    type: directory
  - name: c
    type: directory
    children:
      - name: notes.md
        type: file
  - name: link
    type: symlink
  - name: configs
    type: directory
    children:
      - name: logging
        type: directory

logging:
  root_log_level: DEBUG
  log_file_path: /var/log/app.log
"#;

const TEMPLATE: &str = include_str!("../logging_config_template.json");

fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("project_structure.yaml"), LAYOUT).unwrap();
    fs::write(dir.path().join("logging_config_template.json"), TEMPLATE).unwrap();
    dir
}

fn scaffy(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("scaffy").unwrap();
    cmd.current_dir(dir.path()).env("NO_COLOR", "1");
    cmd
}

#[test]
fn builds_project_tree() {
    let dir = workspace();

    scaffy(&dir)
        .arg("project_structure.yaml")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project name: my_project"))
        .stdout(predicate::str::contains("Project version: 0.1"))
        .stdout(predicate::str::contains("Project description: Example project"));

    for name in ["a", "b", "c", "configs/logging"] {
        assert!(dir.path().join(name).is_dir(), "{name} should be a directory");
    }
    assert_eq!(
        fs::read_to_string(dir.path().join("c/notes.md")).unwrap(),
        "# file automatically generated"
    );
    assert!(!dir.path().join("link").exists());
}

#[test]
fn top_level_siblings_are_created_in_reverse() {
    let dir = workspace();

    let output = scaffy(&dir)
        .arg("project_structure.yaml")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let position = |needle: &str| stdout.find(needle).unwrap();

    assert!(position("create ./configs\n") < position("create ./c\n"));
    assert!(position("create ./c\n") < position("create ./c/notes.md"));
    assert!(position("create ./c/notes.md") < position("create ./b\n"));
    assert!(position("create ./b\n") < position("create ./a\n"));
}

#[test]
fn renders_logging_config() {
    let dir = workspace();

    scaffy(&dir)
        .arg("project_structure.yaml")
        .assert()
        .success()
        .stdout(predicate::str::contains("logging configuration saved at"));

    let rendered =
        fs::read_to_string(dir.path().join("configs/logging/logging_config.json")).unwrap();

    assert_eq!(
        rendered,
        TEMPLATE
            .replace("${LOG_FILE_PATH}", "/var/log/app.log")
            .replace("${ROOT_LOG_LEVEL}", "DEBUG")
    );
    assert!(!rendered.contains("${"));
}

#[test]
fn rerun_keeps_existing_files() {
    let dir = workspace();

    scaffy(&dir).arg("project_structure.yaml").assert().success();
    fs::write(dir.path().join("c/notes.md"), "edited").unwrap();

    scaffy(&dir)
        .arg("project_structure.yaml")
        .assert()
        .success()
        .stdout(predicate::str::contains("exists ./a"))
        .stdout(predicate::str::contains("exists ./c/notes.md"));

    assert_eq!(
        fs::read_to_string(dir.path().join("c/notes.md")).unwrap(),
        "edited"
    );
}

#[test]
fn missing_document_is_reported_without_failing() {
    let dir = TempDir::new().unwrap();

    scaffy(&dir)
        .arg("nope.yaml")
        .assert()
        .success()
        .stderr(predicate::str::contains("nope.yaml"));

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn missing_template_fails_the_run() {
    let dir = workspace();
    fs::remove_file(dir.path().join("logging_config_template.json")).unwrap();

    scaffy(&dir)
        .arg("project_structure.yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("logging template"));

    assert!(dir.path().join("configs/logging").is_dir());
}

#[test]
fn spec_argument_is_required() {
    let dir = TempDir::new().unwrap();

    scaffy(&dir).assert().failure();
}

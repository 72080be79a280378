#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

fn cmd(temp: &TempDir) -> assert_cmd::Command {
    let mut c = assert_cmd::Command::cargo_bin("notecard_cli").unwrap();
    c.env("NOTECARD_DB_PATH", temp.path().join("notes.db"))
        .env_remove("NOTECARD_LOG_DIR")
        .env_remove("NOTECARD_LOG_LEVEL");
    c
}

fn create(temp: &TempDir, args: &[&str]) -> String {
    let output = cmd(temp)
        .arg("create")
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

#[test]
fn edit_saves_and_redirects_to_note_detail() {
    let temp = TempDir::new().unwrap();
    let id = create(&temp, &["--title", "A", "--tag", "x"]);

    cmd(&temp)
        .args(["edit", id.as_str(), "--title", "Hi", "--add-tag", "y", "--reference", "p. 9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note updated"))
        .stdout(predicate::str::contains(format!("-> /notes/{id}")))
        .stdout(predicate::str::contains("tags: x, y"));

    cmd(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{id}\tHi\tx,y")));
}

#[test]
fn edit_missing_note_redirects_home_and_fails() {
    let temp = TempDir::new().unwrap();

    cmd(&temp)
        .args(["edit", "42", "--title", "Hi"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("-> /"))
        .stderr(predicate::str::contains("Note not found"));
}

#[test]
fn edit_with_blank_title_is_rejected() {
    let temp = TempDir::new().unwrap();
    let id = create(&temp, &["--title", "Keep"]);

    cmd(&temp)
        .args(["edit", id.as_str(), "--title", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Title required"));

    cmd(&temp)
        .args(["show", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Keep"));
}

#[test]
fn show_prints_markdown_sections() {
    let temp = TempDir::new().unwrap();
    let id = create(
        &temp,
        &["--title", "Study", "--notes", "# Part 1\nalpha\n# Part 2\nbeta"],
    );

    cmd(&temp)
        .args(["show", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Part 1]\nalpha"))
        .stdout(predicate::str::contains("[Part 2]\nbeta"));
}

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

/// A working directory with a local config pointing at a small word list
fn workspace(words: &str) -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("words.txt"), words).unwrap();
    fs::write(
        dir.path().join(".spellfix.toml"),
        "word_list = \"words.txt\"\n",
    )
    .unwrap();
    dir
}

fn spellfix(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("spellfix").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_missing_input_file() {
    let dir = workspace("this is a test");

    spellfix(dir.path())
        .args(["--file", "missing.txt", "--output", "out.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: The file missing.txt was not found.",
        ));

    assert!(!dir.path().join("out.txt").exists());
}

#[test]
fn test_missing_output_flag_is_usage_error() {
    let dir = workspace("this is a test");
    fs::write(dir.path().join("in.txt"), "this").unwrap();

    spellfix(dir.path())
        .args(["-f", "in.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--output"));
}

#[test]
fn test_known_words_are_normalized_without_prompt() {
    let dir = workspace("this is a test");
    fs::write(dir.path().join("in.txt"), "This  is\na\ttest\n").unwrap();
    fs::write(dir.path().join("out.txt"), "stale content that is longer").unwrap();

    spellfix(dir.path())
        .args(["-f", "in.txt", "-o", "out.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Misspelled").not())
        .stdout(predicate::str::contains(
            "Corrected text saved to 'out.txt'.",
        ));

    assert_eq!(
        fs::read_to_string(dir.path().join("out.txt")).unwrap(),
        "This is a test"
    );
}

#[test]
fn test_interactive_correction() {
    let dir = workspace("this is a test");
    fs::write(dir.path().join("in.txt"), "Ths is a tst").unwrap();

    spellfix(dir.path())
        .args(["--file", "in.txt", "--output", "out.txt"])
        .write_stdin("1\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Misspelled word: 'Ths'"))
        .stdout(predicate::str::contains("1: This"))
        .stdout(predicate::str::contains("1: test"));

    assert_eq!(
        fs::read_to_string(dir.path().join("out.txt")).unwrap(),
        "This is a test"
    );
}

#[test]
fn test_built_in_dictionary() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("in.txt"), "Ths is a tst").unwrap();

    let assert = spellfix(dir.path())
        .args(["--file", "in.txt", "--output", "out.txt"])
        .write_stdin("1\n1\n")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.matches("Choose the correct word").count(), 2);
    assert!(stdout.contains("Misspelled word: 'Ths'\n1: This\n"));
    assert!(stdout.contains("Misspelled word: 'tst'\n1: test\n"));

    assert_eq!(
        fs::read_to_string(dir.path().join("out.txt")).unwrap(),
        "This is a test"
    );
}

#[test]
fn test_invalid_entries_are_reprompted() {
    let dir = workspace("this is a test");
    fs::write(dir.path().join("in.txt"), "Ths is a tst").unwrap();

    spellfix(dir.path())
        .args(["--file", "in.txt", "--output", "out.txt"])
        .write_stdin("x\n5\n1\n0\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input. Please enter a number."))
        .stdout(predicate::str::contains("Invalid choice. Please try again."));

    assert_eq!(
        fs::read_to_string(dir.path().join("out.txt")).unwrap(),
        "This is a test"
    );
}

#[test]
fn test_word_without_suggestions_passes_through() {
    let dir = workspace("this is a test");
    fs::write(dir.path().join("in.txt"), "this is xqzvw").unwrap();

    spellfix(dir.path())
        .args(["--file", "in.txt", "--output", "out.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No suggestions for 'xqzvw', keeping original.",
        ));

    assert_eq!(
        fs::read_to_string(dir.path().join("out.txt")).unwrap(),
        "this is xqzvw"
    );
}

#[test]
fn test_closed_input_writes_nothing() {
    let dir = workspace("this is a test");
    fs::write(dir.path().join("in.txt"), "a tst").unwrap();

    spellfix(dir.path())
        .args(["--file", "in.txt", "--output", "out.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Input closed"));

    assert!(!dir.path().join("out.txt").exists());
}

#[test]
fn test_unreadable_input_is_reported() {
    let dir = workspace("this is a test");
    fs::create_dir(dir.path().join("folder")).unwrap();

    spellfix(dir.path())
        .args(["--file", "folder", "--output", "out.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: Could not read folder"));

    assert!(!dir.path().join("out.txt").exists());
}

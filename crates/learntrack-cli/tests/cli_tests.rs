//! CLI integration tests using assert_cmd with scripted stdin sessions.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn learntrack() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("learntrack").unwrap()
}

#[test]
fn banner_and_exit() {
    learntrack()
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Learning Progress Tracker\n"))
        .stdout(predicate::str::contains("Bye!"));
}

#[test]
fn unknown_command() {
    learntrack()
        .write_stdin("quit\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: unknown command!"));
}

#[test]
fn full_session_with_graduation() {
    learntrack()
        .write_stdin(
            "add students\n\
             John Doe jdoe@mail.net\n\
             Jane Spark jane@mail.net\n\
             back\n\
             add points\n\
             1 600 400 0 0\n\
             2 300 0 0 0\n\
             back\n\
             list\n\
             notify\n\
             notify\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Total 2 students have been added."))
        .stdout(predicate::str::contains("Students:\n1\n2\n"))
        .stdout(predicate::str::contains("To: jdoe@mail.net"))
        .stdout(predicate::str::contains(
            "Hello, John Doe! You have accomplished our Java course!",
        ))
        .stdout(predicate::str::contains(
            "Hello, John Doe! You have accomplished our DSA course!",
        ))
        .stdout(predicate::str::contains("Total 1 students have been notified."))
        .stdout(predicate::str::contains("Total 0 students have been notified."));
}

#[test]
fn statistics_and_course_details() {
    learntrack()
        .write_stdin(
            "add students\n\
             John Doe jdoe@mail.net\n\
             back\n\
             add points\n\
             1 650 0 0 0\n\
             back\n\
             statistics\n\
             Java\n\
             back\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Most popular: Java"))
        .stdout(predicate::str::contains("Least popular: n/a"))
        .stdout(predicate::str::contains("id points completed\n1 650 108.3%"));
}

#[test]
fn custom_course_catalog() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("courses.toml");
    std::fs::write(
        &path,
        "[[courses]]\nname = \"Rust\"\nthreshold = 100\n\n[[courses]]\nname = \"Go\"\nthreshold = 200\n",
    )
    .unwrap();

    learntrack()
        .arg("--courses")
        .arg(&path)
        .write_stdin(
            "add students\n\
             Grace Hopper grace@navy.mil\n\
             back\n\
             add points\n\
             1 100 0\n\
             back\n\
             find\n\
             1\n\
             back\n\
             notify\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("1 points: Rust=100; Go=0"))
        .stdout(predicate::str::contains(
            "Hello, Grace Hopper! You have accomplished our Rust course!",
        ));
}

#[test]
fn log_flag_accepts_directive() {
    learntrack()
        .arg("--log")
        .arg("learntrack=debug")
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bye!"));
}

#[test]
fn log_flag_rejects_bad_directive() {
    learntrack()
        .arg("--log")
        .arg("learntrack=notalevel")
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --log directive"));
}

#[test]
fn invalid_course_catalog_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("courses.toml");
    std::fs::write(&path, "[[courses]]\nname = \"Rust\"\nthreshold = 0\n").unwrap();

    learntrack()
        .arg("--courses")
        .arg(&path)
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

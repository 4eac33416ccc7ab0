// Integration testing can be done either by calling library functions directly or by invoking the CLI as a subprocess.
use assert_cmd::Command;

#[test]
fn generate_from_inline_string() {
    let destination = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("dircraft").unwrap();
    cmd.arg("generate")
        .arg("src/main.py:entry; src/utils/; README.md")
        .arg(destination.path())
        .arg("--yes");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("create"));

    assert_eq!(
        std::fs::read_to_string(destination.path().join("src/main.py")).unwrap(),
        "entry"
    );
    assert!(destination.path().join("src/utils").is_dir());
    assert!(destination.path().join("README.md").is_file());
}

#[test]
fn generate_from_tree_text_file() {
    let scratch = tempfile::tempdir().unwrap();
    let input = scratch.path().join("structure.txt");
    std::fs::write(&input, "app\n    ├── main.py # entry\n    └── data\n").unwrap();
    let destination = scratch.path().join("out");

    let mut cmd = Command::cargo_bin("dircraft").unwrap();
    cmd.arg("generate").arg(&input).arg(&destination).arg("--yes");

    cmd.assert().success();

    assert_eq!(
        std::fs::read_to_string(destination.join("app/main.py")).unwrap(),
        "entry"
    );
    assert!(destination.join("app/data").is_dir());
}

#[test]
fn generate_from_yaml_file() {
    let scratch = tempfile::tempdir().unwrap();
    let input = scratch.path().join("structure.yaml");
    std::fs::write(&input, "src:\n  main.py: entry\nREADME.md: docs\n").unwrap();
    let destination = scratch.path().join("out");

    let mut cmd = Command::cargo_bin("dircraft").unwrap();
    cmd.arg("generate").arg(&input).arg(&destination).arg("--yes");

    cmd.assert().success();

    assert_eq!(
        std::fs::read_to_string(destination.join("src/main.py")).unwrap(),
        "entry"
    );
    assert_eq!(
        std::fs::read_to_string(destination.join("README.md")).unwrap(),
        "docs"
    );
}

#[test]
fn preview_prints_the_tree_without_writing() {
    let mut cmd = Command::cargo_bin("dircraft").unwrap();
    cmd.arg("preview").arg("docs/guide.md:hello");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("guide.md"));

    assert!(!std::path::Path::new("docs/guide.md").exists());
}

#[test]
fn strict_dirs_turns_an_extensionless_name_into_a_file() {
    let scratch = tempfile::tempdir().unwrap();
    let input = scratch.path().join("structure.txt");
    std::fs::write(&input, "Makefile\n").unwrap();
    let destination = scratch.path().join("out");

    let mut cmd = Command::cargo_bin("dircraft").unwrap();
    cmd.arg("generate")
        .arg(&input)
        .arg(&destination)
        .arg("--yes")
        .arg("--strict-dirs");

    cmd.assert().success();

    assert!(destination.join("Makefile").is_file());
}

use std::fs;

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::tempdir;

const SCHEMA: &str = r#"{
    "models": [
        {
            "name": "User",
            "fields": [
                {"name": "id", "kind": "scalar", "type": "Int", "isId": true, "isRequired": true,
                 "default": {"kind": "generated", "name": "autoincrement"}},
                {"name": "profile", "kind": "object", "type": "Profile", "relation": {}}
            ]
        },
        {
            "name": "Profile",
            "fields": [
                {"name": "id", "kind": "scalar", "type": "Int", "isId": true, "isRequired": true,
                 "default": {"kind": "generated", "name": "autoincrement"}},
                {"name": "user", "kind": "object", "type": "User", "isRequired": true,
                 "relation": {"fromFields": ["userId"], "toFields": ["id"], "onDelete": "Cascade"}},
                {"name": "userId", "kind": "scalar", "type": "Int", "isUnique": true, "isRequired": true}
            ]
        }
    ],
    "enums": [{"name": "Role", "values": ["ADMIN", "USER"]}]
}"#;

fn dbmlgen() -> Command {
    Command::new(cargo::cargo_bin!("dbmlgen"))
}

#[test]
fn test_main_with_help_flag() {
    dbmlgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dbmlgen"));
}

#[test]
fn test_main_without_subcommand_fails() {
    dbmlgen().assert().failure();
}

#[test]
fn test_init_writes_config_once() {
    let tmp = tempdir().unwrap();

    dbmlgen()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("dbmlgen.json"));
    assert!(tmp.path().join("dbmlgen.json").exists());

    dbmlgen()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_print_writes_dbml_to_stdout() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("schema.json"), SCHEMA).unwrap();

    dbmlgen()
        .current_dir(tmp.path())
        .arg("print")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "//// ------------------------------------------------------",
        ))
        .stdout(predicate::str::contains("userId Int [unique, not null]"))
        .stdout(predicate::str::contains(
            "Ref: Profile.userId - User.id [delete: Cascade]",
        ));
}

#[test]
fn test_generate_writes_file() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("models.json"), SCHEMA).unwrap();

    dbmlgen()
        .current_dir(tmp.path())
        .args(["generate", "--schema", "models.json", "--out", "diagrams"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated"))
        .stdout(predicate::str::contains("schema.dbml"));

    let written = fs::read_to_string(tmp.path().join("diagrams/schema.dbml")).unwrap();
    assert!(written.contains("Enum Role {\n  ADMIN\n  USER\n}"));
}

#[test]
fn test_generate_reports_missing_schema() {
    let tmp = tempdir().unwrap();

    dbmlgen()
        .current_dir(tmp.path())
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("schema description not found"));
}

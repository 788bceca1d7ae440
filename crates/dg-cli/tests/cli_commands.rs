//! Integration tests for the dg CLI commands.
#![allow(deprecated)] // Command::cargo_bin - macro replacement not yet stable

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn dgen() -> Command {
    let mut cmd = Command::cargo_bin("dgen").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("DGEN_DATA_DIR");
    cmd
}

/// `dgen` pointed at a data directory.
fn dgen_in(data: &Path) -> Command {
    let mut cmd = dgen();
    cmd.env_remove("RUST_LOG")
        .args(["--data-dir", data.to_str().unwrap()]);
    cmd
}

/// A temp data directory with the standard tables installed.
fn initialized() -> TempDir {
    let dir = TempDir::new().unwrap();
    dgen_in(dir.path()).arg("init").assert().success();
    dir
}

/// Generate and save a seeded dungeon, returning its path.
fn saved_dungeon(data: &Path, rooms: &str) -> std::path::PathBuf {
    let file = data.join("dungeon.json");
    dgen_in(data)
        .args([
            "generate",
            "-n",
            rooms,
            "--seed",
            "42",
            "-o",
            file.to_str().unwrap(),
        ])
        .assert()
        .success();
    file
}

fn room_ids(file: &Path) -> Vec<u64> {
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(file).unwrap()).unwrap();
    json["rooms"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_u64().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// init
// ---------------------------------------------------------------------------

#[test]
fn init_installs_standard_tables() {
    let dir = TempDir::new().unwrap();
    dgen_in(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("4 standard tables installed"));

    for name in ["main_features", "corridor_details", "chamber_features", "exits"] {
        assert!(dir.path().join("tables").join(format!("{name}.json")).exists());
    }
    assert!(dir.path().join("custom_tables").is_dir());
}

#[test]
fn init_keeps_existing_tables() {
    let dir = initialized();
    dgen_in(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 standard tables installed"));

    dgen_in(dir.path())
        .args(["init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 standard tables installed"));
}

// ---------------------------------------------------------------------------
// generate
// ---------------------------------------------------------------------------

#[test]
fn generate_prints_rooms() {
    let dir = initialized();
    dgen_in(dir.path())
        .args(["generate", "-n", "3", "--seed", "7"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Random Dungeon")
                .and(predicate::str::contains("Room 1"))
                .and(predicate::str::contains("Room 3"))
                .and(predicate::str::contains("Main entrance")),
        );
}

#[test]
fn generate_is_reproducible_with_seed() {
    let dir = initialized();
    let run = || {
        dgen_in(dir.path())
            .args(["generate", "-n", "4", "--seed", "99"])
            .output()
            .unwrap()
            .stdout
    };
    let first = String::from_utf8(run()).unwrap();
    let second = String::from_utf8(run()).unwrap();
    // Only the creation timestamp differs between runs.
    let rooms = |s: &str| s.lines().skip(2).collect::<Vec<_>>().join("\n");
    assert_eq!(rooms(&first), rooms(&second));
}

#[test]
fn generate_saves_json() {
    let dir = initialized();
    let file = saved_dungeon(dir.path(), "5");
    assert_eq!(room_ids(&file), vec![1, 2, 3, 4, 5]);
}

#[test]
fn generate_themed() {
    let dir = initialized();
    dgen_in(dir.path())
        .args(["generate", "-n", "2", "--theme", "haunted"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Haunted Dungeon")
                .and(predicate::str::contains("This dungeon has a haunted theme.")),
        );
}

#[test]
fn generate_rejects_zero_rooms() {
    let dir = initialized();
    dgen_in(dir.path())
        .args(["generate", "-n", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("room count must be between 1 and 100"));
}

#[test]
fn generate_without_tables_fails() {
    let dir = TempDir::new().unwrap();
    dgen_in(dir.path())
        .args(["generate", "-n", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("main_features"));
}

#[test]
fn generate_with_only_main_features_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let tables = dir.path().join("tables");
    fs::create_dir_all(&tables).unwrap();
    fs::write(
        tables.join("main_features.json"),
        r#"{"table_info": {"name": "main_features"},
            "entries": [{"name": "Corridor", "min": 1, "max": 100}]}"#,
    )
    .unwrap();

    dgen_in(dir.path())
        .args(["generate", "-n", "2"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Simple corridor")
                .and(predicate::str::contains("Exits: Main entrance")),
        );
}

#[test]
fn generate_uses_custom_override() {
    let dir = initialized();
    let custom = dir.path().join("custom_tables");
    fs::write(
        custom.join("main_features.json"),
        r#"{"table_info": {"name": "main_features"},
            "entries": [{"name": "Vault", "min": 1, "max": 100}]}"#,
    )
    .unwrap();

    dgen_in(dir.path())
        .args(["generate", "-n", "2", "--custom"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vault:"));
}

// ---------------------------------------------------------------------------
// show / regenerate / export
// ---------------------------------------------------------------------------

#[test]
fn show_saved_dungeon() {
    let dir = initialized();
    let file = saved_dungeon(dir.path(), "3");
    dgen()
        .args(["show", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rooms:   3").and(predicate::str::contains("Room 2")));
}

#[test]
fn show_single_room() {
    let dir = initialized();
    let file = saved_dungeon(dir.path(), "3");
    dgen()
        .args(["show", file.to_str().unwrap(), "--room", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Room 2").and(predicate::str::contains("Room 1").not()));
}

#[test]
fn show_missing_file_fails() {
    dgen()
        .args(["show", "/nonexistent/dungeon.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot load dungeon"));
}

#[test]
fn regenerate_replaces_room_in_place() {
    let dir = initialized();
    let file = saved_dungeon(dir.path(), "5");
    let before: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&file).unwrap()).unwrap();

    dgen_in(dir.path())
        .args(["regenerate", file.to_str().unwrap(), "3", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Regenerated room 3"));

    let after: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&file).unwrap()).unwrap();
    assert_eq!(room_ids(&file), vec![1, 2, 3, 4, 5]);
    for i in [0, 1, 3, 4] {
        assert_eq!(before["rooms"][i], after["rooms"][i]);
    }
    assert_eq!(before["created_at"], after["created_at"]);
}

#[test]
fn regenerate_unknown_room_leaves_file_alone() {
    let dir = initialized();
    let file = saved_dungeon(dir.path(), "2");
    let before = fs::read_to_string(&file).unwrap();

    dgen_in(dir.path())
        .args(["regenerate", file.to_str().unwrap(), "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no room with id 99"));

    assert_eq!(fs::read_to_string(&file).unwrap(), before);
}

#[test]
fn export_markdown() {
    let dir = initialized();
    let file = saved_dungeon(dir.path(), "2");
    dgen()
        .args(["export", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("# Random Dungeon")
                .and(predicate::str::contains("Total Rooms: 2"))
                .and(predicate::str::contains("## Room 2")),
        );
}

#[test]
fn export_to_file() {
    let dir = initialized();
    let file = saved_dungeon(dir.path(), "2");
    let out = dir.path().join("dungeon.txt");
    dgen()
        .args([
            "export",
            file.to_str().unwrap(),
            "--format",
            "text",
            "-o",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("Dungeon: Random Dungeon"));
}

#[test]
fn export_unsupported_format() {
    let dir = initialized();
    let file = saved_dungeon(dir.path(), "1");
    dgen()
        .args(["export", file.to_str().unwrap(), "--format", "pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported format"));
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_fixed_dice() {
    dgen()
        .args(["roll", "3d1+2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3d1+2 = 5"));
}

#[test]
fn roll_rejects_huge_dice_count() {
    dgen()
        .args(["roll", "2000000000d6"])
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .failure()
        .stderr(predicate::str::contains("too many dice"));
}

#[test]
fn roll_rejects_huge_die() {
    dgen()
        .args(["roll", "1d5000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("die too large"));
}

#[test]
fn roll_invalid_expression() {
    dgen()
        .args(["roll", "banana"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// ---------------------------------------------------------------------------
// tables
// ---------------------------------------------------------------------------

#[test]
fn tables_list_shows_standard() {
    let dir = initialized();
    dgen_in(dir.path())
        .args(["tables", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("main_features")
                .and(predicate::str::contains("exits"))
                .and(predicate::str::contains("4 tables")),
        );
}

#[test]
fn tables_list_empty() {
    let dir = TempDir::new().unwrap();
    dgen_in(dir.path())
        .args(["tables", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tables found"));
}

#[test]
fn tables_show_entries() {
    let dir = initialized();
    dgen_in(dir.path())
        .args(["tables", "show", "exits"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("No additional exits")
                .and(predicate::str::contains("94-100")),
        );
}

#[test]
fn tables_show_accepts_json_suffix() {
    let dir = initialized();
    dgen_in(dir.path())
        .args(["tables", "show", "exits.json"])
        .assert()
        .success();
}

#[test]
fn tables_create_and_edit_custom() {
    let dir = initialized();
    dgen_in(dir.path())
        .args(["tables", "create", "vault_details", "-d", "Vault contents"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created custom table 'vault_details'"));

    dgen_in(dir.path())
        .args(["tables", "add-entry", "vault_details", "Gold", "1", "60"])
        .assert()
        .success();
    dgen_in(dir.path())
        .args(["tables", "add-entry", "vault_details", "Relics", "61", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("as row 2"));

    dgen_in(dir.path())
        .args(["tables", "show", "vault_details", "--scope", "custom"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gold").and(predicate::str::contains("Relics")));

    dgen_in(dir.path())
        .args(["tables", "remove-entry", "vault_details", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 'Gold'"));

    let json = fs::read_to_string(dir.path().join("custom_tables/vault_details.json")).unwrap();
    assert!(!json.contains("Gold"));
    assert!(json.contains("Relics"));
}

#[test]
fn tables_create_rejects_bad_name() {
    let dir = initialized();
    dgen_in(dir.path())
        .args(["tables", "create", "bad name!"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid table name"));
}

#[test]
fn tables_create_rejects_duplicate() {
    let dir = initialized();
    dgen_in(dir.path())
        .args(["tables", "create", "loot"])
        .assert()
        .success();
    dgen_in(dir.path())
        .args(["tables", "create", "loot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn tables_standard_is_read_only() {
    let dir = initialized();
    dgen_in(dir.path())
        .args(["tables", "add-entry", "exits", "Portal", "1", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("standard table and cannot be edited"));
}

#[test]
fn tables_add_entry_validates_bounds() {
    let dir = initialized();
    dgen_in(dir.path())
        .args(["tables", "create", "loot"])
        .assert()
        .success();
    dgen_in(dir.path())
        .args(["tables", "add-entry", "loot", "Coins", "50", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("above max"));
}

#[test]
fn tables_roll() {
    let dir = initialized();
    dgen_in(dir.path())
        .args(["tables", "create", "loot"])
        .assert()
        .success();
    dgen_in(dir.path())
        .args(["tables", "add-entry", "loot", "A single coin", "1", "100"])
        .assert()
        .success();
    dgen_in(dir.path())
        .args(["tables", "roll", "loot", "--scope", "custom", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A single coin"));
}

#[test]
fn tables_roll_unknown_scope() {
    let dir = initialized();
    dgen_in(dir.path())
        .args(["tables", "roll", "exits", "--scope", "global"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown scope"));
}

// ---------------------------------------------------------------------------
// console
// ---------------------------------------------------------------------------

#[test]
fn console_generates_until_quit() {
    let dir = initialized();
    dgen_in(dir.path())
        .args(["console", "--seed", "5"])
        .write_stdin("2\nCrypt\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Crypt").and(predicate::str::contains("Room 2")));
}

#[test]
fn console_reports_bad_input_and_continues() {
    let dir = initialized();
    dgen_in(dir.path())
        .arg("console")
        .write_stdin("lots\n1\n\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("not a number")
                .and(predicate::str::contains("Random Dungeon")),
        );
}

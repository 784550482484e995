//! End-to-end tests for the gymplan binary.
//!
//! Every test runs against its own temporary data and config directories.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

fn cli(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gymplan"));
    cmd.env("XDG_CONFIG_HOME", dir.path().join("config"))
        .env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(dir.path().join("data"));
    cmd
}

fn stored_plan(dir: &TempDir) -> serde_json::Value {
    let text = fs::read_to_string(dir.path().join("data/gym-scheduler-v1.json"))
        .expect("plan should be stored");
    serde_json::from_str(&text).expect("stored plan should be JSON")
}

#[test]
fn test_help() {
    let dir = setup_test_dir();
    cli(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("weekly workouts"));
}

#[test]
fn test_first_run_shows_starter_week() {
    let dir = setup_test_dir();
    cli(&dir)
        .arg("week")
        .assert()
        .success()
        .stdout(predicate::str::contains("Push"))
        .stdout(predicate::str::contains("Pull"))
        .stdout(predicate::str::contains("Legs"))
        .stdout(predicate::str::contains("Sun"));

    assert!(
        !dir.path().join("data/gym-scheduler-v1.json").exists(),
        "viewing the starter plan does not save it"
    );
}

#[test]
fn test_add_saves_workout() {
    let dir = setup_test_dir();
    cli(&dir)
        .args(["add", "Morning Run", "-d", "sat", "-s", "7:30", "--duration", "45"])
        .args(["-g", "Cardio", "-i", "Easy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added"));

    let plan = stored_plan(&dir);
    let events = plan.as_array().unwrap();
    assert_eq!(events.len(), 4, "starter plan plus the new workout");

    let added = &events[3];
    assert_eq!(added["name"], "Morning Run");
    assert_eq!(added["day"], 5);
    assert_eq!(added["startTime"], "07:30");
    assert_eq!(added["durationMin"], 45);
    assert_eq!(added["muscleGroup"], "Cardio");
    assert_eq!(added["intensity"], "Easy");

    cli(&dir)
        .arg("week")
        .assert()
        .success()
        .stdout(predicate::str::contains("Morning Run"))
        .stdout(predicate::str::contains("07:30–08:15"));
}

#[test]
fn test_add_rejects_bad_input() {
    let dir = setup_test_dir();
    cli(&dir)
        .args(["add", "Late", "-s", "25:00"])
        .assert()
        .failure();
    cli(&dir)
        .args(["add", "Someday", "-d", "funday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown day"));
    cli(&dir)
        .args(["add", "   "])
        .assert()
        .failure();

    assert!(!dir.path().join("data/gym-scheduler-v1.json").exists());
}

#[test]
fn test_edit_and_delete_by_id_prefix() {
    let dir = setup_test_dir();
    cli(&dir).args(["add", "Swim", "-d", "tue"]).assert().success();

    let id = stored_plan(&dir)[3]["id"].as_str().unwrap().to_string();

    cli(&dir)
        .args(["edit", &id[..10], "--name", "Long Swim", "--duration", "90"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Long Swim"));

    let plan = stored_plan(&dir);
    assert_eq!(plan[3]["id"], id.as_str(), "editing keeps the id");
    assert_eq!(plan[3]["name"], "Long Swim");
    assert_eq!(plan[3]["durationMin"], 90);
    assert_eq!(plan[3]["day"], 1);

    cli(&dir).args(["delete", &id]).assert().success();
    assert_eq!(stored_plan(&dir).as_array().unwrap().len(), 3);

    cli(&dir)
        .args(["delete", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No workout"));
}

#[test]
fn test_clear_with_yes() {
    let dir = setup_test_dir();
    cli(&dir).args(["clear", "--yes"]).assert().success();

    assert_eq!(stored_plan(&dir), serde_json::json!([]));

    cli(&dir)
        .arg("week")
        .assert()
        .success()
        .stdout(predicate::str::contains("No workouts yet"));
}

#[test]
fn test_share_then_open_restores_plan() {
    let source = setup_test_dir();
    cli(&source)
        .args(["add", "Climb", "-d", "sun", "-n", "Bouldering, then stretch; 🧗"])
        .assert()
        .success();

    let output = cli(&source)
        .args(["share", "--base-url", "https://example.com/plan"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let link = String::from_utf8(output.stdout).unwrap().trim().to_string();
    assert!(link.starts_with("https://example.com/plan#plan="));

    let target = setup_test_dir();
    cli(&target)
        .args(["open", &link])
        .assert()
        .success()
        .stdout(predicate::str::contains(" 4 workouts"))
        .stdout(predicate::str::contains("Climb"));

    assert_eq!(stored_plan(&target), stored_plan(&source));
}

#[test]
fn test_open_rejects_bad_links() {
    let dir = setup_test_dir();
    cli(&dir).args(["clear", "--yes"]).assert().success();

    cli(&dir)
        .args(["open", "https://example.com/#settings"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a plan link"));
    cli(&dir)
        .args(["open", "#plan=%%%invalid"])
        .assert()
        .failure();
    cli(&dir)
        .args(["open", "plan=eyJhIjoxfQ%3D%3D"])
        .assert()
        .failure();

    assert_eq!(stored_plan(&dir), serde_json::json!([]), "a bad link changes nothing");
}

#[test]
fn test_export_ics_writes_calendar() {
    let dir = setup_test_dir();
    let ics = dir.path().join("week.ics");

    cli(&dir)
        .arg("export-ics")
        .arg("-o")
        .arg(&ics)
        .assert()
        .success()
        .stdout(predicate::str::contains(" 3 weekly workouts"));

    let document = fs::read_to_string(&ics).unwrap();
    assert!(document.starts_with("BEGIN:VCALENDAR\r\n"));
    assert!(document.ends_with("END:VCALENDAR\r\n"));
    assert_eq!(document.matches("BEGIN:VEVENT").count(), 3);
    assert!(document.contains("X-WR-CALNAME:Gym Plan\r\n"));
    assert!(document.contains("RRULE:FREQ=WEEKLY;BYDAY=MO\r\n"));
}

#[test]
fn test_export_ics_uses_configured_calendar_name() {
    let dir = setup_test_dir();
    let config_dir = dir.path().join("config/gymplan");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "calendar_name = \"Lifting\"\n").unwrap();

    let ics = dir.path().join("week.ics");
    cli(&dir).arg("export-ics").arg("-o").arg(&ics).assert().success();

    assert!(fs::read_to_string(&ics).unwrap().contains("X-WR-CALNAME:Lifting\r\n"));
}

#[test]
fn test_json_export_then_import() {
    let source = setup_test_dir();
    let file = source.path().join("plan.json");
    cli(&source).args(["add", "Row", "-d", "thu"]).assert().success();
    cli(&source).arg("export-json").arg("-o").arg(&file).assert().success();

    let target = setup_test_dir();
    cli(&target).arg("import-json").arg(&file).assert().success();
    assert_eq!(stored_plan(&target), stored_plan(&source));

    let broken = target.path().join("broken.json");
    fs::write(&broken, "[{\"name\": 3}]").unwrap();
    cli(&target).arg("import-json").arg(&broken).assert().failure();
    assert_eq!(stored_plan(&target), stored_plan(&source));
}

#[test]
fn test_agenda_lists_sessions() {
    let dir = setup_test_dir();
    cli(&dir)
        .args(["agenda", "--days", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Push"))
        .stdout(predicate::str::contains("18:00–19:15"));
}

#[test]
fn test_agenda_rejects_out_of_range_days() {
    let dir = setup_test_dir();
    cli(&dir).args(["agenda", "--days", "0"]).assert().failure();
    cli(&dir)
        .args(["agenda", "--days", "4294967295"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("3660"));
}

#[test]
fn test_config_init_creates_file_once() {
    let dir = setup_test_dir();
    let path = dir.path().join("config/gymplan/config.toml");

    cli(&dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(path.exists());

    cli(&dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    cli(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("gym-scheduler-v1.json"));
}

use assert_cmd::Command;
use predicates::prelude::*;

fn voyage() -> Command {
    Command::cargo_bin("voyage").expect("binary built")
}

#[test]
fn fixed_speed_mission_prints_full_report() {
    voyage()
        .args([
            "--destination",
            "Andromeda Galaxy",
            "--distance-ly",
            "2500000",
            "--mission-id",
            "AND-001",
            "--stages",
            "5",
            "--min-speed",
            "10",
            "--max-speed",
            "10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("MISSION REPORT: AND-001"))
        .stdout(predicate::str::contains("Destination: Andromeda Galaxy"))
        .stdout(predicate::str::contains("Stage 5: speed 10.00% c"))
        .stdout(predicate::str::contains("Total mission time:"));
}

#[test]
fn seeded_runs_are_reproducible() {
    let args = [
        "--destination",
        "Vega",
        "--distance-ly",
        "25",
        "--mission-id",
        "VEG-001",
        "--stages",
        "4",
        "--min-speed",
        "1",
        "--max-speed",
        "8",
        "--seed",
        "42",
    ];

    let first = voyage().args(args).output().expect("run");
    let second = voyage().args(args).output().expect("run");
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn inverted_speed_bounds_are_rejected() {
    voyage()
        .args([
            "--destination",
            "Vega",
            "--distance-ly",
            "25",
            "--mission-id",
            "VEG-002",
            "--min-speed",
            "80",
            "--max-speed",
            "50",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cruise speeds must satisfy"));
}

#[test]
fn destination_resolves_from_yaml_catalog() {
    let dir = tempfile::tempdir().expect("tempdir");
    let catalog = dir.path().join("destinations.yaml");
    std::fs::write(
        &catalog,
        "- name: Proxima Centauri\n  distance_ly: 4.25\n- name: Andromeda Galaxy\n  distance_ly: 2500000\n",
    )
    .expect("write catalog");

    voyage()
        .args([
            "--catalog",
            catalog.to_str().unwrap(),
            "--to",
            "proxima centauri",
            "--mission-id",
            "PRX-001",
            "--seed",
            "7",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Destination: Proxima Centauri"))
        .stdout(predicate::str::contains("Original distance: 4.25 light-years"));
}

#[test]
fn json_flag_writes_sidecar() {
    let dir = tempfile::tempdir().expect("tempdir");
    let sidecar = dir.path().join("reports/and-002.json");

    voyage()
        .args([
            "--destination",
            "Andromeda Galaxy",
            "--distance-ly",
            "2500000",
            "--mission-id",
            "AND-002",
            "--seed",
            "1",
            "--json",
            sidecar.to_str().unwrap(),
        ])
        .assert()
        .success();

    let contents = std::fs::read_to_string(&sidecar).expect("sidecar written");
    assert!(contents.contains("\"mission_id\": \"AND-002\""));
    assert!(contents.contains("\"stages\""));
}

#[test]
fn missing_target_arguments_fail_with_guidance() {
    voyage()
        .args(["--mission-id", "NIL-001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--catalog"));
}

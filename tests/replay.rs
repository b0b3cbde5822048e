use assert_cmd::Command;
use figdata::{replay, ClickOutcome, Session, Stage};
use std::fs;

const SCRIPT: &str = "\
# x-axis anchors
10 5
110 5
# y-axis anchors
5 20
5 220
# plot window corners
10 20
110 220
# data
60 120
200, 120
outside
";

#[test]
fn replay_drives_a_full_session() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("replay.data");
    let events = replay::parse_script(SCRIPT).unwrap();
    let mut session = Session::new(&out);
    let outcomes = replay::run(&mut session, "0,1", "0,2", &events).unwrap();
    assert_eq!(outcomes.len(), 9);
    assert!(matches!(
        outcomes.last(),
        Some(ClickOutcome::Saved { records, .. }) if records.len() == 2
    ));
    assert_eq!(session.stage(), Stage::Saved);
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "0.500000 1.000000 1\n1.900000 1.000000 0\n"
    );
}

#[test]
fn replay_without_outside_click_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("unsaved.data");
    let events =
        replay::parse_script("10 5\n110 5\n5 20\n5 220\n10 20\n110 220\n60 120\n").unwrap();
    let mut session = Session::new(&out);
    replay::run(&mut session, "0,1", "0,2", &events).unwrap();
    assert_eq!(session.stage(), Stage::CollectingData);
    assert!(!out.exists());
}

#[test]
fn cli_replay_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let clicks = dir.path().join("clicks.txt");
    let out = dir.path().join("cli.data");
    fs::write(&clicks, SCRIPT).unwrap();

    Command::cargo_bin("figdata")
        .unwrap()
        .args(["replay", "--x-range", "0,1", "--y-range", "0,2", "--precision", "2"])
        .arg("--clicks")
        .arg(&clicks)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&out).unwrap(), "0.50 1.00 1\n1.90 1.00 0\n");
}

#[test]
fn cli_replay_rejects_malformed_axis_values() {
    let dir = tempfile::tempdir().unwrap();
    let clicks = dir.path().join("clicks.txt");
    let out = dir.path().join("bad.data");
    fs::write(&clicks, SCRIPT).unwrap();

    Command::cargo_bin("figdata")
        .unwrap()
        .args(["replay", "--x-range", "0;1", "--y-range", "0,2"])
        .arg("--clicks")
        .arg(&clicks)
        .arg("--output")
        .arg(&out)
        .assert()
        .failure();

    assert!(!out.exists());
}

use std::path::PathBuf;
use std::process::{Command, Output};

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("bounce lives inside the workspace")
        .to_path_buf()
}

fn bounce(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bounce"))
        .args(args)
        .current_dir(workspace_root())
        .env("RUST_LOG", "info")
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to launch bounce")
}

fn logs(output: &Output) -> String {
    format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

#[test]
fn demo_runs_and_reports_progress() {
    let output = bounce(&["--steps", "20", "--log-every", "10"]);
    let logs = logs(&output);
    assert!(output.status.success(), "{logs}");
    assert!(logs.contains("scene loaded"), "{logs}");
    assert!(logs.contains("simulation step complete"), "{logs}");
    assert!(logs.contains("simulation loop finished"), "{logs}");
}

#[test]
fn sample_scenes_run() {
    for scene in ["scenes/cradle.json", "scenes/box_room.json"] {
        let output = bounce(&["--scene", scene, "--steps", "200", "--dt", "0.01"]);
        assert!(output.status.success(), "{scene}: {}", logs(&output));
    }
}

#[test]
fn missing_scene_fails_with_the_path() {
    let output = bounce(&["--scene", "scenes/does_not_exist.json", "--steps", "1"]);
    assert!(!output.status.success());
    assert!(logs(&output).contains("does_not_exist.json"));
}

#[test]
fn watch_requires_a_scene() {
    let output = bounce(&["--watch", "--steps", "1"]);
    assert!(!output.status.success());
}

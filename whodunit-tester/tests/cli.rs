use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "whodunit-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_scenarios_writes_output() {
    let exe = env!("CARGO_BIN_EXE_whodunit-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-scenarios", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available scenarios"));
    assert!(content.contains("regenerate"));
}

#[test]
fn cli_runs_smoke_against_fake_with_json_report() {
    let exe = env!("CARGO_BIN_EXE_whodunit-tester");
    let output_path = temp_path("run");
    let status = Command::new(exe)
        .args(["--report", "json", "--scenarios", "smoke", "--seeds", "1", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("json report");
    assert_eq!(parsed[0]["scenario_name"], "smoke");
    assert_eq!(parsed[0]["passed"], true);
}

#[test]
fn cli_rejects_unknown_scenario() {
    let exe = env!("CARGO_BIN_EXE_whodunit-tester");
    let output = Command::new(exe)
        .args(["--scenarios", "weather"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown scenario"));
}

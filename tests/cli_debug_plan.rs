//! Debug verbosity prints the plan and never runs rsync

#![cfg(unix)]

mod common;

use common::{stdout, TestEnv};

#[test]
fn debug_pull_prints_rules_without_running() {
    let env = TestEnv::new();

    let output = env.run(&["pull", "-p", "RunA", "-d"]);

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(env.rsync_args(), None);

    let out = stdout(&output);
    assert!(out.contains("(debug, nothing transferred)"), "{}", out);
    assert!(
        out.contains(&format!(
            "Source:      cluster:{}",
            TestEnv::project_dir(&env.host_root, "RunA")
        )),
        "{}",
        out
    );
    assert!(
        out.contains(&format!(
            "Destination: {}",
            TestEnv::project_dir(&env.data_root, "RunA")
        )),
        "{}",
        out
    );
    assert!(out.contains("  - */gb/\n  - */soil/\n  + */\n"), "{}", out);
    assert!(out.contains("  - *\n"), "{}", out);
}

#[test]
fn debug_does_not_create_destination() {
    let env = TestEnv::new();

    let output = env.run(&["pull", "-p", "RunA", "--debug", "--archive", "RunA.zip"]);

    assert!(output.status.success());
    assert!(!env.data_root.join("HGS").exists());
    assert!(!env.data_root.join("HGS/RunA.zip").exists());
}

#[test]
fn debug_verbosity_from_environment() {
    let env = TestEnv::new();

    let output = env
        .hgsync()
        .env("HGSYNC_VERBOSITY", "debug")
        .args(["push", "-p", "RunA"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(env.rsync_args(), None);
    assert!(stdout(&output).contains("hgsync push (debug, nothing transferred)"));
}

#[test]
fn debug_json_is_one_plan_event() {
    let env = TestEnv::new();

    let output = env.run(&["push", "-p", "RunA", "-d", "-y", "--json"]);

    assert!(output.status.success());
    let out = stdout(&output);
    let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
    assert_eq!(value["event"], "plan");

    let patterns: Vec<&str> = value["plan"]["filters"]["rules"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["pattern"].as_str().unwrap())
        .collect();
    assert_eq!(patterns, vec!["*.yaml", "*/", "*.asc", "*"]);
}

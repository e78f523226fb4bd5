//! Configuration errors abort before rsync is spawned

#![cfg(unix)]

mod common;

use std::fs;

use common::{stderr, TestEnv};

#[test]
fn missing_project_exits_one() {
    let env = TestEnv::new();

    let output = env.run(&["pull"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("'project'"), "{}", stderr(&output));
    assert_eq!(env.rsync_args(), None);
}

#[test]
fn missing_data_root_exits_one() {
    let env = TestEnv::new();
    fs::write(&env.config, "[remote]\nhost = \"cluster\"\nhost_root = \"/scratch\"\n").unwrap();

    let output = env.run(&["pull", "-p", "RunA"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("DATA_ROOT"), "{}", stderr(&output));
}

#[test]
fn environment_supplies_roots() {
    let env = TestEnv::new();
    fs::write(
        &env.config,
        format!("[transfer]\nniceness = 0\nrsync = \"{}\"\n", env.rsync.display()),
    )
    .unwrap();

    let output = env
        .hgsync()
        .env("HOST", "envhost")
        .env("HOST_ROOT", "/scratch/env")
        .env("DATA_ROOT", &env.data_root)
        .args(["pull", "-p", "RunA"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", stderr(&output));
    let args = env.rsync_args().unwrap();
    assert!(args.contains(&"envhost:/scratch/env/HGS/RunA/".to_string()));
}

#[test]
fn unreadable_explicit_config_exits_one() {
    let env = TestEnv::new();

    let output = env
        .hgsync()
        .env("HGSYNC_CONFIG", env.dir.path().join("missing.toml"))
        .args(["pull", "-p", "RunA"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("cannot read config file"));
    assert_eq!(env.rsync_args(), None);
}

#[test]
fn invalid_project_exits_one() {
    let env = TestEnv::new();

    let output = env.run(&["push", "-p", "../escape"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(env.rsync_args(), None);
}

#[test]
fn unknown_config_key_warns_and_continues() {
    let env = TestEnv::new();
    let config = fs::read_to_string(&env.config).unwrap();
    fs::write(&env.config, format!("{}nicenes = 3\n", config)).unwrap();

    let output = env.run(&["push", "-p", "RunA"]);

    assert!(output.status.success());
    let err = stderr(&output);
    assert!(err.contains("Unknown config key 'nicenes'"), "{}", err);
    assert!(err.contains("Did you mean 'niceness'?"), "{}", err);
}

#[test]
fn missing_rsync_exits_127() {
    let env = TestEnv::new();

    let output = env
        .hgsync()
        .env("HGSYNC_RSYNC", env.dir.path().join("no-such-rsync"))
        .args(["push", "-p", "RunA"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(127));
    assert!(stderr(&output).contains("failed to launch"));
}

#[test]
fn out_of_range_config_niceness_exits_one() {
    let env = TestEnv::new();
    let config = fs::read_to_string(&env.config)
        .unwrap()
        .replace("niceness = 0", "niceness = 40");
    fs::write(&env.config, config).unwrap();

    let output = env.run(&["push", "-p", "RunA"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("niceness 40 is out of range"), "{}", stderr(&output));
    assert_eq!(env.rsync_args(), None);
}

#[test]
fn out_of_range_cli_niceness_is_usage_error() {
    let env = TestEnv::new();

    let output = env.run(&["push", "-p", "RunA", "-n", "25"]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(env.rsync_args(), None);
}

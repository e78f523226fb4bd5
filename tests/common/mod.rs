//! Common test utilities for hgsync CLI tests.
//!
//! `TestEnv` gives each test its own roots, config file and a fake rsync
//! that records its arguments and exits with `FAKE_RSYNC_EXIT`.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const FAKE_RSYNC: &str = r#"#!/bin/sh
printf '%s\n' "$@" > "$FAKE_RSYNC_LOG"
exit "${FAKE_RSYNC_EXIT:-0}"
"#;

/// Isolated environment for one CLI test
pub struct TestEnv {
    pub dir: TempDir,
    pub host_root: PathBuf,
    pub data_root: PathBuf,
    pub config: PathBuf,
    pub rsync: PathBuf,
    pub rsync_log: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let host_root = dir.path().join("host");
        let data_root = dir.path().join("data");
        fs::create_dir_all(&host_root).unwrap();
        fs::create_dir_all(&data_root).unwrap();

        let rsync = dir.path().join("fake-rsync");
        fs::write(&rsync, FAKE_RSYNC).unwrap();
        fs::set_permissions(&rsync, fs::Permissions::from_mode(0o755)).unwrap();

        let config = dir.path().join("config.toml");
        fs::write(
            &config,
            format!(
                "[remote]\nhost = \"cluster\"\nhost_root = \"{}\"\n\n[local]\ndata_root = \"{}\"\n\n[transfer]\nniceness = 0\nrsync = \"{}\"\n",
                host_root.display(),
                data_root.display(),
                rsync.display()
            ),
        )
        .unwrap();

        let rsync_log = dir.path().join("rsync-args.txt");
        Self {
            dir,
            host_root,
            data_root,
            config,
            rsync,
            rsync_log,
        }
    }

    /// hgsync with a clean environment pointing at this test's config
    pub fn hgsync(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_hgsync"));
        for var in [
            "HOST",
            "HOST_ROOT",
            "DATA_ROOT",
            "HGSYNC_NICENESS",
            "HGSYNC_RSYNC",
            "HGSYNC_VERBOSITY",
            "HGSYNC_LOG",
        ] {
            cmd.env_remove(var);
        }
        cmd.env("HGSYNC_CONFIG", &self.config);
        cmd.env("FAKE_RSYNC_LOG", &self.rsync_log);
        cmd.current_dir(self.dir.path());
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.hgsync().args(args).output().unwrap()
    }

    /// Arguments the fake rsync received, or `None` if it never ran
    pub fn rsync_args(&self) -> Option<Vec<String>> {
        let text = fs::read_to_string(&self.rsync_log).ok()?;
        Some(text.lines().map(str::to_string).collect())
    }

    /// `{root}/HGS/{project}/` as the resolver renders it
    pub fn project_dir(root: &Path, project: &str) -> String {
        format!("{}/HGS/{}/", root.display(), project)
    }

    pub fn write_data_file(&self, project: &str, relative: &str, content: &str) {
        let path = self.data_root.join("HGS").join(project).join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

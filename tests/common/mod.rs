#![allow(dead_code)]

use assert_cmd::Command;
use tempfile::TempDir;

pub fn solace_cmd() -> Command {
    let mut cmd = Command::cargo_bin("solace").unwrap();
    cmd.env_remove("SOLACE_ROOT");
    cmd.env_remove("SOLACE_OWNER");
    cmd.env_remove("SOLACE_LOG");
    cmd
}

/// A fresh journal owned by `owner`
pub fn init_journal(owner: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    solace_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--owner")
        .arg(owner)
        .assert()
        .success();
    temp
}

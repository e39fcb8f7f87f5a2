#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::fixture::ChildPath;
use assert_fs::prelude::{FileWriteStr, PathChild};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

pub const LOG_SEPARATOR: &str =
    "------------------------------------------------------------------------";

// Stands in for svn: records every invocation in calls.log and serves
// `info`/`update` from the `rev` and `next` state files.
const FAKE_SVN_SCRIPT: &str = r#"#!/bin/sh
state="$(dirname "$0")"
echo "$*" >> "$state/calls.log"

case "$1" in
    info)
        if [ ! -f "$state/rev" ]; then
            echo "svn: E155007: '$PWD' is not a working copy" >&2
            exit 1
        fi
        echo "Path: ."
        echo "URL: https://svn.example.org/repo/trunk"
        echo "Revision: $(cat "$state/rev")"
        echo "Node Kind: directory"
        ;;
    update)
        if [ -f "$state/next" ]; then
            mv "$state/next" "$state/rev"
            echo "U    main.c"
            echo "A    docs/readme.txt"
        fi
        echo "At revision $(cat "$state/rev" 2>/dev/null || echo 0)."
        ;;
    log)
        echo "------------------------------------------------------------------------"
        echo "r11 | alice | 2024-01-01 10:00:00 +0000 (Mon, 01 Jan 2024) | 1 line"
        echo "Changed paths:"
        echo "   M /trunk/main.c"
        echo ""
        echo "fix the build"
        echo "------------------------------------------------------------------------"
        ;;
    status)
        echo "M       main.c"
        echo "?       notes.txt"
        ;;
    cleanup)
        echo "svn: E155004: Working copy '$PWD' locked" >&2
        exit 3
        ;;
    commit)
        exit "$(cat "$state/commit_exit" 2>/dev/null || echo 0)"
        ;;
    *)
        echo "$*"
        ;;
esac
"#;

/// A throwaway directory holding an executable fake `svn` and its state
pub struct FakeSvn {
    dir: TempDir,
}

impl FakeSvn {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let script = dir.child("svn");
        script.write_str(FAKE_SVN_SCRIPT)?;
        std::fs::set_permissions(script.path(), std::fs::Permissions::from_mode(0o755))?;

        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn child(&self, name: &str) -> ChildPath {
        self.dir.child(name)
    }

    pub fn program(&self) -> PathBuf {
        self.dir.path().join("svn")
    }

    pub fn set_revision(&self, revision: u64) -> Result<(), Box<dyn std::error::Error>> {
        self.dir.child("rev").write_str(&revision.to_string())?;
        Ok(())
    }

    /// Revision the working copy moves to on the next `update`.
    pub fn set_next_revision(&self, revision: u64) -> Result<(), Box<dyn std::error::Error>> {
        self.dir.child("next").write_str(&revision.to_string())?;
        Ok(())
    }

    pub fn set_commit_exit_code(&self, code: i32) -> Result<(), Box<dyn std::error::Error>> {
        self.dir.child("commit_exit").write_str(&code.to_string())?;
        Ok(())
    }

    pub fn write_config(&self, content: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.dir.child("svn-color.toml").write_str(content)?;
        Ok(())
    }

    /// Argument lists the fake received, one entry per invocation.
    pub fn calls(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.calls_log())
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Raw calls.log content, for arguments that are not valid UTF-8.
    pub fn calls_log(&self) -> Vec<u8> {
        std::fs::read(self.dir.path().join("calls.log")).unwrap_or_default()
    }
}

/// The wrapper binary wired to `fake`, with paging disabled.
pub fn svn_color_command(fake: &FakeSvn) -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("svn-color")?;
    cmd.current_dir(fake.path())
        .env("SVN_COLOR_SVN", fake.program())
        .env("SVN_CONFIG_DIR", fake.path())
        .env("NO_PAGER", "1")
        .env_remove("SVN_COLOR_LOG");

    Ok(cmd)
}

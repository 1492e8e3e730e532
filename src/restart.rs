//! Terminal refresh after a configuration write.
//!
//! Relaunching the terminal is a best-effort convenience triggered only
//! by an explicit flag: every step swallows its errors and nothing
//! downstream depends on the outcome.

use std::process::{Command, Stdio};

use crate::logs::debug;

/// Kill and relaunch the kitty terminal so the new prompt config loads.
///
/// Does nothing unless a kitty process is currently running. The
/// replacement process is spawned detached with its output discarded,
/// and failures at any step are ignored.
pub fn refresh_terminal() {
    let running = Command::new("pgrep")
        .arg("kitty")
        .output()
        .is_ok_and(|output| !output.stdout.is_empty());
    if !running {
        debug("no kitty process found, skipping restart");
        return;
    }

    let _ = Command::new("pkill")
        .arg("kitty")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    let _ = Command::new("kitty")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();
}

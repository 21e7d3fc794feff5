// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal and session state detection for interactive output.
//!
//! Interactive echoing is only worth switching on when a human is
//! watching. This module checks the terminal, the environment, and the
//! process group to decide that, and parses the boolean environment
//! flags the engine reads at construction.

use is_terminal::IsTerminal;

#[cfg(test)]
#[path = "detect_tests.rs"]
mod tests;

/// Returns true if the current process is an interactive human session.
///
/// Criteria:
/// - stdout is a TTY
/// - Not in a CI environment
/// - Running in the foreground of the terminal
pub fn is_interactive_session() -> bool {
    // Must be a TTY
    if !std::io::stdout().is_terminal() {
        return false;
    }

    // Must not be CI
    if std::env::var_os("CI").is_some() {
        return false;
    }

    // Must not be backgrounded
    if !is_foreground_process() {
        return false;
    }

    true
}

/// Check if this process is running in the foreground of the terminal.
///
/// A backgrounded process (e.g., `cmd &`) should not echo interactive
/// output. This function checks if the process's process group matches
/// the terminal's foreground process group.
///
/// Returns `true` if we're in the foreground, `false` if backgrounded.
/// On non-Unix systems the check is skipped and the process counts as
/// foreground.
#[cfg(unix)]
pub fn is_foreground_process() -> bool {
    use std::os::unix::io::AsFd;

    // Get stdin file descriptor
    let stdin = std::io::stdin();
    let fd = stdin.as_fd();

    // tcgetpgrp returns Err if fd is not a controlling terminal.
    let foreground_pgrp = match nix::unistd::tcgetpgrp(fd) {
        Ok(pid) => pid,
        Err(_) => {
            // Not a controlling terminal - foreground status cannot be
            // determined, so keep interactive echoing off.
            return false;
        }
    };

    let my_pgrp = nix::unistd::getpgrp();

    foreground_pgrp == my_pgrp
}

#[cfg(not(unix))]
pub fn is_foreground_process() -> bool {
    // On non-Unix systems, assume we're in the foreground
    true
}

/// Parses a boolean environment flag.
///
/// Truthy spellings are `1`, `true`, `yes`, and `on`; falsy spellings
/// are `0`, `false`, `no`, and `off`, all case-insensitive. Unset or
/// unrecognized values yield `None` so callers apply their own default.
pub(crate) fn env_flag(name: &str) -> Option<bool> {
    let value = std::env::var(name).ok()?;
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

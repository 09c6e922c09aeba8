//! External tool plumbing: PATH probes and quiet child-process runs.
//!
//! Every collaborator (inkscape, convert, optipng) is driven the same way:
//! spawn, block until exit, discard its output, and treat a non-zero status
//! as fatal. Probes are the one exception; a missing binary there is a
//! normal `false`, never an error.

use std::process::{Command, Stdio};

use crate::error::{ExportError, Result};

/// Whether `command --version` can be launched and exits 0.
///
/// Launch failure (binary not on PATH) and non-zero exit both read as
/// "unavailable"; this never propagates an error.
pub fn is_on_path(command: &str) -> bool {
    Command::new(command)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Run a tool to completion with stdout and stderr discarded.
///
/// Blocks until the child exits. Non-zero exit or a failed launch is an
/// `Execution` error naming the tool.
pub fn run_quiet(tool: &str, args: &[String]) -> Result<()> {
    let status = Command::new(tool)
        .args(args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|e| ExportError::Execution {
            message: format!("failed to launch '{}': {}", tool, e),
            help: None,
        })?;

    if !status.success() {
        return Err(ExportError::Execution {
            message: match status.code() {
                Some(code) => format!("'{}' exited with status {}", tool, code),
                None => format!("'{}' was terminated by a signal", tool),
            },
            help: None,
        });
    }

    Ok(())
}

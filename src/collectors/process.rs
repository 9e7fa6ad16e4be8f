//! Thin subprocess wrapper for collectors that drive tools directly.
//!
//! Failure policy: a tool that cannot be located or spawned yields `None`;
//! a tool that runs but exits non-zero still yields its output, because
//! linters and type checkers signal findings through the exit code.

use std::path::Path;
use std::process::Command;

#[derive(Debug)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, or None when terminated by a signal.
    pub status: Option<i32>,
}

pub fn run_tool(program: &str, args: &[&str], cwd: &Path) -> Option<ToolOutput> {
    let resolved = match which::which(program) {
        Ok(path) => path,
        Err(e) => {
            log::warn!("Tool '{}' not found: {}", program, e);
            return None;
        }
    };

    match Command::new(&resolved).args(args).current_dir(cwd).output() {
        Ok(output) => Some(ToolOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            status: output.status.code(),
        }),
        Err(e) => {
            log::warn!("Failed to run '{}': {}", program, e);
            None
        }
    }
}

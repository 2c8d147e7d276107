//! External command execution shared by the artisan and composer adapters

use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

/// What happens to a child's stdout/stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Child writes straight to our terminal
    #[default]
    Inherit,
    /// Output is captured; stderr is attached to the error on failure.
    /// Used with `--json` so the event stream on stdout stays clean.
    Capture,
}

/// A fully specified command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// `program arg1 arg2` for logs and error messages
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run in `cwd`, failing on spawn errors and non-zero exit codes
    pub fn run(&self, cwd: &Path, mode: OutputMode) -> Result<()> {
        let started = Instant::now();
        info!(command = %self.display(), cwd = %cwd.display(), "running command");

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).current_dir(cwd).stdin(Stdio::null());

        match mode {
            OutputMode::Inherit => {
                let status = cmd
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .status()
                    .with_context(|| format!("failed to run '{}'", self.display()))?;
                debug!(
                    command = %self.display(),
                    code = ?status.code(),
                    duration_ms = started.elapsed().as_millis() as u64,
                    "command finished"
                );
                if !status.success() {
                    bail!(
                        "'{}' exited with code {}",
                        self.display(),
                        exit_code_display(status.code())
                    );
                }
            }
            OutputMode::Capture => {
                let output = cmd
                    .output()
                    .with_context(|| format!("failed to run '{}'", self.display()))?;
                debug!(
                    command = %self.display(),
                    code = ?output.status.code(),
                    stdout_len = output.stdout.len(),
                    stderr_len = output.stderr.len(),
                    duration_ms = started.elapsed().as_millis() as u64,
                    "command finished"
                );
                if !output.status.success() {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    let stdout = String::from_utf8_lossy(&output.stdout);
                    let detail = if stderr.trim().is_empty() {
                        stdout.trim().to_string()
                    } else {
                        stderr.trim().to_string()
                    };
                    bail!(
                        "'{}' exited with code {}: {}",
                        self.display(),
                        exit_code_display(output.status.code()),
                        detail
                    );
                }
            }
        }
        Ok(())
    }
}

fn exit_code_display(code: Option<i32>) -> String {
    code.map(|c| c.to_string())
        .unwrap_or_else(|| "none (terminated by signal)".to_string())
}

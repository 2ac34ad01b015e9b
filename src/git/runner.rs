// ABOUTME: Narrow seam for invoking external executables.
// ABOUTME: Production impl uses tokio::process; tests substitute a scripted fake.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Captured result of an external command.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    /// Exit code, if the process exited normally.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Executes external commands on behalf of the orchestrator.
///
/// `run` captures output for commands whose stdout we inspect; `run_inherited`
/// streams the child's output straight to the terminal for long-running steps
/// like the site build.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Path>,
    ) -> std::io::Result<CommandOutput>;

    async fn run_inherited(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Path>,
    ) -> std::io::Result<CommandOutput>;
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    fn command(program: &str, args: &[&str], cwd: Option<&Path>) -> Command {
        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        cmd
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Path>,
    ) -> std::io::Result<CommandOutput> {
        tracing::debug!(program, ?args, ?cwd, "running command");

        let output = Self::command(program, args, cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        Ok(CommandOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    async fn run_inherited(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Path>,
    ) -> std::io::Result<CommandOutput> {
        tracing::debug!(program, ?args, ?cwd, "running command with inherited stdio");

        let status = Self::command(program, args, cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await?;

        Ok(CommandOutput {
            exit_code: status.code(),
            stdout: String::new(),
            stderr: String::new(),
        })
    }
}

/// One recorded command invocation, for logging and test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: &str, args: &[&str], cwd: Option<&Path>) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: cwd.map(Path::to_path_buf),
        }
    }

    /// Render as a shell-like line, for diagnostics only.
    pub fn display_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

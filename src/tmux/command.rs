// ABOUTME: Tmux command executor
//
// Runs the tmux binary with an argument vector, inheriting the caller's stdin
// so that server creation and attach can take over the terminal, while stdout
// and stderr are captured separately. No retries: one process per call.

use async_trait::async_trait;
use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use super::error::TmuxError;
use super::socket::ServerRef;

/// Name of the multiplexer executable looked up on the search path
pub const TMUX_BINARY: &str = "tmux";

/// Captured output of a successful tmux invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Output with the given stdout and empty stderr
    pub fn stdout(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }
}

/// Seam between tmux-speaking code and the process that runs tmux.
///
/// Implementations receive the full argument vector (socket selector
/// included) and must return `TmuxError::Execution` for a non-zero exit.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, args: Vec<String>) -> Result<CommandOutput, TmuxError>;
}

/// Build the argument vector for a command, prefixed with the socket selector
/// when a server is given.
pub fn server_args(server: Option<&ServerRef>, args: &[&str]) -> Vec<String> {
    let mut argv = Vec::with_capacity(args.len() + 2);
    if let Some(server) = server {
        argv.push("-S".to_string());
        argv.push(server.socket_path.display().to_string());
    }
    argv.extend(args.iter().map(ToString::to_string));
    argv
}

/// Runs the real tmux binary
#[derive(Debug, Clone)]
pub struct TmuxCommand {
    binary: PathBuf,
}

impl TmuxCommand {
    /// Resolve tmux from `$PATH`
    pub fn locate() -> Result<Self, TmuxError> {
        Self::locate_in(std::env::var_os("PATH"))
    }

    /// Resolve tmux from an explicit search path (a `PATH`-style list)
    pub fn locate_in<P: AsRef<OsStr>>(paths: Option<P>) -> Result<Self, TmuxError> {
        let cwd = std::env::current_dir().unwrap_or_default();
        let binary = which::which_in(TMUX_BINARY, paths, cwd).map_err(|_| {
            TmuxError::BinaryNotFound {
                binary: TMUX_BINARY.to_string(),
            }
        })?;
        debug!("Using tmux at {}", binary.display());
        Ok(Self { binary })
    }

    /// Use an explicit binary instead of searching the path
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

#[async_trait]
impl CommandRunner for TmuxCommand {
    async fn run(&self, args: Vec<String>) -> Result<CommandOutput, TmuxError> {
        debug!(?args, "Running tmux");

        let output = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| TmuxError::Spawn {
                binary: self.binary.display().to_string(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            debug!(status = %output.status, stderr = %stderr.trim(), "tmux exited non-zero");
            return Err(TmuxError::Execution {
                command: args.join(" "),
                status: output.status.to_string(),
                stdout,
                stderr,
            });
        }

        Ok(CommandOutput { stdout, stderr })
    }
}

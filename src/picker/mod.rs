// ABOUTME: Interactive session picker built on an fzf-tmux popup
//
// Feeds the session list to fzf-tmux, which runs in a tmux popup with two
// views: live sessions (initial) and candidate directories (reloaded from
// `flow find`). The kill and reload keybindings run inside fzf itself and
// are never observed here, so the session list sent at launch may go stale
// while the popup is open.

pub mod selection;

use async_trait::async_trait;
use std::borrow::Cow;
use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::{ChildStdin, Command};
use tracing::{debug, info};

use crate::config::PopupConfig;
use crate::tmux::ServerRef;

pub use selection::Selection;

/// Name of the popup executable looked up on the search path
pub const PICKER_BINARY: &str = "fzf-tmux";

/// Exit status fzf uses when the user aborts with Esc or Ctrl-C
pub const CANCELLED_EXIT_CODE: i32 = 130;

const SESSIONS_PROMPT: &str = " Sessions: ";
const DIRS_PROMPT: &str = " Common dirs: ";
const PANE_LABEL: &str = "Currently active pane";
const DIRS_LABEL: &str = "Files";
const HEADER: &str = "\x1b[1;34m<tab>\x1b[m: common dirs / \x1b[1;34m<shift-tab>\x1b[m: sessions / \x1b[1;34m<ctrl-k>\x1b[m: kill session";

/// Errors that can occur while running the picker
#[derive(Error, Debug)]
pub enum PickerError {
    /// fzf-tmux is not on the search path
    #[error("Couldn't find {0} in the PATH")]
    BinaryNotFound(String),

    /// The popup process could not be started
    #[error("Failed to start picker: {0}")]
    Spawn(#[source] io::Error),

    /// Waiting on the popup failed
    #[error("Picker I/O error: {0}")]
    Io(#[from] io::Error),

    /// The popup exited with an unexpected status
    #[error("Picker exited with {status}: {}", .stderr.trim())]
    Failed {
        /// Exit code, or a description when killed by a signal
        status: String,
        stdout: String,
        stderr: String,
    },

    /// The popup reported success without printing a selection
    #[error("Picker returned an empty selection")]
    EmptySelection,
}

/// Result of one completed popup interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    Selected(Selection),
    /// The user aborted; not an error
    Cancelled,
}

/// Seam between the switch flow and the interactive popup
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionPicker: Send + Sync {
    /// Show `candidates` (session names, in server order) and wait for a choice
    async fn select(&self, candidates: Vec<String>) -> Result<PickerOutcome, PickerError>;
}

/// fzf-tmux popup bound to one tmux server
#[derive(Debug, Clone)]
pub struct Picker {
    binary: PathBuf,
    popup: PopupConfig,
    socket: ServerRef,
    find_command: String,
}

impl Picker {
    /// Resolve fzf-tmux from `$PATH`
    pub fn locate(popup: PopupConfig, socket: ServerRef, find_command: String) -> Result<Self, PickerError> {
        Self::locate_in(std::env::var_os("PATH"), popup, socket, find_command)
    }

    /// Resolve fzf-tmux from an explicit search path (a `PATH`-style list)
    pub fn locate_in<P: AsRef<OsStr>>(
        paths: Option<P>,
        popup: PopupConfig,
        socket: ServerRef,
        find_command: String,
    ) -> Result<Self, PickerError> {
        let cwd = std::env::current_dir().unwrap_or_default();
        let binary = which::which_in(PICKER_BINARY, paths, cwd)
            .map_err(|_| PickerError::BinaryNotFound(PICKER_BINARY.to_string()))?;
        Ok(Self::with_binary(binary, popup, socket, find_command))
    }

    /// Use an explicit picker binary
    pub fn with_binary(
        binary: impl Into<PathBuf>,
        popup: PopupConfig,
        socket: ServerRef,
        find_command: String,
    ) -> Self {
        Self {
            binary: binary.into(),
            popup,
            socket,
            find_command,
        }
    }

    /// Full fzf-tmux argument vector.
    ///
    /// Every tmux command embedded in a binding targets this picker's socket.
    /// Actions carrying shell commands use `~` delimiters so a `)` in a quoted
    /// path doesn't end the action.
    pub fn args(&self) -> Vec<String> {
        let tmux = format!("tmux -S {}", quote(&self.socket.socket_path.display().to_string()));
        let list_sessions = format!("{tmux} list-sessions -F '#{{session_name}}'");
        let pane_preview = format!(
            "active_pane_id=$({tmux} display-message -t ={{}} -p '#{{pane_id}}'); {tmux} capture-pane -ep -t $active_pane_id"
        );
        let dir_preview_cmd: Vec<String> =
            self.popup.preview_dir_cmd.iter().map(|arg| quote(arg)).collect();
        let dir_preview = format!("{} {{}}", dir_preview_cmd.join(" "));

        vec![
            "--layout".to_string(),
            "reverse".to_string(),
            "--no-multi".to_string(),
            "-p".to_string(),
            format!("{},{}", self.popup.width, self.popup.length),
            "--prompt".to_string(),
            SESSIONS_PROMPT.to_string(),
            "--header".to_string(),
            HEADER.to_string(),
            "--preview".to_string(),
            pane_preview.clone(),
            "--bind".to_string(),
            format!(
                "tab:reload~{}~+change-prompt({DIRS_PROMPT})+change-preview~{dir_preview}~+change-preview-label({DIRS_LABEL})",
                self.find_command
            ),
            "--bind".to_string(),
            format!(
                "shift-tab:reload~{list_sessions}~+change-prompt({SESSIONS_PROMPT})+change-preview~{pane_preview}~+change-preview-label({PANE_LABEL})"
            ),
            "--bind".to_string(),
            format!("ctrl-k:execute~{tmux} kill-session -t ={{}}~+reload~{list_sessions}~"),
            "--preview-label".to_string(),
            PANE_LABEL.to_string(),
            "--preview-window".to_string(),
            format!(
                "{},{},border-{}",
                self.popup.preview_pos, self.popup.preview_size, self.popup.preview_border
            ),
            "--border".to_string(),
            self.popup.border.clone(),
            "--no-separator".to_string(),
        ]
    }
}

#[async_trait]
impl SessionPicker for Picker {
    async fn select(&self, candidates: Vec<String>) -> Result<PickerOutcome, PickerError> {
        debug!("Launching picker with {} candidates", candidates.len());

        let mut child = Command::new(&self.binary)
            .args(self.args())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(PickerError::Spawn)?;

        let stdin = child.stdin.take().ok_or_else(|| {
            PickerError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "picker stdin unavailable"))
        })?;

        // Write the list concurrently: the popup may not drain its input until
        // it has started rendering, and the list can exceed the pipe buffer.
        let writer = tokio::spawn(write_candidates(stdin, candidate_input(&candidates)));

        let output = child.wait_with_output().await?;

        match writer.await {
            Ok(Ok(())) => {}
            // The popup may exit before reading everything; that's its call
            Ok(Err(e)) => debug!("Picker input writer stopped early: {}", e),
            Err(e) => debug!("Picker input writer task failed: {}", e),
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let outcome = interpret_exit(output.status.code(), &stdout, &stderr)?;
        info!("Picker outcome: {:?}", outcome);
        Ok(outcome)
    }
}

/// Newline-terminated candidate list, one per line, order preserved
pub fn candidate_input(candidates: &[String]) -> String {
    let mut input = candidates.join("\n");
    if !input.is_empty() {
        input.push('\n');
    }
    input
}

/// Write the candidate list and close the picker's stdin.
///
/// `stdin` is owned here, so it is dropped (closed) on every return path.
async fn write_candidates(mut stdin: ChildStdin, input: String) -> io::Result<()> {
    stdin.write_all(input.as_bytes()).await?;
    stdin.shutdown().await
}

/// Map the popup's exit status and output onto an outcome
pub fn interpret_exit(code: Option<i32>, stdout: &str, stderr: &str) -> Result<PickerOutcome, PickerError> {
    match code {
        Some(0) => {
            let line = stdout.trim().lines().next().unwrap_or_default();
            Selection::classify(line)
                .map(PickerOutcome::Selected)
                .ok_or(PickerError::EmptySelection)
        }
        Some(CANCELLED_EXIT_CODE) => Ok(PickerOutcome::Cancelled),
        other => Err(PickerError::Failed {
            status: other.map_or_else(|| "signal".to_string(), |code| format!("exit code {code}")),
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        }),
    }
}

/// Shell command that re-invokes this executable with `subcommand`,
/// forwarding an explicit config path
pub fn self_command(exe: &Path, config: Option<&Path>, subcommand: &str) -> String {
    let mut command = quote(&exe.display().to_string());
    if let Some(config) = config {
        command.push_str(" --config ");
        command.push_str(&quote(&config.display().to_string()));
    }
    command.push(' ');
    command.push_str(subcommand);
    command
}

fn quote(value: &str) -> String {
    shell_escape::escape(Cow::Borrowed(value)).into_owned()
}

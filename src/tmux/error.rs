// ABOUTME: Error taxonomy for tmux command execution and session queries
//
// Every failure that crosses the tmux subprocess boundary is one of these.
// Execution errors keep both output buffers so callers can tell an empty
// result apart from explanatory stderr such as "no sessions".

use thiserror::Error;

/// Errors raised by the command executor and the session directory
#[derive(Error, Debug)]
pub enum TmuxError {
    /// Required executable is not on the search path
    #[error("Couldn't find {binary} in the PATH")]
    BinaryNotFound {
        /// Name of the missing executable
        binary: String,
    },

    /// The process could not be spawned or waited on
    #[error("Failed to run {binary}: {source}")]
    Spawn {
        /// Executable that failed to launch
        binary: String,
        #[source]
        source: std::io::Error,
    },

    /// tmux exited with a non-zero status
    #[error("tmux {command} failed ({status}): {}", .stderr.trim())]
    Execution {
        /// Argument vector that was run, joined with spaces
        command: String,
        /// Exit status as reported by the OS
        status: String,
        /// Captured standard output
        stdout: String,
        /// Captured standard error
        stderr: String,
    },

    /// Structured tmux output did not have the expected shape
    #[error("Malformed session record {record:?}: {reason}")]
    Parse {
        /// The offending output line
        record: String,
        /// What was wrong with it
        reason: String,
    },

    /// Session name rejected before any subprocess call
    #[error("Invalid session name {name:?}: {reason}")]
    Validation {
        /// Name as supplied by the caller
        name: String,
        /// Which constraint was violated
        reason: String,
    },

    /// Session does not exist at query time
    #[error("Session {0:?} doesn't exist")]
    NotFound(String),
}

impl TmuxError {
    /// True when tmux reports that the server has no sessions or is not running.
    ///
    /// Callers use this to turn an otherwise fatal failure into "create a
    /// session first".
    pub fn is_no_sessions(&self) -> bool {
        match self {
            Self::Execution { stderr, .. } => {
                stderr.contains("no sessions")
                    || stderr.contains("no server running")
                    || stderr.contains("error connecting to")
            }
            _ => false,
        }
    }
}

// ABOUTME: Tmux server addressing and session management for flow
//
// This module provides everything that talks to the tmux binary:
// - Socket resolution (socket name vs socket path)
// - A command executor with a mockable runner seam
// - Server-scoped lifecycle commands (start, attach, switch-client)
// - The session directory (list, lookup, existence, creation)

pub mod command;
pub mod error;
pub mod server;
pub mod session;
pub mod socket;

pub use command::{CommandOutput, CommandRunner, TmuxCommand};
pub use error::TmuxError;
pub use server::TmuxServer;
pub use session::SessionRecord;
pub use socket::{ServerRef, SocketEnv};

/// Check whether the process is running inside a tmux client
pub fn inside_tmux() -> bool {
    std::env::var_os("TMUX").is_some_and(|value| !value.is_empty())
}

// ABOUTME: Server-scoped tmux handle
//
// Binds a command runner to one resolved socket so every command issued
// through it carries `-S <path>`. Session directory queries live in
// session.rs as a second impl block on the same type.

use tracing::info;

use super::command::{server_args, CommandOutput, CommandRunner};
use super::error::TmuxError;
use super::socket::ServerRef;

/// tmux target prefix that forces an exact session-name match
pub const EXACT_MATCH_PREFIX: char = '=';

/// Target string for exactly the named session
pub fn exact_target(name: &str) -> String {
    format!("{EXACT_MATCH_PREFIX}{name}")
}

/// One tmux server reached through a command runner
#[derive(Debug)]
pub struct TmuxServer<R> {
    runner: R,
    socket: ServerRef,
}

impl<R: CommandRunner> TmuxServer<R> {
    pub fn new(runner: R, socket: ServerRef) -> Self {
        Self { runner, socket }
    }

    pub fn socket(&self) -> &ServerRef {
        &self.socket
    }

    /// Run a tmux command against this server
    pub async fn run(&self, args: &[&str]) -> Result<CommandOutput, TmuxError> {
        self.runner.run(server_args(Some(&self.socket), args)).await
    }

    /// Start the server by creating a detached session.
    ///
    /// tmux creates the server on demand for the first session.
    pub async fn start(&self, init_session: &str) -> Result<(), TmuxError> {
        info!("Starting tmux server {} with session '{}'", self.socket, init_session);
        self.run(&["new-session", "-d", "-s", init_session]).await?;
        Ok(())
    }

    /// Attach the terminal to a session on this server.
    ///
    /// Without a target tmux prefers the most recently used unattached session.
    pub async fn attach(&self, target: Option<&str>) -> Result<(), TmuxError> {
        info!("Attaching to tmux server {} (target: {:?})", self.socket, target);
        match target {
            Some(target) => self.run(&["attach-session", "-t", target]).await?,
            None => self.run(&["attach-session"]).await?,
        };
        Ok(())
    }

    /// Move the current client to the named session
    pub async fn switch_client(&self, name: &str) -> Result<(), TmuxError> {
        info!("Switching client to session '{}'", name);
        self.run(&["switch-client", "-t", &exact_target(name)]).await?;
        Ok(())
    }
}

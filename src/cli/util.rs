// ABOUTME: Shared CLI utilities for resolving and connecting to a tmux server

use anyhow::{bail, Result};
use tracing::info;

use super::SocketArgs;
use flow::tmux::{self, ServerRef, SocketEnv, TmuxCommand, TmuxServer};

impl SocketArgs {
    /// Resolve the flags against the process environment
    pub fn resolve(&self) -> ServerRef {
        ServerRef::resolve(
            self.name.as_deref(),
            self.path.as_deref(),
            &SocketEnv::from_env(),
        )
    }

    /// Server handle backed by the real tmux binary
    pub fn connect(&self) -> Result<TmuxServer<TmuxCommand>> {
        let socket = self.resolve();
        info!("Targeting server {}", socket);
        Ok(TmuxServer::new(TmuxCommand::locate()?, socket))
    }
}

/// Fail when already inside tmux; attaching would nest clients
pub fn ensure_outside_tmux() -> Result<()> {
    if tmux::inside_tmux() {
        bail!("Shouldn't nest tmux sessions: already running inside tmux");
    }
    Ok(())
}

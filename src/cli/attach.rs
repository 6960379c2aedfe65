// ABOUTME: CLI attach command - attach to a tmux server's session
//
// Attaches to the given target or, without one, to the session tmux picks.
// A server with no sessions (or none running) gets the init session first.

use anyhow::{Context, Result};
use tracing::info;

use super::util::ensure_outside_tmux;
use super::AttachArgs;
use flow::config::FlowConfig;

/// Execute the attach command
pub async fn execute(args: AttachArgs, config: &FlowConfig) -> Result<()> {
    ensure_outside_tmux()?;

    let server = args.socket.connect()?;
    let target = args.target.as_deref().filter(|target| !target.is_empty());

    match server.attach(target).await {
        Ok(()) => Ok(()),
        Err(e) if e.is_no_sessions() && target.is_none() => {
            let init_session = &config.flow.init_session_name;
            info!(
                "No sessions on {}, creating '{}' before attaching",
                server.socket(),
                init_session
            );
            server
                .start(init_session)
                .await
                .with_context(|| format!("Error while starting server {}", server.socket()))?;
            server
                .attach(None)
                .await
                .with_context(|| format!("Error while attaching to server {}", server.socket()))
        }
        Err(e) => Err(e)
            .with_context(|| format!("Error while attaching to server {}", server.socket())),
    }
}

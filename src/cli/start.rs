// ABOUTME: CLI start command - start a tmux server and attach to it
//
// Creates the configured init session unless it already exists on the
// targeted server, then attaches the terminal.

use anyhow::{Context, Result};
use tracing::info;

use super::util::ensure_outside_tmux;
use super::SocketArgs;
use flow::config::FlowConfig;

/// Execute the start command
pub async fn execute(args: SocketArgs, config: &FlowConfig) -> Result<()> {
    ensure_outside_tmux()?;

    let server = args.connect()?;
    let init_session = &config.flow.init_session_name;

    if server.session_exists(init_session).await {
        info!("Session '{}' already exists on {}", init_session, server.socket());
    } else {
        server
            .start(init_session)
            .await
            .with_context(|| format!("Error while starting server {}", server.socket()))?;
    }

    server
        .attach(None)
        .await
        .with_context(|| format!("Error while attaching to server {}", server.socket()))
}

// ABOUTME: CLI switch command - pick a session in a popup and switch to it
//
// Only meaningful from inside tmux: the popup and the switch both target the
// server named by $TMUX.

use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::info;

use flow::config::FlowConfig;
use flow::picker::{self_command, Picker};
use flow::switch::pick_and_switch;
use flow::tmux::{self, ServerRef, TmuxCommand, TmuxServer};

/// Execute the switch command
pub async fn execute(config: &FlowConfig, config_path: Option<&Path>) -> Result<()> {
    if !tmux::inside_tmux() {
        bail!("Not running inside tmux: switch needs an attached client");
    }

    let socket = ServerRef::current().context("Couldn't read the current server from $TMUX")?;
    let server = TmuxServer::new(TmuxCommand::locate()?, socket.clone());

    let exe = std::env::current_exe().context("Couldn't locate the flow executable")?;
    let find_command = self_command(&exe, config_path, "find");
    let picker = Picker::locate(config.popup.clone(), socket, find_command)?;

    match pick_and_switch(&server, &picker).await? {
        Some(name) => info!("Switched to session '{}'", name),
        None => info!("Switch cancelled"),
    }
    Ok(())
}

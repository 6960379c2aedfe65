// ABOUTME: Main entry point for flow, a tmux session switcher
//
// Binary: flow
// Usage: flow <COMMAND>
// - start: start a tmux server and attach to it
// - attach: attach to an existing server
// - switch: pick a session in an fzf-tmux popup and switch to it
// - find: list candidate directories for new sessions
// - list: show a server's sessions

#![allow(missing_docs)]

use anyhow::Result;
use clap::Parser;

use flow::config::FlowConfig;

mod cli;

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();

    let args = cli::Cli::parse();
    let config = FlowConfig::load(args.config.as_deref())?;

    match args.command {
        cli::Commands::Start(socket_args) => cli::start::execute(socket_args, &config).await,
        cli::Commands::Attach(attach_args) => cli::attach::execute(attach_args, &config).await,
        cli::Commands::Switch => cli::switch::execute(&config, args.config.as_deref()).await,
        cli::Commands::Find => cli::find::execute(&config).await,
        cli::Commands::List(socket_args) => cli::list::execute(socket_args, args.format).await,
    }
}

fn setup_logging() {
    use std::fs::OpenOptions;
    use std::sync::Mutex;
    use tracing_subscriber::prelude::*;

    // stdout carries picker input and `find` output, so logs only go to a file
    let log_dir = dirs::state_dir()
        .map(|dir| dir.join("flow").join("logs"))
        .or_else(|| dirs::home_dir().map(|home| home.join(".flow").join("logs")));

    // One appended file: the popup re-runs `flow find` on every reload
    let file = log_dir.and_then(|dir| {
        std::fs::create_dir_all(&dir).ok()?;
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join("flow.jsonl"))
            .ok()
    });

    let file_layer = file.map(|file| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(file_layer)
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flow=info".into()),
        )
        .init();
}

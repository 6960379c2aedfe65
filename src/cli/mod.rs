// ABOUTME: CLI argument parsing and command routing for flow
//
// Provides command-line interface for:
// - Starting a tmux server and attaching to it (start)
// - Attaching to an existing server (attach)
// - Switching sessions through the fzf-tmux popup (switch)
// - Listing candidate directories for new sessions (find)
// - Listing a server's sessions (list)

pub mod attach;
pub mod find;
pub mod list;
pub mod start;
pub mod switch;
pub mod util;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI for managing tmux sessions
#[derive(Parser, Debug)]
#[command(name = "flow")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (default: ~/.config/flow/config.toml)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start a tmux server with either a given socket name or path and attach to it
    Start(SocketArgs),

    /// Attach to an existing tmux server, preferring the most recently used session
    Attach(AttachArgs),

    /// Pick an existing session to switch to or create one from common directories
    Switch,

    /// List candidate directories for new sessions
    Find,

    /// List the sessions of a tmux server
    List(SocketArgs),
}

/// Which tmux server to target. Only one of name or path is accepted.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct SocketArgs {
    /// tmux server socket name
    #[arg(short = 'n', long = "name", conflicts_with = "path")]
    pub name: Option<String>,

    /// tmux server socket path
    #[arg(short = 'p', long = "path")]
    pub path: Option<String>,
}

/// Arguments for the attach command
#[derive(clap::Args, Debug)]
pub struct AttachArgs {
    #[command(flatten)]
    pub socket: SocketArgs,

    /// Target session. Defaults to the most recently used unattached session.
    #[arg(short = 't', long = "target")]
    pub target: Option<String>,
}

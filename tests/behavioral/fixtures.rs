// ABOUTME: Shared test fixtures and utilities for behavioral tests
//
// Provides:
// - TestServer: tmux server on a private socket, killed on drop
// - tmux_available(): Check if tmux is installed
// - require_tmux!(): Skip test if tmux unavailable

use anyhow::Result;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

use flow::tmux::{ServerRef, SocketEnv, TmuxCommand, TmuxServer};

/// A tmux server whose socket lives in a temp dir
pub struct TestServer {
    pub dir: TempDir,
    pub socket: ServerRef,
}

impl TestServer {
    /// Reserve a private socket; the server itself starts with the first session
    pub fn new() -> Result<Self> {
        let dir = TempDir::new()?;
        let socket_path = dir.path().join("flow-test");
        let env = SocketEnv::new(0, dir.path());
        let socket = ServerRef::resolve(None, socket_path.to_str(), &env);
        Ok(Self { dir, socket })
    }

    /// Server handle using the real tmux binary
    pub fn handle(&self) -> Result<TmuxServer<TmuxCommand>> {
        Ok(TmuxServer::new(TmuxCommand::locate()?, self.socket.clone()))
    }

    /// Create a directory inside the fixture's temp dir, canonicalized
    pub fn project_dir(&self, name: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(&path)?;
        Ok(path.canonicalize()?)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = Command::new("tmux")
            .arg("-S")
            .arg(&self.socket.socket_path)
            .arg("kill-server")
            .output();
    }
}

/// Check if tmux is available on the system
pub fn tmux_available() -> bool {
    Command::new("tmux")
        .args(["-V"])
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Macro to skip test if tmux is not available
#[macro_export]
macro_rules! require_tmux {
    () => {
        if !super::fixtures::tmux_available() {
            eprintln!("Skipping test: tmux not available");
            return Ok(());
        }
    };
}
